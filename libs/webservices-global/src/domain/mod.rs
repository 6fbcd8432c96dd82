pub mod datastore;
pub mod entity;
