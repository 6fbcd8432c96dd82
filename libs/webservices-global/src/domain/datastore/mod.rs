pub mod cursor;
pub mod page;
pub mod params;
pub mod repo;
pub mod sort;
