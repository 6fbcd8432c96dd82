//! Process-level plumbing for services built on `webservices-global`:
//! layered configuration loading and `tracing` subscriber setup.

pub mod config;
pub mod logging;

pub use config::{AppConfig, LoggingConfig, Section};
pub use logging::init_logging_from_config;
