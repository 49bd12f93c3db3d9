//! Configuration module - typed settings and the loader

pub mod loader;
pub mod types;

pub use loader::load_config;
pub use types::AppConfig;
