// src/config.rs
pub mod app;

pub use app::{AdminConfig, AppConfig, DatabaseConfig, ServerConfig, StorageConfig};
