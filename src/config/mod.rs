mod app_config;

pub use app_config::{AdminConfig, AppConfig, CorsConfig, Environment, ServerConfig, StorageConfig};
