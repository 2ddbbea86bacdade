pub mod config;
pub mod domain;

pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
pub use domain::product::{Product, ProductId, ProductQuery};
