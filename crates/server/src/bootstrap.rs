use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use feira_core::config::{AppConfig, ConfigError, LoadOptions};
use feira_store::fixtures::{self, SeedError};
use feira_store::repositories::{ProductRepository, ProductsMap};

pub struct Application {
    pub config: AppConfig,
    pub repository: Arc<dyn ProductRepository>,
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application").field("config", &self.config).finish_non_exhaustive()
    }
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("catalog seed failed: {0}")]
    Seed(#[from] SeedError),
}

pub fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config)
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    let catalog = match &config.catalog.seed_path {
        Some(path) => fixtures::load_catalog(path)?,
        None => fixtures::demo_catalog(),
    };

    let source = match &config.catalog.seed_path {
        Some(path) => path.display().to_string(),
        None => "embedded demo catalog".to_string(),
    };
    info!(
        event_name = "system.bootstrap.catalog_loaded",
        product_count = catalog.len(),
        source = %source,
        "product catalog loaded"
    );

    Ok(Application { config, repository: Arc::new(ProductsMap::new(catalog)) })
}
