use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use feira_core::domain::product::{Product, ProductId, ProductQuery};

pub mod products_map;

pub use products_map::ProductsMap;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage contract the HTTP layer depends on. Any backend that can answer
/// a product search may implement it. Absence of a match is an empty
/// result, never an error.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn search_products(
        &self,
        query: ProductQuery,
    ) -> Result<HashMap<ProductId, Product>, RepositoryError>;
}
