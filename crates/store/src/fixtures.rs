use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use feira_core::domain::product::{Product, ProductId};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("could not read seed file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse seed file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: serde_json::Error },
    #[error("duplicate product id {0} in seed data")]
    DuplicateId(i64),
}

/// Starter catalog served when no seed file is configured.
pub fn demo_catalog() -> HashMap<ProductId, Product> {
    let products = [
        Product { id: ProductId(1), description: "Leite".to_string(), price: 4.5, seller_id: 1 },
        Product { id: ProductId(2), description: "Cereal".to_string(), price: 6.0, seller_id: 2 },
        Product { id: ProductId(3), description: "Arroz".to_string(), price: 22.9, seller_id: 2 },
    ];

    products.into_iter().map(|product| (product.id, product)).collect()
}

/// Load a catalog from a JSON seed file (an array of product objects),
/// keyed by product id. Duplicate ids are rejected so the map-key-equals-id
/// invariant holds for every entry.
pub fn load_catalog(path: &Path) -> Result<HashMap<ProductId, Product>, SeedError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| SeedError::ReadFile { path: path.to_path_buf(), source })?;
    let products: Vec<Product> = serde_json::from_str(&raw)
        .map_err(|source| SeedError::ParseFile { path: path.to_path_buf(), source })?;

    let mut catalog = HashMap::with_capacity(products.len());
    for product in products {
        let id = product.id;
        if catalog.insert(id, product).is_some() {
            return Err(SeedError::DuplicateId(id.0));
        }
    }

    Ok(catalog)
}
