use std::collections::HashMap;

use feira_core::domain::product::{Product, ProductId, ProductQuery};

use super::{ProductRepository, RepositoryError};

/// Map-backed catalog. The store is injected at construction and never
/// mutated afterwards; entries are keyed by product id.
pub struct ProductsMap {
    products: HashMap<ProductId, Product>,
}

impl ProductsMap {
    pub fn new(products: HashMap<ProductId, Product>) -> Self {
        Self { products }
    }
}

#[async_trait::async_trait]
impl ProductRepository for ProductsMap {
    async fn search_products(
        &self,
        query: ProductQuery,
    ) -> Result<HashMap<ProductId, Product>, RepositoryError> {
        let products = match query.id {
            Some(id) => self
                .products
                .get(&id)
                .map(|product| (id, product.clone()))
                .into_iter()
                .collect(),
            None => self.products.clone(),
        };

        Ok(products)
    }
}
