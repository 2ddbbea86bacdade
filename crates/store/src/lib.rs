pub mod fixtures;
pub mod repositories;

pub use fixtures::{demo_catalog, load_catalog, SeedError};
pub use repositories::{ProductRepository, ProductsMap, RepositoryError};
