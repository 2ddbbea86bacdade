use serde::{Deserialize, Serialize};

/// Unique key of a product within the catalog. Serializes as a bare
/// integer; as a JSON map key it renders as the decimal string form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub i64);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub description: String,
    pub price: f64,
    pub seller_id: i64,
}

/// Filter criteria for a product search. `id: None` selects the whole
/// catalog; `Some(id)` restricts the result to at most that product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub id: Option<ProductId>,
}
