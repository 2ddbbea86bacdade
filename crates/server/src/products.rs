//! Product listing routes.
//!
//! Endpoints:
//! - `GET /products`      — list the whole catalog
//! - `GET /products?id=N` — restrict the result to one product id
//!
//! Responses always carry `Content-Type: application/json`. Success wraps
//! the result in `{"message": "success", "data": {...}}` with the data
//! object keyed by the decimal string form of the product id; failures use
//! `{"status": "<status text>", "message": "..."}`. A miss on a known-shape
//! query is an empty `data` object, not a 404.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use feira_core::domain::product::{Product, ProductId, ProductQuery};
use feira_store::repositories::ProductRepository;

#[derive(Clone)]
pub struct ProductsState {
    repository: Arc<dyn ProductRepository>,
}

#[derive(Debug, Deserialize)]
pub struct ListProductsParams {
    id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub message: &'static str,
    pub data: HashMap<ProductId, Product>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: &'static str,
}

pub fn router(repository: Arc<dyn ProductRepository>) -> Router {
    Router::new().route("/products", get(get_products)).with_state(ProductsState { repository })
}

pub async fn get_products(
    State(state): State<ProductsState>,
    Query(params): Query<ListProductsParams>,
) -> Result<Json<ProductsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let correlation_id = Uuid::new_v4();
    let query = parse_query(&params, correlation_id)?;

    match state.repository.search_products(query).await {
        Ok(data) => {
            info!(
                event_name = "api.products.search",
                correlation_id = %correlation_id,
                product_id = ?query.id.map(|id| id.0),
                result_count = data.len(),
                "product search completed"
            );
            Ok(Json(ProductsResponse { message: "success", data }))
        }
        Err(search_error) => {
            error!(
                event_name = "api.products.search_failed",
                correlation_id = %correlation_id,
                error = %search_error,
                "product search failed"
            );
            Err(envelope(StatusCode::INTERNAL_SERVER_ERROR, "internal error"))
        }
    }
}

/// A blank `id` counts as absent; anything else must be a decimal integer.
fn parse_query(
    params: &ListProductsParams,
    correlation_id: Uuid,
) -> Result<ProductQuery, (StatusCode, Json<ErrorResponse>)> {
    let raw = match params.id.as_deref() {
        None | Some("") => return Ok(ProductQuery::default()),
        Some(raw) => raw,
    };

    let id = raw.parse::<i64>().map_err(|_| {
        warn!(
            event_name = "api.products.invalid_id",
            correlation_id = %correlation_id,
            raw = %raw,
            "rejecting non-numeric id parameter"
        );
        envelope(StatusCode::BAD_REQUEST, "query parameter `id` must be a decimal integer")
    })?;

    Ok(ProductQuery { id: Some(ProductId(id)) })
}

fn envelope(status: StatusCode, message: &'static str) -> (StatusCode, Json<ErrorResponse>) {
    let text = status.canonical_reason().unwrap_or("Unknown");
    (status, Json(ErrorResponse { status: text, message }))
}
