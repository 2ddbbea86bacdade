use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use feira_core::domain::product::ProductQuery;
use feira_store::repositories::ProductRepository;

#[derive(Clone)]
pub struct HealthState {
    repository: Arc<dyn ProductRepository>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub catalog: HealthCheck,
    pub checked_at: String,
}

pub fn router(repository: Arc<dyn ProductRepository>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { repository })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let catalog = catalog_check(state.repository.as_ref()).await;
    let ready = catalog.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "feira-server runtime initialized".to_string(),
        },
        catalog,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

async fn catalog_check(repository: &dyn ProductRepository) -> HealthCheck {
    match repository.search_products(ProductQuery::default()).await {
        Ok(products) => HealthCheck {
            status: "ready",
            detail: format!("{} products available", products.len()),
        },
        Err(check_error) => HealthCheck {
            status: "degraded",
            detail: format!("catalog query failed: {check_error}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::Json;

    use feira_core::domain::product::{Product, ProductId, ProductQuery};
    use feira_store::fixtures::demo_catalog;
    use feira_store::repositories::{ProductRepository, ProductsMap, RepositoryError};

    use crate::health::{health, HealthState};

    struct OfflineRepository;

    #[async_trait::async_trait]
    impl ProductRepository for OfflineRepository {
        async fn search_products(
            &self,
            _query: ProductQuery,
        ) -> Result<HashMap<ProductId, Product>, RepositoryError> {
            Err(RepositoryError::Unavailable("catalog store offline".to_string()))
        }
    }

    #[tokio::test]
    async fn health_reports_ready_with_the_product_count() {
        let repository = Arc::new(ProductsMap::new(demo_catalog()));

        let (status, Json(payload)) = health(State(HealthState { repository })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.catalog.status, "ready");
        assert_eq!(payload.catalog.detail, "3 products available");
        assert_eq!(payload.service.status, "ready");
    }

    #[tokio::test]
    async fn health_degrades_when_the_catalog_is_unreachable() {
        let (status, Json(payload)) =
            health(State(HealthState { repository: Arc::new(OfflineRepository) })).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload.status, "degraded");
        assert_eq!(payload.catalog.status, "degraded");
        assert_eq!(payload.service.status, "ready");
    }
}
