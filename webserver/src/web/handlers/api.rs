//! Health and catalog endpoints

use axum::{extract::State, response::Json};

use portal::{Catalog, KeyValueStore};

use crate::state::WebServerState;
use crate::types::{ApiResponse, HealthResponse};

/// GET /health
pub async fn health_check<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// GET /api/catalog
pub async fn get_catalog<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
) -> Json<ApiResponse<Catalog>> {
    Json(ApiResponse::ok(state.portal.catalog().clone()))
}
