//! Health probe.

use axum::Json;
use axum::extract::State;

use lexbook_core::traits::CacheProvider;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache_ok = state.cache.health_check().await.unwrap_or(false);
    Json(HealthResponse {
        status: if cache_ok { "ok" } else { "degraded" }.to_string(),
        cache: cache_ok,
    })
}
