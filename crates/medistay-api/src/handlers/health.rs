//! Health check handler.

use axum::Json;
use axum::extract::State;

use medistay_database::connection;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
///
/// Reports process liveness and database connectivity. Always returns 200;
/// a broken pool is reported in the body so probes can distinguish "down"
/// from "up but degraded".
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match connection::health_check(&state.db_pool).await {
        Ok(true) => "connected",
        _ => "unavailable",
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    })
}
