//! Route definitions for the Medistay HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(cabin_routes())
        .merge(booking_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Patient-facing cabin browsing and availability checking
fn cabin_routes() -> Router<AppState> {
    Router::new()
        .route("/cabins", get(handlers::cabin::list_cabins))
        .route("/cabins/{id}", get(handlers::cabin::get_cabin))
        .route(
            "/cabins/{id}/availability",
            get(handlers::cabin::check_availability),
        )
}

/// Patient-facing booking endpoints
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(handlers::booking::create_booking))
        .route("/bookings", get(handlers::booking::list_my_bookings))
        .route("/bookings/{id}", get(handlers::booking::get_booking))
        .route(
            "/bookings/{id}/cancel",
            post(handlers::booking::cancel_booking),
        )
}

/// Admin-only endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Cabin catalogue
        .route("/admin/cabins", get(handlers::admin::cabins::list_cabins))
        .route("/admin/cabins", post(handlers::admin::cabins::create_cabin))
        .route(
            "/admin/cabins/{id}",
            put(handlers::admin::cabins::update_cabin),
        )
        .route(
            "/admin/cabins/{id}",
            delete(handlers::admin::cabins::deactivate_cabin),
        )
        // Availability windows
        .route(
            "/admin/cabins/{id}/periods",
            get(handlers::admin::periods::list_periods),
        )
        .route(
            "/admin/cabins/{id}/periods",
            post(handlers::admin::periods::create_period),
        )
        .route(
            "/admin/periods/{id}",
            put(handlers::admin::periods::update_period),
        )
        .route(
            "/admin/periods/{id}",
            delete(handlers::admin::periods::delete_period),
        )
        // Booking oversight and lifecycle
        .route(
            "/admin/bookings",
            get(handlers::admin::bookings::list_bookings),
        )
        .route(
            "/admin/bookings/{id}",
            get(handlers::admin::bookings::get_booking),
        )
        .route(
            "/admin/bookings/{id}/confirm",
            post(handlers::admin::bookings::confirm_booking),
        )
        .route(
            "/admin/bookings/{id}/check-in",
            post(handlers::admin::bookings::check_in_booking),
        )
        .route(
            "/admin/bookings/{id}/check-out",
            post(handlers::admin::bookings::check_out_booking),
        )
        .route(
            "/admin/bookings/{id}/cancel",
            post(handlers::admin::bookings::cancel_booking),
        )
        .route(
            "/admin/bookings/{id}/payment",
            put(handlers::admin::bookings::set_payment_status),
        )
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<axum::http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
