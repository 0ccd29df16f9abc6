//! Route definitions for the LexBook HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(registration_routes())
        .merge(protected_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Per-role login and second-factor verification.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/user/login", post(handlers::auth::user_login))
        .route("/auth/lawyer/login", post(handlers::auth::lawyer_login))
        .route("/auth/admin/login", post(handlers::auth::admin_login))
        .route("/auth/verify-mfa", post(handlers::auth::verify_mfa))
}

/// Pre-registration email verification.
fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/register/send-otp", post(handlers::registration::send_otp))
        .route(
            "/register/verify-otp",
            post(handlers::registration::verify_otp),
        )
}

/// Role-guarded routes.
fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(handlers::profile::user_me))
        .route("/lawyers/me", get(handlers::profile::lawyer_me))
        .route("/admin/overview", get(handlers::profile::admin_overview))
        .route(
            "/appointments/context",
            get(handlers::profile::appointments_context),
        )
}

/// Liveness probe.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
