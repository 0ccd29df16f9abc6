//! # lexbook-api
//!
//! HTTP API layer for LexBook built on Axum.
//!
//! Provides the login and MFA endpoints, pre-registration email
//! verification, role-guarded routes, middleware (CORS, logging),
//! DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
