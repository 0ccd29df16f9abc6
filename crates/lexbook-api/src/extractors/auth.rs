//! Role-scoped extractors — run the role guard against the request
//! headers and inject the verified principal.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use lexbook_auth::{AuthError, Principal};
use lexbook_entity::Role;

use crate::error::ApiError;
use crate::state::AppState;

/// An authenticated user, admitted via `x-user-token`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
}

/// An authenticated lawyer, admitted via `x-lawyer-token`.
#[derive(Debug, Clone)]
pub struct AuthLawyer {
    pub id: Uuid,
}

/// The authenticated admin, admitted via `x-admin-token`.
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    pub email: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match state.guard.authorize(&parts.headers, &[Role::User])? {
            Principal::User { id } => Ok(Self { id }),
            _ => Err(AuthError::InsufficientPermissions.into()),
        }
    }
}

impl FromRequestParts<AppState> for AuthLawyer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match state.guard.authorize(&parts.headers, &[Role::Lawyer])? {
            Principal::Lawyer { id } => Ok(Self { id }),
            _ => Err(AuthError::InsufficientPermissions.into()),
        }
    }
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match state.guard.authorize(&parts.headers, &[Role::Admin])? {
            Principal::Admin { email } => Ok(Self { email }),
            _ => Err(AuthError::InsufficientPermissions.into()),
        }
    }
}
