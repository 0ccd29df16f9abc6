//! Role-guarded routes: profiles, admin overview, and the shared
//! booking context.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;

use lexbook_auth::AuthError;
use lexbook_entity::Role;

use crate::dto::response::{AdminOverviewResponse, CallerContextResponse, ProfileResponse};
use crate::error::ApiError;
use crate::extractors::{AuthAdmin, AuthLawyer, AuthUser};
use crate::state::AppState;

/// GET /api/users/me
pub async fn user_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let subject = state
        .directory
        .find_by_id(auth.id)
        .await
        .map_err(ApiError::App)?
        .ok_or(AuthError::Unauthorized)?;
    Ok(Json(ProfileResponse::from_subject(&subject)))
}

/// GET /api/lawyers/me
pub async fn lawyer_me(
    State(state): State<AppState>,
    auth: AuthLawyer,
) -> Result<Json<ProfileResponse>, ApiError> {
    let subject = state
        .directory
        .find_by_id(auth.id)
        .await
        .map_err(ApiError::App)?
        .ok_or(AuthError::Unauthorized)?;
    Ok(Json(ProfileResponse::from_subject(&subject)))
}

/// GET /api/admin/overview
pub async fn admin_overview(auth: AuthAdmin) -> Json<AdminOverviewResponse> {
    Json(AdminOverviewResponse {
        success: true,
        email: auth.email,
        role: Role::Admin.to_string(),
    })
}

/// GET /api/appointments/context
///
/// Admits users and the admin; the guard examines the user header first
/// when both are present.
pub async fn appointments_context(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CallerContextResponse>, ApiError> {
    let principal = state
        .guard
        .authorize(&headers, &[Role::User, Role::Admin])?;
    Ok(Json(CallerContextResponse {
        success: true,
        role: principal.role().to_string(),
        user_id: principal.member_id(),
    }))
}
