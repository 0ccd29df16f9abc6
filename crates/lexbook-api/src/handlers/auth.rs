//! Auth handlers — per-role login and second-factor verification.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use lexbook_auth::LoginOutcome;
use lexbook_core::error::AppError;
use lexbook_entity::Role;

use crate::dto::request::{LoginRequest, VerifyMfaRequest};
use crate::dto::response::AuthResponse;
use crate::error::ApiError;
use crate::state::AppState;

async fn login(
    state: &AppState,
    role: Role,
    req: LoginRequest,
) -> Result<Json<AuthResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state
        .authenticator
        .login(role, &req.email, &req.password)
        .await?;

    let response = match outcome {
        LoginOutcome::SessionIssued { token } => AuthResponse::session(token),
        LoginOutcome::SecondFactorRequired {
            pending_token,
            email_delivered,
        } => AuthResponse::second_factor(pending_token, email_delivered),
    };
    Ok(Json(response))
}

/// POST /api/auth/user/login
pub async fn user_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    login(&state, Role::User, req).await
}

/// POST /api/auth/lawyer/login
pub async fn lawyer_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    login(&state, Role::Lawyer, req).await
}

/// POST /api/auth/admin/login
pub async fn admin_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    login(&state, Role::Admin, req).await
}

/// POST /api/auth/verify-mfa
pub async fn verify_mfa(
    State(state): State<AppState>,
    Json(req): Json<VerifyMfaRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let token = state.verifier.verify_login(&req.mfa_token, &req.otp).await?;
    Ok(Json(AuthResponse::session(token)))
}
