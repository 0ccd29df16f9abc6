//! Pre-registration email verification handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use lexbook_core::error::AppError;

use crate::dto::request::{SendOtpRequest, VerifyOtpRequest};
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/register/send-otp
///
/// Issues a code keyed by the prospective email. Re-requesting replaces
/// the previous code.
pub async fn send_otp(
    State(state): State<AppState>,
    Json(req): Json<SendOtpRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let delivered = state.issuer.issue_registration_challenge(&req.email).await?;
    let message = if delivered {
        "Verification code sent to your email"
    } else {
        "Could not send the verification code email, please retry"
    };
    Ok(Json(MessageResponse {
        success: true,
        message: message.to_string(),
        email_delivered: Some(delivered),
    }))
}

/// POST /api/register/verify-otp
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(req): Json<VerifyOtpRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state.verifier.verify_registration(&req.email, &req.otp).await?;
    Ok(Json(MessageResponse {
        success: true,
        message: "Email verified".to_string(),
        email_delivered: None,
    }))
}
