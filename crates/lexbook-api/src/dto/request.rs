//! Request DTOs with validation.
//!
//! Field names are camelCase on the wire to match the web client.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body, shared by all three role login endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Second-factor verification request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyMfaRequest {
    /// The pending token issued at the password step.
    #[validate(length(min = 1, message = "mfaToken is required"))]
    pub mfa_token: String,
    /// The six-digit code from the email.
    #[validate(length(equal = 6, message = "otp must be six digits"))]
    pub otp: String,
}

/// Pre-registration OTP request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpRequest {
    /// Email address to verify.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}

/// Pre-registration OTP verification body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    /// Email address the code was sent to.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// The six-digit code from the email.
    #[validate(length(equal = 6, message = "otp must be six digits"))]
    pub otp: String,
}
