//! Authentication failure taxonomy.
//!
//! Every variant's `Display` string is the message the client sees.
//! Credential lookup failures deliberately share one generic message so
//! callers cannot probe which emails are registered.

use thiserror::Error;

/// Result alias for the authentication flows.
pub type AuthResult<T> = Result<T, AuthError>;

/// Structured authentication failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password. One message for both cases.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Account is in a lockout window after too many failed passwords.
    #[error("Account locked, retry in {retry_after_seconds} seconds")]
    AccountLocked { retry_after_seconds: i64 },

    /// The pending (step-up) token ran out before the code was verified.
    /// Its lifetime is a hard ceiling; the user must log in again.
    #[error("Session expired, login again")]
    PendingTokenExpired,

    /// Malformed token, bad signature, or a token used outside its
    /// intended step (e.g. a session token sent to OTP verification).
    #[error("Invalid token")]
    TokenInvalid,

    /// A full session token past its expiry. Distinct message so the
    /// client can redirect to login.
    #[error("Session expired, please log in again")]
    SessionExpired,

    /// No usable token on the request.
    #[error("Unauthorized")]
    Unauthorized,

    /// Valid token, wrong role for the route.
    #[error("Access denied")]
    InsufficientPermissions,

    /// No live verification code for this subject.
    #[error("No active verification code, please log in again")]
    OtpNotFound,

    /// The code's own deadline has passed.
    #[error("Verification code expired, please log in again")]
    OtpExpired,

    /// The wrong-submission bound was already reached.
    #[error("Too many incorrect attempts, please log in again")]
    OtpAttemptsExceeded,

    /// Wrong code, with tries left in the window.
    #[error("Incorrect code, {attempts_remaining} attempts remaining")]
    OtpMismatch { attempts_remaining: u32 },

    /// Infrastructure failure surfaced with an opaque message.
    #[error("Something went wrong, please try again")]
    Internal,
}

impl From<lexbook_core::AppError> for AuthError {
    fn from(err: lexbook_core::AppError) -> Self {
        tracing::error!(error = %err, "internal failure during authentication");
        Self::Internal
    }
}
