//! Cache key builders for all LexBook cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

use uuid::Uuid;

/// Prefix applied to all LexBook cache keys.
const PREFIX: &str = "lexbook";

/// Cache key for a login-time OTP challenge, keyed by subject id.
pub fn login_otp(subject_id: Uuid) -> String {
    format!("{PREFIX}:otp:login:{subject_id}")
}

/// Cache key for the admin's login-time OTP challenge, keyed by email.
///
/// The admin account has no subject id; its configured email is the
/// only stable identifier.
pub fn admin_login_otp(email: &str) -> String {
    format!("{PREFIX}:otp:login:admin:{}", email.to_lowercase())
}

/// Cache key for a pre-registration OTP challenge, keyed by the
/// prospective email address.
pub fn registration_otp(email: &str) -> String {
    format!("{PREFIX}:otp:register:{}", email.to_lowercase())
}
