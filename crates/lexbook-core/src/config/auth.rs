//! Authentication, token, lockout, and OTP configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// A single signing secret covers both pending and full session tokens
/// for every role; the claims themselves distinguish the token kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Pending (MFA step-up) token TTL in minutes.
    #[serde(default = "default_pending_ttl")]
    pub pending_token_ttl_minutes: u64,
    /// Session token TTL for users and lawyers, in days.
    #[serde(default = "default_session_ttl_days")]
    pub session_ttl_days: u64,
    /// Session token TTL for the admin, in hours.
    #[serde(default = "default_admin_session_ttl")]
    pub admin_session_ttl_hours: u64,
    /// Maximum failed login attempts before lockout.
    #[serde(default = "default_max_failed")]
    pub max_failed_attempts: i32,
    /// Account lockout duration in seconds.
    #[serde(default = "default_lockout_seconds")]
    pub lockout_seconds: u64,
    /// Login OTP lifetime in minutes.
    #[serde(default = "default_login_otp_ttl")]
    pub login_otp_ttl_minutes: u64,
    /// Pre-registration (email verification) OTP lifetime in minutes.
    #[serde(default = "default_registration_otp_ttl")]
    pub registration_otp_ttl_minutes: u64,
    /// Maximum wrong submissions against a live OTP entry.
    #[serde(default = "default_otp_max_attempts")]
    pub otp_max_attempts: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            pending_token_ttl_minutes: default_pending_ttl(),
            session_ttl_days: default_session_ttl_days(),
            admin_session_ttl_hours: default_admin_session_ttl(),
            max_failed_attempts: default_max_failed(),
            lockout_seconds: default_lockout_seconds(),
            login_otp_ttl_minutes: default_login_otp_ttl(),
            registration_otp_ttl_minutes: default_registration_otp_ttl(),
            otp_max_attempts: default_otp_max_attempts(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_pending_ttl() -> u64 {
    5
}

fn default_session_ttl_days() -> u64 {
    7
}

fn default_admin_session_ttl() -> u64 {
    24
}

fn default_max_failed() -> i32 {
    3
}

fn default_lockout_seconds() -> u64 {
    30
}

fn default_login_otp_ttl() -> u64 {
    5
}

fn default_registration_otp_ttl() -> u64 {
    10
}

fn default_otp_max_attempts() -> u32 {
    3
}
