//! JWT creation with configurable signing and TTL.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use lexbook_core::config::auth::AuthConfig;
use lexbook_core::error::AppError;
use lexbook_entity::Role;

use super::claims::{Claims, TokenSubject};

/// Creates signed pending and full session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Pending token TTL in minutes.
    pending_ttl_minutes: i64,
    /// Session TTL for users and lawyers, in days.
    session_ttl_days: i64,
    /// Session TTL for the admin, in hours.
    admin_session_ttl_hours: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("pending_ttl_minutes", &self.pending_ttl_minutes)
            .field("session_ttl_days", &self.session_ttl_days)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            pending_ttl_minutes: config.pending_token_ttl_minutes as i64,
            session_ttl_days: config.session_ttl_days as i64,
            admin_session_ttl_hours: config.admin_session_ttl_hours as i64,
        }
    }

    /// Mint a short-lived pending token for the OTP verification step.
    pub fn pending_token(&self, subject: &TokenSubject) -> Result<String, AppError> {
        let ttl = Duration::minutes(self.pending_ttl_minutes);
        self.sign(subject, ttl, true)
    }

    /// Mint a full session token. The admin gets a shorter lifetime
    /// than stored members.
    pub fn session_token(&self, subject: &TokenSubject) -> Result<String, AppError> {
        let ttl = match subject.role() {
            Role::Admin => Duration::hours(self.admin_session_ttl_hours),
            Role::User | Role::Lawyer => Duration::days(self.session_ttl_days),
        };
        self.sign(subject, ttl, false)
    }

    fn sign(
        &self,
        subject: &TokenSubject,
        ttl: Duration,
        pending: bool,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let (sub, email) = match subject {
            TokenSubject::Member { id, .. } => (Some(*id), None),
            TokenSubject::Admin { email } => (None, Some(email.clone())),
        };

        let claims = Claims {
            sub,
            email,
            role: subject.role(),
            pending,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
