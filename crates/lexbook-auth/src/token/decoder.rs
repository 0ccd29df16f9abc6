//! JWT validation split by token intent.
//!
//! The two decode paths enforce intent separation: a full session token
//! cannot be replayed into OTP verification, and a pending token cannot
//! reach a protected route. Expiry maps to a different error per path
//! because the client reacts differently to each.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use lexbook_core::config::auth::AuthConfig;

use super::claims::Claims;
use crate::error::AuthError;

/// Validates pending and session tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // seconds of clock-skew tolerance

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decode a pending (step-up) token.
    ///
    /// Expiry is terminal for the whole login attempt, so it gets the
    /// "login again" error. A token without the pending flag is a full
    /// session token in the wrong place and is rejected outright.
    pub fn decode_pending(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = self.decode(token, AuthError::PendingTokenExpired, AuthError::TokenInvalid)?;
        if !claims.pending {
            return Err(AuthError::TokenInvalid);
        }
        Ok(claims)
    }

    /// Decode a full session token from a protected route.
    ///
    /// A pending token here would let a password-only login skip OTP
    /// verification, so it is rejected as unauthorized.
    pub fn decode_session(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = self.decode(token, AuthError::SessionExpired, AuthError::Unauthorized)?;
        if claims.pending {
            return Err(AuthError::Unauthorized);
        }
        Ok(claims)
    }

    fn decode(
        &self,
        token: &str,
        expired: AuthError,
        invalid: AuthError,
    ) -> Result<Claims, AuthError> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(e) if matches!(e.kind(), JwtErrorKind::ExpiredSignature) => Err(expired),
            Err(_) => Err(invalid),
        }
    }
}
