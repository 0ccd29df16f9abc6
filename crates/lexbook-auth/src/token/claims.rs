//! JWT claims shared by pending and full session tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lexbook_entity::Role;

use crate::error::AuthError;

/// The identity a token is minted for.
///
/// Users and lawyers are stored subjects identified by id. The admin is
/// config-bound and identified by email only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSubject {
    /// A stored user or lawyer account.
    Member { id: Uuid, role: Role },
    /// The configured administrator.
    Admin { email: String },
}

impl TokenSubject {
    pub fn role(&self) -> Role {
        match self {
            Self::Member { role, .. } => *role,
            Self::Admin { .. } => Role::Admin,
        }
    }
}

/// Claims payload embedded in every LexBook token.
///
/// One signing secret covers both token kinds; the `pending` flag is
/// the only thing separating a step-up token from a full session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject id for users and lawyers. Absent for the admin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<Uuid>,
    /// Identity email for the admin. Absent for members.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role at issuance time.
    pub role: Role,
    /// Set on tokens minted between password check and OTP verification.
    /// Such a token authorizes exactly one thing: submitting a code.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub pending: bool,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Recover the token subject from decoded claims.
    pub fn subject(&self) -> Result<TokenSubject, AuthError> {
        match (self.role, self.sub, &self.email) {
            (Role::Admin, _, Some(email)) => Ok(TokenSubject::Admin {
                email: email.clone(),
            }),
            (role, Some(id), _) if role != Role::Admin => Ok(TokenSubject::Member { id, role }),
            _ => Err(AuthError::TokenInvalid),
        }
    }
}
