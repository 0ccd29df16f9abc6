//! Role-based access guard for protected routes.
//!
//! Each role presents its session token in its own header. A route
//! declares which roles it admits, in order; the first header present
//! from that list is the one examined, and a bad token in it fails the
//! request rather than falling through to the next header.

use http::HeaderMap;
use uuid::Uuid;

use lexbook_entity::Role;

use crate::error::AuthError;
use crate::token::JwtDecoder;

/// The verified caller attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    User { id: Uuid },
    Lawyer { id: Uuid },
    Admin { email: String },
}

impl Principal {
    pub fn role(&self) -> Role {
        match self {
            Self::User { .. } => Role::User,
            Self::Lawyer { .. } => Role::Lawyer,
            Self::Admin { .. } => Role::Admin,
        }
    }

    /// Subject id for stored members; `None` for the admin.
    pub fn member_id(&self) -> Option<Uuid> {
        match self {
            Self::User { id } | Self::Lawyer { id } => Some(*id),
            Self::Admin { .. } => None,
        }
    }
}

/// Session header for each role.
fn header_for(role: Role) -> &'static str {
    match role {
        Role::User => "x-user-token",
        Role::Lawyer => "x-lawyer-token",
        Role::Admin => "x-admin-token",
    }
}

/// Authorizes requests against the roles a route admits.
#[derive(Debug, Clone)]
pub struct RoleGuard {
    decoder: JwtDecoder,
    admin_email: String,
}

impl RoleGuard {
    pub fn new(decoder: JwtDecoder, admin_email: String) -> Self {
        Self {
            decoder,
            admin_email,
        }
    }

    /// Authorize a request whose route admits `allowed` roles.
    pub fn authorize(
        &self,
        headers: &HeaderMap,
        allowed: &[Role],
    ) -> Result<Principal, AuthError> {
        let (role, value) = allowed
            .iter()
            .find_map(|role| headers.get(header_for(*role)).map(|value| (*role, value)))
            .ok_or(AuthError::Unauthorized)?;

        let token = value.to_str().map_err(|_| AuthError::Unauthorized)?;
        let claims = self.decoder.decode_session(token)?;

        // The token's role claim must match the header it arrived in.
        if claims.role != role {
            return Err(AuthError::InsufficientPermissions);
        }

        match role {
            Role::Admin => {
                // Config-bound identity: the claim must equal the
                // configured email exactly. An empty config value
                // disables admin access outright.
                let email = claims.email.ok_or(AuthError::Unauthorized)?;
                if self.admin_email.is_empty() || email != self.admin_email {
                    return Err(AuthError::Unauthorized);
                }
                Ok(Principal::Admin { email })
            }
            Role::User => {
                let id = claims.sub.ok_or(AuthError::Unauthorized)?;
                Ok(Principal::User { id })
            }
            Role::Lawyer => {
                let id = claims.sub.ok_or(AuthError::Unauthorized)?;
                Ok(Principal::Lawyer { id })
            }
        }
    }
}
