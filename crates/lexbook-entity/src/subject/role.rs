//! Subject role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles that can authenticate against the platform.
///
/// A subject's role is immutable after creation and is embedded in every
/// token issued to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Self-registered client booking consultations.
    User,
    /// Lawyer account, registered by the admin.
    Lawyer,
    /// The single platform administrator.
    Admin,
}

impl Role {
    /// Check if this role is the admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Lawyer => "lawyer",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = lexbook_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "lawyer" => Ok(Self::Lawyer),
            "admin" => Ok(Self::Admin),
            _ => Err(lexbook_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: user, lawyer, admin"
            ))),
        }
    }
}
