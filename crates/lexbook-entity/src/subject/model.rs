//! Subject entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// A registered subject (user or lawyer) in the LexBook system.
///
/// The admin account is not a `Subject`; its identity lives in
/// configuration and only its password hash is stored there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: Uuid,
    /// Email address used to log in. Unique within a role.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Human-readable display name.
    pub full_name: Option<String>,
    /// Subject role (RBAC).
    pub role: Role,
    /// Whether login requires email OTP verification.
    pub second_factor_enabled: bool,
    /// Number of consecutive failed login attempts.
    pub failed_login_attempts: i32,
    /// Account locked until this time (if locked).
    pub locked_until: Option<DateTime<Utc>>,
    /// When the subject was created.
    pub created_at: DateTime<Utc>,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl Subject {
    /// Create a new subject with a fresh id and clean login state.
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password_hash: password_hash.into(),
            full_name: None,
            role,
            second_factor_enabled: role != Role::Lawyer,
            failed_login_attempts: 0,
            locked_until: None,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    /// Check if the account is currently locked.
    pub fn is_locked(&self) -> bool {
        if let Some(locked_until) = self.locked_until {
            return Utc::now() < locked_until;
        }
        false
    }

    /// Seconds until the lock expires, rounded up. Zero when not locked.
    pub fn lockout_remaining_seconds(&self) -> i64 {
        match self.locked_until {
            Some(locked_until) => {
                let millis = (locked_until - Utc::now()).num_milliseconds();
                if millis <= 0 { 0 } else { (millis + 999) / 1000 }
            }
            None => 0,
        }
    }
}
