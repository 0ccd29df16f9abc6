//! Static admin identity configuration.

use serde::{Deserialize, Serialize};

/// The single administrator identity.
///
/// The admin is config-bound, not database-bound: session tokens for the
/// admin carry this email as their identity claim, and the role guard
/// compares against it on every request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdminConfig {
    /// Admin login email. An empty value disables admin login entirely.
    #[serde(default)]
    pub email: String,
    /// Argon2id hash of the admin password.
    #[serde(default)]
    pub password_hash: String,
}
