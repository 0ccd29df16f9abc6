//! # lexbook-directory
//!
//! Subject lookup and credential-state persistence. The directory is
//! the authentication flow's only view of stored accounts: it resolves
//! an email within a role to a [`Subject`] and records login outcomes
//! (failure counters, lockouts, last-login timestamps).

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use lexbook_core::AppResult;
use lexbook_entity::{Role, Subject};

pub use memory::MemorySubjectDirectory;

/// Storage-agnostic view of registered subjects.
///
/// Emails are unique per role, not globally: the same address may hold
/// both a user account and a lawyer account.
#[async_trait]
pub trait SubjectDirectory: Send + Sync + 'static {
    /// Look up a subject by role and email (case-insensitive).
    async fn find_by_email(&self, role: Role, email: &str) -> AppResult<Option<Subject>>;

    /// Look up a subject by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Subject>>;

    /// Persist a failed login: the new failure count and, when the
    /// threshold was reached, the lockout deadline.
    async fn record_failed_login(
        &self,
        id: Uuid,
        failed_attempts: i32,
        locked_until: Option<DateTime<Utc>>,
    ) -> AppResult<()>;

    /// Reset the failure counter and clear any lockout.
    async fn clear_login_failures(&self, id: Uuid) -> AppResult<()>;

    /// Record a successful login timestamp.
    async fn touch_last_login(&self, id: Uuid) -> AppResult<()>;
}
