//! In-memory subject directory backed by dashmap.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use lexbook_core::{AppError, AppResult};
use lexbook_entity::{Role, Subject};

use super::SubjectDirectory;

/// In-memory [`SubjectDirectory`] implementation.
///
/// Subjects are keyed by id; the (role, email) index is a scan, which
/// is fine for the account volumes this directory is used at.
#[derive(Debug, Default)]
pub struct MemorySubjectDirectory {
    subjects: DashMap<Uuid, Subject>,
}

impl MemorySubjectDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a subject. Used for seeding accounts.
    pub fn insert(&self, subject: Subject) {
        self.subjects.insert(subject.id, subject);
    }

    /// Fetch a subject by id.
    pub fn get(&self, id: Uuid) -> Option<Subject> {
        self.subjects.get(&id).map(|entry| entry.clone())
    }

    fn update<F>(&self, id: Uuid, apply: F) -> AppResult<()>
    where
        F: FnOnce(&mut Subject),
    {
        match self.subjects.get_mut(&id) {
            Some(mut entry) => {
                apply(&mut entry);
                Ok(())
            }
            None => Err(AppError::not_found(format!("Subject not found: {id}"))),
        }
    }
}

#[async_trait]
impl SubjectDirectory for MemorySubjectDirectory {
    async fn find_by_email(&self, role: Role, email: &str) -> AppResult<Option<Subject>> {
        let needle = email.to_lowercase();
        Ok(self
            .subjects
            .iter()
            .find(|entry| entry.role == role && entry.email.to_lowercase() == needle)
            .map(|entry| entry.clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Subject>> {
        Ok(self.get(id))
    }

    async fn record_failed_login(
        &self,
        id: Uuid,
        failed_attempts: i32,
        locked_until: Option<DateTime<Utc>>,
    ) -> AppResult<()> {
        self.update(id, |subject| {
            subject.failed_login_attempts = failed_attempts;
            subject.locked_until = locked_until;
        })
    }

    async fn clear_login_failures(&self, id: Uuid) -> AppResult<()> {
        self.update(id, |subject| {
            subject.failed_login_attempts = 0;
            subject.locked_until = None;
        })
    }

    async fn touch_last_login(&self, id: Uuid) -> AppResult<()> {
        self.update(id, |subject| {
            subject.last_login_at = Some(Utc::now());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_email_is_case_insensitive() {
        let directory = MemorySubjectDirectory::new();
        directory.insert(Subject::new("Client@Example.com", "hash", Role::User));

        let found = directory
            .find_by_email(Role::User, "client@example.COM")
            .await
            .unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_email_scoped_to_role() {
        let directory = MemorySubjectDirectory::new();
        directory.insert(Subject::new("shared@example.com", "hash", Role::User));

        let as_lawyer = directory
            .find_by_email(Role::Lawyer, "shared@example.com")
            .await
            .unwrap();
        assert!(as_lawyer.is_none());
    }

    #[tokio::test]
    async fn test_record_and_clear_failures() {
        let directory = MemorySubjectDirectory::new();
        let subject = Subject::new("a@b.c", "hash", Role::User);
        let id = subject.id;
        directory.insert(subject);

        let deadline = Utc::now() + chrono::Duration::seconds(30);
        directory
            .record_failed_login(id, 3, Some(deadline))
            .await
            .unwrap();
        let locked = directory.get(id).unwrap();
        assert_eq!(locked.failed_login_attempts, 3);
        assert!(locked.locked_until.is_some());

        directory.clear_login_failures(id).await.unwrap();
        let cleared = directory.get(id).unwrap();
        assert_eq!(cleared.failed_login_attempts, 0);
        assert!(cleared.locked_until.is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_subject_fails() {
        let directory = MemorySubjectDirectory::new();
        let err = directory.clear_login_failures(Uuid::new_v4()).await;
        assert!(err.is_err());
    }
}
