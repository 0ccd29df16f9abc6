//! Credential verification with lockout, dispatching to the second
//! factor or straight to a session per role policy.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use lexbook_core::config::admin::AdminConfig;
use lexbook_core::config::auth::AuthConfig;
use lexbook_directory::SubjectDirectory;
use lexbook_entity::{Role, Subject};

use crate::error::AuthError;
use crate::password::PasswordHasher;
use crate::token::{JwtEncoder, TokenSubject};

use super::issuer::SecondFactorIssuer;

/// What a successful password check produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials alone were sufficient; a full session was minted.
    SessionIssued { token: String },
    /// An OTP challenge was issued; the client must verify it.
    SecondFactorRequired {
        pending_token: String,
        email_delivered: bool,
    },
}

/// Front door of the login flow.
#[derive(Clone)]
pub struct Authenticator {
    directory: Arc<dyn SubjectDirectory>,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
    issuer: SecondFactorIssuer,
    admin: AdminConfig,
    max_failed_attempts: i32,
    lockout_seconds: i64,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("max_failed_attempts", &self.max_failed_attempts)
            .field("lockout_seconds", &self.lockout_seconds)
            .finish()
    }
}

impl Authenticator {
    pub fn new(
        directory: Arc<dyn SubjectDirectory>,
        hasher: PasswordHasher,
        encoder: JwtEncoder,
        issuer: SecondFactorIssuer,
        admin: AdminConfig,
        config: &AuthConfig,
    ) -> Self {
        Self {
            directory,
            hasher,
            encoder,
            issuer,
            admin,
            max_failed_attempts: config.max_failed_attempts,
            lockout_seconds: config.lockout_seconds as i64,
        }
    }

    /// Authenticate an email and password under a role's login path.
    pub async fn login(
        &self,
        role: Role,
        email: &str,
        password: &str,
    ) -> Result<LoginOutcome, AuthError> {
        if role == Role::Admin {
            return self.login_admin(email, password).await;
        }

        let subject = self
            .directory
            .find_by_email(role, email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Lockout is checked before the password so a correct guess
        // during the window learns nothing.
        if subject.is_locked() {
            warn!(subject_id = %subject.id, "login attempt on locked account");
            return Err(AuthError::AccountLocked {
                retry_after_seconds: subject.lockout_remaining_seconds(),
            });
        }

        if !self.hasher.verify(password, &subject.password_hash)? {
            self.record_failure(&subject).await?;
            return Err(AuthError::InvalidCredentials);
        }

        self.directory.clear_login_failures(subject.id).await?;
        self.directory.touch_last_login(subject.id).await?;

        let token_subject = TokenSubject::Member {
            id: subject.id,
            role: subject.role,
        };

        if subject.second_factor_enabled {
            let challenge = self
                .issuer
                .issue_login_challenge(&token_subject, &subject.email)
                .await?;
            info!(subject_id = %subject.id, role = %role, "second factor required");
            Ok(LoginOutcome::SecondFactorRequired {
                pending_token: challenge.pending_token,
                email_delivered: challenge.email_delivered,
            })
        } else {
            info!(subject_id = %subject.id, role = %role, "session issued");
            Ok(LoginOutcome::SessionIssued {
                token: self.encoder.session_token(&token_subject)?,
            })
        }
    }

    /// Admin login checks against configuration, never the directory,
    /// and always requires the second factor.
    async fn login_admin(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        if self.admin.email.is_empty()
            || self.admin.password_hash.is_empty()
            || !email.eq_ignore_ascii_case(&self.admin.email)
        {
            return Err(AuthError::InvalidCredentials);
        }

        if !self.hasher.verify(password, &self.admin.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let subject = TokenSubject::Admin {
            email: self.admin.email.clone(),
        };
        let challenge = self
            .issuer
            .issue_login_challenge(&subject, &self.admin.email)
            .await?;
        info!("admin second factor required");
        Ok(LoginOutcome::SecondFactorRequired {
            pending_token: challenge.pending_token,
            email_delivered: challenge.email_delivered,
        })
    }

    /// On the attempt that reaches the threshold, the counter resets to
    /// zero and the lockout deadline is set, so the window restarts
    /// clean once the lock elapses.
    async fn record_failure(&self, subject: &Subject) -> Result<(), AuthError> {
        let attempts = subject.failed_login_attempts + 1;
        if attempts >= self.max_failed_attempts {
            let deadline = Utc::now() + chrono::Duration::seconds(self.lockout_seconds);
            warn!(subject_id = %subject.id, "account locked after repeated failures");
            self.directory
                .record_failed_login(subject.id, 0, Some(deadline))
                .await?;
        } else {
            self.directory
                .record_failed_login(subject.id, attempts, None)
                .await?;
        }
        Ok(())
    }
}
