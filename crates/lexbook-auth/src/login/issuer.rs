//! Second-factor challenge issuance.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use lexbook_cache::keys;
use lexbook_core::config::auth::AuthConfig;
use lexbook_email::{Mailer, OtpPurpose};

use crate::error::AuthError;
use crate::otp::OtpStore;
use crate::token::{JwtEncoder, TokenSubject};

/// A challenge handed back to the client after the password step.
#[derive(Debug, Clone)]
pub struct ChallengeIssued {
    /// Token the client must present together with the code.
    pub pending_token: String,
    /// Whether the code email actually went out. Delivery failure does
    /// not void the challenge; the client is told so it can warn.
    pub email_delivered: bool,
}

/// Issues OTP challenges for login step-up and pre-registration
/// email verification.
#[derive(Clone)]
pub struct SecondFactorIssuer {
    otp_store: OtpStore,
    mailer: Arc<dyn Mailer>,
    encoder: JwtEncoder,
    login_otp_ttl: Duration,
    registration_otp_ttl: Duration,
}

impl std::fmt::Debug for SecondFactorIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecondFactorIssuer")
            .field("login_otp_ttl", &self.login_otp_ttl)
            .field("registration_otp_ttl", &self.registration_otp_ttl)
            .finish()
    }
}

impl SecondFactorIssuer {
    pub fn new(
        otp_store: OtpStore,
        mailer: Arc<dyn Mailer>,
        encoder: JwtEncoder,
        config: &AuthConfig,
    ) -> Self {
        Self {
            otp_store,
            mailer,
            encoder,
            login_otp_ttl: Duration::from_secs(config.login_otp_ttl_minutes * 60),
            registration_otp_ttl: Duration::from_secs(config.registration_otp_ttl_minutes * 60),
        }
    }

    /// Issue a login challenge: store a fresh code, mint the pending
    /// token, and attempt email delivery.
    pub async fn issue_login_challenge(
        &self,
        subject: &TokenSubject,
        email: &str,
    ) -> Result<ChallengeIssued, AuthError> {
        let key = login_otp_key(subject);
        let code = self.otp_store.issue(&key, self.login_otp_ttl).await?;
        let pending_token = self.encoder.pending_token(subject)?;
        let email_delivered = self.deliver(email, &code, OtpPurpose::Login).await;

        Ok(ChallengeIssued {
            pending_token,
            email_delivered,
        })
    }

    /// Issue a pre-registration challenge keyed by the prospective
    /// email address. Returns whether the email went out.
    pub async fn issue_registration_challenge(&self, email: &str) -> Result<bool, AuthError> {
        let key = keys::registration_otp(email);
        let code = self
            .otp_store
            .issue(&key, self.registration_otp_ttl)
            .await?;
        Ok(self.deliver(email, &code, OtpPurpose::Registration).await)
    }

    async fn deliver(&self, email: &str, code: &str, purpose: OtpPurpose) -> bool {
        match self.mailer.send_otp(email, code, purpose).await {
            Ok(()) => true,
            Err(err) => {
                // The challenge stays live; the caller reports
                // non-delivery to the client, and the logged code is
                // the operator's recovery path.
                warn!(error = %err, %purpose, code, "verification email not delivered");
                false
            }
        }
    }
}

/// Cache key for a subject's login challenge.
pub(crate) fn login_otp_key(subject: &TokenSubject) -> String {
    match subject {
        TokenSubject::Member { id, .. } => keys::login_otp(*id),
        TokenSubject::Admin { email } => keys::admin_login_otp(email),
    }
}
