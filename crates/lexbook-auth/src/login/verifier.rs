//! Second-factor verification: pending token + code → full session.

use lexbook_cache::keys;

use crate::error::AuthError;
use crate::otp::OtpStore;
use crate::token::{JwtDecoder, JwtEncoder};

use super::issuer::login_otp_key;

/// Exchanges a pending token and a correct code for a session token.
#[derive(Debug, Clone)]
pub struct SecondFactorVerifier {
    decoder: JwtDecoder,
    encoder: JwtEncoder,
    otp_store: OtpStore,
}

impl SecondFactorVerifier {
    pub fn new(decoder: JwtDecoder, encoder: JwtEncoder, otp_store: OtpStore) -> Self {
        Self {
            decoder,
            encoder,
            otp_store,
        }
    }

    /// Complete a login: decode the pending token, verify the code, and
    /// mint the full session token.
    ///
    /// The pending token is the only way into this exchange; its expiry
    /// ends the login attempt outright.
    pub async fn verify_login(
        &self,
        pending_token: &str,
        code: &str,
    ) -> Result<String, AuthError> {
        let claims = self.decoder.decode_pending(pending_token)?;
        let subject = claims.subject()?;

        self.otp_store
            .verify(&login_otp_key(&subject), code)
            .await?;

        Ok(self.encoder.session_token(&subject)?)
    }

    /// Verify a pre-registration code for an email address.
    pub async fn verify_registration(&self, email: &str, code: &str) -> Result<(), AuthError> {
        self.otp_store
            .verify(&keys::registration_otp(email), code)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenSubject;
    use lexbook_cache::CacheManager;
    use lexbook_cache::memory::MemoryCacheProvider;
    use lexbook_core::config::auth::AuthConfig;
    use lexbook_core::config::cache::MemoryCacheConfig;
    use lexbook_entity::Role;
    use std::sync::Arc;
    use std::time::Duration;
    use uuid::Uuid;

    fn fixture() -> (JwtEncoder, SecondFactorVerifier, OtpStore) {
        let config = AuthConfig {
            jwt_secret: "verifier-test-secret".to_string(),
            ..Default::default()
        };
        let provider = MemoryCacheProvider::new(&MemoryCacheConfig {
            max_capacity: 1000,
            time_to_live_seconds: 600,
        });
        let otp_store = OtpStore::new(CacheManager::from_provider(Arc::new(provider)), 3);
        let encoder = JwtEncoder::new(&config);
        let verifier = SecondFactorVerifier::new(
            JwtDecoder::new(&config),
            encoder.clone(),
            otp_store.clone(),
        );
        (encoder, verifier, otp_store)
    }

    #[tokio::test]
    async fn test_full_exchange() {
        let (encoder, verifier, otp_store) = fixture();
        let subject = TokenSubject::Member {
            id: Uuid::new_v4(),
            role: Role::User,
        };

        let code = otp_store
            .issue(&login_otp_key(&subject), Duration::from_secs(300))
            .await
            .unwrap();
        let pending = encoder.pending_token(&subject).unwrap();

        let session = verifier.verify_login(&pending, &code).await.unwrap();
        // The minted token is a full session, usable where sessions are.
        let config = AuthConfig {
            jwt_secret: "verifier-test-secret".to_string(),
            ..Default::default()
        };
        let claims = JwtDecoder::new(&config).decode_session(&session).unwrap();
        assert_eq!(claims.subject().unwrap(), subject);
    }

    #[tokio::test]
    async fn test_session_token_cannot_enter_exchange() {
        let (encoder, verifier, _) = fixture();
        let subject = TokenSubject::Member {
            id: Uuid::new_v4(),
            role: Role::User,
        };
        let session = encoder.session_token(&subject).unwrap();

        assert_eq!(
            verifier.verify_login(&session, "123456").await,
            Err(AuthError::TokenInvalid)
        );
    }

    #[tokio::test]
    async fn test_no_challenge_means_login_again() {
        let (encoder, verifier, _) = fixture();
        let subject = TokenSubject::Member {
            id: Uuid::new_v4(),
            role: Role::User,
        };
        let pending = encoder.pending_token(&subject).unwrap();

        assert_eq!(
            verifier.verify_login(&pending, "123456").await,
            Err(AuthError::OtpNotFound)
        );
    }
}
