//! OTP challenge storage with attempt counting and exact expiry.
//!
//! Entries carry their own absolute deadline because the cache backend
//! only guarantees eventual eviction. Every terminal verify outcome
//! (match, expiry, exhaustion) removes the entry; only a mismatch with
//! tries left leaves it in place.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use lexbook_cache::CacheManager;
use lexbook_core::traits::CacheProvider;

use super::generator::generate_code;
use crate::error::AuthError;

/// A live OTP challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OtpEntry {
    /// The expected six-digit code.
    code: String,
    /// Hard deadline, checked on every verify.
    expires_at: DateTime<Utc>,
    /// Wrong submissions so far.
    attempts: u32,
}

/// Issues and verifies one-time codes keyed by subject or email.
#[derive(Debug, Clone)]
pub struct OtpStore {
    cache: CacheManager,
    max_attempts: u32,
}

impl OtpStore {
    pub fn new(cache: CacheManager, max_attempts: u32) -> Self {
        Self {
            cache,
            max_attempts,
        }
    }

    /// Issue a fresh code under `key`, replacing any live challenge.
    ///
    /// Overwriting is what gives codes single-liveness: once a new code
    /// is issued, the previous one can never verify.
    pub async fn issue(&self, key: &str, ttl: Duration) -> Result<String, AuthError> {
        let code = generate_code();
        let entry = OtpEntry {
            code: code.clone(),
            expires_at: Utc::now()
                + chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::minutes(5)),
            attempts: 0,
        };
        self.cache.set_json(key, &entry, ttl).await?;
        debug!(key, "issued verification code");
        Ok(code)
    }

    /// Verify a submitted code against the challenge under `key`.
    pub async fn verify(&self, key: &str, submitted: &str) -> Result<(), AuthError> {
        let Some(mut entry) = self.cache.get_json::<OtpEntry>(key).await? else {
            return Err(AuthError::OtpNotFound);
        };

        if Utc::now() > entry.expires_at {
            self.cache.delete(key).await?;
            return Err(AuthError::OtpExpired);
        }

        if entry.attempts >= self.max_attempts {
            self.cache.delete(key).await?;
            return Err(AuthError::OtpAttemptsExceeded);
        }

        if entry.code == submitted {
            self.cache.delete(key).await?;
            return Ok(());
        }

        entry.attempts += 1;
        let remaining = self.max_attempts - entry.attempts;
        let ttl = (entry.expires_at - Utc::now())
            .to_std()
            .unwrap_or(Duration::from_secs(1));
        self.cache.set_json(key, &entry, ttl).await?;
        Err(AuthError::OtpMismatch {
            attempts_remaining: remaining,
        })
    }
}
