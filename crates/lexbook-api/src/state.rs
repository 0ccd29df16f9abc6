//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use lexbook_auth::{Authenticator, RoleGuard, SecondFactorIssuer, SecondFactorVerifier};
use lexbook_cache::CacheManager;
use lexbook_core::config::AppConfig;
use lexbook_directory::SubjectDirectory;
use lexbook_email::Mailer;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Everything is
/// either `Arc`-wrapped or internally cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Cache manager backing OTP state.
    pub cache: CacheManager,
    /// Subject lookup and credential-state persistence.
    pub directory: Arc<dyn SubjectDirectory>,
    /// Outbound email delivery.
    pub mailer: Arc<dyn Mailer>,
    /// Password + lockout front door of the login flow.
    pub authenticator: Authenticator,
    /// OTP challenge issuance.
    pub issuer: SecondFactorIssuer,
    /// Pending-token + code exchange.
    pub verifier: SecondFactorVerifier,
    /// Role guard for protected routes.
    pub guard: RoleGuard,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish()
    }
}
