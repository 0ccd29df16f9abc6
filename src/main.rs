//! LexBook Server — booking-platform authentication service.
//!
//! Main entry point that wires all crates together and starts the
//! server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use lexbook_core::config::AppConfig;
use lexbook_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("LEXBOOK_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting LexBook v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Initialize cache ─────────────────────────────────
    tracing::info!("Initializing cache (provider: {})...", config.cache.provider);
    let cache = lexbook_cache::CacheManager::new(&config.cache)?;

    // ── Step 2: Initialize subject directory ─────────────────────
    let directory: Arc<dyn lexbook_directory::SubjectDirectory> =
        Arc::new(lexbook_directory::MemorySubjectDirectory::new());

    // ── Step 3: Initialize email dispatch ────────────────────────
    tracing::info!("Initializing mailer (sender: {})...", config.email.sender);
    let mailer = lexbook_email::build_mailer(&config.email)?;

    // ── Step 4: Initialize auth system ───────────────────────────
    let hasher = lexbook_auth::PasswordHasher::new();
    let encoder = lexbook_auth::JwtEncoder::new(&config.auth);
    let decoder = lexbook_auth::JwtDecoder::new(&config.auth);
    let otp_store = lexbook_auth::OtpStore::new(cache.clone(), config.auth.otp_max_attempts);
    let issuer = lexbook_auth::SecondFactorIssuer::new(
        otp_store.clone(),
        Arc::clone(&mailer),
        encoder.clone(),
        &config.auth,
    );
    let verifier =
        lexbook_auth::SecondFactorVerifier::new(decoder.clone(), encoder.clone(), otp_store);
    let authenticator = lexbook_auth::Authenticator::new(
        Arc::clone(&directory),
        hasher,
        encoder,
        issuer.clone(),
        config.admin.clone(),
        &config.auth,
    );
    let guard = lexbook_auth::RoleGuard::new(decoder, config.admin.email.clone());

    if config.admin.email.is_empty() {
        tracing::warn!("No admin email configured; admin login is disabled");
    }

    // ── Step 5: Build and start HTTP server ──────────────────────
    let state = lexbook_api::AppState {
        config: Arc::new(config.clone()),
        cache,
        directory,
        mailer,
        authenticator,
        issuer,
        verifier,
        guard,
    };

    let app = lexbook_api::build_app(state, &config.server.cors);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("LexBook server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("LexBook server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
