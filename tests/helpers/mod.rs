//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use lexbook_api::{AppState, build_app};
use lexbook_auth::{
    Authenticator, JwtDecoder, JwtEncoder, OtpStore, PasswordHasher, RoleGuard, SecondFactorIssuer,
    SecondFactorVerifier,
};
use lexbook_cache::CacheManager;
use lexbook_core::config::AppConfig;
use lexbook_directory::{MemorySubjectDirectory, SubjectDirectory};
use lexbook_email::{Mailer, RecordingMailer};
use lexbook_entity::{Role, Subject};

pub const ADMIN_EMAIL: &str = "admin@lexbook.test";
pub const ADMIN_PASSWORD: &str = "admin-master-pass";

/// Test application context: a fully wired router plus handles to the
/// seams the tests need to reach behind the HTTP surface.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Subject directory for seeding and inspecting accounts.
    pub directory: Arc<MemorySubjectDirectory>,
    /// Recording mailer for capturing issued codes.
    pub mailer: Arc<RecordingMailer>,
    hasher: PasswordHasher,
}

impl TestApp {
    /// Build a test application with in-memory backends and a
    /// config-bound admin account.
    pub fn new() -> Self {
        let hasher = PasswordHasher::new();

        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-signing-secret".to_string();
        config.admin.email = ADMIN_EMAIL.to_string();
        config.admin.password_hash = hasher.hash(ADMIN_PASSWORD).expect("hash admin password");

        let cache = CacheManager::new(&config.cache).expect("init cache");
        let directory = Arc::new(MemorySubjectDirectory::new());
        let mailer = Arc::new(RecordingMailer::new());

        let encoder = JwtEncoder::new(&config.auth);
        let decoder = JwtDecoder::new(&config.auth);
        let otp_store = OtpStore::new(cache.clone(), config.auth.otp_max_attempts);
        let issuer = SecondFactorIssuer::new(
            otp_store.clone(),
            Arc::clone(&mailer) as Arc<dyn Mailer>,
            encoder.clone(),
            &config.auth,
        );
        let verifier = SecondFactorVerifier::new(decoder.clone(), encoder.clone(), otp_store);
        let authenticator = Authenticator::new(
            Arc::clone(&directory) as Arc<dyn SubjectDirectory>,
            PasswordHasher::new(),
            encoder,
            issuer.clone(),
            config.admin.clone(),
            &config.auth,
        );
        let guard = RoleGuard::new(decoder, config.admin.email.clone());

        let state = AppState {
            config: Arc::new(config.clone()),
            cache,
            directory: Arc::clone(&directory) as Arc<dyn SubjectDirectory>,
            mailer: Arc::clone(&mailer) as Arc<dyn Mailer>,
            authenticator,
            issuer,
            verifier,
            guard,
        };

        let router = build_app(state, &config.server.cors);

        Self {
            router,
            directory,
            mailer,
            hasher,
        }
    }

    /// Seed a user account with the given credentials.
    pub fn seed_user(&self, email: &str, password: &str) -> Subject {
        self.seed(email, password, Role::User)
    }

    /// Seed a lawyer account with the given credentials.
    pub fn seed_lawyer(&self, email: &str, password: &str) -> Subject {
        self.seed(email, password, Role::Lawyer)
    }

    fn seed(&self, email: &str, password: &str, role: Role) -> Subject {
        let hash = self.hasher.hash(password).expect("hash password");
        let subject = Subject::new(email, hash, role);
        self.directory.insert(subject.clone());
        subject
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("build request");
        self.send(request).await
    }

    /// GET with optional headers and decode the JSON response.
    pub async fn get(&self, path: &str, headers: &[(&str, &str)]) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("GET").uri(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::empty()).expect("build request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("send request");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("parse JSON body")
        };
        (status, body)
    }

    /// POST to a role's login endpoint.
    pub async fn login(&self, role_path: &str, email: &str, password: &str) -> (StatusCode, Value) {
        self.post(
            &format!("/api/auth/{role_path}/login"),
            json!({ "email": email, "password": password }),
        )
        .await
    }

    /// Run the full password-plus-code flow and return the session
    /// token. Panics if any step is refused.
    pub async fn login_with_mfa(&self, role_path: &str, email: &str, password: &str) -> String {
        let (status, body) = self.login(role_path, email, password).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["requiresMFA"], true, "expected a challenge: {body}");

        let mfa_token = body["mfaToken"].as_str().expect("mfaToken").to_string();
        let code = self
            .mailer
            .last_code_for(email)
            .expect("a code should have been emailed");

        let (status, body) = self
            .post(
                "/api/auth/verify-mfa",
                json!({ "mfaToken": mfa_token, "otp": code }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true, "verify-mfa refused: {body}");
        body["token"].as_str().expect("session token").to_string()
    }
}
