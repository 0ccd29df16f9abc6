//! Second-factor verification flow tests.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

use helpers::{ADMIN_EMAIL, ADMIN_PASSWORD, TestApp};

async fn start_challenge(app: &TestApp, email: &str, password: &str) -> (String, String) {
    let (_, body) = app.login("user", email, password).await;
    assert_eq!(body["requiresMFA"], true, "expected a challenge: {body}");
    let mfa_token = body["mfaToken"].as_str().unwrap().to_string();
    let code = app.mailer.last_code_for(email).unwrap();
    (mfa_token, code)
}

async fn verify(app: &TestApp, mfa_token: &str, otp: &str) -> (StatusCode, Value) {
    app.post(
        "/api/auth/verify-mfa",
        json!({ "mfaToken": mfa_token, "otp": otp }),
    )
    .await
}

#[tokio::test]
async fn test_correct_code_yields_session() {
    let app = TestApp::new();
    app.seed_user("client@example.com", "secret-pass");

    let (mfa_token, code) = start_challenge(&app, "client@example.com", "secret-pass").await;
    let (status, body) = verify(&app, &mfa_token, &code).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let session = body["token"].as_str().unwrap();

    // The session token works against a protected route.
    let (status, me) = app
        .get("/api/users/me", &[("x-user-token", session)])
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "client@example.com");
}

#[tokio::test]
async fn test_code_is_consumed_on_success() {
    let app = TestApp::new();
    app.seed_user("client@example.com", "secret-pass");

    let (mfa_token, code) = start_challenge(&app, "client@example.com", "secret-pass").await;
    verify(&app, &mfa_token, &code).await;

    let (status, body) = verify(&app, &mfa_token, &code).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "No active verification code, please log in again"
    );
}

#[tokio::test]
async fn test_wrong_code_counts_down_attempts() {
    let app = TestApp::new();
    app.seed_user("client@example.com", "secret-pass");

    let (mfa_token, code) = start_challenge(&app, "client@example.com", "secret-pass").await;

    // Generated codes are always six digits starting at 100000, so
    // "000000" can never match.
    let (_, first) = verify(&app, &mfa_token, "000000").await;
    assert_eq!(first["success"], false);
    assert_eq!(first["message"], "Incorrect code, 2 attempts remaining");

    let (_, second) = verify(&app, &mfa_token, "000000").await;
    assert_eq!(second["message"], "Incorrect code, 1 attempts remaining");

    // The right code still works while tries remain.
    let (_, third) = verify(&app, &mfa_token, &code).await;
    assert_eq!(third["success"], true);
    assert!(third["token"].is_string());
}

#[tokio::test]
async fn test_exhausted_attempts_remove_the_code() {
    let app = TestApp::new();
    app.seed_user("client@example.com", "secret-pass");

    let (mfa_token, code) = start_challenge(&app, "client@example.com", "secret-pass").await;

    for _ in 0..3 {
        verify(&app, &mfa_token, "000000").await;
    }

    // The counter is at the bound: even the right code is refused.
    let (_, refused) = verify(&app, &mfa_token, &code).await;
    assert_eq!(refused["success"], false);
    assert_eq!(
        refused["message"],
        "Too many incorrect attempts, please log in again"
    );

    // And the entry is gone.
    let (_, gone) = verify(&app, &mfa_token, &code).await;
    assert_eq!(
        gone["message"],
        "No active verification code, please log in again"
    );
}

#[tokio::test]
async fn test_new_login_invalidates_previous_code() {
    let app = TestApp::new();
    app.seed_user("client@example.com", "secret-pass");

    let (_, first_code) = start_challenge(&app, "client@example.com", "secret-pass").await;
    let (second_token, second_code) =
        start_challenge(&app, "client@example.com", "secret-pass").await;

    if first_code != second_code {
        let (_, body) = verify(&app, &second_token, &first_code).await;
        assert_eq!(body["success"], false);
    }

    let (_, body) = verify(&app, &second_token, &second_code).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_session_token_rejected_as_mfa_token() {
    let app = TestApp::new();
    app.seed_lawyer("counsel@example.com", "secret-pass");
    app.seed_user("client@example.com", "secret-pass");

    // Lawyers get a session token directly; it is not a pending token.
    let (_, lawyer_login) = app
        .login("lawyer", "counsel@example.com", "secret-pass")
        .await;
    let session = lawyer_login["token"].as_str().unwrap();

    let (status, body) = verify(&app, session, "123456").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn test_garbage_mfa_token_rejected() {
    let app = TestApp::new();

    let (status, body) = verify(&app, "not-a-jwt", "123456").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn test_admin_completes_mfa_and_reaches_admin_routes() {
    let app = TestApp::new();

    let token = app
        .login_with_mfa("admin", ADMIN_EMAIL, ADMIN_PASSWORD)
        .await;

    let (status, body) = app
        .get("/api/admin/overview", &[("x-admin-token", &token)])
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["email"], ADMIN_EMAIL);
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
async fn test_short_otp_rejected_before_lookup() {
    let app = TestApp::new();

    let (status, _) = verify(&app, "anything", "123").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
