//! Login endpoint integration tests: credentials, roles, and lockout.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{ADMIN_EMAIL, ADMIN_PASSWORD, TestApp};

#[tokio::test]
async fn test_user_login_requires_second_factor() {
    let app = TestApp::new();
    app.seed_user("client@example.com", "secret-pass");

    let (status, body) = app.login("user", "client@example.com", "secret-pass").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["requiresMFA"], true);
    assert!(body["mfaToken"].is_string());
    assert!(body.get("token").is_none());
    assert_eq!(body["emailDelivered"], true);
    assert!(app.mailer.last_code_for("client@example.com").is_some());
}

#[tokio::test]
async fn test_lawyer_login_issues_session_directly() {
    let app = TestApp::new();
    app.seed_lawyer("counsel@example.com", "secret-pass");

    let (status, body) = app
        .login("lawyer", "counsel@example.com", "secret-pass")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["token"].is_string());
    assert!(body.get("requiresMFA").is_none());
    // No challenge, so nothing was emailed.
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_wrong_password_fails_with_ok_status() {
    let app = TestApp::new();
    app.seed_user("client@example.com", "secret-pass");

    let (status, body) = app.login("user", "client@example.com", "wrong-pass").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_unknown_email_indistinguishable_from_wrong_password() {
    let app = TestApp::new();
    app.seed_user("client@example.com", "secret-pass");

    let (_, wrong_password) = app.login("user", "client@example.com", "nope").await;
    let (_, unknown_email) = app.login("user", "nobody@example.com", "nope").await;
    assert_eq!(wrong_password["message"], unknown_email["message"]);
}

#[tokio::test]
async fn test_login_paths_are_role_scoped() {
    let app = TestApp::new();
    app.seed_user("client@example.com", "secret-pass");

    // A user account cannot log in through the lawyer path.
    let (status, body) = app
        .login("lawyer", "client@example.com", "secret-pass")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_account_locks_after_three_failures() {
    let app = TestApp::new();
    app.seed_user("client@example.com", "secret-pass");

    for _ in 0..3 {
        let (_, body) = app.login("user", "client@example.com", "wrong-pass").await;
        assert_eq!(body["message"], "Invalid email or password");
    }

    // Even the correct password is refused while the lock holds.
    let (status, body) = app.login("user", "client@example.com", "secret-pass").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    let message = body["message"].as_str().unwrap();
    assert!(
        message.starts_with("Account locked, retry in"),
        "unexpected message: {message}"
    );
}

#[tokio::test]
async fn test_lockout_applies_to_lawyers() {
    let app = TestApp::new();
    app.seed_lawyer("counsel@example.com", "secret-pass");

    for _ in 0..3 {
        app.login("lawyer", "counsel@example.com", "wrong-pass").await;
    }

    let (_, body) = app
        .login("lawyer", "counsel@example.com", "secret-pass")
        .await;
    assert_eq!(body["success"], false);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Account locked")
    );
}

#[tokio::test]
async fn test_failure_counter_resets_on_success() {
    let app = TestApp::new();
    let subject = app.seed_user("client@example.com", "secret-pass");

    app.login("user", "client@example.com", "wrong-pass").await;
    app.login("user", "client@example.com", "wrong-pass").await;
    app.login("user", "client@example.com", "secret-pass").await;

    let stored = app.directory.get(subject.id).unwrap();
    assert_eq!(stored.failed_login_attempts, 0);
    assert!(stored.last_login_at.is_some());
}

#[tokio::test]
async fn test_admin_login_always_requires_second_factor() {
    let app = TestApp::new();

    let (status, body) = app.login("admin", ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["requiresMFA"], true);
    assert!(body["mfaToken"].is_string());
    assert!(app.mailer.last_code_for(ADMIN_EMAIL).is_some());
}

#[tokio::test]
async fn test_admin_login_rejects_wrong_credentials() {
    let app = TestApp::new();

    let (_, wrong_pass) = app.login("admin", ADMIN_EMAIL, "wrong-pass").await;
    assert_eq!(wrong_pass["success"], false);
    assert_eq!(wrong_pass["message"], "Invalid email or password");

    let (_, wrong_email) = app.login("admin", "other@lexbook.test", ADMIN_PASSWORD).await;
    assert_eq!(wrong_email["success"], false);
    assert_eq!(wrong_email["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_malformed_email_is_rejected_with_bad_request() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/auth/user/login",
            json!({ "email": "not-an-email", "password": "x" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_challenge_reports_failed_email_delivery() {
    let app = TestApp::new();
    app.seed_user("client@example.com", "secret-pass");
    app.mailer.set_failing(true);

    let (status, body) = app.login("user", "client@example.com", "secret-pass").await;
    assert_eq!(status, StatusCode::OK);
    // The challenge still stands; the client is told the email failed.
    assert_eq!(body["success"], true);
    assert_eq!(body["requiresMFA"], true);
    assert_eq!(body["emailDelivered"], false);
}
