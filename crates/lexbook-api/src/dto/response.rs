//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lexbook_entity::Subject;

/// Authentication flow response: login and verify-mfa.
///
/// The client branches on `success` and then on `requires_mfa`; token
/// fields are present only on the branch that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    /// Set when a second factor is required before a session exists.
    /// The wire name is `requiresMFA`, not camelCase, for client
    /// compatibility.
    #[serde(rename = "requiresMFA", skip_serializing_if = "Option::is_none")]
    pub requires_mfa: Option<bool>,
    /// Pending token to present together with the code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_token: Option<String>,
    /// Full session token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Whether the code email actually went out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_delivered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AuthResponse {
    /// A full session was established.
    pub fn session(token: String) -> Self {
        Self {
            success: true,
            requires_mfa: None,
            mfa_token: None,
            token: Some(token),
            email_delivered: None,
            message: None,
        }
    }

    /// A second factor is required; a code was issued.
    pub fn second_factor(mfa_token: String, email_delivered: bool) -> Self {
        let message = if email_delivered {
            "Verification code sent to your email"
        } else {
            "Could not send the verification code email, please retry"
        };
        Self {
            success: true,
            requires_mfa: Some(true),
            mfa_token: Some(mfa_token),
            token: None,
            email_delivered: Some(email_delivered),
            message: Some(message.to_string()),
        }
    }
}

/// Simple success-plus-message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
    /// Present on flows that attempted an email send.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_delivered: Option<bool>,
}

/// Subject profile for `/users/me` and `/lawyers/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub success: bool,
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl ProfileResponse {
    pub fn from_subject(subject: &Subject) -> Self {
        Self {
            success: true,
            id: subject.id,
            email: subject.email.clone(),
            full_name: subject.full_name.clone(),
            role: subject.role.to_string(),
            created_at: subject.created_at,
            last_login_at: subject.last_login_at,
        }
    }
}

/// The verified caller for booking flows that accept several roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerContextResponse {
    pub success: bool,
    pub role: String,
    /// Subject id for stored members; absent for the admin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

/// Admin overview for `/admin/overview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverviewResponse {
    pub success: bool,
    pub email: String,
    pub role: String,
}

/// Health probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub cache: bool,
}
