//! # lexbook-email
//!
//! Outbound email delivery for verification codes. The default sender
//! for local dev is [`LogMailer`], which logs the code and returns
//! `Ok(())`; production deployments configure [`HttpMailer`] against a
//! transactional email API.
//!
//! Delivery failures never abort the flows that trigger them: callers
//! treat a send error as "not delivered" and surface that to the
//! client while the issued challenge stays valid.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use lexbook_core::config::email::EmailConfig;
use lexbook_core::{AppError, AppResult};

/// What a verification code is being sent for. Selects the message
/// wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpPurpose {
    /// Second factor during login.
    Login,
    /// Email ownership proof before account creation.
    Registration,
}

impl OtpPurpose {
    fn subject_line(self) -> &'static str {
        match self {
            Self::Login => "Your LexBook login code",
            Self::Registration => "Verify your email for LexBook",
        }
    }
}

impl fmt::Display for OtpPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Registration => write!(f, "registration"),
        }
    }
}

/// Email delivery abstraction.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Deliver a verification code or return an error to mark it as
    /// undelivered.
    async fn send_otp(&self, to: &str, code: &str, purpose: OtpPurpose) -> AppResult<()>;
}

/// Local dev sender that logs the code instead of sending real email.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_otp(&self, to: &str, code: &str, purpose: OtpPurpose) -> AppResult<()> {
        info!(to, code, %purpose, "email send stub");
        Ok(())
    }
}

/// Sender that POSTs to a transactional email HTTP API.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from_address: String,
}

impl HttpMailer {
    pub fn new(config: &EmailConfig) -> AppResult<Self> {
        if config.api_url.is_empty() {
            return Err(AppError::configuration(
                "Email sender 'http' requires email.api_url",
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::email(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send_otp(&self, to: &str, code: &str, purpose: OtpPurpose) -> AppResult<()> {
        let body = serde_json::json!({
            "from": self.from_address,
            "to": to,
            "subject": purpose.subject_line(),
            "text": format!("Your verification code is {code}. It expires shortly."),
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::email(format!("Email API request failed: {e}")))?;

        if !response.status().is_success() {
            warn!(status = %response.status(), to, "email API rejected message");
            return Err(AppError::email(format!(
                "Email API returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}

/// Build the configured mailer.
pub fn build_mailer(config: &EmailConfig) -> AppResult<Arc<dyn Mailer>> {
    match config.sender.as_str() {
        "log" => Ok(Arc::new(LogMailer)),
        "http" => Ok(Arc::new(HttpMailer::new(config)?)),
        other => Err(AppError::configuration(format!(
            "Unknown email sender: '{other}'. Supported: log, http"
        ))),
    }
}

/// Test double that records every delivery and can be told to fail.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: std::sync::Mutex<Vec<SentOtp>>,
    fail: std::sync::atomic::AtomicBool,
}

/// One recorded delivery.
#[derive(Debug, Clone)]
pub struct SentOtp {
    pub to: String,
    pub code: String,
    pub purpose: OtpPurpose,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent send fail.
    pub fn set_failing(&self, failing: bool) {
        self.fail
            .store(failing, std::sync::atomic::Ordering::SeqCst);
    }

    /// All deliveries recorded so far.
    pub fn sent(&self) -> Vec<SentOtp> {
        self.sent.lock().expect("mailer lock poisoned").clone()
    }

    /// The most recent code sent to `to`, if any.
    pub fn last_code_for(&self, to: &str) -> Option<String> {
        self.sent()
            .iter()
            .rev()
            .find(|s| s.to == to)
            .map(|s| s.code.clone())
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_otp(&self, to: &str, code: &str, purpose: OtpPurpose) -> AppResult<()> {
        if self.fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(AppError::email("simulated delivery failure"));
        }
        self.sent.lock().expect("mailer lock poisoned").push(SentOtp {
            to: to.to_string(),
            code: code.to_string(),
            purpose,
        });
        Ok(())
    }
}
