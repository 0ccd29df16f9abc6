//! Email dispatch configuration.

use serde::{Deserialize, Serialize};

/// Email capability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Sender type: `"log"` (development, writes codes to the log) or
    /// `"http"` (POSTs to a transactional email API).
    #[serde(default = "default_sender")]
    pub sender: String,
    /// Transactional email API endpoint (for the `http` sender).
    #[serde(default)]
    pub api_url: String,
    /// API key sent as a bearer token (for the `http` sender).
    #[serde(default)]
    pub api_key: String,
    /// From address for outbound mail.
    #[serde(default = "default_from")]
    pub from_address: String,
    /// Request timeout in seconds for the `http` sender.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            sender: default_sender(),
            api_url: String::new(),
            api_key: String::new(),
            from_address: default_from(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_sender() -> String {
    "log".to_string()
}

fn default_from() -> String {
    "no-reply@lexbook.local".to_string()
}

fn default_timeout() -> u64 {
    10
}
