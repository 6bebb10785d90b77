use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the regulations API client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API, including any path prefix (e.g. `http://localhost:8000/api`)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in milliseconds. `None` keeps the transport default.
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: default_base_url(),
            request_timeout_ms: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_user_agent() -> String {
    concat!("docket-client/", env!("CARGO_PKG_VERSION")).to_string()
}
