use async_trait::async_trait;
use docket_core::{DocketId, Regulation};
use docket_ports::{GatewayError, GatewayResult, RegulationGateway};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;
use url::Url;

use crate::config::{ClientConfig, ConfigError};

#[derive(Error, Debug)]
pub enum RestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid request path: {0}")]
    Path(String),
}

/// Convert infrastructure RestError to domain GatewayError
impl From<RestError> for GatewayError {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Http(e) => GatewayError::Network {
                status: e.status().map(|s| s.as_u16()),
                message: e.to_string(),
            },
            RestError::Status { status, body } => GatewayError::status(status.as_u16(), body),
            RestError::Parse(msg) => GatewayError::Decode(msg),
            RestError::Path(msg) => GatewayError::Validation(msg),
        }
    }
}

/// Response of the service root endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiStatus {
    pub message: String,
}

/// REST API client for the regulations service
/// Infrastructure component - handles HTTP communication
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: Url,
}

impl RestClient {
    /// Build a client from configuration. The base URL is validated here so
    /// request building cannot fail on it later.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let base_url = config.validate()?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(RestClient { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// List all regulations
    pub async fn get_regulations(&self) -> Result<Vec<Regulation>, RestError> {
        let url = self.endpoint(&["regulations"])?;
        self.get(url).await
    }

    /// Search regulations; `term` travels as a single escaped path segment
    pub async fn search_regulations(&self, term: &str) -> Result<Vec<Regulation>, RestError> {
        let url = self.endpoint(&["regulations", "search", term])?;
        self.get(url).await
    }

    /// Fetch one regulation by docket id
    pub async fn get_regulation(&self, id: DocketId) -> Result<Regulation, RestError> {
        let url = self.endpoint(&["regulations", &id.to_string()])?;
        self.get(url).await
    }

    /// Query the service root, which sits above the `/api` prefix
    pub async fn health(&self) -> Result<ApiStatus, RestError> {
        self.get(self.root_url()).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, RestError> {
        // `extend` silently drops dot segments, which would retarget the request
        if let Some(dots) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(RestError::Path(format!(
                "'{dots}' cannot be sent as a path segment"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| RestError::Path(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn root_url(&self) -> Url {
        let mut url = self.base_url.clone();
        let path = url.path().trim_end_matches('/');
        let root = path.strip_suffix("/api").unwrap_or(path).to_string();
        url.set_path(&format!("{root}/"));
        url
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, RestError> {
        tracing::debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, RestError> {
        let status = resp.status();
        let url = resp.url().clone();
        let text = resp.text().await?;

        if !status.is_success() {
            tracing::warn!("GET {} returned {}", url, status);
            return Err(RestError::Status {
                status,
                body: error_detail(&text),
            });
        }

        serde_json::from_str(&text).map_err(|e| RestError::Parse(e.to_string()))
    }
}

/// The service reports errors as `{"detail": "..."}`; fall back to the raw body
fn error_detail(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| body.to_string())
}

/// Implement RegulationGateway for RestClient (Dependency Inversion)
///
/// Converts infrastructure RestError to domain GatewayError to maintain
/// proper dependency direction (infrastructure -> domain).
#[async_trait]
impl RegulationGateway for RestClient {
    async fn fetch_all(&self) -> GatewayResult<Vec<Regulation>> {
        self.get_regulations().await.map_err(GatewayError::from)
    }

    async fn search(&self, term: &str) -> GatewayResult<Vec<Regulation>> {
        self.search_regulations(term)
            .await
            .map_err(GatewayError::from)
    }

    async fn fetch_one(&self, id: DocketId) -> GatewayResult<Regulation> {
        match self.get_regulation(id).await {
            Err(RestError::Status { status, .. }) if status == StatusCode::NOT_FOUND => {
                Err(GatewayError::NotFound(id))
            }
            other => other.map_err(GatewayError::from),
        }
    }
}
