//! Docket Gateway
//!
//! Data gateway for the regulations API. Translates the three read-only
//! operations of [`RegulationGateway`] into HTTP GET requests against a
//! configured base URL and decodes the JSON responses.
//!
//! ```text
//!  ┌──────────────┐   fetch_all / search / fetch_one   ┌──────────────┐
//!  │  SearchView  │ ──────────────────────────────────▶│  RestClient  │
//!  └──────────────┘        (RegulationGateway)         └──────┬───────┘
//!                                                             │ GET {base}/regulations[...]
//!                                                             ▼
//!                                                      ┌──────────────┐
//!                                                      │ Regulations  │
//!                                                      │     API      │
//!                                                      └──────────────┘
//! ```
//!
//! The gateway performs no transformation beyond JSON decoding, no retries
//! and no caching. Failures surface as [`docket_ports::GatewayError`].

pub mod config;
pub mod infrastructure;

// Re-export key types
pub use config::{
    BASE_URL_ENV, ClientConfig, ConfigError, load_config, load_config_from_str,
    load_default_config,
};
pub use docket_ports::{GatewayError, RegulationGateway};
pub use infrastructure::{ApiStatus, RestClient, RestError};
