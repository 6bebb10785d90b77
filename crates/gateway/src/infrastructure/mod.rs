//! Infrastructure Layer - Outbound adapters to the regulations API
//!
//! - RestClient: HTTP client implementing `RegulationGateway`

pub mod rest_client;

pub use rest_client::{ApiStatus, RestClient, RestError};
