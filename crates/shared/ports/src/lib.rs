//! Docket Ports
//!
//! Port definitions (traits) for the regulations search client.
//! These define the boundary between the search view and the remote API.

mod error;
mod gateway;

pub use error::{GatewayError, GatewayResult};
pub use gateway::RegulationGateway;
