use docket_core::DocketId;
use thiserror::Error;

/// Domain-level errors for regulation lookups
///
/// Adapters convert their transport-specific failures into this type so the
/// search view never sees HTTP client details.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Transport failure, or the remote answered with a non-success status
    #[error("Network error{}: {message}", status_suffix(.status))]
    Network {
        status: Option<u16>,
        message: String,
    },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Regulation not found: {0}")]
    NotFound(DocketId),

    /// Request cannot be expressed on the wire. Raised only for the search
    /// terms `.` and `..`; an empty query is a valid no-op, not an error.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl GatewayError {
    pub fn network(message: impl Into<String>) -> Self {
        GatewayError::Network {
            status: None,
            message: message.into(),
        }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        GatewayError::Network {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound(_))
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {code})"),
        None => String::new(),
    }
}

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;
