//! Error types and handling for cite-verify core

use thiserror::Error;

/// Result type alias for cite-verify operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cite-verify core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Registry lookup errors
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Tool execution errors
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

/// Reasons a DOI could not be verified against the registry.
///
/// The `Display` output of each variant is the exact `error` string reported
/// to callers of the verifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The registry has no record for the DOI
    #[error("DOI not found in Crossref database - likely hallucinated")]
    NotFound,

    /// Any other non-success status
    #[error("HTTP {status}: Unable to verify")]
    Upstream { status: u16 },

    /// Timeouts, connection failures, malformed requests and undecodable bodies
    #[error("Network error: {message}")]
    Network { message: String },
}

impl LookupError {
    /// Whether this failure is a signal that the citation was fabricated
    /// rather than a problem reaching the registry
    pub fn is_hallucination(&self) -> bool {
        matches!(self, LookupError::NotFound)
    }
}

/// Tool execution errors
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Tool not found: {name}")]
    NotFound { name: String },

    #[error("Invalid tool parameters: {message}")]
    InvalidParameters { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_messages() {
        assert_eq!(
            LookupError::NotFound.to_string(),
            "DOI not found in Crossref database - likely hallucinated"
        );
        assert_eq!(
            LookupError::Upstream { status: 503 }.to_string(),
            "HTTP 503: Unable to verify"
        );
        assert_eq!(
            LookupError::Network {
                message: "connection refused".to_string()
            }
            .to_string(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_only_not_found_is_hallucination() {
        assert!(LookupError::NotFound.is_hallucination());
        assert!(!LookupError::Upstream { status: 500 }.is_hallucination());
        assert!(!LookupError::Network {
            message: "timeout".to_string()
        }
        .is_hallucination());
    }
}
