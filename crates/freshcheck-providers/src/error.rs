//! Error types for inference requests

use thiserror::Error;

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// What went wrong while talking to the remote endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Could not connect
    Connect,
    /// Request did not finish within the configured timeout
    Timeout,
    /// Connection broke while reading the body
    Body,
    /// Any other transport failure
    Other,
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TransportErrorKind::Connect => "connection failed",
            TransportErrorKind::Timeout => "request timed out",
            TransportErrorKind::Body => "response body unreadable",
            TransportErrorKind::Other => "transport failure",
        };
        f.write_str(label)
    }
}

/// Errors that can occur when calling the inference endpoint
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ProviderError {
    /// Network or HTTP failure before a reply was received
    #[error("Network error ({kind}): {message}")]
    Transport {
        kind: TransportErrorKind,
        message: String,
    },

    /// Endpoint answered with a failure status or a malformed envelope
    #[error("Model service error: {message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    /// Configuration error (never includes key details)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProviderError {
    /// Build an upstream error from a non-success HTTP status.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        ProviderError::Upstream {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Build an upstream error for a reply that could not be understood.
    pub fn envelope(message: impl Into<String>) -> Self {
        ProviderError::Upstream {
            status: None,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::Connect
        } else if err.is_body() || err.is_decode() {
            TransportErrorKind::Body
        } else {
            TransportErrorKind::Other
        };

        // Drop the URL so query strings never reach logs or the UI.
        ProviderError::Transport {
            kind,
            message: err.without_url().to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ProviderError {
    fn from(err: serde_yaml::Error) -> Self {
        ProviderError::Config(err.to_string())
    }
}

impl From<std::io::Error> for ProviderError {
    fn from(err: std::io::Error) -> Self {
        ProviderError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ProviderError::status(529, "overloaded");
        assert_eq!(err.to_string(), "Model service error: overloaded");
        assert!(matches!(err, ProviderError::Upstream { status: Some(529), .. }));
    }

    #[test]
    fn test_transport_error_message() {
        let err = ProviderError::Transport {
            kind: TransportErrorKind::Timeout,
            message: "deadline elapsed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Network error (request timed out): deadline elapsed"
        );
    }
}
