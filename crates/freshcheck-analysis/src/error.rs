//! Error taxonomy for a single analysis submission.

use freshcheck_images::ImageError;
use freshcheck_providers::{ProviderError, TransportErrorKind};
use thiserror::Error;

/// Why a submission failed.
///
/// Every kind is terminal for its own submission only. None is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Input is not an image.
    #[error("Unsupported file: {0}")]
    UnsupportedMedia(String),

    /// The model endpoint could not be reached.
    #[error("Could not reach the analysis service ({kind}): {message}")]
    Transport {
        kind: TransportErrorKind,
        message: String,
    },

    /// The model endpoint answered with a failure.
    #[error("Analysis service error: {0}")]
    Upstream(String),

    /// The reply is not valid JSON after fence stripping.
    #[error("The model reply is not valid JSON: {0}")]
    MalformedResponse(String),

    /// The reply is JSON but a required field is missing or invalid.
    #[error("The model reply has an invalid `{field}` field: {reason}")]
    SchemaValidation { field: String, reason: String },
}

impl AnalysisError {
    /// Human-readable message shown to the user.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Short name of the error kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::UnsupportedMedia(_) => "unsupported_media",
            AnalysisError::Transport { .. } => "transport",
            AnalysisError::Upstream(_) => "upstream",
            AnalysisError::MalformedResponse(_) => "malformed_response",
            AnalysisError::SchemaValidation { .. } => "schema_validation",
        }
    }

    pub(crate) fn schema(field: &str, reason: impl Into<String>) -> Self {
        AnalysisError::SchemaValidation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<ImageError> for AnalysisError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::UnsupportedMedia(media_type) => {
                AnalysisError::UnsupportedMedia(format!("{} is not an image", media_type))
            }
            other => AnalysisError::UnsupportedMedia(other.to_string()),
        }
    }
}

impl From<ProviderError> for AnalysisError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Transport { kind, message } => {
                AnalysisError::Transport { kind, message }
            }
            ProviderError::Upstream {
                status: Some(status),
                message,
            } => AnalysisError::Upstream(format!("HTTP {}: {}", status, message)),
            ProviderError::Upstream {
                status: None,
                message,
            } => AnalysisError::Upstream(message),
            ProviderError::Config(message) => AnalysisError::Upstream(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_image_error() {
        let err = AnalysisError::from(ImageError::UnsupportedMedia("text/plain".to_string()));
        assert_eq!(err.message(), "Unsupported file: text/plain is not an image");
        assert_eq!(err.kind(), "unsupported_media");

        let err = AnalysisError::from(ImageError::EmptyImage);
        assert!(matches!(err, AnalysisError::UnsupportedMedia(_)));
    }

    #[test]
    fn test_from_provider_error() {
        let err = AnalysisError::from(ProviderError::Transport {
            kind: TransportErrorKind::Timeout,
            message: "deadline".to_string(),
        });
        assert!(matches!(
            err,
            AnalysisError::Transport {
                kind: TransportErrorKind::Timeout,
                ..
            }
        ));

        let err = AnalysisError::from(ProviderError::status(500, "boom"));
        assert_eq!(err, AnalysisError::Upstream("HTTP 500: boom".to_string()));
    }

    #[test]
    fn test_schema_error_names_field() {
        let err = AnalysisError::schema("confidence", "must be between 0 and 100, got 150");
        assert!(err.message().contains("`confidence`"));
        assert_eq!(err.kind(), "schema_validation");
    }
}
