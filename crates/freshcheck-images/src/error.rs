//! Error types for image operations.

use thiserror::Error;

/// Result type for image operations.
pub type ImageResult<T> = Result<T, ImageError>;

/// Errors that can occur while acquiring or encoding an image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Declared content type is not an image.
    #[error("Unsupported media type: {0}. Please select an image file")]
    UnsupportedMedia(String),

    /// Input contained no bytes.
    #[error("Image is empty")]
    EmptyImage,

    /// Data URL or base64 payload could not be decoded.
    #[error("Invalid image encoding: {0}")]
    InvalidEncoding(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<base64::DecodeError> for ImageError {
    fn from(err: base64::DecodeError) -> Self {
        ImageError::InvalidEncoding(err.to_string())
    }
}
