//! Transport encoding for images.
//!
//! The media type and the base64 payload are kept in separate fields so
//! request builders never have to split a combined string. A data URL is
//! only produced for display and can be taken apart again with
//! [`EncodedImage::from_data_url`].

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::{ImageError, ImageResult};
use crate::source::{is_image_media_type, RawImage};

/// Image data ready to be placed in an inference request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedImage {
    /// Media type, e.g. `image/png`
    pub media_type: String,
    /// Standard base64 (with padding) of the image bytes
    pub data: String,
}

impl EncodedImage {
    /// Encode a raw image. Deterministic and total.
    pub fn encode(raw: &RawImage) -> Self {
        Self {
            media_type: raw.media_type().to_string(),
            data: STANDARD.encode(raw.bytes()),
        }
    }

    /// Decode the payload back into the original bytes.
    pub fn decode(&self) -> ImageResult<Vec<u8>> {
        Ok(STANDARD.decode(self.data.as_bytes())?)
    }

    /// `data:<media>;base64,<payload>` form used for previews.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }

    /// Split a base64 data URL into media type and payload.
    pub fn from_data_url(url: &str) -> ImageResult<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| ImageError::InvalidEncoding("missing data: scheme".to_string()))?;

        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| ImageError::InvalidEncoding("missing payload separator".to_string()))?;

        let media_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| ImageError::InvalidEncoding("payload is not base64".to_string()))?;

        if !is_image_media_type(media_type) {
            return Err(ImageError::UnsupportedMedia(media_type.to_string()));
        }

        Ok(Self {
            media_type: media_type.to_string(),
            data: payload.to_string(),
        })
    }

    /// Length of the base64 payload in bytes.
    pub fn payload_len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ImageInput, ImageSource, Origin};

    fn raw(media_type: &str, bytes: &[u8]) -> RawImage {
        ImageSource::acquire(ImageInput::new(Origin::File, media_type, bytes.to_vec())).unwrap()
    }

    #[test]
    fn test_encode_known_vector() {
        let encoded = EncodedImage::encode(&raw("image/png", b"Hello"));
        assert_eq!(encoded.media_type, "image/png");
        assert_eq!(encoded.data, "SGVsbG8=");
    }

    #[test]
    fn test_data_url() {
        let encoded = EncodedImage::encode(&raw("image/jpeg", &[1, 2, 3]));
        assert_eq!(encoded.data_url(), "data:image/jpeg;base64,AQID");
    }

    #[test]
    fn test_from_data_url_splits_fields() {
        let parsed = EncodedImage::from_data_url("data:image/webp;base64,AQID").unwrap();
        assert_eq!(parsed.media_type, "image/webp");
        assert_eq!(parsed.data, "AQID");
        assert_eq!(parsed.decode().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_from_data_url_rejects_malformed() {
        assert!(EncodedImage::from_data_url("image/png;base64,AQID").is_err());
        assert!(EncodedImage::from_data_url("data:image/png;base64").is_err());
        assert!(EncodedImage::from_data_url("data:image/png,AQID").is_err());
        assert!(matches!(
            EncodedImage::from_data_url("data:text/plain;base64,AQID"),
            Err(ImageError::UnsupportedMedia(_))
        ));
    }

    #[test]
    fn test_decode_invalid_payload() {
        let encoded = EncodedImage {
            media_type: "image/png".to_string(),
            data: "not base64!".to_string(),
        };
        assert!(matches!(
            encoded.decode(),
            Err(ImageError::InvalidEncoding(_))
        ));
    }
}
