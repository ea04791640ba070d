//! Image acquisition from camera captures and picked files.

use std::path::Path;

use tracing::debug;

use crate::error::{ImageError, ImageResult};
use crate::formats::ImageFormat;

/// Where an image submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Captured with a camera
    Camera,
    /// Chosen with a file picker or passed on the command line
    File,
}

/// A user-provided image that has not been validated yet.
#[derive(Debug, Clone)]
pub struct ImageInput {
    /// Where the image came from
    pub origin: Origin,
    /// Content type declared by the picker or derived from the file name
    pub declared_media_type: String,
    /// Image contents
    pub bytes: Vec<u8>,
}

impl ImageInput {
    /// Create an input from bytes already in memory.
    pub fn new(origin: Origin, declared_media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            origin,
            declared_media_type: declared_media_type.into(),
            bytes,
        }
    }

    /// Read a file fully into memory and declare its media type.
    ///
    /// The media type comes from the file extension. Files without a
    /// recognised extension fall back to header sniffing, and to
    /// `application/octet-stream` when that fails too, which
    /// [`ImageSource::acquire`] will then reject.
    pub fn from_path(path: &Path) -> ImageResult<Self> {
        let bytes = std::fs::read(path)?;

        let declared = match mime_guess::from_path(path).first_raw() {
            Some(mime) => mime.to_string(),
            None => ImageFormat::detect_from_bytes(&bytes)
                .map(|format| format.media_type().to_string())
                .unwrap_or_else(|_| "application/octet-stream".to_string()),
        };

        debug!(
            "Read {} bytes from {} (declared {})",
            bytes.len(),
            path.display(),
            declared
        );

        Ok(Self::new(Origin::File, declared, bytes))
    }
}

/// Raw image bytes with a validated media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    bytes: Vec<u8>,
    media_type: String,
}

impl RawImage {
    /// Image contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Declared media type, trimmed and lowercased by
    /// [`ImageSource::acquire`]: `" Image/PNG "` becomes `image/png`.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Size of the image in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the image has no contents.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Normalizes acquisition events into [`RawImage`]s.
pub struct ImageSource;

impl ImageSource {
    /// Validate an input and turn it into a [`RawImage`].
    ///
    /// Only the declared content type is checked: it must begin with
    /// `image/`. The bytes themselves are not inspected. The accepted type
    /// is stored trimmed and lowercased.
    pub fn acquire(input: ImageInput) -> ImageResult<RawImage> {
        let media_type = input.declared_media_type.trim().to_ascii_lowercase();

        if !is_image_media_type(&media_type) {
            return Err(ImageError::UnsupportedMedia(if media_type.is_empty() {
                "unknown".to_string()
            } else {
                media_type
            }));
        }

        if input.bytes.is_empty() {
            return Err(ImageError::EmptyImage);
        }

        debug!(
            "Acquired {:?} image: {} ({} bytes)",
            input.origin,
            media_type,
            input.bytes.len()
        );

        Ok(RawImage {
            bytes: input.bytes,
            media_type,
        })
    }
}

/// Check whether a media type names an image.
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type
        .get(..6)
        .map(|prefix| prefix.eq_ignore_ascii_case("image/"))
        .unwrap_or(false)
        && media_type.len() > 6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_accepts_image_types() {
        let input = ImageInput::new(Origin::Camera, "image/jpeg", vec![0xff, 0xd8, 0xff]);
        let raw = ImageSource::acquire(input).unwrap();
        assert_eq!(raw.media_type(), "image/jpeg");
        assert_eq!(raw.bytes(), &[0xff, 0xd8, 0xff]);
    }

    #[test]
    fn test_acquire_normalizes_media_type_case() {
        let input = ImageInput::new(Origin::File, "Image/PNG", vec![1, 2, 3]);
        let raw = ImageSource::acquire(input).unwrap();
        assert_eq!(raw.media_type(), "image/png");

        let input = ImageInput::new(Origin::Camera, " IMAGE/Jpeg\t", vec![1, 2, 3]);
        let raw = ImageSource::acquire(input).unwrap();
        assert_eq!(raw.media_type(), "image/jpeg");
    }

    #[test]
    fn test_acquire_rejects_non_image() {
        let input = ImageInput::new(Origin::File, "application/pdf", b"%PDF".to_vec());
        match ImageSource::acquire(input) {
            Err(ImageError::UnsupportedMedia(media)) => assert_eq!(media, "application/pdf"),
            other => panic!("expected UnsupportedMedia, got {:?}", other),
        }
    }

    #[test]
    fn test_acquire_rejects_empty_bytes() {
        let input = ImageInput::new(Origin::File, "image/png", Vec::new());
        assert!(matches!(
            ImageSource::acquire(input),
            Err(ImageError::EmptyImage)
        ));
    }

    #[test]
    fn test_is_image_media_type() {
        assert!(is_image_media_type("image/webp"));
        assert!(!is_image_media_type("image/"));
        assert!(!is_image_media_type("imagery/png"));
        assert!(!is_image_media_type("video/mp4"));
        assert!(!is_image_media_type(""));
    }
}
