//! Property-based tests for image acquisition and encoding.

use freshcheck_images::source::{ImageInput, Origin};
use freshcheck_images::{EncodedImage, ImageError, ImageSource};
use proptest::prelude::*;

/// Strategy for generating image media types
fn image_media_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("image/png".to_string()),
        Just("image/jpeg".to_string()),
        Just("image/gif".to_string()),
        Just("image/webp".to_string()),
        "[a-z]{1,10}".prop_map(|subtype| format!("image/{}", subtype)),
    ]
}

/// Image media types as a picker might declare them: any case, padded.
fn declared_media_type_strategy() -> impl Strategy<Value = String> {
    (
        image_media_type_strategy(),
        prop::collection::vec(any::<bool>(), 16),
        "[ \t]{0,2}",
        "[ \t]{0,2}",
    )
        .prop_map(|(media_type, upper, lead, trail)| {
            let mixed: String = media_type
                .chars()
                .zip(upper.iter().cycle())
                .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            format!("{}{}{}", lead, mixed, trail)
        })
}

/// Strategy for generating non-image media types
fn non_image_media_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("application/pdf".to_string()),
        Just("text/plain".to_string()),
        Just("video/mp4".to_string()),
        Just(String::new()),
        "(audio|text|application)/[a-z]{1,10}",
    ]
}

proptest! {
    /// Decoding an encoded image reproduces the original bytes and the
    /// normalized media type.
    #[test]
    fn prop_encode_decode_round_trip(
        bytes in prop::collection::vec(any::<u8>(), 1..4096),
        media_type in declared_media_type_strategy(),
    ) {
        let raw = ImageSource::acquire(ImageInput::new(Origin::File, media_type.clone(), bytes.clone()))
            .expect("image media types are accepted");
        let encoded = EncodedImage::encode(&raw);

        prop_assert_eq!(&encoded.media_type, &media_type.trim().to_ascii_lowercase());
        prop_assert_eq!(encoded.decode().unwrap(), bytes);
    }

    /// The preview data URL can always be split back into its parts.
    #[test]
    fn prop_data_url_fields_are_recoverable(
        bytes in prop::collection::vec(any::<u8>(), 1..512),
        media_type in image_media_type_strategy(),
    ) {
        let raw = ImageSource::acquire(ImageInput::new(Origin::Camera, media_type, bytes))
            .expect("image media types are accepted");
        let encoded = EncodedImage::encode(&raw);

        let recovered = EncodedImage::from_data_url(&encoded.data_url()).unwrap();
        prop_assert_eq!(recovered, encoded);
    }

    /// Encoding is deterministic.
    #[test]
    fn prop_encoding_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 1..512)) {
        let raw = ImageSource::acquire(ImageInput::new(Origin::File, "image/png", bytes))
            .expect("image/png is accepted");
        prop_assert_eq!(EncodedImage::encode(&raw), EncodedImage::encode(&raw));
    }

    /// Anything not declared as an image is rejected before encoding.
    #[test]
    fn prop_non_images_rejected(
        bytes in prop::collection::vec(any::<u8>(), 1..64),
        media_type in non_image_media_type_strategy(),
    ) {
        let result = ImageSource::acquire(ImageInput::new(Origin::File, media_type, bytes));
        prop_assert!(matches!(result, Err(ImageError::UnsupportedMedia(_))));
    }
}
