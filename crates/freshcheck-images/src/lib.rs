//! Image handling for freshcheck.
//!
//! This crate covers the first two stages of the analysis pipeline:
//! - Acquisition: turning a camera capture or picked file into a [`RawImage`]
//! - Encoding: turning a [`RawImage`] into a transport-safe [`EncodedImage`]
//!
//! Format sniffing ([`ImageFormat`]) fills in a media type when a file
//! carries no usable extension.

pub mod codec;
pub mod error;
pub mod formats;
pub mod source;

pub use codec::EncodedImage;
pub use error::{ImageError, ImageResult};
pub use formats::ImageFormat;
pub use source::{ImageSource, RawImage};
