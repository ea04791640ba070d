//! Inference client for the freshcheck pipeline.
//!
//! Sends one encoded image plus a fixed instruction prompt to a vision
//! model over the Anthropic Messages API and hands back the textual
//! segments of the reply. Parsing the reply is left to the caller.

pub mod anthropic;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod prompt;

pub use anthropic::AnthropicClient;
pub use client::InferenceClient;
pub use config::InferenceConfig;
pub use error::{ProviderError, ProviderResult, TransportErrorKind};
pub use models::{ModelReply, ReplySegment};
