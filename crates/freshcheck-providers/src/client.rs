//! Inference client trait

use async_trait::async_trait;
use freshcheck_images::EncodedImage;

use crate::error::ProviderResult;
use crate::models::ModelReply;

/// Sends one image to a vision model and returns its reply.
///
/// Implementations issue exactly one request per call: no retries and no
/// streaming. The call completes when the whole reply has arrived or the
/// transport fails.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Identifier of the backing service, used in logs.
    fn id(&self) -> &str;

    /// Run inference on an encoded image.
    async fn infer(&self, image: &EncodedImage) -> ProviderResult<ModelReply>;
}
