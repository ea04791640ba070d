//! Wire types for the Messages API and the reply handed to callers.

use freshcheck_images::EncodedImage;
use serde::{Deserialize, Serialize};

/// Request body for `POST {base_url}/messages`.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<RequestMessage>,
}

/// A single conversation turn.
#[derive(Debug, Clone, Serialize)]
pub struct RequestMessage {
    pub role: String,
    pub content: Vec<ContentBlock>,
}

/// Content block inside a request message.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Image { source: ImageBlockSource },
    Text { text: String },
}

/// Inline image payload.
#[derive(Debug, Clone, Serialize)]
pub struct ImageBlockSource {
    #[serde(rename = "type")]
    pub source_type: String,
    pub media_type: String,
    pub data: String,
}

impl MessagesRequest {
    /// Build the single-turn request: the image first, then the instruction.
    pub fn for_image(
        model: impl Into<String>,
        max_tokens: u32,
        image: &EncodedImage,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            messages: vec![RequestMessage {
                role: "user".to_string(),
                content: vec![
                    ContentBlock::Image {
                        source: ImageBlockSource {
                            source_type: "base64".to_string(),
                            media_type: image.media_type.clone(),
                            data: image.data.clone(),
                        },
                    },
                    ContentBlock::Text {
                        text: instruction.into(),
                    },
                ],
            }],
        }
    }
}

/// Response envelope. Only `content` is required by this client.
#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub content: Option<Vec<ResponseBlock>>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<ResponseUsage>,
}

/// Content block inside a response.
#[derive(Debug, Deserialize)]
pub struct ResponseBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// Token accounting reported by the endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ResponseUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

/// One segment of a model reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplySegment {
    /// Text produced by the model
    Text(String),
    /// Any non-text block, identified by its type
    Other(String),
}

/// Ordered segments of a model reply, as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelReply {
    pub segments: Vec<ReplySegment>,
}

impl ModelReply {
    /// Reply consisting of a single text segment.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            segments: vec![ReplySegment::Text(text.into())],
        }
    }

    /// Concatenation of all text segments, in order.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                ReplySegment::Text(text) => Some(text.as_str()),
                ReplySegment::Other(_) => None,
            })
            .collect()
    }
}

impl From<Vec<ResponseBlock>> for ModelReply {
    fn from(blocks: Vec<ResponseBlock>) -> Self {
        let segments = blocks
            .into_iter()
            .map(|block| match (block.block_type.as_str(), block.text) {
                ("text", Some(text)) => ReplySegment::Text(text),
                _ => ReplySegment::Other(block.block_type),
            })
            .collect();
        Self { segments }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let image = EncodedImage {
            media_type: "image/png".to_string(),
            data: "AQID".to_string(),
        };
        let request = MessagesRequest::for_image("model-x", 1000, &image, "describe");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "model": "model-x",
                "max_tokens": 1000,
                "messages": [{
                    "role": "user",
                    "content": [
                        {
                            "type": "image",
                            "source": {"type": "base64", "media_type": "image/png", "data": "AQID"}
                        },
                        {"type": "text", "text": "describe"}
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_reply_text_skips_non_text_blocks() {
        let blocks: Vec<ResponseBlock> = serde_json::from_value(json!([
            {"type": "text", "text": "{\"a\":"},
            {"type": "tool_use", "id": "t1", "name": "x", "input": {}},
            {"type": "text", "text": "1}"}
        ]))
        .unwrap();

        let reply = ModelReply::from(blocks);
        assert_eq!(reply.segments.len(), 3);
        assert_eq!(reply.segments[1], ReplySegment::Other("tool_use".to_string()));
        assert_eq!(reply.text(), "{\"a\":1}");
    }

    #[test]
    fn test_envelope_without_content() {
        let response: MessagesResponse =
            serde_json::from_value(json!({"id": "msg_1", "type": "message"})).unwrap();
        assert!(response.content.is_none());
    }
}
