//! Model reply parsing and validation.
//!
//! Parsing runs in fixed steps: concatenate text segments, strip code
//! fences, decode JSON, validate the schema, stamp. Nothing is repaired or
//! coerced; any failure yields an error and never a partial result.

use chrono::{DateTime, Utc};
use freshcheck_images::EncodedImage;
use freshcheck_providers::ModelReply;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::models::{AnalysisResult, ParsedFields, SpoilageLevel};

/// Parses model replies into [`AnalysisResult`]s.
pub struct ResponseParser;

impl ResponseParser {
    /// Parse a reply and stamp it with the current time.
    pub fn parse(reply: &ModelReply, image: &EncodedImage) -> Result<AnalysisResult, AnalysisError> {
        Self::parse_at(reply, image, Utc::now())
    }

    /// Parse a reply and stamp it with the given time.
    pub fn parse_at(
        reply: &ModelReply,
        image: &EncodedImage,
        timestamp: DateTime<Utc>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let text = reply.text();
        let fields = Self::parse_text(&text).map_err(|err| {
            warn!("Rejected model reply ({}): {}", err.kind(), err);
            err
        })?;

        debug!(
            "Parsed analysis: {} is {} ({}%)",
            fields.food_type, fields.spoilage_level, fields.confidence
        );

        Ok(AnalysisResult::stamp(fields, timestamp, image.data_url()))
    }

    /// Strip fences, decode, and validate raw reply text.
    fn parse_text(text: &str) -> Result<ParsedFields, AnalysisError> {
        let json = strip_code_fences(text);
        if json.is_empty() {
            return Err(AnalysisError::MalformedResponse("reply is empty".to_string()));
        }

        let value: Value = serde_json::from_str(json)
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(AnalysisError::MalformedResponse(format!(
                    "expected a JSON object, got {}",
                    type_name(&other)
                )))
            }
        };

        validate(&object)
    }
}

/// Remove a surrounding Markdown code fence, if present.
///
/// Handles an opening fence with or without an info string (```` ```json ````)
/// and a closing fence, with or without line breaks around the body.
/// Text without fences is returned trimmed.
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix("```") {
        body = match rest.find('\n') {
            Some(newline) => &rest[newline + 1..],
            // Single-line fence: drop the info string up to the JSON
            None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
        };
    }

    if let Some(rest) = body.trim_end().strip_suffix("```") {
        body = rest;
    }

    body.trim()
}

fn validate(object: &Map<String, Value>) -> Result<ParsedFields, AnalysisError> {
    let food_type = required_string(object, "foodType")?;
    if food_type.trim().is_empty() {
        return Err(AnalysisError::schema("foodType", "must not be empty"));
    }

    let spoilage_label = required_string(object, "spoilageLevel")?;
    let spoilage_level = SpoilageLevel::from_label(&spoilage_label).ok_or_else(|| {
        AnalysisError::schema(
            "spoilageLevel",
            format!(
                "must be one of \"Fresh\", \"Slightly Aged\", \"Moderately Spoiled\", \"Heavily Spoiled\", got {:?}",
                spoilage_label
            ),
        )
    })?;

    let confidence = required_confidence(object)?;

    let visual_indicators = match required(object, "visualIndicators")? {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(text) => Ok(text.clone()),
                other => Err(AnalysisError::schema(
                    "visualIndicators",
                    format!("item {} must be a string, got {}", index, type_name(other)),
                )),
            })
            .collect::<Result<Vec<_>, _>>()?,
        other => {
            return Err(AnalysisError::schema(
                "visualIndicators",
                format!("must be an array of strings, got {}", type_name(other)),
            ))
        }
    };

    let recommendation = required_string(object, "recommendation")?;
    let shelf_life = required_string(object, "shelfLife")?;

    let safe_to_consume = match required(object, "safeToConsume")? {
        Value::Bool(flag) => *flag,
        other => {
            return Err(AnalysisError::schema(
                "safeToConsume",
                format!("must be a boolean, got {}", type_name(other)),
            ))
        }
    };

    Ok(ParsedFields {
        food_type,
        spoilage_level,
        confidence,
        visual_indicators,
        recommendation,
        shelf_life,
        safe_to_consume,
    })
}

fn required<'a>(object: &'a Map<String, Value>, field: &str) -> Result<&'a Value, AnalysisError> {
    object
        .get(field)
        .ok_or_else(|| AnalysisError::schema(field, "is missing"))
}

fn required_string(object: &Map<String, Value>, field: &str) -> Result<String, AnalysisError> {
    match required(object, field)? {
        Value::String(text) => Ok(text.clone()),
        other => Err(AnalysisError::schema(
            field,
            format!("must be a string, got {}", type_name(other)),
        )),
    }
}

fn required_confidence(object: &Map<String, Value>) -> Result<u8, AnalysisError> {
    let value = required(object, "confidence")?;
    let number = match value {
        Value::Number(number) => number,
        other => {
            return Err(AnalysisError::schema(
                "confidence",
                format!("must be an integer, got {}", type_name(other)),
            ))
        }
    };

    match number.as_i64() {
        Some(n @ 0..=100) => Ok(n as u8),
        Some(n) => Err(AnalysisError::schema(
            "confidence",
            format!("must be between 0 and 100, got {}", n),
        )),
        None if number.is_u64() => Err(AnalysisError::schema(
            "confidence",
            format!("must be between 0 and 100, got {}", number),
        )),
        None => Err(AnalysisError::schema(
            "confidence",
            format!("must be an integer, got {}", number),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
