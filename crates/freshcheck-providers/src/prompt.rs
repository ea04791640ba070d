//! Fixed instruction sent alongside every image.

/// Fields the model is asked to return, in schema order.
pub const RESULT_FIELDS: [&str; 7] = [
    "foodType",
    "spoilageLevel",
    "confidence",
    "visualIndicators",
    "recommendation",
    "shelfLife",
    "safeToConsume",
];

/// Instruction prompt with the result schema.
pub const ANALYSIS_PROMPT: &str = r#"Analyze this image of a fruit or vegetable for spoilage detection.

Respond ONLY with a JSON object, with no markdown and no text before or after it, matching this schema:
{
  "foodType": string,             // name of the fruit or vegetable
  "spoilageLevel": "Fresh" | "Slightly Aged" | "Moderately Spoiled" | "Heavily Spoiled",
  "confidence": integer,          // 0 to 100
  "visualIndicators": [string],   // visible cues that support the assessment
  "recommendation": string,       // what to do with the produce
  "shelfLife": string,            // estimated remaining shelf life, e.g. "3-5 days"
  "safeToConsume": boolean
}"#;
