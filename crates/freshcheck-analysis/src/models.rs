//! Analysis result records.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Ordinal freshness category.
///
/// Ordering follows increasing spoilage: `Fresh < SlightlyAged <
/// ModeratelySpoiled < HeavilySpoiled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpoilageLevel {
    #[serde(rename = "Fresh")]
    Fresh,
    #[serde(rename = "Slightly Aged")]
    SlightlyAged,
    #[serde(rename = "Moderately Spoiled")]
    ModeratelySpoiled,
    #[serde(rename = "Heavily Spoiled")]
    HeavilySpoiled,
}

/// Coarse grouping of spoilage levels for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Good,
    Caution,
    Bad,
}

impl SpoilageLevel {
    /// All levels, least spoiled first.
    pub const ALL: [SpoilageLevel; 4] = [
        SpoilageLevel::Fresh,
        SpoilageLevel::SlightlyAged,
        SpoilageLevel::ModeratelySpoiled,
        SpoilageLevel::HeavilySpoiled,
    ];

    /// Label used on the wire and in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            SpoilageLevel::Fresh => "Fresh",
            SpoilageLevel::SlightlyAged => "Slightly Aged",
            SpoilageLevel::ModeratelySpoiled => "Moderately Spoiled",
            SpoilageLevel::HeavilySpoiled => "Heavily Spoiled",
        }
    }

    /// Parse an exact wire label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }

    pub fn severity(&self) -> Severity {
        match self {
            SpoilageLevel::Fresh => Severity::Good,
            SpoilageLevel::SlightlyAged => Severity::Caution,
            SpoilageLevel::ModeratelySpoiled | SpoilageLevel::HeavilySpoiled => Severity::Bad,
        }
    }
}

impl std::fmt::Display for SpoilageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated freshness assessment.
///
/// Only [`crate::ResponseParser`] creates these; fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    food_type: String,
    spoilage_level: SpoilageLevel,
    confidence: u8,
    visual_indicators: Vec<String>,
    recommendation: String,
    shelf_life: String,
    safe_to_consume: bool,
    timestamp: DateTime<Utc>,
    image_preview: String,
}

/// Validated fields of a model reply, before stamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedFields {
    pub food_type: String,
    pub spoilage_level: SpoilageLevel,
    pub confidence: u8,
    pub visual_indicators: Vec<String>,
    pub recommendation: String,
    pub shelf_life: String,
    pub safe_to_consume: bool,
}

impl AnalysisResult {
    pub(crate) fn stamp(fields: ParsedFields, timestamp: DateTime<Utc>, image_preview: String) -> Self {
        Self {
            food_type: fields.food_type,
            spoilage_level: fields.spoilage_level,
            confidence: fields.confidence,
            visual_indicators: fields.visual_indicators,
            recommendation: fields.recommendation,
            shelf_life: fields.shelf_life,
            safe_to_consume: fields.safe_to_consume,
            timestamp,
            image_preview,
        }
    }

    pub fn food_type(&self) -> &str {
        &self.food_type
    }

    pub fn spoilage_level(&self) -> SpoilageLevel {
        self.spoilage_level
    }

    /// Model confidence, always within `0..=100`.
    pub fn confidence(&self) -> u8 {
        self.confidence
    }

    pub fn visual_indicators(&self) -> &[String] {
        &self.visual_indicators
    }

    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }

    pub fn shelf_life(&self) -> &str {
        &self.shelf_life
    }

    pub fn safe_to_consume(&self) -> bool {
        self.safe_to_consume
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Timestamp in ISO-8601 form, e.g. `2024-05-01T12:00:00.000Z`.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// `data:` URL of the analysed image.
    pub fn image_preview(&self) -> &str {
        &self.image_preview
    }
}
