// Text rendering of controller state

use freshcheck_analysis::catalog::{self, Cue};
use freshcheck_analysis::{
    AnalysisError, AnalysisResult, SessionState, HISTORY_CAPACITY, PRODUCE_CATALOG,
};

use crate::output::OutputStyle;

/// Shown under every failure message.
pub const FAILURE_GUIDANCE: &str = "Please ensure the image shows a clear fruit or vegetable.";

/// Full result card.
pub fn render_result(style: &OutputStyle, result: &AnalysisResult) -> String {
    let mut lines = vec![
        style.success(&format!("Analysis complete: {}", result.food_type())),
        style.key_value("Freshness", &style.level(result.spoilage_level())),
        style.key_value("Confidence", &style.confidence(result.confidence())),
        style.key_value("Safe to eat", &style.verdict(result.safe_to_consume())),
        style.key_value("Shelf life", result.shelf_life()),
        style.key_value("Recommendation", result.recommendation()),
    ];

    let profile = catalog::lookup(result.food_type());
    if !result.visual_indicators().is_empty() {
        lines.push(style.key_value("Visual indicators", ""));
        for indicator in result.visual_indicators() {
            let marker = match profile.map(|p| p.classify(indicator)) {
                Some(Cue::Fresh) => " (fresh sign)",
                Some(Cue::Spoiled) => " (spoilage sign)",
                _ => "",
            };
            lines.push(format!("  {}", style.list_item(&format!("{}{}", indicator, marker))));
        }
    }

    if let Some(profile) = profile {
        if let Some(suggested) = profile.suggest_level(result.visual_indicators()) {
            if suggested != result.spoilage_level() {
                lines.push(style.warning(&format!(
                    "Visible cues suggest {} rather than {}.",
                    style.level(suggested),
                    style.level(result.spoilage_level())
                )));
            }
        }
        lines.push(style.tip(&format!(
            "Fresh {} looks {}; watch for {}.",
            profile.name,
            profile.fresh_signs.join(", "),
            profile.spoiled_signs.join(", ")
        )));
    }

    lines.push(style.key_value("Analyzed at", &result.timestamp_iso()));
    lines.join("\n")
}

/// Failure message followed by the generic guidance.
pub fn render_failure(style: &OutputStyle, error: &AnalysisError) -> String {
    let suggestion = match error {
        AnalysisError::UnsupportedMedia(_) => "Use a JPEG, PNG, GIF or WebP photo.".to_string(),
        AnalysisError::Transport { .. } => "Check your network connection and try again.".to_string(),
        _ => FAILURE_GUIDANCE.to_string(),
    };
    let mut out = style.error_with_suggestion(&error.message(), &suggestion);
    if suggestion != FAILURE_GUIDANCE {
        out.push('\n');
        out.push_str(&style.info(FAILURE_GUIDANCE));
    }
    out
}

/// Compact history list, most recent first.
pub fn render_history(style: &OutputStyle, history: &[AnalysisResult]) -> String {
    let mut lines = vec![style.section(&format!(
        "Recent analyses ({}/{})",
        history.len(),
        HISTORY_CAPACITY
    ))];

    if history.is_empty() {
        lines.push(style.info("No analyses yet."));
        return lines.join("\n");
    }

    for (index, result) in history.iter().enumerate() {
        lines.push(style.numbered_item(
            index + 1,
            &format!(
                "{} | {} | {}% | {}",
                result.food_type(),
                style.level(result.spoilage_level()),
                result.confidence(),
                result.timestamp().format("%Y-%m-%d %H:%M:%S")
            ),
        ));
    }
    lines.join("\n")
}

/// One-line-per-field summary of the session state.
pub fn render_state(style: &OutputStyle, state: &SessionState) -> String {
    match state {
        SessionState::Idle => style.info("Idle: submit an image to begin."),
        SessionState::Analyzing { preview } => style.info(&format!(
            "Analyzing {} image...",
            preview_media_type(preview).unwrap_or("an")
        )),
        SessionState::Completed(result) => render_result(style, result),
        SessionState::Failed(error) => render_failure(style, error),
    }
}

/// How-it-works panel plus the produce catalog.
pub fn render_info(style: &OutputStyle) -> String {
    let mut lines = vec![
        style.header("FreshCheck: AI produce freshness analysis"),
        String::new(),
        style.numbered_item(1, "Take or pick a photo of a fruit or vegetable."),
        style.numbered_item(2, "The image is sent to a vision model for inspection."),
        style.numbered_item(
            3,
            "You get a spoilage level, a confidence score and a recommendation.",
        ),
        style.numbered_item(
            4,
            &format!("The last {} results stay in the history until cleared.", HISTORY_CAPACITY),
        ),
        style.section("What to look for"),
    ];

    for profile in PRODUCE_CATALOG {
        lines.push(style.list_item(&style.header(profile.name)));
        lines.push(format!("      fresh:   {}", profile.fresh_signs.join(", ")));
        lines.push(format!("      spoiled: {}", profile.spoiled_signs.join(", ")));
    }

    lines.push(String::new());
    lines.push(style.warning(
        "Results are estimates. When in doubt, throw it out.",
    ));
    lines.join("\n")
}

fn preview_media_type(preview: &str) -> Option<&str> {
    preview
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .filter(|media| !media.is_empty())
}
