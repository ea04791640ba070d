//! Session state machine values.

use crate::error::AnalysisError;
use crate::models::AnalysisResult;

/// What the controller is currently showing.
///
/// Transitions: `Idle -> Analyzing -> Completed | Failed`, and from any
/// state back to `Analyzing` when a new image is submitted. Values are
/// replaced on each transition, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Waiting for the model; carries the preview of the submitted image
    Analyzing { preview: String },
    /// Last submission produced a result
    Completed(AnalysisResult),
    /// Last submission failed
    Failed(AnalysisError),
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SessionState::Idle)
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self, SessionState::Analyzing { .. })
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            SessionState::Completed(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        match self {
            SessionState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Preview of the image this state belongs to, if any.
    pub fn preview(&self) -> Option<&str> {
        match self {
            SessionState::Idle | SessionState::Failed(_) => None,
            SessionState::Analyzing { preview } => Some(preview),
            SessionState::Completed(result) => Some(result.image_preview()),
        }
    }

    /// Short state name, for logs and status lines.
    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Analyzing { .. } => "analyzing",
            SessionState::Completed(_) => "completed",
            SessionState::Failed(_) => "failed",
        }
    }
}
