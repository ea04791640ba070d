//! Analysis core for freshcheck.
//!
//! Turns model replies into validated [`AnalysisResult`]s and owns the
//! session state machine plus the bounded result history:
//! - [`ResponseParser`]: fence stripping, JSON decoding, schema validation
//! - [`AnalysisController`]: submission pipeline with supersession
//! - [`HistoryLog`]: most-recent-first log capped at [`HISTORY_CAPACITY`]
//! - [`catalog`]: reference cues for common produce

pub mod catalog;
pub mod controller;
pub mod error;
pub mod history;
pub mod models;
pub mod parser;
pub mod state;

pub use catalog::{Cue, ProduceProfile, PRODUCE_CATALOG};
pub use controller::{AnalysisController, StateEvent, SubmissionOutcome};
pub use error::AnalysisError;
pub use history::{HistoryLog, HISTORY_CAPACITY};
pub use models::{AnalysisResult, Severity, SpoilageLevel};
pub use parser::{strip_code_fences, ResponseParser};
pub use state::SessionState;
