//! Analysis controller
//!
//! Drives one submission through acquisition, encoding, inference and
//! parsing, and owns the session state and result history.
//!
//! Every submission gets a sequence number from a monotonically increasing
//! counter. A completion is applied only if its sequence number is still
//! the latest one issued; older completions are dropped without touching
//! state or history. Superseded requests are not aborted, just ignored.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use freshcheck_images::source::ImageInput;
use freshcheck_images::{EncodedImage, ImageSource};
use freshcheck_providers::InferenceClient;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::error::AnalysisError;
use crate::history::HistoryLog;
use crate::models::AnalysisResult;
use crate::parser::ResponseParser;
use crate::state::SessionState;

/// Buffer size of the state event channel.
const EVENT_CHANNEL_CAPACITY: usize = 32;

/// How a single `submit` call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Result was applied to the session and recorded in history
    Completed(AnalysisResult),
    /// Failure was applied to the session
    Failed(AnalysisError),
    /// A newer submission was issued first; nothing was applied
    Superseded { sequence: u64 },
}

/// State change notification
#[derive(Debug, Clone)]
pub struct StateEvent {
    /// Submission that caused the change
    pub sequence: u64,
    pub state: SessionState,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct ControllerState {
    session: SessionState,
    history: HistoryLog,
    latest_sequence: u64,
}

/// Orchestrates the analysis pipeline.
///
/// Cheap to clone; clones share state, so a presentation layer can keep
/// one handle for reading while submissions run on others.
#[derive(Clone)]
pub struct AnalysisController {
    client: Arc<dyn InferenceClient>,
    state: Arc<Mutex<ControllerState>>,
    event_tx: broadcast::Sender<StateEvent>,
}

impl AnalysisController {
    /// Create a controller in the `Idle` state with an empty history.
    pub fn new(client: Arc<dyn InferenceClient>) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            client,
            state: Arc::new(Mutex::new(ControllerState::default())),
            event_tx,
        }
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> broadcast::Receiver<StateEvent> {
        self.event_tx.subscribe()
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state.lock().session.clone()
    }

    /// History snapshot, most recent first.
    pub fn history(&self) -> Vec<AnalysisResult> {
        self.state.lock().history.to_vec()
    }

    /// Number of results currently in the history.
    pub fn history_len(&self) -> usize {
        self.state.lock().history.len()
    }

    /// Sequence number of the most recent submission (0 before any).
    pub fn latest_sequence(&self) -> u64 {
        self.state.lock().latest_sequence
    }

    /// Empty the history. Session state is left as is.
    pub fn clear_history(&self) {
        let mut state = self.state.lock();
        let cleared = state.history.len();
        state.history.clear();
        info!("Cleared {} history entries", cleared);
    }

    /// Submit an image for analysis.
    ///
    /// Valid from any state. Supersedes any submission still in flight:
    /// whichever of them completes, only the latest one issued is
    /// reflected in state and history.
    pub async fn submit(&self, input: ImageInput) -> SubmissionOutcome {
        let encoded = match ImageSource::acquire(input) {
            Ok(raw) => EncodedImage::encode(&raw),
            Err(err) => {
                // Rejected inputs still supersede whatever was in flight.
                let error = AnalysisError::from(err);
                let sequence = self.begin(SessionState::Failed(error.clone()));
                warn!("Submission {} rejected: {}", sequence, error);
                return SubmissionOutcome::Failed(error);
            }
        };

        let sequence = self.begin(SessionState::Analyzing {
            preview: encoded.data_url(),
        });
        info!(
            "Submission {} started ({}, {} bytes encoded) via {}",
            sequence,
            encoded.media_type,
            encoded.payload_len(),
            self.client.id()
        );

        let outcome = self.run_pipeline(&encoded).await;
        self.complete(sequence, outcome)
    }

    async fn run_pipeline(&self, encoded: &EncodedImage) -> Result<AnalysisResult, AnalysisError> {
        let reply = self.client.infer(encoded).await?;
        ResponseParser::parse(&reply, encoded)
    }

    /// Issue a new sequence number and move to `initial`.
    fn begin(&self, initial: SessionState) -> u64 {
        let mut state = self.state.lock();
        state.latest_sequence += 1;
        let sequence = state.latest_sequence;
        state.session = initial.clone();
        drop(state);

        self.publish(sequence, initial);
        sequence
    }

    /// Apply a finished pipeline if it still belongs to the latest submission.
    fn complete(
        &self,
        sequence: u64,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> SubmissionOutcome {
        let mut state = self.state.lock();

        if sequence != state.latest_sequence {
            debug!(
                "Discarding stale completion of submission {} (latest is {})",
                sequence, state.latest_sequence
            );
            return SubmissionOutcome::Superseded { sequence };
        }

        let (next, result) = match outcome {
            Ok(result) => {
                info!(
                    "Submission {} completed: {} is {} ({}%)",
                    sequence,
                    result.food_type(),
                    result.spoilage_level(),
                    result.confidence()
                );
                state.history.record(result.clone());
                (
                    SessionState::Completed(result.clone()),
                    SubmissionOutcome::Completed(result),
                )
            }
            Err(error) => {
                warn!("Submission {} failed ({}): {}", sequence, error.kind(), error);
                (
                    SessionState::Failed(error.clone()),
                    SubmissionOutcome::Failed(error),
                )
            }
        };

        state.session = next.clone();
        drop(state);

        self.publish(sequence, next);
        result
    }

    fn publish(&self, sequence: u64, state: SessionState) {
        // No subscribers is fine.
        let _ = self.event_tx.send(StateEvent {
            sequence,
            state,
            timestamp: Utc::now(),
        });
    }
}
