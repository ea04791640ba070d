// Command handlers for the fresh CLI

pub mod analyze;
pub mod info;
pub mod shell;

pub use analyze::AnalyzeCommand;
pub use info::InfoCommand;
pub use shell::ShellCommand;

use std::path::Path;

use freshcheck_analysis::{AnalysisController, AnalysisError, SubmissionOutcome};
use freshcheck_images::source::ImageInput;

use crate::error::CliResult;

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> CliResult<()>;
}

/// Read a file and submit it.
///
/// A file that cannot be read never reaches the controller, so the
/// controller state is left alone and the read error is reported as an
/// unsupported input.
pub(crate) async fn submit_path(controller: &AnalysisController, path: &Path) -> SubmissionOutcome {
    match ImageInput::from_path(path) {
        Ok(input) => controller.submit(input).await,
        Err(err) => SubmissionOutcome::Failed(AnalysisError::UnsupportedMedia(format!(
            "{}: {}",
            path.display(),
            err
        ))),
    }
}
