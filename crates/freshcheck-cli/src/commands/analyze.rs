// Analyze one or more image files

use std::path::PathBuf;

use async_trait::async_trait;
use freshcheck_analysis::{AnalysisController, SubmissionOutcome};
use tracing::debug;

use super::{submit_path, Command};
use crate::app;
use crate::error::{CliError, CliResult};
use crate::logging;
use crate::output::OutputStyle;
use crate::render;

/// Analyze image files in order, then show the history.
pub struct AnalyzeCommand {
    pub paths: Vec<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Counts from one `analyze` run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzeSummary {
    pub completed: usize,
    pub failed: usize,
}

impl AnalyzeCommand {
    pub fn new(paths: Vec<PathBuf>, config: Option<PathBuf>) -> Self {
        Self { paths, config }
    }

    /// Submit every path through `controller`, writing rendered output to `out`.
    pub async fn run(
        &self,
        controller: &AnalysisController,
        style: &OutputStyle,
        out: &mut Vec<String>,
    ) -> AnalyzeSummary {
        let mut summary = AnalyzeSummary::default();

        for path in &self.paths {
            out.push(style.header(&path.display().to_string()));
            match submit_path(controller, path).await {
                SubmissionOutcome::Completed(result) => {
                    summary.completed += 1;
                    out.push(render::render_result(style, &result));
                }
                SubmissionOutcome::Failed(error) => {
                    summary.failed += 1;
                    out.push(render::render_failure(style, &error));
                }
                // Submissions here are sequential, so nothing newer can exist.
                SubmissionOutcome::Superseded { sequence } => {
                    debug!("Submission {} superseded", sequence);
                }
            }
            out.push(String::new());
        }

        out.push(render::render_history(style, &controller.history()));
        summary
    }
}

#[async_trait]
impl Command for AnalyzeCommand {
    async fn execute(&self) -> CliResult<()> {
        if self.paths.is_empty() {
            return Err(CliError::InvalidArgument {
                message: "at least one image path is required".to_string(),
            });
        }

        let controller = app::build_controller(self.config.as_deref())?;
        let style = OutputStyle::default();
        logging::hint(&style.info(&format!("Analyzing {} image(s)...", self.paths.len())));

        let mut out = Vec::new();
        let summary = self.run(&controller, &style, &mut out).await;
        println!("{}", out.join("\n"));

        if summary.failed > 0 {
            return Err(CliError::AnalysisFailed {
                failed: summary.failed,
                total: self.paths.len(),
            });
        }
        Ok(())
    }
}
