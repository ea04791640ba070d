// Interactive analysis shell

use std::path::PathBuf;
use std::sync::mpsc as std_mpsc;
use std::thread;

use async_trait::async_trait;
use freshcheck_analysis::{AnalysisController, SubmissionOutcome};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::{submit_path, Command};
use crate::app;
use crate::error::CliResult;
use crate::output::{self, OutputStyle};
use crate::render;

/// One parsed line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    Analyze(PathBuf),
    History,
    Clear,
    Status,
    Help,
    Exit,
    Empty,
    Unknown(String),
}

impl ShellAction {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => ShellAction::Empty,
            "analyze" | "a" if !rest.is_empty() => {
                ShellAction::Analyze(PathBuf::from(unquote(rest)))
            }
            "analyze" | "a" => ShellAction::Unknown("analyze needs a path".to_string()),
            "history" | "h" => ShellAction::History,
            "clear" => ShellAction::Clear,
            "status" | "s" => ShellAction::Status,
            "help" | "?" => ShellAction::Help,
            "exit" | "quit" | "q" => ShellAction::Exit,
            other => ShellAction::Unknown(format!("unknown command '{}'", other)),
        }
    }
}

fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .or_else(|| text.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')))
        .unwrap_or(text)
}

const HELP: &[(&str, &str)] = &[
    ("analyze <path>", "analyze an image file"),
    ("history", "show recent analyses"),
    ("clear", "clear the history"),
    ("status", "show the current result or error"),
    ("help", "show this help"),
    ("exit", "leave the shell"),
];

/// Interactive loop over a single controller
pub struct ShellCommand {
    pub config: Option<PathBuf>,
}

impl ShellCommand {
    pub fn new(config: Option<PathBuf>) -> Self {
        Self { config }
    }

    /// Apply one action. Returns `None` when the shell should exit.
    pub async fn dispatch(
        controller: &AnalysisController,
        style: &OutputStyle,
        action: ShellAction,
    ) -> Option<String> {
        let text = match action {
            ShellAction::Exit => return None,
            ShellAction::Empty => String::new(),
            ShellAction::Analyze(path) => match submit_path(controller, &path).await {
                SubmissionOutcome::Completed(result) => render::render_result(style, &result),
                SubmissionOutcome::Failed(error) => render::render_failure(style, &error),
                SubmissionOutcome::Superseded { sequence } => {
                    debug!("Submission {} superseded", sequence);
                    String::new()
                }
            },
            ShellAction::History => render::render_history(style, &controller.history()),
            ShellAction::Clear => {
                controller.clear_history();
                style.success("History cleared.")
            }
            ShellAction::Status => render::render_state(style, &controller.state()),
            ShellAction::Help => HELP
                .iter()
                .map(|(usage, about)| style.key_value(usage, about))
                .collect::<Vec<_>>()
                .join("\n"),
            ShellAction::Unknown(message) => {
                style.error_with_suggestion(&message, "Type 'help' for the list of commands.")
            }
        };
        Some(text)
    }
}

/// Read lines on a dedicated thread so the editor never crosses an await.
///
/// The reader prompts again only after the loop acknowledges the previous
/// line, keeping command output and the prompt from interleaving. A `None`
/// line means end of input.
fn spawn_reader(prompt: String) -> (mpsc::Receiver<Option<String>>, std_mpsc::Sender<()>) {
    let (line_tx, line_rx) = mpsc::channel(1);
    let (ready_tx, ready_rx) = std_mpsc::channel::<()>();

    thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                warn!("Line editor unavailable: {}", e);
                let _ = line_tx.blocking_send(None);
                return;
            }
        };

        loop {
            let line = match rl.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }
                    Some(line)
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    None
                }
            };

            let finished = line.is_none();
            if line_tx.blocking_send(line).is_err() || finished {
                break;
            }
            if ready_rx.recv().is_err() {
                break;
            }
        }
    });

    (line_rx, ready_tx)
}

#[async_trait]
impl Command for ShellCommand {
    async fn execute(&self) -> CliResult<()> {
        let controller = app::build_controller(self.config.as_deref())?;
        let style = OutputStyle::default();

        output::print_info("FreshCheck shell. Type 'help' for commands, 'exit' to quit.");

        let (mut lines, ready) = spawn_reader(style.prompt("fresh>"));
        while let Some(Some(line)) = lines.recv().await {
            match Self::dispatch(&controller, &style, ShellAction::parse(&line)).await {
                Some(text) if !text.is_empty() => println!("{}", text),
                Some(_) => {}
                None => break,
            }
            if ready.send(()).is_err() {
                break;
            }
        }

        println!("Goodbye!");
        Ok(())
    }
}
