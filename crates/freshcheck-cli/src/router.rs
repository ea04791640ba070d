// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::*;
use crate::error::CliResult;

/// FreshCheck - AI produce freshness checks from the terminal
#[derive(Parser, Debug)]
#[command(name = "fresh")]
#[command(bin_name = "fresh")]
#[command(about = "Check produce freshness from a photo")]
#[command(
    long_about = "FreshCheck sends a photo of a fruit or vegetable to a vision model and reports a spoilage level, a confidence score, shelf life and a recommendation.\n\nQuick start:\n  • fresh analyze apple.jpg    Analyze one or more photos\n  • fresh shell                Interactive session with history\n  • fresh info                 How it works and what to look for\n\nThe API key is read from ANTHROPIC_API_KEY (a .env file is honoured)."
)]
#[command(version)]
#[command(author = "FreshCheck Contributors")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (overrides ~/.freshcheck/config.yaml and ./freshcheck.yaml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Analyze image files
    #[command(about = "Analyze one or more photos, then show the history")]
    Analyze {
        /// Image files, analyzed in order
        #[arg(value_name = "PATH", required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },

    /// Interactive shell
    #[command(about = "Start an interactive session (analyze, history, clear, status)")]
    Shell,

    /// Show how the analysis works
    #[command(about = "Show how the analysis works and what to look for in common produce")]
    Info,
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse arguments and route to the appropriate handler
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();

        // Initialize logging based on CLI flags
        crate::logging::init_logging(cli.verbose, cli.quiet);

        Self::execute(&cli).await
    }

    /// Execute a command
    pub async fn execute(cli: &Cli) -> CliResult<()> {
        // Default to the shell if no command specified
        let command = cli.command.clone().unwrap_or(Commands::Shell);

        match command {
            Commands::Analyze { paths } => {
                AnalyzeCommand::new(paths, cli.config.clone()).execute().await
            }
            Commands::Shell => ShellCommand::new(cli.config.clone()).execute().await,
            Commands::Info => InfoCommand.execute().await,
        }
    }
}
