// CLI error types with user-facing hints

use freshcheck_providers::ProviderError;
use thiserror::Error;

use crate::logging::VerbosityLevel;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{failed} of {total} analyses failed")]
    AnalysisFailed { failed: usize, total: usize },
}

impl From<ProviderError> for CliError {
    fn from(err: ProviderError) -> Self {
        // Only configuration problems can surface before a submission.
        match err {
            ProviderError::Config(message) => CliError::Config(message),
            other => CliError::Config(other.to_string()),
        }
    }
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!("Invalid argument: {}\n\nRun 'fresh --help' for usage information.", message)
            }
            CliError::Config(msg) => format!(
                "Configuration error: {}\n\nSet ANTHROPIC_API_KEY (or add it to .env) and check ~/.freshcheck/config.yaml or ./freshcheck.yaml.",
                msg
            ),
            CliError::AnalysisFailed { failed, total } => {
                format!("{} of {} images could not be analyzed.", failed, total)
            }
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }

    /// Text printed when a command fails. Verbose runs append the
    /// technical details.
    pub fn report(&self, level: VerbosityLevel) -> String {
        match level {
            VerbosityLevel::Verbose => format!(
                "{}\n\nDetails: {}",
                self.user_message(),
                self.technical_details()
            ),
            _ => self.user_message(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_becomes_config() {
        let err: CliError = ProviderError::Config("ANTHROPIC_API_KEY is not set".to_string()).into();
        let message = err.user_message();
        assert!(message.contains("ANTHROPIC_API_KEY is not set"));
        assert!(message.contains(".env"));
    }

    #[test]
    fn test_analysis_failed_message() {
        let err = CliError::AnalysisFailed { failed: 1, total: 3 };
        assert_eq!(err.user_message(), "1 of 3 images could not be analyzed.");
        assert!(err.technical_details().contains("AnalysisFailed"));
    }

    #[test]
    fn test_report_adds_details_when_verbose() {
        let err = CliError::InvalidArgument {
            message: "no images given".to_string(),
        };

        let normal = err.report(VerbosityLevel::Normal);
        assert_eq!(normal, err.user_message());
        assert!(!normal.contains("Details:"));

        let verbose = err.report(VerbosityLevel::Verbose);
        assert!(verbose.starts_with(&err.user_message()));
        assert!(verbose.contains("Details: InvalidArgument"));
    }
}
