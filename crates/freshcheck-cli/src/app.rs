// Controller construction from configuration and environment

use std::path::Path;
use std::sync::Arc;

use freshcheck_analysis::AnalysisController;
use freshcheck_providers::{AnthropicClient, InferenceConfig};
use tracing::debug;

use crate::error::CliResult;

/// Load configuration and build a controller backed by the Anthropic client.
pub fn build_controller(config_path: Option<&Path>) -> CliResult<AnalysisController> {
    let config = load_config(config_path)?;
    let client = AnthropicClient::from_env(config)?;
    Ok(AnalysisController::new(Arc::new(client)))
}

/// Resolve configuration through the user/project/explicit/env hierarchy.
pub fn load_config(config_path: Option<&Path>) -> CliResult<InferenceConfig> {
    let config = InferenceConfig::load_with_hierarchy(config_path)?;
    debug!(
        "Using model {} at {} (max_tokens {})",
        config.model, config.base_url, config.max_tokens
    );
    Ok(config)
}
