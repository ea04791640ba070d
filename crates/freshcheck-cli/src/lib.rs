// freshcheck CLI library
// Exposes the command layer so the binary stays a thin entry point

pub mod app;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod render;
pub mod router;

pub use error::{CliError, CliResult};
