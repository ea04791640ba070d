// How it works, and what to look for

use async_trait::async_trait;

use super::Command;
use crate::error::CliResult;
use crate::output::OutputStyle;
use crate::render;

pub struct InfoCommand;

#[async_trait]
impl Command for InfoCommand {
    async fn execute(&self) -> CliResult<()> {
        println!("{}", render::render_info(&OutputStyle::default()));
        Ok(())
    }
}
