//! Command dispatch logic for graphkit

use std::time::Instant;

use crate::cli::Cli;
use graphkit_core::config::GraphkitConfig;
use graphkit_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = GraphkitConfig::resolve(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "resolve_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
