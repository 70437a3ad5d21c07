//! Command trait and context for dispatching commands

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use graphkit_core::bail_usage;
use graphkit_core::config::GraphkitConfig;
use graphkit_core::error::{GraphkitError, Result};
use graphkit_core::graph::{read_graph, Graph, TraversalOptions, VertexId};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: GraphkitConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: GraphkitConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Traversal options from config, with `--max-depth` taking precedence
    pub fn traversal_options(&self) -> TraversalOptions {
        let mut opts = self.config.traversal_options();
        if self.cli.max_depth.is_some() {
            opts.max_depth = self.cli.max_depth;
        }
        opts
    }

    /// Start vertex for Prim's algorithm, with the command flag taking precedence
    pub fn prim_start(&self, flag: Option<VertexId>) -> VertexId {
        flag.unwrap_or(self.config.mst.prim_start)
    }

    /// Refuse an export path that would overwrite the input graph
    pub fn check_export_target(&self, export: Option<&Path>) -> Result<()> {
        if let (Some(export), Some(input)) = (export, self.cli.input.as_deref()) {
            if export == input {
                bail_usage!(format!(
                    "--export {} would overwrite the --input graph file",
                    export.display()
                ));
            }
        }
        Ok(())
    }

    /// Load the graph from `--input`, or from stdin when no file was given
    pub fn load_graph(&self) -> Result<Graph> {
        let opts = self.config.input_options();
        let graph = match &self.cli.input {
            Some(path) => {
                let file = File::open(path).map_err(|e| {
                    GraphkitError::Other(format!(
                        "failed to open graph file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                read_graph(BufReader::new(file), &opts)?
            }
            None => read_graph(io::stdin().lock(), &opts)?,
        };

        debug!(
            elapsed = ?self.start.elapsed(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "load_graph"
        );
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Runs the interactive menu (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        crate::commands::interactive::execute(ctx)
    }
}
