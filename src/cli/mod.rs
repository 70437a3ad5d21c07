//! CLI argument parsing for graphkit
//!
//! Global flags: --input, --config, --format, --quiet, --verbose, --max-depth

pub mod args;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{MstArgs, PathArgs, TraverseArgs, VisualizeArgs};
pub use output::OutputFormat;

/// Graphkit - spanning trees, shortest paths and minimum spanning trees
#[derive(Parser, Debug)]
#[command(name = "graphkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph file (`N M` header, then `u v [w]` lines); reads stdin when omitted
    #[arg(long, short, global = true, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Config file (default: $GRAPHKIT_CONFIG_DIR or the platform config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true, env = "GRAPHKIT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Stop expanding DFS/BFS trees this many edges from the source
    #[arg(long, global = true)]
    pub max_depth: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Depth-first spanning tree from a source vertex
    Dfs(TraverseArgs),

    /// Breadth-first spanning tree from a source vertex
    Bfs(TraverseArgs),

    /// Shortest path between two vertices (Dijkstra)
    Path(PathArgs),

    /// Minimum spanning tree with Prim's algorithm
    Prim(MstArgs),

    /// Minimum spanning tree with Kruskal's algorithm
    Kruskal(MstArgs),

    /// Print the adjacency list
    Adjacency,

    /// Write the graph as a JSON visualization document
    Visualize(VisualizeArgs),

    /// Menu-driven session (default)
    Interactive,
}
