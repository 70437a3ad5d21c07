//! Argument structs shared by several subcommands

use clap::Args;
use std::path::PathBuf;

use graphkit_core::graph::VertexId;

/// Arguments for the `dfs` and `bfs` commands
#[derive(Args, Debug, Clone)]
pub struct TraverseArgs {
    /// Vertex the spanning tree grows from
    #[arg(long, short)]
    pub source: VertexId,

    /// Write a visualization document with the tree edges highlighted
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}

/// Arguments for the `path` command
#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Start vertex
    #[arg(long, short)]
    pub source: VertexId,

    /// End vertex
    #[arg(long, short)]
    pub target: VertexId,

    /// Write a visualization document with the path highlighted
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}

/// Arguments for the `prim` and `kruskal` commands
#[derive(Args, Debug, Clone)]
pub struct MstArgs {
    /// Vertex Prim's algorithm grows from (overrides mst.prim_start; ignored by Kruskal)
    #[arg(long)]
    pub start: Option<VertexId>,

    /// Write a visualization document with the tree edges highlighted
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}

/// Arguments for the `visualize` command
#[derive(Args, Debug, Clone)]
pub struct VisualizeArgs {
    /// Output file (default: stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
