//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::algos::DEFAULT_PRIM_START;
use crate::graph::{InputOptions, TraversalOptions, VertexId, Weight};

/// Top-level graphkit configuration (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphkitConfig {
    /// How graph text is interpreted
    #[serde(default)]
    pub input: InputConfig,

    /// Spanning tree traversal limits
    #[serde(default)]
    pub traversal: TraversalConfig,

    /// Minimum spanning tree settings
    #[serde(default)]
    pub mst: MstConfig,
}

/// Configuration for graph input parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Weight assigned to edge lines without a third column
    #[serde(default = "default_weight")]
    pub default_weight: Weight,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            default_weight: default_weight(),
        }
    }
}

fn default_weight() -> Weight {
    Weight::DEFAULT
}

/// Configuration for DFS/BFS spanning trees
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Do not expand vertices this many tree edges from the source (unset = unlimited)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

/// Configuration for minimum spanning tree algorithms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstConfig {
    /// Vertex Prim's algorithm grows from
    #[serde(default = "default_prim_start")]
    pub prim_start: VertexId,
}

impl Default for MstConfig {
    fn default() -> Self {
        Self {
            prim_start: default_prim_start(),
        }
    }
}

fn default_prim_start() -> VertexId {
    DEFAULT_PRIM_START
}

impl GraphkitConfig {
    pub fn input_options(&self) -> InputOptions {
        InputOptions {
            default_weight: self.input.default_weight,
        }
    }

    pub fn traversal_options(&self) -> TraversalOptions {
        TraversalOptions {
            max_depth: self.traversal.max_depth,
        }
    }
}
