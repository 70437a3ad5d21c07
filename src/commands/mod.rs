//! CLI commands for graphkit

pub mod adjacency;
pub mod dispatch;
pub mod interactive;
pub mod mst;
pub mod path;
pub mod render;
pub mod traverse;
pub mod visualize;
