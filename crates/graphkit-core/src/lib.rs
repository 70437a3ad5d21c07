//! Graphkit Core Library
//!
//! Graph model, classical graph algorithms, input parsing and the shared
//! configuration, error and logging plumbing used by the `graphkit` CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
