//! Integration tests for the graphkit binary

mod adjacency;
mod config;
mod interactive;
mod logging;
mod mst;
mod path;
mod support;
mod visualize;
