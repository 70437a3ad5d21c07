//! Output format selection
//!
//! `OutputFormat` lives in graphkit-core; its `clap::ValueEnum` derive comes
//! from the core crate's `clap` feature.

pub use graphkit_core::format::OutputFormat;
