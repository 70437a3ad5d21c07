//! Error types and exit codes for graphkit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (no path, disconnected graph, IO)
//! - 2: Usage error (bad flags/args, vertex out of range)
//! - 3: Data error (malformed graph input, invalid config)

mod macros;

use thiserror::Error;

use crate::graph::types::{VertexId, Weight};

/// Exit codes for the graphkit binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph or config (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading a graph or running an algorithm
#[derive(Error, Debug)]
pub enum GraphkitError {
    // Usage errors (exit code 2)
    #[error("invalid vertex {vertex}: expected a value in 1..={vertex_count}")]
    InvalidVertex {
        vertex: VertexId,
        vertex_count: usize,
    },

    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("negative weight {weight} on edge {u} - {v} is not supported")]
    NegativeWeight {
        u: VertexId,
        v: VertexId,
        weight: Weight,
    },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Algorithm outcomes and generic failures (exit code 1)
    #[error("graph is not connected; {algorithm} cannot produce a minimum spanning tree")]
    Disconnected { algorithm: String },

    #[error("no path from {from} to {to}")]
    Unreachable { from: VertexId, to: VertexId },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphkitError {
    /// Create an error for a vertex id outside `1..=vertex_count`
    pub fn invalid_vertex(vertex: VertexId, vertex_count: usize) -> Self {
        GraphkitError::InvalidVertex {
            vertex,
            vertex_count,
        }
    }

    /// Create an error for unparsable graph text
    pub fn malformed(line: usize, reason: impl std::fmt::Display) -> Self {
        GraphkitError::MalformedInput {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for an MST requested on a disconnected graph
    pub fn disconnected(algorithm: &str) -> Self {
        GraphkitError::Disconnected {
            algorithm: algorithm.to_string(),
        }
    }

    /// Whether the interactive loop can report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            GraphkitError::MalformedInput { .. }
                | GraphkitError::NegativeWeight { .. }
                | GraphkitError::Io(_)
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphkitError::InvalidVertex { .. }
            | GraphkitError::UnknownFormat(_)
            | GraphkitError::UsageError(_) => ExitCode::Usage,

            GraphkitError::MalformedInput { .. }
            | GraphkitError::NegativeWeight { .. }
            | GraphkitError::Toml(_) => ExitCode::Data,

            GraphkitError::Disconnected { .. }
            | GraphkitError::Unreachable { .. }
            | GraphkitError::Io(_)
            | GraphkitError::Json(_)
            | GraphkitError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphkitError::InvalidVertex { .. } => "invalid_vertex",
            GraphkitError::UnknownFormat(_) => "unknown_format",
            GraphkitError::UsageError(_) => "usage_error",
            GraphkitError::MalformedInput { .. } => "malformed_input",
            GraphkitError::NegativeWeight { .. } => "negative_weight",
            GraphkitError::Toml(_) => "toml_error",
            GraphkitError::Disconnected { .. } => "disconnected",
            GraphkitError::Unreachable { .. } => "unreachable",
            GraphkitError::Io(_) => "io_error",
            GraphkitError::Json(_) => "json_error",
            GraphkitError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphkit operations
pub type Result<T> = std::result::Result<T, GraphkitError>;
