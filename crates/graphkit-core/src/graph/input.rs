//! Reader for the textual graph format
//!
//! ```text
//! N M
//! u v [w]     (M lines, 1-based vertex ids, optional weight)
//! ```
//!
//! Blank lines before the header and between edge lines are skipped.
//! Reading stops after the M-th edge line, so the same reader can keep
//! serving interactive input afterwards.

use std::io::BufRead;

use crate::bail_malformed;
use crate::error::{GraphkitError, Result};
use crate::graph::model::Graph;
use crate::graph::types::{VertexId, Weight, WeightedEdge};

/// Settings that affect how edge lines are interpreted
#[derive(Debug, Clone, Copy)]
pub struct InputOptions {
    /// Weight used when an edge line has only `u v`
    pub default_weight: Weight,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            default_weight: Weight::DEFAULT,
        }
    }
}

/// Line source that tracks 1-based line numbers and skips blank lines
struct Lines<R> {
    reader: R,
    line_no: usize,
    buf: String,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buf: String::new(),
        }
    }

    /// Next non-blank line, trimmed; `None` at end of input
    fn next_content(&mut self) -> Result<Option<(usize, String)>> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            let trimmed = self.buf.trim();
            if !trimmed.is_empty() {
                return Ok(Some((self.line_no, trimmed.to_string())));
            }
        }
    }
}

/// Read a graph from any buffered reader
#[tracing::instrument(skip(reader))]
pub fn read_graph<R: BufRead>(reader: R, opts: &InputOptions) -> Result<Graph> {
    let mut lines = Lines::new(reader);

    let Some((header_line, header)) = lines.next_content()? else {
        bail_malformed!(1, "no input provided");
    };
    let (vertex_count, edge_count) = parse_header(header_line, &header)?;

    let mut edges = Vec::new();
    for i in 0..edge_count {
        let Some((line_no, line)) = lines.next_content()? else {
            bail_malformed!(lines.line_no + 1, "expected {} edges, got {}", edge_count, i);
        };
        edges.push(parse_edge(line_no, &line, opts)?);
    }

    tracing::debug!(vertex_count, edge_count, "graph_read");
    Graph::new(vertex_count, edges)
}

/// Parse a complete graph document held in memory
pub fn parse_graph(text: &str, opts: &InputOptions) -> Result<Graph> {
    read_graph(text.as_bytes(), opts)
}

fn parse_header(line_no: usize, line: &str) -> Result<(usize, usize)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 2 {
        bail_malformed!(line_no, "first line must contain N and M, got '{}'", line);
    }
    let vertex_count = parse_count(line_no, "vertex count N", parts[0])?;
    let edge_count = parse_count(line_no, "edge count M", parts[1])?;
    if vertex_count == 0 {
        bail_malformed!(line_no, "graph must have at least one vertex");
    }
    Ok((vertex_count, edge_count))
}

fn parse_count(line_no: usize, what: &str, token: &str) -> Result<usize> {
    token
        .parse::<usize>()
        .map_err(|_| GraphkitError::malformed(line_no, format!("invalid {}: '{}'", what, token)))
}

fn parse_edge(line_no: usize, line: &str, opts: &InputOptions) -> Result<WeightedEdge> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 2 {
        bail_malformed!(line_no, "edge line must have at least u v, got '{}'", line);
    }

    let u = parse_vertex(line_no, parts[0])?;
    let v = parse_vertex(line_no, parts[1])?;
    let weight = match parts.get(2) {
        Some(token) => parse_weight(line_no, token)?,
        None => opts.default_weight,
    };

    Ok(WeightedEdge::new(u, v, weight))
}

fn parse_vertex(line_no: usize, token: &str) -> Result<VertexId> {
    token
        .parse::<VertexId>()
        .map_err(|_| GraphkitError::malformed(line_no, format!("invalid vertex id '{}'", token)))
}

fn parse_weight(line_no: usize, token: &str) -> Result<Weight> {
    let value = token
        .parse::<f64>()
        .map_err(|_| GraphkitError::malformed(line_no, format!("invalid weight '{}'", token)))?;
    if !value.is_finite() {
        bail_malformed!(line_no, "weight must be a finite number, got '{}'", token);
    }
    Ok(Weight::new(value))
}
