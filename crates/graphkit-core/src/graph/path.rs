//! Path reconstruction from predecessor links

use crate::error::{GraphkitError, Result};
use crate::graph::types::{Predecessors, TreeEdge, VertexId};

/// Walk predecessor links from `target` back to `source` and return the
/// vertices in source-to-target order.
///
/// Fails with `Unreachable` when the walk does not end at `source`; a
/// partial sequence is never returned. The walk takes at most `N` steps,
/// so a malformed parent array cannot loop forever.
pub fn reconstruct_path(
    parents: &Predecessors,
    source: VertexId,
    target: VertexId,
) -> Result<Vec<VertexId>> {
    let unreachable = || GraphkitError::Unreachable {
        from: source,
        to: target,
    };

    let mut path = vec![target];
    let mut current = target;
    while current != source {
        if path.len() > parents.len() {
            return Err(unreachable());
        }
        current = parents.get(current).ok_or_else(unreachable)?;
        path.push(current);
    }

    path.reverse();
    Ok(path)
}

/// Consecutive vertex pairs along a path, for highlighting
pub fn path_edges(path: &[VertexId]) -> Vec<TreeEdge> {
    path.windows(2)
        .map(|pair| TreeEdge {
            parent: pair[0],
            child: pair[1],
        })
        .collect()
}
