//! Graph algorithm implementations
//!
//! Contains one implementation of each algorithm:
//! - `dfs`, `bfs`: spanning trees from a source
//! - `dijkstra`: single-source shortest paths with optional early exit
//! - `prim`, `kruskal`: minimum spanning trees
//! - `shared`: frontier entry and validation helpers

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod shared;

pub use bfs::bfs_spanning_tree;
pub use dfs::dfs_spanning_tree;
pub use dijkstra::{dijkstra, shortest_path, ShortestPaths};
pub use kruskal::kruskal_mst;
pub use prim::{prim_mst, DEFAULT_PRIM_START};
pub use shared::HeapEntry;
