//! User-plane topology module.
//!
//! This module builds the weighted, undirected graph over radio nodes,
//! forwarding nodes, and data networks, and answers shortest-path routing
//! queries against it.

pub mod types;
pub mod graph;
pub mod path;

// Re-export key types for easier access
pub use graph::UpGraph;
pub use types::{Edge, EdgeKind, Node, NodeKind, TopologyError};
