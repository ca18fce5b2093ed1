//! lg-graph: mutable weighted directed graphs over opaque labels.
//!
//! Provides:
//! - The [`Graph`] contract shared by both representations
//! - [`AdjacencyGraph`]: each vertex owns its own outgoing-edge map
//! - [`EdgeListGraph`]: a flat edge list over a set of vertex labels
//!
//! The two representations have deliberately different cost profiles but are
//! observably indistinguishable through the contract.
//!
//! # Example
//!
//! ```
//! use lg_graph::{AdjacencyGraph, Graph};
//!
//! let mut graph: AdjacencyGraph<String> = AdjacencyGraph::new();
//! graph.add("A".to_string());
//! assert_eq!(graph.set("A".to_string(), "B".to_string(), 5), 0);
//! assert_eq!(graph.set("A".to_string(), "B".to_string(), 7), 5);
//! assert_eq!(graph.targets(&"A".to_string())["B"], 7);
//! ```

pub mod adjacency;
pub mod edge_list;
pub mod error;
pub mod graph;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use adjacency::{AdjacencyGraph, Vertex};
pub use edge_list::{Edge, EdgeListGraph};
pub use error::GraphError;
pub use graph::Graph;
