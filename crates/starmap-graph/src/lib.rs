//! Starmap Graph - Weighted undirected graphs and their algorithms
//!
//! This crate provides a mutable graph of [`Vertex`] and [`Edge`] values and
//! the classical algorithms that run over it: shortest paths, diameter,
//! minimum spanning trees, fixed-length walk search and connectivity
//! preserving edge pruning.
//!
//! # Architecture
//!
//! [`Graph`] is the only writer of its two internal views (adjacency lists
//! and an edge index keyed by unordered vertex pair). Every query hands out
//! copies or shared references, never the raw structures. The algorithms
//! read through the same accessors and never mutate the graph, except
//! pruning, which removes edges through [`Graph::remove_edge`].
//!
//! Mutations that fail a precondition (duplicate insert, missing removal
//! target) return `false`. Lookups of missing entities and malformed input
//! return a [`GraphError`].
//!
//! # Example
//!
//! ```
//! use starmap_graph::{Distance, GraphBuilder};
//!
//! let graph = GraphBuilder::new()
//!     .vertex(0, "Coruscant")
//!     .vertex(1, "Kessel")
//!     .vertex(2, "Dagobah")
//!     .edge(0, 1, 12)
//!     .edge(1, 2, 4)
//!     .edge(0, 2, 20)
//!     .build()
//!     .unwrap();
//!
//! let start = graph.vertex(0).unwrap();
//! let end = graph.vertex(2).unwrap();
//! let path = graph.shortest_path(start, end).unwrap();
//! assert_eq!(graph.path_length(&path).unwrap(), 16);
//! assert_eq!(graph.diameter(), Distance::Finite(16));
//! ```

mod builder;
mod disjoint_set;
mod graph;
mod neighborhood;
mod prune;
mod shortest_path;
mod spanning_tree;

#[cfg(test)]
mod fixtures;

pub use builder::GraphBuilder;
pub use disjoint_set::DisjointSet;
pub use graph::{Graph, GraphStats};
pub use shortest_path::{Distance, PathFinder, ShortestPaths};
pub use starmap_core::{Edge, ErrorKind, GraphError, Result, Vertex, VertexId, VertexPair};
