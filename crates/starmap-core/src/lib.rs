//! Starmap Core - Value types for weighted undirected graphs
//!
//! This crate defines the identity and connection types that every
//! Starmap graph is built from, plus the shared error type.
//!
//! # Example
//!
//! ```
//! use starmap_core::{Edge, Vertex};
//!
//! let a = Vertex::new(1, "Alderaan");
//! let b = Vertex::new(2, "Bespin");
//! let lane = Edge::new(a.clone(), b.clone(), 12).unwrap();
//!
//! assert!(lane.incident(&a));
//! assert_eq!(lane.distinct_vertex(&a).unwrap(), b);
//! ```

mod edge;
pub mod error;
mod vertex;

pub use edge::{Edge, VertexPair};
pub use error::{ErrorKind, GraphError, Result};
pub use vertex::{Vertex, VertexId};
