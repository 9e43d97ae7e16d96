//! Edge types for weighted undirected graphs.
//!
//! An edge joins two distinct vertices with a non-negative length.
//! Edges are symmetric: `(a, b)` and `(b, a)` are the same connection.

use crate::error::{GraphError, Result};
use crate::vertex::{Vertex, VertexId};
use std::hash::{Hash, Hasher};

/// An unordered pair of vertex ids, normalised so that `low <= high`.
///
/// This is the key the graph uses to index its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexPair {
    low: VertexId,
    high: VertexId,
}

impl VertexPair {
    /// Creates the pair for two ids, in either order.
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Creates the pair for two vertices.
    pub fn of(a: &Vertex, b: &Vertex) -> Self {
        Self::new(a.id(), b.id())
    }

    pub fn low(&self) -> VertexId {
        self.low
    }

    pub fn high(&self) -> VertexId {
        self.high
    }

    /// Returns true if `id` is one of the two ids.
    pub fn contains(&self, id: VertexId) -> bool {
        self.low == id || self.high == id
    }
}

/// A weighted connection between two distinct vertices.
#[derive(Debug, Clone)]
pub struct Edge {
    v1: Vertex,
    v2: Vertex,
    length: u64,
}

impl Edge {
    /// Creates an edge of the given length.
    ///
    /// Fails if both endpoints share an id or if `length` is negative.
    pub fn new(v1: Vertex, v2: Vertex, length: i64) -> Result<Self> {
        if v1.id() == v2.id() {
            return Err(GraphError::SelfLoop(v1.id()));
        }
        let length = u64::try_from(length).map_err(|_| GraphError::NegativeLength(length))?;
        Ok(Self { v1, v2, length })
    }

    /// Creates an edge of length 1.
    pub fn unit(v1: Vertex, v2: Vertex) -> Result<Self> {
        Self::new(v1, v2, 1)
    }

    pub fn v1(&self) -> &Vertex {
        &self.v1
    }

    pub fn v2(&self) -> &Vertex {
        &self.v2
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    /// Both endpoints, in construction order.
    pub fn endpoints(&self) -> (&Vertex, &Vertex) {
        (&self.v1, &self.v2)
    }

    /// The endpoint with the given id, for renaming in place.
    ///
    /// Only the name of a [`Vertex`] is mutable, so the pair stays fixed.
    pub fn endpoint_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        if self.v1.id() == id {
            Some(&mut self.v1)
        } else if self.v2.id() == id {
            Some(&mut self.v2)
        } else {
            None
        }
    }

    /// The normalised id pair of this edge.
    pub fn pair(&self) -> VertexPair {
        VertexPair::of(&self.v1, &self.v2)
    }

    /// Returns true if `v` is one of the endpoints.
    pub fn incident(&self, v: &Vertex) -> bool {
        self.v1 == *v || self.v2 == *v
    }

    /// Returns true if the two edges share at least one endpoint.
    pub fn intersects(&self, other: &Edge) -> bool {
        other.incident(&self.v1) || other.incident(&self.v2)
    }

    /// Returns an endpoint shared with `other`.
    pub fn intersection(&self, other: &Edge) -> Result<Vertex> {
        if other.incident(&self.v1) {
            Ok(self.v1.clone())
        } else if other.incident(&self.v2) {
            Ok(self.v2.clone())
        } else {
            Err(GraphError::NoSharedVertex(self.ids(), other.ids()))
        }
    }

    /// Returns the endpoint that is not `v`.
    pub fn distinct_vertex(&self, v: &Vertex) -> Result<Vertex> {
        if self.v1 == *v {
            Ok(self.v2.clone())
        } else if self.v2 == *v {
            Ok(self.v1.clone())
        } else {
            Err(GraphError::NotIncident {
                vertex: v.id(),
                edge: self.ids(),
            })
        }
    }

    /// Returns an endpoint of this edge that `other` does not touch,
    /// preferring `v1`.
    pub fn distinct_vertex_from(&self, other: &Edge) -> Result<Vertex> {
        if !other.incident(&self.v1) {
            Ok(self.v1.clone())
        } else if !other.incident(&self.v2) {
            Ok(self.v2.clone())
        } else {
            Err(GraphError::NoDistinctVertex(self.ids(), other.ids()))
        }
    }

    fn ids(&self) -> (VertexId, VertexId) {
        (self.v1.id(), self.v2.id())
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.pair() == other.pair() && self.length == other.length
    }
}

impl Eq for Edge {}

// Length is left out so that hashing stays consistent with the symmetric
// pair; equal edges still hash equally.
impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pair().hash(state);
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {} [{}]", self.v1.id(), self.v2.id(), self.length)
    }
}
