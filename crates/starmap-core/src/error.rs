//! Error types shared by every Starmap crate.

use crate::vertex::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Broad category of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A queried vertex, edge or pair does not exist.
    NotFound,
    /// Malformed input to a constructor or operation.
    ConstraintViolation,
    /// A connected graph was required.
    NotConnected,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {0} is not in the graph")]
    VertexNotFound(VertexId),

    #[error("No edge connects {0} and {1}")]
    EdgeNotFound(VertexId, VertexId),

    #[error("Edges {0:?} and {1:?} share no vertex")]
    NoSharedVertex((VertexId, VertexId), (VertexId, VertexId)),

    #[error("Vertex {vertex} is not an endpoint of edge {edge:?}")]
    NotIncident {
        vertex: VertexId,
        edge: (VertexId, VertexId),
    },

    #[error("Edge {0:?} has no endpoint outside edge {1:?}")]
    NoDistinctVertex((VertexId, VertexId), (VertexId, VertexId)),

    #[error("Edge endpoints must be distinct, got {0} twice")]
    SelfLoop(VertexId),

    #[error("Edge length must be non-negative, got {0}")]
    NegativeLength(i64),

    #[error("Search range must be at least 1, got {0}")]
    InvalidRange(usize),

    #[error("Path must contain at least one vertex")]
    EmptyPath,

    #[error("Graph is not connected: spanning tree reached {tree_edges} of {required} edges")]
    NotConnected { tree_edges: usize, required: usize },
}

impl GraphError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::VertexNotFound(_)
            | Self::EdgeNotFound(..)
            | Self::NoSharedVertex(..)
            | Self::NotIncident { .. }
            | Self::NoDistinctVertex(..) => ErrorKind::NotFound,
            Self::SelfLoop(_)
            | Self::NegativeLength(_)
            | Self::InvalidRange(_)
            | Self::EmptyPath => ErrorKind::ConstraintViolation,
            Self::NotConnected { .. } => ErrorKind::NotConnected,
        }
    }
}
