//! Vertex identity type.
//!
//! A vertex is keyed by its integer id. The display name can change
//! freely without affecting equality, hashing or ordering.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Integer identity of a vertex.
pub type VertexId = i64;

/// A named vertex identified by `id`.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    name: String,
}

impl Vertex {
    /// Creates a new vertex.
    pub fn new(id: VertexId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The identity key.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The current display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display name.
    pub fn update_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
