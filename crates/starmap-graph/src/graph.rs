//! Core graph data structure.
//!
//! The Graph keeps two views of the same edge set: per-vertex adjacency
//! lists and an index from unordered vertex pairs to edges. Every mutation
//! goes through this type so the two views never disagree. Everything the
//! algorithms need is read through the accessors here.

use starmap_core::{Edge, GraphError, Result, Vertex, VertexId, VertexPair};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::trace;

/// Adjacency entry for one vertex.
#[derive(Debug, Clone)]
struct Adjacency {
    vertex: Vertex,
    /// Neighbor ids in the order their edges were inserted.
    neighbors: Vec<VertexId>,
}

/// A stored edge plus its insertion sequence number.
#[derive(Debug, Clone)]
pub(crate) struct IndexedEdge {
    pub(crate) edge: Edge,
    pub(crate) seq: u64,
}

/// A mutable undirected weighted graph.
///
/// Vertices iterate in ascending id order and neighbors in edge insertion
/// order, so every algorithm built on this type is deterministic for a given
/// sequence of mutations.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vertex id to vertex and neighbor list.
    adjacency: BTreeMap<VertexId, Adjacency>,

    /// Unordered vertex pair to the edge joining them.
    edges: HashMap<VertexPair, IndexedEdge>,

    /// Sequence number for the next inserted edge.
    next_seq: u64,
}

impl Graph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex.
    ///
    /// Returns false, leaving the graph unchanged, if a vertex with the same
    /// id is already present.
    pub fn add_vertex(&mut self, v: Vertex) -> bool {
        if self.adjacency.contains_key(&v.id()) {
            return false;
        }
        trace!(vertex = v.id(), "add vertex");
        self.adjacency.insert(
            v.id(),
            Adjacency {
                vertex: v,
                neighbors: Vec::new(),
            },
        );
        true
    }

    /// Returns true if a vertex with the same id is present.
    pub fn has_vertex(&self, v: &Vertex) -> bool {
        self.adjacency.contains_key(&v.id())
    }

    /// Gets the stored vertex for an id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.adjacency.get(&id).map(|entry| &entry.vertex)
    }

    /// Adds an edge.
    ///
    /// Returns false if either endpoint is missing or the pair is already
    /// connected. The stored edge carries the stored vertices, so names
    /// embedded in `e` are replaced by the names already in the graph.
    pub fn add_edge(&mut self, mut e: Edge) -> bool {
        let (a, b) = (e.v1().id(), e.v2().id());
        if !self.adjacency.contains_key(&a) || !self.adjacency.contains_key(&b) {
            return false;
        }
        let pair = e.pair();
        if self.edges.contains_key(&pair) {
            return false;
        }

        for id in [a, b] {
            if let (Some(end), Some(stored)) = (e.endpoint_mut(id), self.vertex(id)) {
                end.clone_from(stored);
            }
        }

        trace!(from = a, to = b, length = e.length(), "add edge");
        if let Some(entry) = self.adjacency.get_mut(&a) {
            entry.neighbors.push(b);
        }
        if let Some(entry) = self.adjacency.get_mut(&b) {
            entry.neighbors.push(a);
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.edges.insert(pair, IndexedEdge { edge: e, seq });
        true
    }

    /// Renames the vertex with the given id.
    ///
    /// The new name shows up in every snapshot, including the copies held
    /// by incident edges.
    pub fn rename_vertex(&mut self, id: VertexId, name: impl Into<String>) -> Result<()> {
        let entry = self
            .adjacency
            .get_mut(&id)
            .ok_or(GraphError::VertexNotFound(id))?;
        entry.vertex.update_name(name);
        trace!(vertex = id, name = entry.vertex.name(), "rename vertex");

        for &neighbor in &entry.neighbors {
            if let Some(indexed) = self.edges.get_mut(&VertexPair::new(id, neighbor)) {
                if let Some(end) = indexed.edge.endpoint_mut(id) {
                    end.clone_from(&entry.vertex);
                }
            }
        }
        Ok(())
    }

    /// Returns true if the endpoints of `e` are connected.
    pub fn has_edge(&self, e: &Edge) -> bool {
        self.has_edge_between(e.v1(), e.v2())
    }

    /// Returns true if `v1` and `v2` are connected.
    ///
    /// Both adjacency lists and the edge index must agree.
    pub fn has_edge_between(&self, v1: &Vertex, v2: &Vertex) -> bool {
        let listed = |from: &Vertex, to: &Vertex| {
            self.adjacency
                .get(&from.id())
                .is_some_and(|entry| entry.neighbors.contains(&to.id()))
        };
        listed(v1, v2) && listed(v2, v1) && self.edges.contains_key(&VertexPair::of(v1, v2))
    }

    /// Returns the length of the edge joining `v1` and `v2`.
    pub fn edge_length(&self, v1: &Vertex, v2: &Vertex) -> Result<u64> {
        self.get_edge(v1, v2).map(Edge::length)
    }

    /// Returns the sum of all edge lengths.
    ///
    /// The total is a `u128`, so summing `u64` lengths cannot overflow.
    pub fn edge_length_sum(&self) -> u128 {
        self.edges
            .values()
            .map(|indexed| u128::from(indexed.edge.length()))
            .sum()
    }

    /// Removes the edge joining the endpoints of `e`.
    ///
    /// Returns false if no such edge is present.
    pub fn remove_edge(&mut self, e: &Edge) -> bool {
        if !self.has_edge(e) {
            return false;
        }
        let (a, b) = (e.v1().id(), e.v2().id());
        trace!(from = a, to = b, "remove edge");
        self.unlink(a, b);
        self.unlink(b, a);
        self.edges.remove(&e.pair());
        true
    }

    /// Removes a vertex and every edge incident to it.
    ///
    /// Returns false if the vertex is not present.
    pub fn remove_vertex(&mut self, v: &Vertex) -> bool {
        let Some(entry) = self.adjacency.remove(&v.id()) else {
            return false;
        };
        trace!(
            vertex = v.id(),
            degree = entry.neighbors.len(),
            "remove vertex"
        );
        for neighbor in entry.neighbors {
            self.unlink(neighbor, v.id());
            self.edges.remove(&VertexPair::new(v.id(), neighbor));
        }
        true
    }

    /// Returns a copy of the vertex set.
    pub fn all_vertices(&self) -> HashSet<Vertex> {
        self.vertices().cloned().collect()
    }

    /// Returns a copy of the edges incident to `v`.
    pub fn incident_edges(&self, v: &Vertex) -> Result<HashSet<Edge>> {
        let entry = self.entry(v.id())?;
        Ok(entry
            .neighbors
            .iter()
            .filter_map(|&neighbor| self.edges.get(&VertexPair::new(v.id(), neighbor)))
            .map(|indexed| indexed.edge.clone())
            .collect())
    }

    /// Returns a copy of the edge set.
    pub fn all_edges(&self) -> HashSet<Edge> {
        self.edges
            .values()
            .map(|indexed| indexed.edge.clone())
            .collect()
    }

    /// Returns each neighbor of `v` with the edge that joins them.
    pub fn neighbors(&self, v: &Vertex) -> Result<HashMap<Vertex, Edge>> {
        let entry = self.entry(v.id())?;
        Ok(entry
            .neighbors
            .iter()
            .filter_map(|&neighbor| {
                let vertex = self.vertex(neighbor)?;
                let indexed = self.edges.get(&VertexPair::new(v.id(), neighbor))?;
                Some((vertex.clone(), indexed.edge.clone()))
            })
            .collect())
    }

    /// Gets the edge joining `v1` and `v2`.
    pub fn get_edge(&self, v1: &Vertex, v2: &Vertex) -> Result<&Edge> {
        self.edges
            .get(&VertexPair::of(v1, v2))
            .map(|indexed| &indexed.edge)
            .ok_or(GraphError::EdgeNotFound(v1.id(), v2.id()))
    }

    /// Sums the edge lengths along consecutive vertices of `path`.
    ///
    /// A single vertex has length 0. Every consecutive pair must be joined
    /// by an edge.
    pub fn path_length(&self, path: &[Vertex]) -> Result<u128> {
        if path.is_empty() {
            return Err(GraphError::EmptyPath);
        }
        path.windows(2)
            .map(|step| self.edge_length(&step[0], &step[1]).map(u128::from))
            .sum()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterates over stored vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.adjacency.values().map(|entry| &entry.vertex)
    }

    pub(crate) fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Neighbor ids of `id` in edge insertion order.
    pub(crate) fn neighbor_ids(&self, id: VertexId) -> Result<&[VertexId]> {
        self.entry(id).map(|entry| entry.neighbors.as_slice())
    }

    /// Incident edges of `id` in insertion order.
    pub(crate) fn incident_in_order(
        &self,
        id: VertexId,
    ) -> Result<impl Iterator<Item = &Edge> + '_> {
        let neighbors = self.neighbor_ids(id)?;
        Ok(neighbors.iter().filter_map(move |&neighbor| {
            self.edges
                .get(&VertexPair::new(id, neighbor))
                .map(|indexed| &indexed.edge)
        }))
    }

    pub(crate) fn indexed_edges(&self) -> impl Iterator<Item = &IndexedEdge> {
        self.edges.values()
    }

    pub(crate) fn edge_for(&self, a: VertexId, b: VertexId) -> Option<&Edge> {
        self.edges
            .get(&VertexPair::new(a, b))
            .map(|indexed| &indexed.edge)
    }

    fn entry(&self, id: VertexId) -> Result<&Adjacency> {
        self.adjacency
            .get(&id)
            .ok_or(GraphError::VertexNotFound(id))
    }

    /// Drops `to` from the neighbor list of `from`.
    fn unlink(&mut self, from: VertexId, to: VertexId) {
        if let Some(entry) = self.adjacency.get_mut(&from) {
            entry.neighbors.retain(|&n| n != to);
        }
    }
}

/// Graph statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub total_length: u128,
}

impl Graph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            total_length: self.edge_length_sum(),
        }
    }
}

#[cfg(test)]
impl Graph {
    /// Panics if the adjacency lists and the edge index disagree.
    pub(crate) fn assert_consistent(&self) {
        let n = self.vertex_count();
        assert!(self.edge_count() <= n * n.saturating_sub(1) / 2);

        for (pair, indexed) in &self.edges {
            assert_eq!(*pair, indexed.edge.pair());
            assert_ne!(pair.low(), pair.high(), "self-loop {:?}", pair);
            let low = &self.adjacency[&pair.low()];
            let high = &self.adjacency[&pair.high()];
            assert!(low.neighbors.contains(&pair.high()));
            assert!(high.neighbors.contains(&pair.low()));
            for end in [indexed.edge.v1(), indexed.edge.v2()] {
                let stored = &self.adjacency[&end.id()].vertex;
                assert_eq!(end.name(), stored.name(), "stale name on {}", end.id());
            }
        }

        for (&id, entry) in &self.adjacency {
            assert_eq!(entry.vertex.id(), id);
            let unique: HashSet<_> = entry.neighbors.iter().collect();
            assert_eq!(unique.len(), entry.neighbors.len(), "duplicate neighbor of {}", id);
            for &neighbor in &entry.neighbors {
                assert!(self.edges.contains_key(&VertexPair::new(id, neighbor)));
            }
        }
    }
}
