//! Graph builder for constructing a graph from raw vertex and edge lists.
//!
//! The builder takes vertices and `(id, id, length)` triples and resolves
//! the ids into edges once every vertex is known.

use crate::graph::Graph;
use starmap_core::{Edge, GraphError, Result, Vertex, VertexId};
use tracing::debug;

/// Builds a Graph in two passes.
///
/// 1. Add all vertices to the graph
/// 2. Resolve edge triples against the registered vertices
///
/// Duplicate vertices and duplicate pairs are skipped the same way
/// [`Graph::add_vertex`] and [`Graph::add_edge`] skip them.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
    /// Edge triples waiting for resolution.
    pending: Vec<(VertexId, VertexId, i64)>,
}

impl GraphBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one vertex.
    pub fn vertex(mut self, id: VertexId, name: impl Into<String>) -> Self {
        self.add_vertex(Vertex::new(id, name));
        self
    }

    /// Adds one edge triple.
    pub fn edge(mut self, a: VertexId, b: VertexId, length: i64) -> Self {
        self.pending.push((a, b, length));
        self
    }

    /// Adds vertices.
    ///
    /// Call this as often as needed, then call `build` when all edges are
    /// added.
    pub fn add_vertices(&mut self, vertices: impl IntoIterator<Item = Vertex>) {
        for v in vertices {
            self.add_vertex(v);
        }
    }

    /// Adds edge triples.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (VertexId, VertexId, i64)>) {
        self.pending.extend(edges);
    }

    fn add_vertex(&mut self, v: Vertex) {
        let id = v.id();
        if !self.graph.add_vertex(v) {
            debug!(vertex = id, "skipping duplicate vertex");
        }
    }

    /// Resolves edge triples and returns the graph.
    ///
    /// Fails if a triple names an unknown vertex or is not a valid edge.
    pub fn build(self) -> Result<Graph> {
        let Self { mut graph, pending } = self;

        for (a, b, length) in pending {
            let v1 = graph
                .vertex(a)
                .cloned()
                .ok_or(GraphError::VertexNotFound(a))?;
            let v2 = graph
                .vertex(b)
                .cloned()
                .ok_or(GraphError::VertexNotFound(b))?;
            let edge = Edge::new(v1, v2, length)?;
            if !graph.add_edge(edge) {
                debug!(from = a, to = b, "skipping duplicate edge");
            }
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built graph"
        );
        Ok(graph)
    }

    /// Returns the graph without resolving pending edges.
    pub fn build_without_edges(self) -> Graph {
        self.graph
    }
}
