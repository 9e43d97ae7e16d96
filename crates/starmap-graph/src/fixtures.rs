//! Shared test fixtures.

use crate::graph::Graph;
use proptest::prelude::*;
use starmap_core::{Edge, Vertex, VertexId};

pub(crate) fn vertex(id: VertexId) -> Vertex {
    Vertex::new(id, id.to_string())
}

pub(crate) fn edge(a: VertexId, b: VertexId, length: i64) -> Edge {
    Edge::new(vertex(a), vertex(b), length).unwrap()
}

/// Edges of the nine-vertex reference graph, in insertion order.
///
/// The `(8, 2)` edge is parameterised because the shortest-path scenarios
/// use length 3 while the spanning-tree scenarios use length 2.
pub(crate) fn reference_edges(edge_8_2: i64) -> Vec<(VertexId, VertexId, i64)> {
    vec![
        (7, 6, 1),
        (8, 2, edge_8_2),
        (6, 5, 2),
        (0, 1, 4),
        (2, 5, 4),
        (8, 6, 6),
        (2, 3, 7),
        (7, 8, 7),
        (0, 7, 8),
        (1, 2, 8),
        (3, 4, 9),
        (5, 4, 10),
        (1, 7, 11),
        (3, 5, 14),
    ]
}

pub(crate) fn reference_graph(edge_8_2: i64) -> Graph {
    let mut graph = Graph::new();
    for id in [1, 2, 3, 4, 5, 6, 7, 8, 0] {
        graph.add_vertex(vertex(id));
    }
    for (a, b, length) in reference_edges(edge_8_2) {
        graph.add_edge(edge(a, b, length));
    }
    graph
}

/// Builds a graph on `n` vertices from raw `(a, b, length)` triples,
/// skipping self-loops and parallel edges.
pub(crate) fn graph_from(n: usize, edges: &[(usize, usize, u8)]) -> Graph {
    let mut graph = Graph::new();
    for id in 0..n {
        graph.add_vertex(vertex(id as VertexId));
    }
    for &(a, b, length) in edges {
        if let Ok(e) = Edge::new(vertex(a as VertexId), vertex(b as VertexId), i64::from(length)) {
            graph.add_edge(e);
        }
    }
    graph
}

prop_compose! {
    /// A small graph that may be disconnected.
    pub(crate) fn small_graph()
        (n in 1usize..=6)
        (edges in prop::collection::vec((0..n, 0..n, 0u8..=20), 0..=12), n in Just(n))
        -> Graph
    {
        graph_from(n, &edges)
    }
}

prop_compose! {
    /// A small connected graph: a random spanning tree plus extra edges.
    pub(crate) fn connected_graph()
        (n in 1usize..=7)
        (
            parents in prop::collection::vec((any::<prop::sample::Index>(), 0u8..=20), n - 1),
            extra in prop::collection::vec((0..n, 0..n, 0u8..=20), 0..=10),
            n in Just(n),
        )
        -> Graph
    {
        let mut edges: Vec<(usize, usize, u8)> = parents
            .into_iter()
            .enumerate()
            .map(|(i, (parent, length))| (i + 1, parent.index(i + 1), length))
            .collect();
        edges.extend(extra);
        graph_from(n, &edges)
    }
}

/// Installs a test subscriber honouring `RUST_LOG`. Safe to call repeatedly.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
