//! Minimum spanning tree via Kruskal's algorithm.
//!
//! Edges are scanned in ascending length, ties in insertion order, and kept
//! whenever they join two different groups of a [`DisjointSet`] seeded with
//! every vertex.

use crate::disjoint_set::DisjointSet;
use crate::graph::{Graph, IndexedEdge};
use starmap_core::{Edge, GraphError, Result};
use tracing::{debug, warn};

impl Graph {
    /// Computes a minimum spanning tree.
    ///
    /// Returns `|V| - 1` edges in the order they were selected. Fails with
    /// [`GraphError::NotConnected`] if the graph is not connected; the graph
    /// itself is left untouched either way. Graphs with fewer than two
    /// vertices have an empty tree.
    pub fn minimum_spanning_tree(&self) -> Result<Vec<Edge>> {
        let required = self.vertex_count().saturating_sub(1);
        let mut groups: DisjointSet = self.vertices().collect();

        let mut candidates: Vec<&IndexedEdge> = self.indexed_edges().collect();
        candidates.sort_by_key(|indexed| (indexed.edge.length(), indexed.seq));

        let mut tree = Vec::with_capacity(required);
        for indexed in candidates {
            if tree.len() == required {
                break;
            }
            let edge = &indexed.edge;
            if groups.union(edge.v1(), edge.v2())? {
                tree.push(edge.clone());
            }
        }

        if tree.len() < required {
            warn!(
                tree_edges = tree.len(),
                required, "spanning tree requested on a disconnected graph"
            );
            return Err(GraphError::NotConnected {
                tree_edges: tree.len(),
                required,
            });
        }

        debug!(
            edges = tree.len(),
            total_length = tree.iter().map(|e| u128::from(e.length())).sum::<u128>(),
            "built minimum spanning tree"
        );
        Ok(tree)
    }
}
