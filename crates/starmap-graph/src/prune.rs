//! Randomized edge pruning that preserves connectivity.
//!
//! A depth-first traversal records the edge that first reaches each vertex.
//! Those tree edges are kept; every other edge seen during the traversal can
//! go without disconnecting the graph.

use crate::graph::Graph;
use rand::Rng;
use starmap_core::{Edge, Result, Vertex, VertexPair};
use std::collections::HashSet;
use tracing::{debug, warn};

impl Graph {
    /// Edges whose removal keeps a depth-first spanning tree intact.
    ///
    /// The traversal starts from the lowest vertex id and follows incident
    /// edges in insertion order, so the result is deterministic. Each
    /// candidate appears once, in discovery order.
    pub fn pruning_candidates(&self) -> Result<Vec<Edge>> {
        let Some(start) = self.vertices().next() else {
            return Ok(Vec::new());
        };

        let mut visited: HashSet<Vertex> = HashSet::new();
        let mut keep: HashSet<VertexPair> = HashSet::new();
        let mut listed: HashSet<VertexPair> = HashSet::new();
        let mut candidates = Vec::new();
        let mut stack: Vec<(Vertex, Option<&Edge>)> = vec![(start.clone(), None)];

        while let Some((v, via)) = stack.pop() {
            if visited.insert(v.clone()) {
                if let Some(e) = via {
                    keep.insert(e.pair());
                }
                for e in self.incident_in_order(v.id())? {
                    stack.push((e.distinct_vertex(&v)?, Some(e)));
                }
            } else if let Some(e) = via {
                let pair = e.pair();
                if !keep.contains(&pair) && listed.insert(pair) {
                    candidates.push(e.clone());
                }
            }
        }

        if visited.len() < self.vertex_count() {
            warn!(
                reached = visited.len(),
                vertices = self.vertex_count(),
                "pruning a disconnected graph; only the start component is considered"
            );
        }
        Ok(candidates)
    }

    /// Removes a random number of non-tree edges.
    ///
    /// Draws `k` uniformly from `[0, candidates)` and removes `k` distinct
    /// candidates chosen uniformly at random. Returns the removed edges. A
    /// connected graph stays connected. Does nothing on an empty graph or
    /// when there are no candidates.
    pub fn prune_random_edges<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vec<Edge>> {
        let mut candidates = self.pruning_candidates()?;
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let iterations = rng.random_range(0..candidates.len());
        let mut removed = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            let index = rng.random_range(0..candidates.len());
            let trim = candidates.swap_remove(index);
            if self.remove_edge(&trim) {
                removed.push(trim);
            }
        }

        debug!(
            removed = removed.len(),
            remaining = self.edge_count(),
            "pruned random edges"
        );
        Ok(removed)
    }
}
