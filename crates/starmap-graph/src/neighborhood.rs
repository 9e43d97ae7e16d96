//! Bounded-hop neighborhood search.
//!
//! `search(v, range)` returns the endpoints of every walk of exactly `range`
//! edges that starts at `v`, minus `v` itself. Walks may revisit vertices, so
//! this is not the ball of radius `range`: on a bipartite graph, for
//! instance, only vertices at matching parity show up. Callers that want
//! "within range" should union the results for `1..=range`.
//!
//! Every endpoint of a walk can step back and forth, so endpoint sets of the
//! same parity only grow with the range. Each strict growth adds a vertex,
//! which fixes the sets by `2|V|` hops; longer ranges are folded down to that
//! bound with their parity kept.

use crate::graph::Graph;
use starmap_core::{GraphError, Result, Vertex, VertexId};
use std::collections::HashSet;
use tracing::debug;

impl Graph {
    /// Vertices reachable from `v` by a walk of exactly `range` edges,
    /// excluding `v`.
    pub fn search(&self, v: &Vertex, range: usize) -> Result<HashSet<Vertex>> {
        if range < 1 {
            return Err(GraphError::InvalidRange(range));
        }
        if !self.has_vertex(v) {
            return Err(GraphError::VertexNotFound(v.id()));
        }

        let hops = effective_range(range, self.vertex_count());

        // (vertex, hops still to take); each state is expanded once.
        let mut seen: HashSet<(VertexId, usize)> = HashSet::new();
        let mut worklist = vec![(v.id(), hops)];
        let mut endpoints: HashSet<VertexId> = HashSet::new();

        while let Some((current, remaining)) = worklist.pop() {
            if !seen.insert((current, remaining)) {
                continue;
            }
            if remaining == 0 {
                if current != v.id() {
                    endpoints.insert(current);
                }
                continue;
            }
            for &next in self.neighbor_ids(current)? {
                if !seen.contains(&(next, remaining - 1)) {
                    worklist.push((next, remaining - 1));
                }
            }
        }

        debug!(
            start = v.id(),
            range,
            hops,
            found = endpoints.len(),
            states = seen.len(),
            "neighborhood search"
        );

        Ok(endpoints
            .into_iter()
            .filter_map(|id| self.vertex(id).cloned())
            .collect())
    }
}

/// Folds `range` into `[2n - 1, 2n]` once it exceeds `2n`, keeping parity.
fn effective_range(range: usize, vertices: usize) -> usize {
    let bound = vertices.saturating_mul(2).max(2);
    if range <= bound {
        range
    } else {
        bound - (range - bound) % 2
    }
}
