//! Single-source shortest paths and graph diameter.
//!
//! Dijkstra's algorithm over non-negative integer lengths. Each pass selects
//! the unvisited vertex with the smallest tentative distance (ties go to the
//! lowest vertex id) and relaxes its unvisited neighbors. A neighbor's
//! predecessor only changes on a strictly shorter distance.

use crate::graph::Graph;
use starmap_core::{GraphError, Result, Vertex, VertexId};
use std::collections::HashMap;
use tracing::{debug, trace};

/// A path length that may be unreachable.
///
/// Finite distances are sums of `u64` edge lengths held as `u128`, so they
/// are exact. `Infinite` orders after every finite distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u128),
    Infinite,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, if any.
    pub fn finite(self) -> Option<u128> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}

/// Shortest-path solver over a read-only graph.
///
/// Indexes the graph once, so it can be run from many sources.
pub struct PathFinder<'g> {
    graph: &'g Graph,
    /// Dense slot to vertex id, ascending.
    ids: Vec<VertexId>,
    slots: HashMap<VertexId, usize>,
    /// Per slot: (neighbor slot, edge length) in edge insertion order.
    adjacency: Vec<Vec<(usize, u64)>>,
}

impl<'g> PathFinder<'g> {
    /// Creates a solver for the graph's current state.
    pub fn new(graph: &'g Graph) -> Self {
        let ids: Vec<VertexId> = graph.vertex_ids().collect();
        let slots: HashMap<VertexId, usize> =
            ids.iter().enumerate().map(|(slot, &id)| (id, slot)).collect();

        let adjacency = ids
            .iter()
            .map(|&id| {
                graph
                    .neighbor_ids(id)
                    .unwrap_or_default()
                    .iter()
                    .filter_map(|neighbor| {
                        let slot = *slots.get(neighbor)?;
                        let length = graph.edge_for(id, *neighbor)?.length();
                        Some((slot, length))
                    })
                    .collect()
            })
            .collect();

        Self {
            graph,
            ids,
            slots,
            adjacency,
        }
    }

    /// Runs Dijkstra from `source`.
    pub fn run(&self, source: &Vertex) -> Result<ShortestPaths<'_>> {
        let slot = self.slot(source)?;
        Ok(self.run_from(slot))
    }

    fn run_from(&self, source: usize) -> ShortestPaths<'_> {
        let n = self.ids.len();
        let mut distances = vec![Distance::Infinite; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        distances[source] = Distance::Finite(0);

        for _ in 0..n {
            let next = (0..n)
                .filter(|&slot| !visited[slot])
                .min_by_key(|&slot| distances[slot]);
            // Only unreachable vertices remain once the minimum is infinite.
            let Some((current, Distance::Finite(base))) =
                next.map(|slot| (slot, distances[slot]))
            else {
                break;
            };
            visited[current] = true;

            for &(neighbor, length) in &self.adjacency[current] {
                if visited[neighbor] {
                    continue;
                }
                let candidate = Distance::Finite(base + u128::from(length));
                if candidate < distances[neighbor] {
                    distances[neighbor] = candidate;
                    predecessors[neighbor] = Some(current);
                }
            }
        }

        trace!(
            source = self.ids[source],
            reached = distances.iter().filter(|d| d.is_finite()).count(),
            "dijkstra finished"
        );

        ShortestPaths {
            finder: self,
            source,
            distances,
            predecessors,
        }
    }

    fn slot(&self, v: &Vertex) -> Result<usize> {
        self.slots
            .get(&v.id())
            .copied()
            .ok_or(GraphError::VertexNotFound(v.id()))
    }

    fn vertex_at(&self, slot: usize) -> Option<&'g Vertex> {
        self.graph.vertex(self.ids[slot])
    }

    /// Largest finite shortest-path distance over all ordered pairs.
    ///
    /// Unreachable pairs are ignored. Returns `Infinite` when no pair of
    /// distinct vertices has a finite positive distance.
    pub fn diameter(&self) -> Distance {
        let longest = (0..self.ids.len())
            .filter_map(|slot| self.run_from(slot).max_finite())
            .max()
            .unwrap_or(0);

        if longest == 0 {
            Distance::Infinite
        } else {
            Distance::Finite(longest)
        }
    }
}

/// Result of a single-source run.
pub struct ShortestPaths<'f> {
    finder: &'f PathFinder<'f>,
    source: usize,
    distances: Vec<Distance>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths<'_> {
    /// The vertex the run started from.
    pub fn source(&self) -> Option<&Vertex> {
        self.finder.vertex_at(self.source)
    }

    /// Shortest distance from the source to `v`.
    pub fn distance_to(&self, v: &Vertex) -> Result<Distance> {
        let slot = self.finder.slot(v)?;
        Ok(self.distances[slot])
    }

    /// Vertices on the shortest path from the source to `v`, both included.
    ///
    /// Empty if `v` is unreachable.
    pub fn path_to(&self, v: &Vertex) -> Result<Vec<Vertex>> {
        let slot = self.finder.slot(v)?;
        if !self.distances[slot].is_finite() {
            return Ok(Vec::new());
        }

        let mut slots = vec![slot];
        let mut current = slot;
        while let Some(previous) = self.predecessors[current] {
            slots.push(previous);
            current = previous;
        }
        slots.reverse();

        Ok(slots
            .into_iter()
            .filter_map(|slot| self.finder.vertex_at(slot).cloned())
            .collect())
    }

    /// Copy of the distance to every vertex in the graph.
    pub fn distances(&self) -> HashMap<Vertex, Distance> {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(slot, &d)| Some((self.finder.vertex_at(slot)?.clone(), d)))
            .collect()
    }

    /// Largest finite distance reached, counting the source itself.
    pub fn max_finite(&self) -> Option<u128> {
        self.distances.iter().filter_map(|d| d.finite()).max()
    }
}

impl Graph {
    /// Shortest distance from `source` to every vertex.
    ///
    /// Unreachable vertices map to [`Distance::Infinite`].
    pub fn shortest_distances(&self, source: &Vertex) -> Result<HashMap<Vertex, Distance>> {
        let finder = PathFinder::new(self);
        let paths = finder.run(source)?;
        Ok(paths.distances())
    }

    /// Vertices on a shortest path from `source` to `sink`, both included.
    ///
    /// Empty if `sink` is unreachable. A path from a vertex to itself is
    /// that single vertex.
    pub fn shortest_path(&self, source: &Vertex, sink: &Vertex) -> Result<Vec<Vertex>> {
        let finder = PathFinder::new(self);
        let paths = finder.run(source)?;
        paths.path_to(sink)
    }

    /// Length of the longest shortest path between any two mutually
    /// reachable vertices. See [`PathFinder::diameter`].
    pub fn diameter(&self) -> Distance {
        let diameter = PathFinder::new(self).diameter();
        debug!(vertices = self.vertex_count(), %diameter, "computed diameter");
        diameter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{connected_graph, edge, reference_graph, small_graph, vertex};
    use petgraph::graph::{NodeIndex, UnGraph};
    use petgraph::visit::EdgeRef;
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Minimum length over every simple path, by exhaustive search.
    fn brute_force_distance(graph: &Graph, from: &Vertex, to: &Vertex) -> Distance {
        fn walk(
            graph: &Graph,
            at: VertexId,
            to: VertexId,
            so_far: u128,
            seen: &mut HashSet<VertexId>,
            best: &mut Option<u128>,
        ) {
            if at == to {
                *best = Some(best.map_or(so_far, |b| b.min(so_far)));
                return;
            }
            for &next in graph.neighbor_ids(at).unwrap() {
                if seen.insert(next) {
                    let length = graph.edge_for(at, next).unwrap().length();
                    walk(graph, next, to, so_far + u128::from(length), seen, best);
                    seen.remove(&next);
                }
            }
        }

        let mut best = None;
        let mut seen = HashSet::from([from.id()]);
        walk(graph, from.id(), to.id(), 0, &mut seen, &mut best);
        best.map_or(Distance::Infinite, Distance::Finite)
    }

    fn petgraph_distances(graph: &Graph, source: &Vertex) -> HashMap<VertexId, u64> {
        let mut oracle: UnGraph<VertexId, u64> = UnGraph::new_undirected();
        let nodes: HashMap<VertexId, NodeIndex> = graph
            .vertices()
            .map(|v| (v.id(), oracle.add_node(v.id())))
            .collect();
        for e in graph.all_edges() {
            oracle.add_edge(nodes[&e.v1().id()], nodes[&e.v2().id()], e.length());
        }
        petgraph::algo::dijkstra(&oracle, nodes[&source.id()], None, |e| *e.weight())
            .into_iter()
            .map(|(node, d)| (oracle[node], d))
            .collect()
    }

    #[test]
    fn test_distance_ordering() {
        assert!(Distance::Finite(u128::MAX) < Distance::Infinite);
        assert!(Distance::Finite(3) < Distance::Finite(4));
        assert_eq!(Distance::Finite(7).finite(), Some(7));
        assert_eq!(Distance::Infinite.finite(), None);
        assert_eq!(Distance::Infinite.to_string(), "inf");
    }

    #[test]
    fn test_shortest_path_reference() {
        let graph = reference_graph(3);
        let path = graph.shortest_path(&vertex(0), &vertex(8)).unwrap();
        assert_eq!(path, vec![vertex(0), vertex(7), vertex(8)]);
        assert_eq!(graph.path_length(&path), Ok(15));
    }

    #[test]
    fn test_shortest_distances_reference() {
        let graph = reference_graph(3);
        let distances = graph.shortest_distances(&vertex(4)).unwrap();
        let expected = [
            (0, 21),
            (1, 22),
            (2, 14),
            (3, 9),
            (4, 0),
            (5, 10),
            (6, 12),
            (7, 13),
            (8, 17),
        ];
        for (id, d) in expected {
            assert_eq!(distances[&vertex(id)], Distance::Finite(d), "to {}", id);
        }
    }

    #[test]
    fn test_long_edges_keep_exact_distances() {
        let mut graph = Graph::new();
        for id in 0..4 {
            graph.add_vertex(vertex(id));
        }
        for id in 0..3 {
            graph.add_edge(edge(id, id + 1, i64::MAX));
        }

        let expected = 3 * u128::from(i64::MAX.unsigned_abs());
        let distances = graph.shortest_distances(&vertex(0)).unwrap();
        assert_eq!(distances[&vertex(3)], Distance::Finite(expected));
        assert!(distances[&vertex(3)] > Distance::Finite(u128::from(u64::MAX)));

        let path = graph.shortest_path(&vertex(0), &vertex(3)).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(graph.path_length(&path), Ok(expected));
        assert_eq!(graph.diameter(), Distance::Finite(expected));
    }

    #[test]
    fn test_shortest_path_unreachable() {
        let mut graph = reference_graph(2);
        graph.remove_edge(&edge(3, 4, 9));
        graph.remove_edge(&edge(5, 4, 10));

        assert!(graph.shortest_path(&vertex(0), &vertex(4)).unwrap().is_empty());
        let distances = graph.shortest_distances(&vertex(0)).unwrap();
        assert_eq!(distances[&vertex(4)], Distance::Infinite);
        assert!(distances[&vertex(3)].is_finite());
    }

    #[test]
    fn test_shortest_path_to_self() {
        let graph = reference_graph(2);
        assert_eq!(
            graph.shortest_path(&vertex(5), &vertex(5)).unwrap(),
            vec![vertex(5)]
        );

        let mut lonely = Graph::new();
        lonely.add_vertex(vertex(1));
        assert_eq!(
            lonely.shortest_path(&vertex(1), &vertex(1)).unwrap(),
            vec![vertex(1)]
        );
    }

    #[test]
    fn test_shortest_path_absent_vertex() {
        let graph = reference_graph(2);
        assert_eq!(
            graph.shortest_path(&vertex(42), &vertex(0)),
            Err(GraphError::VertexNotFound(42))
        );
        assert_eq!(
            graph.shortest_path(&vertex(0), &vertex(42)),
            Err(GraphError::VertexNotFound(42))
        );
    }

    #[test]
    fn test_path_finder_reuse() {
        let graph = reference_graph(3);
        let finder = PathFinder::new(&graph);
        let from_zero = finder.run(&vertex(0)).unwrap();
        let from_four = finder.run(&vertex(4)).unwrap();

        assert_eq!(from_zero.source(), Some(&vertex(0)));
        assert_eq!(from_zero.distance_to(&vertex(4)), Ok(Distance::Finite(21)));
        assert_eq!(from_four.distance_to(&vertex(0)), Ok(Distance::Finite(21)));
        assert_eq!(from_four.max_finite(), Some(22));
    }

    #[test]
    fn test_diameter_reference() {
        assert_eq!(reference_graph(3).diameter(), Distance::Finite(22));
    }

    #[test]
    fn test_diameter_partially_connected() {
        let mut graph = Graph::new();
        for id in 0..=8 {
            graph.add_vertex(vertex(id));
        }
        graph.add_edge(edge(3, 4, 9));
        assert_eq!(graph.diameter(), Distance::Finite(9));
    }

    #[test]
    fn test_diameter_without_edges() {
        let mut graph = Graph::new();
        assert_eq!(graph.diameter(), Distance::Infinite);

        graph.add_vertex(vertex(0));
        assert_eq!(graph.diameter(), Distance::Infinite);

        for id in 1..=8 {
            graph.add_vertex(vertex(id));
        }
        assert_eq!(graph.diameter(), Distance::Infinite);
        assert_eq!(graph.edge_length_sum(), 0);
    }

    #[test]
    fn test_diameter_zero_length_edges() {
        let mut graph = Graph::new();
        graph.add_vertex(vertex(0));
        graph.add_vertex(vertex(1));
        graph.add_edge(edge(0, 1, 0));
        assert_eq!(graph.diameter(), Distance::Infinite);
    }

    proptest! {
        #[test]
        fn prop_distances_match_brute_force(graph in small_graph()) {
            for source in graph.vertices() {
                let distances = graph.shortest_distances(source).unwrap();
                prop_assert_eq!(distances.len(), graph.vertex_count());
                for target in graph.vertices() {
                    prop_assert_eq!(
                        distances[target],
                        brute_force_distance(&graph, source, target)
                    );
                }
            }
        }

        #[test]
        fn prop_distances_match_petgraph(graph in connected_graph()) {
            for source in graph.vertices() {
                let ours = graph.shortest_distances(source).unwrap();
                let oracle = petgraph_distances(&graph, source);
                for (v, d) in ours {
                    prop_assert_eq!(d.finite(), oracle.get(&v.id()).map(|&d| u128::from(d)));
                }
            }
        }

        #[test]
        fn prop_path_length_matches_distance(graph in small_graph()) {
            let finder = PathFinder::new(&graph);
            for source in graph.vertices() {
                let paths = finder.run(source).unwrap();
                for sink in graph.vertices() {
                    let path = paths.path_to(sink).unwrap();
                    match paths.distance_to(sink).unwrap() {
                        Distance::Infinite => prop_assert!(path.is_empty()),
                        Distance::Finite(d) => {
                            prop_assert_eq!(path.first(), Some(source));
                            prop_assert_eq!(path.last(), Some(sink));
                            prop_assert_eq!(graph.path_length(&path), Ok(d));
                        }
                    }
                }
            }
        }

        #[test]
        fn prop_diameter_is_max_finite_pair(graph in small_graph()) {
            let mut longest = 0;
            for a in graph.vertices() {
                for b in graph.vertices() {
                    if let Distance::Finite(d) = brute_force_distance(&graph, a, b) {
                        longest = longest.max(d);
                    }
                }
            }
            let expected = if longest == 0 {
                Distance::Infinite
            } else {
                Distance::Finite(longest)
            };
            prop_assert_eq!(graph.diameter(), expected);
        }
    }
}
