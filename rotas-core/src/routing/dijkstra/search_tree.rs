use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use log::{trace, warn};

use super::state::State;
use crate::model::StreetGraph;
use crate::{Distance, VertexId};

/// Distances and predecessor links produced by one Dijkstra run
#[derive(Debug, Clone)]
pub(crate) struct SearchTree {
    source: VertexId,
    distances: Vec<Option<Distance>>,
    predecessors: Vec<Option<VertexId>>,
}

impl SearchTree {
    pub(crate) fn distance(&self, vertex: VertexId) -> Option<Distance> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Vertex sequence from the source to `target`, `None` if never reached
    pub(crate) fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
            // A predecessor cycle would mean a corrupted tree
            if path.len() > self.predecessors.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    pub(crate) fn into_distances(self) -> Vec<Option<Distance>> {
        self.distances
    }
}

/// Dijkstra's algorithm from `source` over the street graph.
///
/// Stops early once `target` is settled. A vertex's predecessor is replaced
/// only on a strict improvement, so among equal-cost paths the first one
/// discovered is kept.
pub(crate) fn dijkstra_tree(
    graph: &StreetGraph,
    source: VertexId,
    target: Option<VertexId>,
) -> SearchTree {
    let vertex_count = graph.vertex_count();
    let mut distances: Vec<Option<Distance>> = vec![None; vertex_count];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; vertex_count];
    let mut settled = FixedBitSet::with_capacity(vertex_count);
    let mut heap = BinaryHeap::with_capacity(vertex_count / 4 + 1);

    if source < vertex_count {
        distances[source] = Some(0);
        heap.push(State {
            cost: 0,
            vertex: source,
        });
    }

    while let Some(State { cost, vertex }) = heap.pop() {
        // Skip stale heap entries
        if settled.put(vertex) {
            continue;
        }

        if target == Some(vertex) {
            break;
        }

        for (next, distance) in graph.neighbors(vertex) {
            if settled.contains(next) {
                continue;
            }
            let Some(next_cost) = cost.checked_add(distance) else {
                warn!("Distance overflow relaxing {vertex} -> {next}");
                continue;
            };

            if distances[next].is_none_or(|best| next_cost < best) {
                trace!("Relaxed {vertex} -> {next}: {next_cost}m");
                distances[next] = Some(next_cost);
                predecessors[next] = Some(vertex);
                heap.push(State {
                    cost: next_cost,
                    vertex: next,
                });
            }
        }
    }

    SearchTree {
        source,
        distances,
        predecessors,
    }
}

/// Shortest distance from `source` to every vertex; `None` where unreachable
pub fn shortest_distances(graph: &StreetGraph, source: VertexId) -> Vec<Option<Distance>> {
    dijkstra_tree(graph, source, None).into_distances()
}
