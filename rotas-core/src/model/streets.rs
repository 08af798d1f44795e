//! Directed street graph over dense vertex ids

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::{Distance, VertexId};

/// Street graph edge (one walkable direction of a street segment)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreetEdge {
    /// Segment length in meters
    pub distance: Distance,
}

/// Adjacency structure whose node indices coincide with vertex ids.
///
/// Two-way streets are stored as a pair of opposite edges. Parallel edges
/// are kept as loaded.
#[derive(Debug, Clone, Default)]
pub struct StreetGraph {
    pub(crate) graph: DiGraph<VertexId, StreetEdge>,
}

impl StreetGraph {
    /// Graph with `count` vertices and no edges
    pub fn with_vertices(count: usize) -> Self {
        let mut graph = DiGraph::with_capacity(count, count * 2);
        for id in 0..count {
            graph.add_node(id);
        }
        Self { graph }
    }

    /// Adds a directed edge. Returns `false` if either endpoint is unknown.
    pub fn add_edge(
        &mut self,
        origin: VertexId,
        destination: VertexId,
        distance: Distance,
    ) -> bool {
        if origin >= self.vertex_count() || destination >= self.vertex_count() {
            return false;
        }
        self.graph.add_edge(
            NodeIndex::new(origin),
            NodeIndex::new(destination),
            StreetEdge { distance },
        );
        true
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Outgoing `(neighbor, distance)` pairs; empty for unknown or isolated vertices
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = (VertexId, Distance)> + '_ {
        let edges = (id < self.vertex_count()).then(|| self.graph.edges(NodeIndex::new(id)));
        edges
            .into_iter()
            .flatten()
            .map(|edge| (edge.target().index(), edge.weight().distance))
    }

    /// Cheapest direct edge from `origin` to `destination`
    pub fn edge_distance(&self, origin: VertexId, destination: VertexId) -> Option<Distance> {
        self.neighbors(origin)
            .filter(|&(target, _)| target == destination)
            .map(|(_, distance)| distance)
            .min()
    }
}
