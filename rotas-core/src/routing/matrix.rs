use rayon::prelude::*;

use super::shortest_distances;
use crate::{Distance, RoutingNetwork, VertexId};

/// Shortest distances between every ordered pair of `vertices`.
///
/// Row `i` holds the distances from `vertices[i]`; unreachable pairs and ids
/// outside the network are `None`, the diagonal is `Some(0)` for valid ids.
pub fn distance_matrix(
    network: &RoutingNetwork,
    vertices: &[VertexId],
) -> Vec<Vec<Option<Distance>>> {
    vertices
        .par_iter()
        .map(|&source| {
            if !network.vertices.contains(source) {
                log::warn!("Vertex {source} not in network, row left empty");
                return vec![None; vertices.len()];
            }
            let reached = shortest_distances(&network.graph, source);
            vertices
                .iter()
                .map(|&target| reached.get(target).copied().flatten())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StreetGraph, Vertex, VertexStore};

    fn network() -> RoutingNetwork {
        let vertices = (0..3)
            .map(|id| Vertex {
                id,
                name: format!("v{id}"),
                category: "Bar".into(),
                street: None,
                geometry: geo::Point::new(0, 0),
            })
            .collect();
        let mut graph = StreetGraph::with_vertices(3);
        graph.add_edge(0, 1, 4);
        graph.add_edge(1, 2, 6);
        graph.add_edge(2, 1, 6);
        RoutingNetwork::new(VertexStore::new(vertices).unwrap(), graph).unwrap()
    }

    #[test]
    fn rows_follow_requested_order() {
        let matrix = distance_matrix(&network(), &[2, 0, 1]);
        assert_eq!(
            matrix,
            vec![
                vec![Some(0), None, Some(6)],
                vec![Some(10), Some(0), Some(4)],
                vec![Some(6), None, Some(0)],
            ]
        );
    }

    #[test]
    fn unknown_vertices_produce_empty_rows() {
        let matrix = distance_matrix(&network(), &[0, 7]);
        assert_eq!(matrix[1], vec![None, None]);
        assert_eq!(matrix[0], vec![Some(0), None]);
    }
}
