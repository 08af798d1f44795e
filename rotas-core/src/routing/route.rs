use itertools::Itertools;
use log::debug;
use serde::Serialize;
use thiserror::Error;

use super::dijkstra::dijkstra_tree;
use crate::{Distance, RoutingNetwork, VertexId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("Origin and destination are the same vertex ({0})")]
    SameOriginAndDestination(VertexId),
    #[error("Vertex {id} out of range (network has {count} vertices)")]
    VertexOutOfRange { id: VertexId, count: usize },
    #[error("No path from vertex {origin} to vertex {destination}")]
    Unreachable {
        origin: VertexId,
        destination: VertexId,
    },
}

impl RoutingError {
    /// Whether the request was rejected before any search ran
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::SameOriginAndDestination(_) | Self::VertexOutOfRange { .. }
        )
    }
}

/// Shortest walking route between two distinct vertices
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    vertices: Vec<VertexId>,
    distance: Distance,
}

impl Route {
    /// Vertex ids from origin to destination, inclusive
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<VertexId> {
        self.vertices
    }

    /// Sum of the traversed edge weights in meters
    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn distance_km(&self) -> f64 {
        f64::from(self.distance) / 1000.0
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn origin(&self) -> VertexId {
        self.vertices[0]
    }

    pub fn destination(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    /// Points of interest passed along the way, endpoints included, in travel order
    pub fn points_of_interest(&self, network: &RoutingNetwork) -> Vec<VertexId> {
        self.vertices
            .iter()
            .copied()
            .filter(|&id| {
                network
                    .vertices
                    .get(id)
                    .is_some_and(|vertex| vertex.is_point_of_interest())
            })
            .collect()
    }

    /// Streets walked, in order, with consecutive repeats collapsed
    pub fn streets<'a>(&self, network: &'a RoutingNetwork) -> Vec<&'a str> {
        self.vertices
            .iter()
            .filter_map(|&id| network.vertices.get(id)?.street.as_deref())
            .dedup()
            .collect()
    }
}

/// Computes the shortest route from `origin` to `destination`.
///
/// # Errors
///
/// Rejects equal endpoints and ids outside the network before searching;
/// returns [`RoutingError::Unreachable`] when no path exists.
pub fn compute_route(
    network: &RoutingNetwork,
    origin: VertexId,
    destination: VertexId,
) -> Result<Route, RoutingError> {
    validate_route_request(network, origin, destination)?;

    debug!("Computing route {origin} -> {destination}");
    let tree = dijkstra_tree(&network.graph, origin, Some(destination));

    let unreachable = RoutingError::Unreachable {
        origin,
        destination,
    };
    let distance = tree.distance(destination).ok_or(unreachable.clone())?;
    let vertices = tree.path_to(destination).ok_or(unreachable)?;

    debug!(
        "Route {origin} -> {destination}: {} vertices, {distance}m",
        vertices.len()
    );
    Ok(Route { vertices, distance })
}

fn validate_route_request(
    network: &RoutingNetwork,
    origin: VertexId,
    destination: VertexId,
) -> Result<(), RoutingError> {
    if origin == destination {
        return Err(RoutingError::SameOriginAndDestination(origin));
    }

    let count = network.vertex_count();
    for id in [origin, destination] {
        if id >= count {
            return Err(RoutingError::VertexOutOfRange { id, count });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::{EdgeRecord, VertexRecord, network_from_records};

    fn vertex(id: usize, name: &str, category: &str, street: &str) -> VertexRecord {
        VertexRecord {
            id,
            name: name.into(),
            category: category.into(),
            street: street.into(),
            x: 0,
            y: i32::try_from(id).unwrap(),
        }
    }

    /// 0 -> 1 -> 2 -> 3 along two streets, plus a shortcut 0 -> 3 that is longer; 4 is isolated
    fn network() -> RoutingNetwork {
        let edges = [(0, 1, 10), (1, 2, 10), (2, 3, 10), (0, 3, 50)].map(
            |(origin, destination, distance)| EdgeRecord {
                origin,
                destination,
                distance,
            },
        );
        network_from_records(
            vec![
                vertex(0, "Esquina A", "Esquina", "N/A"),
                vertex(1, "Subway", "Restaurante", "R. Marechal Floriano"),
                vertex(2, "Hering", "Comércio", "R. Marechal Floriano"),
                vertex(3, "Banrisul", "Banco", "R. Marechal Deodoro"),
                vertex(4, "Esquina B", "Esquina", "N/A"),
            ],
            &edges,
            false,
        )
        .unwrap()
    }

    #[test]
    fn shortest_route_beats_direct_edge() {
        let route = compute_route(&network(), 0, 3).unwrap();
        assert_eq!(route.vertices(), &[0, 1, 2, 3]);
        assert_eq!(route.distance(), 30);
        assert_eq!(route.origin(), 0);
        assert_eq!(route.destination(), 3);
        assert!((route.distance_km() - 0.03).abs() < f64::EPSILON);
    }

    #[test]
    fn route_to_self_is_invalid() {
        let err = compute_route(&network(), 2, 2).unwrap_err();
        assert_eq!(err, RoutingError::SameOriginAndDestination(2));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn out_of_range_ids_are_invalid() {
        let err = compute_route(&network(), 0, 99).unwrap_err();
        assert_eq!(err, RoutingError::VertexOutOfRange { id: 99, count: 5 });
        assert!(err.is_invalid_input());
        assert!(compute_route(&network(), 99, 0).is_err());
    }

    #[test]
    fn unreachable_is_not_invalid_input() {
        let err = compute_route(&network(), 0, 4).unwrap_err();
        assert_eq!(
            err,
            RoutingError::Unreachable {
                origin: 0,
                destination: 4
            }
        );
        assert!(!err.is_invalid_input());
        // Edges are directed
        assert!(compute_route(&network(), 3, 0).is_err());
    }

    #[test]
    fn presentation_helpers() {
        let network = network();
        let route = compute_route(&network, 0, 3).unwrap();
        assert_eq!(route.points_of_interest(&network), vec![1, 2, 3]);
        assert_eq!(
            route.streets(&network),
            vec!["R. Marechal Floriano", "R. Marechal Deodoro"]
        );
    }
}
