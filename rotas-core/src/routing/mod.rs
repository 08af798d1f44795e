//! Shortest-path routing over the street network

pub mod dijkstra;
mod matrix;
mod route;
mod to_geojson;

pub use dijkstra::shortest_distances;
pub use matrix::distance_matrix;
pub use route::{Route, RoutingError, compute_route};
