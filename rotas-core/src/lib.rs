//! Routing backend for a walking map: a street graph of dense vertex ids,
//! Dijkstra shortest paths and the vertex metadata a map front-end needs
//! to build its pick-lists.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{NetworkConfig, create_network};
pub use model::{RoutingNetwork, StreetGraph, Vertex, VertexStore};
pub use routing::{Route, RoutingError, compute_route, distance_matrix};

/// Dense vertex identifier, `0..vertex_count`
pub type VertexId = usize;
/// Edge weight and path length in meters
pub type Distance = u32;
/// Planar map coordinate
pub type Coordinate = i32;

/// Category of bare street corners, which are routable but never listed
pub const CORNER_CATEGORY: &str = "Esquina";
/// Street value the dataset uses for "no street"
pub const NO_STREET: &str = "N/A";
