pub use crate::CORNER_CATEGORY;
pub use crate::NO_STREET;

// Re-export key components
pub use crate::loading::{NetworkConfig, create_network};
pub use crate::model::{PointInfo, RoutingNetwork, StreetGraph, Vertex, VertexInfo, VertexStore};
pub use crate::routing::{
    Route, RoutingError, compute_route, distance_matrix, shortest_distances,
};

// Core types
pub use crate::Coordinate;
pub use crate::Distance; // meters
pub use crate::Error;
pub use crate::VertexId;
