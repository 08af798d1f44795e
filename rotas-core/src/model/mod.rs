//! Data model for walking-route computation
//!
//! Contains the vertex store, the directed street graph and the network
//! that ties both together.

pub mod network;
pub mod streets;
pub mod vertices;

pub use network::{PointInfo, RoutingNetwork, VertexInfo};
pub use streets::{StreetEdge, StreetGraph};
pub use vertices::{Vertex, VertexStore};
