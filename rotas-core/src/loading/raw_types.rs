use serde::Deserialize;

use crate::{Coordinate, Distance, VertexId};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VertexRecord {
    pub id: VertexId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub street: String,
    pub x: Coordinate,
    pub y: Coordinate,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct EdgeRecord {
    pub origin: VertexId,
    pub destination: VertexId,
    pub distance: Distance,
}
