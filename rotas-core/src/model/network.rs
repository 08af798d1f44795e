//! The loaded routing network and the metadata queries served from it

use geo::Rect;

use super::{StreetGraph, Vertex, VertexStore};
use crate::{Coordinate, Error, VertexId};

/// Vertex metadata returned by id-based lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexInfo<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub x: Coordinate,
    pub y: Coordinate,
}

/// Point-of-interest metadata returned by index-based enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointInfo<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub id: VertexId,
    pub x: Coordinate,
    pub y: Coordinate,
}

impl<'a> From<&'a Vertex> for VertexInfo<'a> {
    fn from(vertex: &'a Vertex) -> Self {
        Self {
            name: &vertex.name,
            category: &vertex.category,
            x: vertex.x(),
            y: vertex.y(),
        }
    }
}

impl<'a> From<&'a Vertex> for PointInfo<'a> {
    fn from(vertex: &'a Vertex) -> Self {
        Self {
            name: &vertex.name,
            category: &vertex.category,
            id: vertex.id,
            x: vertex.x(),
            y: vertex.y(),
        }
    }
}

/// Street network loaded once and shared read-only by every query
#[derive(Debug, Clone)]
pub struct RoutingNetwork {
    pub vertices: VertexStore,
    pub graph: StreetGraph,
}

impl RoutingNetwork {
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] if the graph and the store disagree on
    /// the number of vertices.
    pub fn new(vertices: VertexStore, graph: StreetGraph) -> Result<Self, Error> {
        if vertices.count() != graph.vertex_count() {
            return Err(Error::InvalidData(format!(
                "graph has {} vertices but the store holds {}",
                graph.vertex_count(),
                vertices.count()
            )));
        }
        Ok(Self { vertices, graph })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn point_count(&self) -> usize {
        self.vertices.point_count()
    }

    pub fn vertex(&self, id: VertexId) -> Result<&Vertex, Error> {
        self.vertices.get(id).ok_or(Error::VertexNotFound(id))
    }

    pub fn vertex_info(&self, id: VertexId) -> Result<VertexInfo<'_>, Error> {
        self.vertex(id).map(VertexInfo::from)
    }

    /// Street of a vertex; `Ok(None)` when the dataset records none
    pub fn street_of(&self, id: VertexId) -> Result<Option<&str>, Error> {
        self.vertex(id).map(|vertex| vertex.street.as_deref())
    }

    pub fn point_info(&self, index: usize) -> Result<PointInfo<'_>, Error> {
        self.vertices
            .point(index)
            .map(PointInfo::from)
            .ok_or(Error::PointNotFound(index))
    }

    pub fn nearest_vertex(&self, x: Coordinate, y: Coordinate) -> Option<VertexId> {
        self.vertices.nearest(x, y)
    }

    pub fn bounds(&self) -> Option<Rect<Coordinate>> {
        self.vertices.bounds()
    }

    pub fn summary(&self) -> String {
        format!(
            "RoutingNetwork with {} vertices, {} points of interest and {} edges",
            self.vertex_count(),
            self.point_count(),
            self.edge_count()
        )
    }
}
