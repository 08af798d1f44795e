//! Street vertices: corners and points of interest

use geo::{BoundingRect, MultiPoint, Point, Rect};
use rstar::{RTree, primitives::GeomWithData};

use crate::{CORNER_CATEGORY, Coordinate, Error, VertexId};

/// Vertex geometry in the R-tree, widened so squared distances cannot overflow
type IndexedVertex = GeomWithData<[i64; 2], VertexId>;

/// Street graph vertex
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Dense id, equal to the vertex position in the store
    pub id: VertexId,
    /// Display name, may be empty for plain corners
    pub name: String,
    /// Category tag, `Esquina` for corners
    pub category: String,
    /// Street the vertex sits on
    pub street: Option<String>,
    /// Position in the routable graph's coordinate space
    pub geometry: Point<Coordinate>,
}

impl Vertex {
    pub fn x(&self) -> Coordinate {
        self.geometry.x()
    }

    pub fn y(&self) -> Coordinate {
        self.geometry.y()
    }

    /// Whether the vertex belongs in user-facing pick-lists
    pub fn is_point_of_interest(&self) -> bool {
        !self.category.is_empty() && self.category != CORNER_CATEGORY && !self.name.is_empty()
    }
}

/// Immutable, id-indexed collection of every vertex in the network
#[derive(Debug, Clone)]
pub struct VertexStore {
    vertices: Vec<Vertex>,
    /// Ids of points of interest, ascending
    points: Vec<VertexId>,
    spatial: RTree<IndexedVertex>,
}

impl VertexStore {
    /// Builds the store, requiring ids to be exactly `0..N-1` in any order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] on duplicate or missing ids.
    pub fn new(mut vertices: Vec<Vertex>) -> Result<Self, Error> {
        vertices.sort_by_key(|vertex| vertex.id);

        for (position, vertex) in vertices.iter().enumerate() {
            if vertex.id != position {
                return Err(Error::InvalidData(format!(
                    "vertex ids must be contiguous from 0: expected {position}, found {}",
                    vertex.id
                )));
            }
        }

        let points = vertices
            .iter()
            .filter(|vertex| vertex.is_point_of_interest())
            .map(|vertex| vertex.id)
            .collect();

        let spatial = RTree::bulk_load(
            vertices
                .iter()
                .map(|vertex| {
                    GeomWithData::new(
                        [i64::from(vertex.x()), i64::from(vertex.y())],
                        vertex.id,
                    )
                })
                .collect(),
        );

        Ok(Self {
            vertices,
            points,
            spatial,
        })
    }

    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn get(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub fn contains(&self, id: VertexId) -> bool {
        id < self.vertices.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Points of interest in ascending id order
    pub fn points_of_interest(&self) -> impl Iterator<Item = &Vertex> {
        self.points.iter().map(|&id| &self.vertices[id])
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Point of interest at `index` of the filtered list
    pub fn point(&self, index: usize) -> Option<&Vertex> {
        self.points.get(index).map(|&id| &self.vertices[id])
    }

    /// Rectangle enclosing every vertex, `None` for an empty store
    pub fn bounds(&self) -> Option<Rect<Coordinate>> {
        self.vertices
            .iter()
            .map(|vertex| vertex.geometry)
            .collect::<MultiPoint<Coordinate>>()
            .bounding_rect()
    }

    /// Closest vertex to `(x, y)`; equidistant candidates resolve to the lowest id
    pub fn nearest(&self, x: Coordinate, y: Coordinate) -> Option<VertexId> {
        let mut candidates = self
            .spatial
            .nearest_neighbor_iter_with_distance_2(&[i64::from(x), i64::from(y)]);

        let (first, best) = candidates.next()?;
        let nearest = candidates
            .take_while(|&(_, distance)| distance == best)
            .map(|(candidate, _)| candidate.data)
            .fold(first.data, VertexId::min);

        Some(nearest)
    }
}
