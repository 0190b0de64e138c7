pub mod edge;
pub mod ray_shooting;

pub use edge::{Edge, EdgeId};
pub use ray_shooting::{ray_shooting, PointClassification};

use slotmap::SlotMap;

use crate::error::PolygonError;
use crate::geometry::{Aabb, Segment, Shape};
use crate::math::vec_2d::points_equal;
use crate::math::Point2;

/// A polygon bounded by one or more cyclic rings of segment and arc edges.
///
/// Edges live in a generational-index arena; ring navigation is an id
/// lookup, so the cyclic structure needs no reference cycles. Additional
/// rings describe holes and share one even-odd parity count.
#[derive(Debug, Default)]
pub struct Polygon {
    edges: SlotMap<EdgeId, Edge>,
    faces: Vec<EdgeId>,
}

impl Polygon {
    /// Creates a new, empty polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a single-ring polygon from straight-line vertices.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::EmptyFace`] for an empty vertex list.
    pub fn from_points(points: &[Point2]) -> Result<Self, PolygonError> {
        let n = points.len();
        let shapes = (0..n)
            .map(|i| Shape::Segment(Segment::new(points[i], points[(i + 1) % n])))
            .collect();
        let mut polygon = Self::new();
        polygon.add_face(shapes)?;
        Ok(polygon)
    }

    /// Adds a boundary ring and returns the id of its first edge.
    ///
    /// The shapes must chain end-to-start, including from the last shape
    /// back to the first.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::EmptyFace`] for an empty shape list and
    /// [`PolygonError::DisconnectedBoundary`] when consecutive shapes do
    /// not join within tolerance.
    pub fn add_face(&mut self, shapes: Vec<Shape>) -> Result<EdgeId, PolygonError> {
        if shapes.is_empty() {
            return Err(PolygonError::EmptyFace);
        }
        let n = shapes.len();
        for i in 0..n {
            let next = (i + 1) % n;
            if !points_equal(&shapes[i].end(), &shapes[next].start()) {
                return Err(PolygonError::DisconnectedBoundary { index: i, next });
            }
        }

        let ids: Vec<EdgeId> = shapes
            .into_iter()
            .map(|shape| {
                self.edges.insert(Edge {
                    shape,
                    prev: EdgeId::default(),
                    next: EdgeId::default(),
                })
            })
            .collect();
        for (i, &id) in ids.iter().enumerate() {
            self.edges[id].prev = ids[(i + n - 1) % n];
            self.edges[id].next = ids[(i + 1) % n];
        }

        self.faces.push(ids[0]);
        Ok(ids[0])
    }

    /// Returns the edge with the given id, if it exists.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Total number of edges across all rings.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// First-edge ids of the boundary rings.
    #[must_use]
    pub fn faces(&self) -> &[EdgeId] {
        &self.faces
    }

    /// Iterates over all edges in arena order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter()
    }

    /// Bounding box of the whole boundary.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        self.edges
            .values()
            .fold(Aabb::EMPTY, |acc, e| acc.merge(&e.shape.aabb()))
    }

    /// Spatial range query: ids of all edges whose bounding box intersects
    /// the query box, in no particular order.
    ///
    /// A linear scan satisfies the contract; callers depend only on
    /// completeness, not on the index structure behind it.
    #[must_use]
    pub fn search(&self, query: &Aabb) -> Vec<EdgeId> {
        self.edges
            .iter()
            .filter(|(_, e)| e.shape.aabb().intersects(query))
            .map(|(id, _)| id)
            .collect()
    }

    /// Classifies a point against the polygon boundary.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> PointClassification {
        ray_shooting(self, point)
    }
}
