use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::{line_arc_intersect_2d, line_segment_intersect_2d};
use crate::math::vec_2d::points_equal;
use crate::math::{cmp, Point2, Vector2, TOLERANCE};

use super::aabb::Aabb;
use super::shape::Shape;

/// An infinite line in normal form: a point on the line plus a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    origin: Point2,
    normal: Vector2,
}

impl Line {
    /// Creates a new line through `origin` with the given normal.
    ///
    /// The normal is normalized on construction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a zero-length normal.
    pub fn new(origin: Point2, normal: Vector2) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            normal: normal / len,
        })
    }

    /// Constructor for callers that already hold a validated unit normal.
    pub(crate) fn from_unit_normal(origin: Point2, normal: Vector2) -> Self {
        Self { origin, normal }
    }

    /// Returns a point on the line.
    #[must_use]
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        self.normal
    }

    /// Whether a point lies on the line, within tolerance.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        cmp::eq_zero((p - self.origin).dot(&self.normal))
    }

    /// Side test: true when `p` is strictly on the side the normal points
    /// toward.
    ///
    /// Callers compare the sides of two points, so only consistency
    /// matters, not which side is called "left".
    #[must_use]
    pub fn left_of(&self, p: &Point2) -> bool {
        cmp::gt((p - self.origin).dot(&self.normal), 0.0)
    }

    /// Intersects the line with a segment or arc shape.
    ///
    /// Line-segment yields one crossing point, or both endpoints when the
    /// segment is collinear with the line. Line-arc yields up to two
    /// points; an exact tangency yields one.
    #[must_use]
    pub fn intersect(&self, shape: &Shape) -> Vec<Point2> {
        match shape {
            Shape::Segment(s) => {
                line_segment_intersect_2d(&self.origin, &self.normal, &s.start(), &s.end())
            }
            Shape::Arc(a) => line_arc_intersect_2d(
                &self.origin,
                &self.normal,
                &a.center(),
                a.radius(),
                a.start_angle(),
                a.sweep(),
            ),
        }
    }

    /// Crossing points of the line with a finite box border.
    ///
    /// Corner hits are deduplicated. Boxes with an infinite bound have no
    /// drawable border and yield nothing.
    #[must_use]
    pub fn intersect_aabb(&self, b: &Aabb) -> Vec<Point2> {
        if !b.is_finite() {
            return Vec::new();
        }
        let corners = [
            Point2::new(b.xmin, b.ymin),
            Point2::new(b.xmax, b.ymin),
            Point2::new(b.xmax, b.ymax),
            Point2::new(b.xmin, b.ymax),
        ];
        let mut crossings: Vec<Point2> = Vec::new();
        for i in 0..4 {
            let side_hits = line_segment_intersect_2d(
                &self.origin,
                &self.normal,
                &corners[i],
                &corners[(i + 1) % 4],
            );
            for p in side_hits {
                if !crossings.iter().any(|q| points_equal(q, &p)) {
                    crossings.push(p);
                }
            }
        }
        crossings
    }
}
