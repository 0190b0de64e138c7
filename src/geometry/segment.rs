use crate::math::vec_2d::unit_or_zero;
use crate::math::{Point2, Vector2};

use super::aabb::Aabb;

/// A bounded straight segment between two points.
///
/// Zero-length segments are legal; they occur in degenerate polygon
/// boundaries and are skipped, not rejected, by the algorithms that walk
/// them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
}

impl Segment {
    /// Creates a segment from its endpoints.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Bounding box of the segment.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    /// Unit direction in which the segment departs from its start point.
    ///
    /// Zero for a zero-length segment.
    #[must_use]
    pub fn tangent_in_start(&self) -> Vector2 {
        unit_or_zero(&(self.end - self.start))
    }

    /// Unit direction in which the segment departs from its end point,
    /// i.e. pointing back toward the start.
    ///
    /// Zero for a zero-length segment.
    #[must_use]
    pub fn tangent_in_end(&self) -> Vector2 {
        unit_or_zero(&(self.start - self.end))
    }
}
