use crate::math::{Point2, Vector2};

use super::aabb::Aabb;
use super::arc::Arc;
use super::segment::Segment;

/// The geometric shape of a polygon edge.
///
/// A closed variant set: every routine that consumes a shape matches it
/// exhaustively, so adding a curve kind is a compile-time event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A straight segment.
    Segment(Segment),
    /// A circular arc.
    Arc(Arc),
}

impl Shape {
    /// Bounding box of the shape.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        match self {
            Self::Segment(s) => s.aabb(),
            Self::Arc(a) => a.aabb(),
        }
    }

    /// Start point of the shape.
    #[must_use]
    pub fn start(&self) -> Point2 {
        match self {
            Self::Segment(s) => s.start(),
            Self::Arc(a) => a.start(),
        }
    }

    /// End point of the shape.
    #[must_use]
    pub fn end(&self) -> Point2 {
        match self {
            Self::Segment(s) => s.end(),
            Self::Arc(a) => a.end(),
        }
    }

    /// Curve length of the shape.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Self::Segment(s) => s.length(),
            Self::Arc(a) => a.length(),
        }
    }

    /// Unit direction departing the start point along the curve.
    #[must_use]
    pub fn tangent_in_start(&self) -> Vector2 {
        match self {
            Self::Segment(s) => s.tangent_in_start(),
            Self::Arc(a) => a.tangent_in_start(),
        }
    }

    /// Unit direction departing the end point back along the curve.
    #[must_use]
    pub fn tangent_in_end(&self) -> Vector2 {
        match self {
            Self::Segment(s) => s.tangent_in_end(),
            Self::Arc(a) => a.tangent_in_end(),
        }
    }
}

impl From<Segment> for Shape {
    fn from(s: Segment) -> Self {
        Self::Segment(s)
    }
}

impl From<Arc> for Shape {
    fn from(a: Arc) -> Self {
        Self::Arc(a)
    }
}
