use crate::math::{cmp, Point2};

/// An axis-aligned bounding box in the plane.
///
/// Any bound may be infinite, so a box can describe the half-infinite
/// reach of a ray as well as a finite shape extent. A query point uses a
/// degenerate zero-area box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Aabb {
    /// The identity for [`merge`](Self::merge): intersects nothing.
    pub const EMPTY: Self = Self {
        xmin: f64::INFINITY,
        ymin: f64::INFINITY,
        xmax: f64::NEG_INFINITY,
        ymax: f64::NEG_INFINITY,
    };

    /// Creates a box from its bounds.
    #[must_use]
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Degenerate zero-area box around a single point.
    #[must_use]
    pub fn from_point(p: &Point2) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    /// Tolerance-aware interval-overlap test.
    ///
    /// Touching boxes count as intersecting, which keeps boundary points
    /// from being rejected by the fast-reject prefilters.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        le_with_inf(self.xmin, other.xmax)
            && le_with_inf(other.xmin, self.xmax)
            && le_with_inf(self.ymin, other.ymax)
            && le_with_inf(other.ymin, self.ymax)
    }

    /// Smallest box covering both operands.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self::new(
            self.xmin.min(other.xmin),
            self.ymin.min(other.ymin),
            self.xmax.max(other.xmax),
            self.ymax.max(other.ymax),
        )
    }

    /// True when all four bounds are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.xmin.is_finite()
            && self.ymin.is_finite()
            && self.xmax.is_finite()
            && self.ymax.is_finite()
    }
}

/// `a <= b` with tolerance, exact on equal infinities.
///
/// `cmp::le` is false for two like-signed infinities; box overlap must
/// treat those as ordered.
fn le_with_inf(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    cmp::le(a, b)
}
