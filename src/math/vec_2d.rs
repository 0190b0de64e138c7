//! Free-function 2D vector and point helpers.

use std::f64::consts::TAU;

use super::{cmp, Point2, Vector2, TOLERANCE};

/// 2D cross product (z-component of the 3D cross).
#[inline]
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Angle of a vector in `[0, 2π)`, measured counter-clockwise from +x.
#[must_use]
pub fn slope(v: &Vector2) -> f64 {
    let angle = v.y.atan2(v.x);
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// Rotates a vector by -90° (clockwise).
#[inline]
#[must_use]
pub fn rotate_90_cw(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// Rotates a vector by +90° (counter-clockwise).
#[inline]
#[must_use]
pub fn rotate_90_ccw(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Tolerance equality of two points, coordinate-wise.
#[inline]
#[must_use]
pub fn points_equal(a: &Point2, b: &Point2) -> bool {
    cmp::eq(a.x, b.x) && cmp::eq(a.y, b.y)
}

/// Normalizes a vector, or returns the zero vector for a zero-length input.
#[must_use]
pub fn unit_or_zero(v: &Vector2) -> Vector2 {
    let len = v.norm();
    if len < TOLERANCE {
        Vector2::zeros()
    } else {
        v / len
    }
}
