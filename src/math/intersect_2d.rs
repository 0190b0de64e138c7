//! Intersections of an infinite line with segment and arc primitives.
//!
//! The line is given in normal form: a point on the line plus a unit normal.
//! The signed distance of a point `p` is `dot(p - origin, normal)`.

use std::f64::consts::TAU;

use super::vec_2d::{points_equal, rotate_90_cw};
use super::{cmp, Point2, Vector2, TOLERANCE};

/// Intersection of an infinite line with a bounded segment.
///
/// Returns one point for a proper crossing, both endpoints when the segment
/// is collinear with the line, and nothing otherwise. The collinear case is
/// load-bearing: ray intersection relies on seeing both endpoints of a
/// segment that lies on the ray's line.
#[must_use]
pub fn line_segment_intersect_2d(
    origin: &Point2,
    normal: &Vector2,
    start: &Point2,
    end: &Point2,
) -> Vec<Point2> {
    let d0 = (start - origin).dot(normal);
    let d1 = (end - origin).dot(normal);

    if cmp::eq_zero(d0) && cmp::eq_zero(d1) {
        if points_equal(start, end) {
            return vec![*start];
        }
        return vec![*start, *end];
    }

    // Both endpoints strictly on the same side: no crossing.
    if (cmp::gt(d0, 0.0) && cmp::gt(d1, 0.0)) || (cmp::lt(d0, 0.0) && cmp::lt(d1, 0.0)) {
        return Vec::new();
    }

    let t = (d0 / (d0 - d1)).clamp(0.0, 1.0);
    vec![start + (end - start) * t]
}

/// Intersection of an infinite line with a circular arc.
///
/// The arc is in center/radius/start-angle/signed-sweep form (positive
/// sweep is counter-clockwise). Returns 0, 1 (tangent) or 2 points, each
/// filtered by the arc's angular range.
#[must_use]
pub fn line_arc_intersect_2d(
    origin: &Point2,
    normal: &Vector2,
    center: &Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
) -> Vec<Point2> {
    let mut results = Vec::new();
    if radius < TOLERANCE || sweep.abs() < TOLERANCE {
        return results;
    }

    // Signed distance from the circle center to the line.
    let d = (center - origin).dot(normal);
    let h_sq = radius * radius - d * d;
    if h_sq < -TOLERANCE {
        return results;
    }
    let h = h_sq.max(0.0).sqrt();

    let foot = center - normal * d;
    let dir = rotate_90_cw(normal);

    // Tangent case: single touch point at the foot of the perpendicular.
    let candidates = if h < TOLERANCE {
        vec![foot]
    } else {
        vec![foot + dir * h, foot - dir * h]
    };

    for p in candidates {
        let angle = (p.y - center.y).atan2(p.x - center.x);
        if arc_contains_angle(angle, start_angle, sweep) {
            results.push(p);
        }
    }

    results
}

/// Whether an absolute angle falls within an arc's swept angular range.
#[must_use]
pub fn arc_contains_angle(angle: f64, start_angle: f64, sweep: f64) -> bool {
    if sweep.abs() < TOLERANCE {
        return false;
    }
    let eps = TOLERANCE * 100.0;

    // Angular offset from start_angle, normalized to the sweep direction.
    let mut delta = angle - start_angle;
    if sweep > 0.0 {
        while delta < -eps {
            delta += TAU;
        }
        while delta > TAU + eps {
            delta -= TAU;
        }
    } else {
        while delta > eps {
            delta -= TAU;
        }
        while delta < -TAU - eps {
            delta += TAU;
        }
    }

    let t = delta / sweep;
    t >= -eps && t <= 1.0 + eps
}
