use std::f64::consts::FRAC_PI_2;

use crate::math::intersect_2d::arc_contains_angle;
use crate::math::{Point2, Vector2};

use super::aabb::Aabb;

/// A circular arc in center/radius/start-angle/sweep form.
///
/// The sweep angle is signed: positive sweeps counter-clockwise, negative
/// clockwise. A sweep of ±2π describes a full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
}

impl Arc {
    /// Creates a new arc.
    #[must_use]
    pub fn new(center: Point2, radius: f64, start_angle: f64, sweep: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            sweep,
        }
    }

    /// Returns the center of the arc circle.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the start angle in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the signed sweep angle in radians.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.point_at_angle(self.start_angle)
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.point_at_angle(self.start_angle + self.sweep)
    }

    /// Returns the arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }

    /// Whether an absolute angle lies within the swept range.
    #[must_use]
    pub fn contains_angle(&self, angle: f64) -> bool {
        arc_contains_angle(angle, self.start_angle, self.sweep)
    }

    /// Bounding box of the arc.
    ///
    /// Covers both endpoints plus every axis-extreme circle point (angles
    /// 0, π/2, π, 3π/2) the sweep passes through. Interior vertical
    /// extrema matter: the ray-shooting tangency rule compares hit points
    /// against this box's ymin/ymax.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        let mut b = Aabb::from_point(&self.start()).merge(&Aabb::from_point(&self.end()));
        for quadrant in 0..4 {
            let angle = f64::from(quadrant) * FRAC_PI_2;
            if self.contains_angle(angle) {
                b = b.merge(&Aabb::from_point(&self.point_at_angle(angle)));
            }
        }
        b
    }

    /// Unit direction in which the arc departs from its start point.
    #[must_use]
    pub fn tangent_in_start(&self) -> Vector2 {
        self.travel_direction(self.start_angle)
    }

    /// Unit direction in which the arc departs from its end point, i.e.
    /// pointing back along the curve.
    #[must_use]
    pub fn tangent_in_end(&self) -> Vector2 {
        -self.travel_direction(self.start_angle + self.sweep)
    }

    fn point_at_angle(&self, angle: f64) -> Point2 {
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Unit tangent at the given absolute angle, oriented along the sweep.
    fn travel_direction(&self, angle: f64) -> Vector2 {
        let sign = if self.sweep >= 0.0 { 1.0 } else { -1.0 };
        Vector2::new(-sign * angle.sin(), sign * angle.cos())
    }
}
