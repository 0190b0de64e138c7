use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{GeometryError, Result};
use crate::math::vec_2d::{cross, points_equal, rotate_90_cw, slope};
use crate::math::{cmp, Point2, Vector2, TOLERANCE};

use super::aabb::Aabb;
use super::line::Line;
use super::segment::Segment;
use super::shape::Shape;

/// A half-infinite straight path from an origin point.
///
/// Orientation is encoded by a normal vector perpendicular to the travel
/// direction: travel is the normal rotated -90°, so the default normal
/// (0, 1) yields a horizontal ray toward +x. The normal is unit length and
/// never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point2,
    normal: Vector2,
}

/// One piece of a split ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayPart {
    /// The bounded piece between the origin and the split point.
    Segment(Segment),
    /// The remaining half-infinite piece.
    Ray(Ray),
}

/// Presentation attributes for the SVG fragment of a ray.
#[derive(Debug, Clone)]
pub struct SvgAttributes {
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for SvgAttributes {
    fn default() -> Self {
        Self {
            stroke: "black".into(),
            stroke_width: 1.0,
        }
    }
}

impl Ray {
    /// Creates a ray from an origin and a normal vector.
    ///
    /// The normal is normalized on construction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a zero-length normal;
    /// a ray without orientation is a programming error, not a geometric
    /// edge case.
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

    /// Horizontal ray toward +x from the given origin.
    #[must_use]
    pub fn horizontal(origin: Point2) -> Self {
        Self {
            origin,
            normal: Vector2::new(0.0, 1.0),
        }
    }

    /// Returns the origin point.
    #[must_use]
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        self.normal
    }

    /// Start point of the ray; a ray has no end point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.origin
    }

    /// A ray is unbounded.
    #[must_use]
    pub fn length(&self) -> f64 {
        f64::INFINITY
    }

    /// Angle of the travel direction in `[0, 2π)`.
    #[must_use]
    pub fn slope(&self) -> f64 {
        slope(&rotate_90_cw(&self.normal))
    }

    /// The infinite line carrying the ray.
    #[must_use]
    pub fn line(&self) -> Line {
        Line::from_unit_normal(self.origin, self.normal)
    }

    /// Half-infinite bounding box of the ray.
    ///
    /// On each axis the finite bound is the origin coordinate on the side
    /// the ray starts from; the bound in the travel direction is infinite.
    /// The quadrant comes from the slope, with inclusive bounds exactly at
    /// the axis-aligned slopes.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        let s = self.slope();
        let xmin = if cmp::gt(s, FRAC_PI_2) && cmp::lt(s, 3.0 * FRAC_PI_2) {
            f64::NEG_INFINITY
        } else {
            self.origin.x
        };
        let xmax = if cmp::ge(s, FRAC_PI_2) && cmp::le(s, 3.0 * FRAC_PI_2) {
            self.origin.x
        } else {
            f64::INFINITY
        };
        let ymin = if cmp::le(s, PI) {
            self.origin.y
        } else {
            f64::NEG_INFINITY
        };
        let ymax = if cmp::ge(s, PI) || cmp::eq_zero(s) {
            self.origin.y
        } else {
            f64::INFINITY
        };
        Aabb::new(xmin, ymin, xmax, ymax)
    }

    /// Whether a point lies on the ray.
    ///
    /// True for the origin itself, and for points on the carrying line
    /// that sit on the forward side of the origin.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        if points_equal(p, &self.origin) {
            return true;
        }
        let v = p - self.origin;
        cmp::eq_zero(v.dot(&self.normal)) && cmp::ge(cross(&v, &self.normal), 0.0)
    }

    /// Splits the ray at a point.
    ///
    /// Empty when the point is not on the ray; the unchanged ray when the
    /// point is the origin; otherwise the bounded segment up to the point
    /// followed by the ray continuing from it.
    #[must_use]
    pub fn split(&self, p: &Point2) -> Vec<RayPart> {
        if !self.contains(p) {
            return Vec::new();
        }
        if points_equal(p, &self.origin) {
            return vec![RayPart::Ray(*self)];
        }
        vec![
            RayPart::Segment(Segment::new(self.origin, *p)),
            RayPart::Ray(Self {
                origin: *p,
                normal: self.normal,
            }),
        ]
    }

    /// Intersection points of the ray with a segment or arc shape.
    ///
    /// Delegates to the carrying line and keeps the points the ray
    /// actually contains. One recovery rule applies to segments collinear
    /// with the ray: when the line saw both endpoints but only the forward
    /// one survived the filter, the origin itself is the second crossing,
    /// provided it lies on the segment and is not already the kept point.
    #[must_use]
    pub fn intersect(&self, shape: &Shape) -> Vec<Point2> {
        if !self.aabb().intersects(&shape.aabb()) {
            return Vec::new();
        }
        let candidates = self.line().intersect(shape);
        let mut hits: Vec<Point2> = candidates
            .iter()
            .copied()
            .filter(|p| self.contains(p))
            .collect();

        if let Shape::Segment(seg) = shape {
            if candidates.len() == 2 && hits.len() == 1 {
                let dir = seg.end() - seg.start();
                let len_sq = dir.norm_squared();
                if len_sq >= TOLERANCE * TOLERANCE {
                    let t = (self.origin - seg.start()).dot(&dir) / len_sq;
                    if cmp::ge(t, 0.0)
                        && cmp::le(t, 1.0)
                        && !points_equal(&self.origin, &hits[0])
                    {
                        hits.push(self.origin);
                    }
                }
            }
        }
        hits
    }

    /// SVG fragment for the visible part of the ray within a finite box.
    ///
    /// Draws a line from the origin to the single ray-contained crossing
    /// of the box border. With zero crossings the ray misses the box; with
    /// two the origin is outside it; neither case is drawn.
    #[must_use]
    pub fn svg(&self, view: &Aabb, attrs: &SvgAttributes) -> Option<String> {
        let visible: Vec<Point2> = self
            .line()
            .intersect_aabb(view)
            .into_iter()
            .filter(|p| self.contains(p))
            .collect();
        if visible.len() != 1 {
            return None;
        }
        let end = visible[0];
        Some(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            self.origin.x, self.origin.y, end.x, end.y, attrs.stroke, attrs.stroke_width
        ))
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::horizontal(Point2::origin())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::TAU;

    use approx::assert_relative_eq;

    use crate::geometry::arc::Arc;

    use super::*;

    fn horizontal_from(x: f64, y: f64) -> Ray {
        Ray::horizontal(Point2::new(x, y))
    }

    #[test]
    fn new_rejects_zero_normal() {
        assert!(Ray::new(Point2::new(1.0, 1.0), Vector2::zeros()).is_err());
    }

    #[test]
    fn default_is_horizontal_from_origin() {
        let r = Ray::default();
        assert!(r.origin().coords.norm() < TOLERANCE);
        assert!(r.slope().abs() < TOLERANCE);
    }

    #[test]
    fn contains_its_origin_for_any_orientation() {
        for normal in [
            Vector2::new(0.0, 1.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(-3.0, 2.0),
            Vector2::new(0.5, -0.5),
        ] {
            let r = Ray::new(Point2::new(2.0, -1.0), normal).unwrap();
            assert!(r.contains(&r.origin()), "normal={normal:?}");
        }
    }

    #[test]
    fn contains_forward_not_backward() {
        let r = horizontal_from(1.0, 1.0);
        assert!(r.contains(&Point2::new(5.0, 1.0)));
        assert!(!r.contains(&Point2::new(0.0, 1.0)));
        assert!(!r.contains(&Point2::new(5.0, 1.5)));
    }

    #[test]
    fn slope_of_axis_rays() {
        // Normal (0, 1): travel +x.
        assert!(horizontal_from(0.0, 0.0).slope().abs() < TOLERANCE);
        // Normal (1, 0): travel -y.
        let down = Ray::new(Point2::origin(), Vector2::new(1.0, 0.0)).unwrap();
        assert_relative_eq!(down.slope(), 3.0 * FRAC_PI_2, epsilon = TOLERANCE);
        // Normal (-1, 0): travel +y.
        let u = Ray::new(Point2::origin(), Vector2::new(-1.0, 0.0)).unwrap();
        assert_relative_eq!(u.slope(), FRAC_PI_2, epsilon = TOLERANCE);
    }

    #[test]
    fn horizontal_box_is_a_half_line_strip() {
        let b = horizontal_from(2.0, 3.0).aabb();
        assert!((b.xmin - 2.0).abs() < TOLERANCE);
        assert!(b.xmax.is_infinite() && b.xmax > 0.0);
        assert!((b.ymin - 3.0).abs() < TOLERANCE);
        assert!((b.ymax - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn oblique_box_has_exactly_two_infinite_bounds() {
        // Travel up-left: slope 3π/4.
        let r = Ray::new(Point2::new(1.0, 2.0), Vector2::new(-1.0, -1.0)).unwrap();
        assert_relative_eq!(r.slope(), 3.0 * std::f64::consts::FRAC_PI_4, epsilon = 1e-12);
        let b = r.aabb();
        assert!(b.xmin.is_infinite() && b.xmin < 0.0);
        assert!((b.xmax - 1.0).abs() < TOLERANCE);
        assert!((b.ymin - 2.0).abs() < TOLERANCE);
        assert!(b.ymax.is_infinite() && b.ymax > 0.0);
    }

    #[test]
    fn split_misses_point_off_ray() {
        let r = horizontal_from(0.0, 0.0);
        assert!(r.split(&Point2::new(1.0, 1.0)).is_empty());
        assert!(r.split(&Point2::new(-1.0, 0.0)).is_empty());
    }

    #[test]
    fn split_at_origin_is_identity() {
        let r = horizontal_from(0.0, 0.0);
        let parts = r.split(&Point2::origin());
        assert_eq!(parts.len(), 1);
        assert!(matches!(parts[0], RayPart::Ray(p) if p == r));
    }

    #[test]
    fn split_interior_joins_at_point() {
        let r = horizontal_from(0.0, 0.0);
        let p = Point2::new(3.0, 0.0);
        let parts = r.split(&p);
        assert_eq!(parts.len(), 2);
        let RayPart::Segment(seg) = parts[0] else {
            panic!("first part should be the bounded piece");
        };
        let RayPart::Ray(rest) = parts[1] else {
            panic!("second part should be the remaining ray");
        };
        assert!(points_equal(&seg.start(), &r.origin()));
        assert!(points_equal(&seg.end(), &p));
        assert!(points_equal(&rest.origin(), &p));
        assert_eq!(rest.normal(), r.normal());
        // The pieces cover the original point set around the split.
        assert!(r.contains(&seg.start()) && r.contains(&seg.end()));
        assert!(r.contains(&rest.origin()) && rest.contains(&Point2::new(100.0, 0.0)));
    }

    #[test]
    fn intersect_crossing_segment() {
        let r = horizontal_from(0.0, 0.0);
        let s: Shape = Segment::new(Point2::new(2.0, -1.0), Point2::new(2.0, 1.0)).into();
        let pts = r.intersect(&s);
        assert_eq!(pts.len(), 1);
        assert!((pts[0].x - 2.0).abs() < TOLERANCE);
        assert!(pts[0].y.abs() < TOLERANCE);
    }

    #[test]
    fn intersect_segment_behind_is_empty() {
        let r = horizontal_from(0.0, 0.0);
        let s: Shape = Segment::new(Point2::new(-2.0, -1.0), Point2::new(-2.0, 1.0)).into();
        assert!(r.intersect(&s).is_empty());
    }

    #[test]
    fn collinear_segment_ahead_keeps_both_endpoints() {
        let r = horizontal_from(0.0, 0.0);
        let s: Shape = Segment::new(Point2::new(1.0, 0.0), Point2::new(4.0, 0.0)).into();
        assert_eq!(r.intersect(&s).len(), 2);
    }

    #[test]
    fn collinear_segment_straddling_origin_recovers_origin() {
        let r = horizontal_from(0.0, 0.0);
        let s: Shape = Segment::new(Point2::new(-1.0, 0.0), Point2::new(3.0, 0.0)).into();
        let pts = r.intersect(&s);
        assert_eq!(pts.len(), 2, "pts={pts:?}");
        assert!(pts.iter().any(|p| points_equal(p, &r.origin())));
        assert!(pts.iter().any(|p| points_equal(p, &Point2::new(3.0, 0.0))));
    }

    #[test]
    fn collinear_segment_behind_touches_only_at_origin() {
        // Origin sits on the segment's start and the rest lies behind the
        // ray; the recovery rule must not duplicate the origin.
        let r = horizontal_from(0.0, 0.0);
        let s: Shape = Segment::new(Point2::new(0.0, 0.0), Point2::new(-2.0, 0.0)).into();
        let pts = r.intersect(&s);
        assert_eq!(pts.len(), 1, "pts={pts:?}");
        assert!(points_equal(&pts[0], &r.origin()));
    }

    #[test]
    fn intersect_never_exceeds_two_for_segments() {
        let r = horizontal_from(0.0, 0.0);
        for s in [
            Segment::new(Point2::new(-1.0, 0.0), Point2::new(5.0, 0.0)),
            Segment::new(Point2::new(0.0, 0.0), Point2::new(5.0, 0.0)),
            Segment::new(Point2::new(1.0, -2.0), Point2::new(1.0, 2.0)),
        ] {
            assert!(r.intersect(&s.into()).len() <= 2);
        }
    }

    #[test]
    fn intersect_arc_from_inside_circle() {
        let r = horizontal_from(3.0, 0.0);
        let a: Shape = Arc::new(Point2::new(3.0, 0.0), 1.0, 0.0, TAU).into();
        let pts = r.intersect(&a);
        assert_eq!(pts.len(), 1, "pts={pts:?}");
        assert!((pts[0].x - 4.0).abs() < 1e-9);
    }

    #[test]
    fn intersect_arc_from_outside_circle() {
        let r = horizontal_from(0.0, 0.0);
        let a: Shape = Arc::new(Point2::new(3.0, 0.0), 1.0, 0.0, TAU).into();
        assert_eq!(r.intersect(&a).len(), 2);
    }

    #[test]
    fn svg_draws_from_origin_inside_view() {
        let r = horizontal_from(5.0, 5.0);
        let view = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let fragment = r.svg(&view, &SvgAttributes::default()).unwrap();
        assert!(fragment.contains(r#"x1="5""#), "fragment={fragment}");
        assert!(fragment.contains(r#"x2="10""#), "fragment={fragment}");
        assert!(fragment.contains("stroke=\"black\""));
    }

    #[test]
    fn svg_skips_origin_outside_view() {
        // Both border crossings are ahead of the origin.
        let r = horizontal_from(-5.0, 5.0);
        let view = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.svg(&view, &SvgAttributes::default()).is_none());
    }

    #[test]
    fn svg_skips_missed_view() {
        let r = horizontal_from(0.0, 20.0);
        let view = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.svg(&view, &SvgAttributes::default()).is_none());
    }
}
