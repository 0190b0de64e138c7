//! Ray-shooting point-in-polygon classification.
//!
//! A horizontal ray is shot from the query point and true boundary
//! crossings are counted; odd parity means inside. A naive count goes
//! wrong whenever the ray grazes a vertex or touches a curved edge at its
//! vertical extremum, so every such hit is resolved by asking whether the
//! boundary actually passes from one side of the ray's line to the other
//! there.

use crate::geometry::{Aabb, Ray, Shape};
use crate::math::vec_2d::points_equal;
use crate::math::{cmp, Point2};

use super::edge::EdgeId;
use super::Polygon;

/// Classification of a point relative to a polygon boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    Outside,
    OnBoundary,
}

/// Classifies a point as inside, outside, or on the boundary of a polygon.
///
/// Works for boundaries mixing straight and arc edges, including
/// degenerate zero-length edges, which are transparent to the vertex
/// logic. Pure and deterministic: identical inputs always classify
/// identically.
#[must_use]
pub fn ray_shooting(polygon: &Polygon, point: &Point2) -> PointClassification {
    if !polygon.aabb().intersects(&Aabb::from_point(point)) {
        return PointClassification::Outside;
    }

    let ray = Ray::horizontal(*point);
    let line = ray.line();

    let candidates = polygon.search(&ray.aabb());
    if candidates.is_empty() {
        return PointClassification::Outside;
    }

    let mut hits: Vec<(Point2, EdgeId)> = Vec::new();
    for id in candidates {
        let Some(edge) = polygon.edge(id) else {
            continue;
        };
        for ip in ray.intersect(&edge.shape) {
            if points_equal(&ip, point) {
                return PointClassification::OnBoundary;
            }
            hits.push((ip, id));
        }
    }

    // Stable sort with tolerance ties: coincident vertex hits stay
    // adjacent in edge insertion order, which the duplicate skip below
    // relies on.
    hits.sort_by(|a, b| cmp::cmp(a.0.x, b.0.x));

    let mut crossings = 0u32;
    for i in 0..hits.len() {
        let (pt, id) = hits[i];
        let Some(edge) = polygon.edge(id) else {
            continue;
        };

        if points_equal(&pt, &edge.shape.start()) {
            // Already counted through the predecessor's end-vertex case.
            if i > 0 && points_equal(&pt, &hits[i - 1].0) && edge.prev() == hits[i - 1].1 {
                continue;
            }
            let Some(prev_id) = nonzero_neighbor(polygon, id, Walk::Backward) else {
                continue;
            };
            let Some(prev_edge) = polygon.edge(prev_id) else {
                continue;
            };
            let prev_point = pt + prev_edge.shape.tangent_in_end();
            let cur_point = pt + edge.shape.tangent_in_start();
            if line.left_of(&prev_point) != line.left_of(&cur_point) {
                crossings += 1;
            }
        } else if points_equal(&pt, &edge.shape.end()) {
            if i > 0 && points_equal(&pt, &hits[i - 1].0) && edge.next() == hits[i - 1].1 {
                continue;
            }
            let Some(next_id) = nonzero_neighbor(polygon, id, Walk::Forward) else {
                continue;
            };
            let Some(next_edge) = polygon.edge(next_id) else {
                continue;
            };
            let next_point = pt + next_edge.shape.tangent_in_start();
            let cur_point = pt + edge.shape.tangent_in_end();
            if line.left_of(&next_point) != line.left_of(&cur_point) {
                crossings += 1;
            }
        } else {
            match edge.shape {
                Shape::Segment(_) => crossings += 1,
                Shape::Arc(arc) => {
                    // A hit at the arc's own vertical extremum is a
                    // tangency, not a crossing.
                    let b = arc.aabb();
                    if !(cmp::eq(pt.y, b.ymin) || cmp::eq(pt.y, b.ymax)) {
                        crossings += 1;
                    }
                }
            }
        }
    }

    if crossings % 2 == 1 {
        PointClassification::Inside
    } else {
        PointClassification::Outside
    }
}

#[derive(Clone, Copy)]
enum Walk {
    Backward,
    Forward,
}

/// Nearest ring neighbor with nonzero length, skipping degenerate edges.
///
/// The walk is bounded by the polygon's edge count; a ring made entirely
/// of zero-length edges yields `None` and the hit is treated as a touch.
fn nonzero_neighbor(polygon: &Polygon, from: EdgeId, walk: Walk) -> Option<EdgeId> {
    let step = |id: EdgeId| -> Option<EdgeId> {
        let e = polygon.edge(id)?;
        Some(match walk {
            Walk::Backward => e.prev(),
            Walk::Forward => e.next(),
        })
    };

    let mut cur = step(from)?;
    for _ in 0..polygon.edge_count() {
        let e = polygon.edge(cur)?;
        if !cmp::eq_zero(e.shape.length()) {
            return Some(cur);
        }
        cur = step(cur)?;
    }
    None
}
