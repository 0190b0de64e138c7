//! Tolerance-based scalar comparisons.
//!
//! Every comparison in the kernel goes through these predicates with the
//! single shared [`TOLERANCE`]; the parity counting in ray shooting depends
//! on "equal", "left of" and "zero" being classified consistently at every
//! call site.

use super::TOLERANCE;

/// `a == b` within tolerance.
#[inline]
#[must_use]
pub fn eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// `a == 0` within tolerance.
#[inline]
#[must_use]
pub fn eq_zero(a: f64) -> bool {
    a.abs() < TOLERANCE
}

/// `a < b` with tolerance (strictly less, outside the equality band).
#[inline]
#[must_use]
pub fn lt(a: f64, b: f64) -> bool {
    a < b - TOLERANCE
}

/// `a <= b` with tolerance.
#[inline]
#[must_use]
pub fn le(a: f64, b: f64) -> bool {
    a < b + TOLERANCE
}

/// `a > b` with tolerance (strictly greater, outside the equality band).
#[inline]
#[must_use]
pub fn gt(a: f64, b: f64) -> bool {
    a > b + TOLERANCE
}

/// `a >= b` with tolerance.
#[inline]
#[must_use]
pub fn ge(a: f64, b: f64) -> bool {
    a > b - TOLERANCE
}

/// Total order on `a` and `b` where the tolerance band counts as equal.
#[inline]
#[must_use]
pub fn cmp(a: f64, b: f64) -> std::cmp::Ordering {
    if lt(a, b) {
        std::cmp::Ordering::Less
    } else if gt(a, b) {
        std::cmp::Ordering::Greater
    } else {
        std::cmp::Ordering::Equal
    }
}
