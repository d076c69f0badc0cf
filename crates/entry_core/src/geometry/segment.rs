//! Segment predicates.
//!
//! All predicates work on exact floating-point arithmetic with no tolerance.
//! Collinear segment pairs are never reported as crossing, even when they
//! overlap or share an endpoint.

use super::point::Point2D;

/// Closed line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point2D,
    pub b: Point2D,
}

impl Segment {
    pub const fn new(a: Point2D, b: Point2D) -> Self {
        Self { a, b }
    }

    /// Implicit line `A*x + B*y + C = 0` through both endpoints.
    #[inline]
    fn line_coefficients(&self) -> (f64, f64, f64) {
        let a = self.b.y - self.a.y;
        let b = self.a.x - self.b.x;
        let c = self.b.x * self.a.y - self.a.x * self.b.y;
        (a, b, c)
    }

    /// True when both endpoints of `other` lie strictly on the same side of this segment's line.
    fn separates(&self, other: &Segment) -> bool {
        let (a, b, c) = self.line_coefficients();
        let d1 = a * other.a.x + b * other.a.y + c;
        let d2 = a * other.b.x + b * other.b.y + c;
        (d1 > 0.0 && d2 > 0.0) || (d1 < 0.0 && d2 < 0.0)
    }
}

/// Returns true if the two segments cross.
///
/// A pair is rejected when either segment's line strictly separates the other
/// segment's endpoints. Pairs whose direction cross product is exactly zero
/// (parallel or collinear) are never counted.
pub fn segments_intersect(s1: &Segment, s2: &Segment) -> bool {
    if s1.separates(s2) || s2.separates(s1) {
        return false;
    }

    let (a1, b1, _) = s1.line_coefficients();
    let (a2, b2, _) = s2.line_coefficients();
    if a1 * b2 - a2 * b1 == 0.0 {
        // collinear
        return false;
    }

    true
}

/// Which side of the directed line `p1 -> p2` the query lies on.
///
/// Returns `1` when the cross product `(p2 - p1) x (q - p1)` is positive,
/// `-1` when negative and `0` on the line.
pub fn point_on_which_side(q: Point2D, p1: Point2D, p2: Point2D) -> i8 {
    let v0 = (p2.x - p1.x) * (q.y - p1.y);
    let v1 = (p2.y - p1.y) * (q.x - p1.x);
    let cross = v0 - v1;
    if cross > 0.0 {
        1
    } else if cross < 0.0 {
        -1
    } else {
        0
    }
}

/// Returns true if `q` lies on the segment `p1..p2`.
///
/// Vertical segments compare x exactly and bound y. Other segments test the
/// slope/intercept equation exactly and bound x. Endpoints are put in a fixed
/// order first so the result does not depend on argument order.
pub fn is_point_on_line(q: Point2D, p1: Point2D, p2: Point2D) -> bool {
    let (lo, hi) = if p1.cmp_xy(&p2).is_gt() { (p2, p1) } else { (p1, p2) };

    if hi.x - lo.x == 0.0 {
        // vertical
        return q.x == lo.x && q.y >= lo.y.min(hi.y) && q.y <= lo.y.max(hi.y);
    }

    if q.x < lo.x || q.x > hi.x {
        return false;
    }

    let m = (hi.y - lo.y) / (hi.x - lo.x);
    let b = lo.y - m * lo.x;
    q.y == m * q.x + b
}
