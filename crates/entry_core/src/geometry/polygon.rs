//! # Polygon Reconstruction and Ray Casting
//!
//! Builds an ordered ring from an unordered set of boundary vertices and
//! tests 2D membership by crossing parity.
//!
//! ## Algorithm
//! 1. Sort vertices by (x, y); the first is the leftmost, the last the rightmost
//! 2. Split the rest by side of the leftmost -> rightmost line:
//!    non-positive side goes to the upper chain, positive side to the lower chain
//! 3. Ring = leftmost, upper chain (x ascending), rightmost, lower chain (x descending)
//!
//! The ring is simple when every vertical line meets the boundary at most
//! twice. Other vertex sets still produce a ring through every vertex, but it
//! may cross itself.

use tracing::debug;

use super::point::Point2D;
use super::segment::{point_on_which_side, segments_intersect, Segment};
use crate::error::{EntryError, Result};

/// Closed ring of vertices. The edge from the last vertex back to the first is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2D>,
}

impl Polygon {
    /// Reconstruct a ring from distinct, unordered boundary vertices.
    ///
    /// Needs at least three vertices. Distinctness and non-collinearity are the
    /// caller's responsibility; `BoundarySpec` checks both before getting here.
    pub fn from_boundary(points: &[Point2D]) -> Result<Self> {
        if points.len() < 3 {
            return Err(EntryError::InvalidBoundary(format!(
                "polygon needs at least 3 vertices, got {}",
                points.len()
            )));
        }

        let mut sorted = points.to_vec();
        sorted.sort_by(Point2D::cmp_xy);

        let leftmost = sorted[0];
        let rightmost = sorted[sorted.len() - 1];

        let mut upper = Vec::new();
        let mut lower = Vec::new();
        for &p in &sorted[1..sorted.len() - 1] {
            if point_on_which_side(p, leftmost, rightmost) <= 0 {
                upper.push(p);
            } else {
                lower.push(p);
            }
        }

        let mut vertices = Vec::with_capacity(sorted.len());
        vertices.push(leftmost);
        vertices.extend(upper.iter().copied());
        vertices.push(rightmost);
        vertices.extend(lower.iter().rev().copied());

        debug!(
            vertices = vertices.len(),
            upper = upper.len(),
            lower = lower.len(),
            "built boundary polygon"
        );

        Ok(Self { vertices })
    }

    /// Wrap an already ordered ring.
    pub fn from_ordered(vertices: Vec<Point2D>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(EntryError::InvalidBoundary(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Edges in ring order, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn min_x(&self) -> f64 {
        self.vertices
            .iter()
            .map(|p| p.x)
            .fold(f64::INFINITY, f64::min)
    }

    /// Ray-casting membership.
    ///
    /// Casts a horizontal segment from `ray_margin` left of the leftmost vertex
    /// to the query and counts crossed edges; odd means inside. Edges collinear
    /// with the ray are not counted, and a ray passing exactly through a vertex
    /// counts both adjacent edges. A non-finite query is never inside.
    pub fn contains(&self, q: Point2D, ray_margin: f64) -> bool {
        if !q.is_finite() {
            return false;
        }

        let origin = Point2D::new(self.min_x() - ray_margin, q.y);
        let ray = Segment::new(origin, q);

        let crossings = self
            .edges()
            .filter(|edge| segments_intersect(&ray, edge))
            .count();

        crossings % 2 == 1
    }
}
