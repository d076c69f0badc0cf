use tracing::{debug, warn};

use super::band::MembershipRules;
use crate::error::{EntryError, Result};
use crate::geometry::{is_point_on_line, point_on_which_side, Point2D, Point3D, Polygon};

/// Shape of an entry zone, decided once from its vertices.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryShape {
    /// Exactly one distinct vertex
    Single(Point2D),
    /// Collinear vertices, reduced to the segment between the two extremes
    Segment { start: Point2D, end: Point2D },
    /// Ordered ring through every vertex
    Polygon(Polygon),
}

impl BoundaryShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryShape::Single(_) => "single",
            BoundaryShape::Segment { .. } => "segment",
            BoundaryShape::Polygon(_) => "polygon",
        }
    }
}

/// Entry zone boundary: the distinct vertices plus the shape derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundarySpec {
    vertices: Vec<Point2D>,
    shape: BoundaryShape,
}

impl BoundarySpec {
    /// Build a boundary from caller-supplied vertices.
    ///
    /// Duplicate vertices are collapsed (first occurrence wins). Fails on an
    /// empty set or on non-finite coordinates.
    pub fn new(points: &[Point2D]) -> Result<Self> {
        if points.is_empty() {
            return Err(EntryError::InvalidBoundary(
                "boundary has no vertices".to_string(),
            ));
        }
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(EntryError::InvalidBoundary(format!(
                "non-finite vertex ({}, {})",
                bad.x, bad.y
            )));
        }

        let mut vertices: Vec<Point2D> = Vec::with_capacity(points.len());
        for p in points {
            if !vertices.iter().any(|v| v.same_as(p)) {
                vertices.push(*p);
            }
        }
        if vertices.len() < points.len() {
            warn!(
                supplied = points.len(),
                distinct = vertices.len(),
                "collapsed duplicate boundary vertices"
            );
        }

        let shape = classify(&vertices)?;
        debug!(shape = shape.as_str(), vertices = vertices.len(), "boundary classified");

        Ok(Self { vertices, shape })
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        let points: Vec<Point2D> = pairs.iter().map(|&p| Point2D::from(p)).collect();
        Self::new(&points)
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn shape(&self) -> &BoundaryShape {
        &self.shape
    }

    /// Region membership for a 3D query point.
    ///
    /// - `Single`: x and y must match exactly; height is not checked
    /// - `Segment`: the ground position must lie on the segment; height is not checked
    /// - `Polygon`: ray-cast inside the ring and height inside `rules.band`
    ///
    /// A query with any non-finite coordinate is never inside.
    pub fn contains(&self, q: Point3D, rules: &MembershipRules) -> bool {
        if !q.is_finite() {
            return false;
        }
        match &self.shape {
            BoundaryShape::Single(p) => q.x == p.x && q.y == p.y,
            BoundaryShape::Segment { start, end } => is_point_on_line(q.ground(), *start, *end),
            BoundaryShape::Polygon(polygon) => {
                polygon.contains(q.ground(), rules.ray_margin) && rules.band.contains(q.z)
            }
        }
    }
}

fn classify(vertices: &[Point2D]) -> Result<BoundaryShape> {
    if vertices.len() == 1 {
        return Ok(BoundaryShape::Single(vertices[0]));
    }

    let mut sorted = vertices.to_vec();
    sorted.sort_by(Point2D::cmp_xy);
    let start = sorted[0];
    let end = sorted[sorted.len() - 1];

    let collinear = sorted
        .iter()
        .all(|&p| point_on_which_side(p, start, end) == 0);
    if collinear {
        return Ok(BoundaryShape::Segment { start, end });
    }

    Ok(BoundaryShape::Polygon(Polygon::from_boundary(vertices)?))
}
