//! # Geometry Module
//!
//! Planar primitives used by entry-zone membership.
//!
//! - `point` - 2D/3D map coordinates
//! - `segment` - Segment crossing, side-of-line and on-line predicates
//! - `polygon` - Polygon reconstruction from unordered vertices and ray casting

pub mod point;
pub mod polygon;
pub mod segment;

pub use point::{Point2D, Point3D};
pub use polygon::Polygon;
pub use segment::{is_point_on_line, point_on_which_side, segments_intersect, Segment};
