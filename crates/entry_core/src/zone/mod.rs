//! # Entry Zone Module
//!
//! Region membership for a caller-supplied entry zone.
//!
//! A zone is given as a set of boundary vertices. Its shape is derived once
//! when the `BoundarySpec` is built:
//!
//! - one distinct vertex: `Single` (exact x/y match)
//! - collinear vertices: `Segment` between the two extreme vertices
//! - anything else: `Polygon`, extruded through a fixed `VerticalBand`

pub mod band;
pub mod boundary;

pub use band::{MembershipRules, VerticalBand, DEFAULT_RAY_MARGIN, DEFAULT_Z_MAX, DEFAULT_Z_MIN};
pub use boundary::{BoundaryShape, BoundarySpec};
