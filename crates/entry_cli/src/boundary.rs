//! Boundary parsing for the command line.
//!
//! Accepted forms:
//! - `"x1,y1;x2,y2;..."`
//! - a JSON array of pairs, `"[[x1, y1], [x2, y2]]"`

use anyhow::{Context, Result};

use entry_core::{BoundarySpec, Point2D};

/// Entry zone used when no boundary is given
pub const DEFAULT_BOUNDARY: [(f64, f64); 5] = [
    (-1735.0, 250.0),
    (-2024.0, 398.0),
    (-2806.0, 742.0),
    (-2472.0, 1233.0),
    (-1565.0, 580.0),
];

pub fn default_boundary() -> Result<BoundarySpec> {
    Ok(BoundarySpec::from_pairs(&DEFAULT_BOUNDARY)?)
}

pub fn parse_boundary(raw: &str) -> Result<BoundarySpec> {
    let raw = raw.trim();
    let points = if raw.starts_with('[') {
        let pairs: Vec<(f64, f64)> =
            serde_json::from_str(raw).context("Failed to parse boundary JSON")?;
        pairs.into_iter().map(Point2D::from).collect()
    } else {
        parse_pair_list(raw)?
    };

    Ok(BoundarySpec::new(&points)?)
}

fn parse_pair_list(raw: &str) -> Result<Vec<Point2D>> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|pair| {
            let (x, y) = pair
                .split_once(',')
                .with_context(|| format!("Boundary vertex '{}' is not 'x,y'", pair))?;
            let x: f64 = x
                .trim()
                .parse()
                .with_context(|| format!("Invalid x in boundary vertex '{}'", pair))?;
            let y: f64 = y
                .trim()
                .parse()
                .with_context(|| format!("Invalid y in boundary vertex '{}'", pair))?;
            Ok(Point2D::new(x, y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use entry_core::{BoundaryShape, EntryError};

    #[test]
    fn test_pair_list() {
        let zone = parse_boundary("0,0; 0,10; 10,10; 10,0").unwrap();
        assert_eq!(zone.vertices().len(), 4);
        assert_eq!(zone.shape().as_str(), "polygon");
    }

    #[test]
    fn test_json_pairs() {
        let zone = parse_boundary("[[3, 4]]").unwrap();
        assert_eq!(zone.shape(), &BoundaryShape::Single(Point2D::new(3.0, 4.0)));
    }

    #[test]
    fn test_default_boundary_is_polygon() {
        let zone = default_boundary().unwrap();
        assert_eq!(zone.shape().as_str(), "polygon");
        assert_eq!(zone.vertices().len(), 5);
    }

    #[test]
    fn test_empty_boundary_is_invalid() {
        let err = parse_boundary("  ").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EntryError>(),
            Some(EntryError::InvalidBoundary(_))
        ));
    }

    #[test]
    fn test_garbage_vertex() {
        assert!(parse_boundary("0,0;1").is_err());
        assert!(parse_boundary("0,zero").is_err());
    }
}
