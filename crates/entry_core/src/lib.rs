//! # entry_core - Entry Zone Membership and Entrance Analysis
//!
//! Classifies recorded player telemetry against a spatial entry zone and
//! decides whether the attacking side commonly passes through it at the
//! start of a round.
//!
//! ## Features
//! - Zone reconstruction from unordered boundary vertices (point, segment, polygon)
//! - Ray-cast membership with a fixed vertical band for polygon zones
//! - Single-pass entrance aggregation with an explicit empty-attacker error
//! - Weapon-class tallies over frame inventories

pub mod analysis;
pub mod config;
pub mod error;
pub mod geometry;
pub mod telemetry;
pub mod zone;

pub use analysis::{is_attacking_entrance_common, EntranceAggregator, EntranceReport};
pub use config::AnalysisConfig;
pub use error::{EntryError, Result};
pub use geometry::{Point2D, Point3D, Polygon};
pub use telemetry::{
    count_weapon_classes, count_weapon_classes_for, RoundClock, Side, TelemetryFrame, WeaponTally,
};
pub use zone::{BoundaryShape, BoundarySpec, MembershipRules, VerticalBand};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_zone_end_to_end() {
        let zone = BoundarySpec::from_pairs(&[
            (-1735.0, 250.0),
            (-2024.0, 398.0),
            (-2806.0, 742.0),
            (-2472.0, 1233.0),
            (-1565.0, 580.0),
        ])
        .unwrap();

        let frames = vec![
            TelemetryFrame::new(Side::Attacking, "1:58", Point3D::new(-2200.0, 700.0, 300.0)),
            TelemetryFrame::new(Side::Attacking, "1:45", Point3D::new(-2100.0, 800.0, 350.0)),
            // below the band
            TelemetryFrame::new(Side::Attacking, "1:44", Point3D::new(-2200.0, 700.0, 100.0)),
            TelemetryFrame::new(Side::Defending, "1:44", Point3D::new(-2200.0, 700.0, 300.0)),
        ];

        let report = EntranceAggregator::new(&zone, &AnalysisConfig::default())
            .unwrap()
            .evaluate(&frames)
            .unwrap();
        assert_eq!(report.attacking_frames, 3);
        assert_eq!(report.entered_frames, 2);
        assert!(report.is_common);
    }
}
