//! Round-opening entrance scenarios against a square zone.

use entry_core::{
    is_attacking_entrance_common, AnalysisConfig, BoundarySpec, EntranceAggregator, EntryError,
    Point3D, Side, TelemetryFrame, VerticalBand,
};

fn square_zone() -> BoundarySpec {
    BoundarySpec::from_pairs(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]).unwrap()
}

fn config() -> AnalysisConfig {
    AnalysisConfig {
        band: VerticalBand::new(0.0, 100.0),
        ..AnalysisConfig::default()
    }
}

/// 10 attacking frames, `entered` of them early and inside the zone.
/// The rest are split between early-but-outside and inside-but-late.
fn round(entered: usize) -> Vec<TelemetryFrame> {
    let mut frames = Vec::new();
    for i in 0..10 {
        let frame = if i < entered {
            TelemetryFrame::new(Side::Attacking, "1:52", Point3D::new(5.0, 5.0, 50.0))
        } else if i % 2 == 0 {
            TelemetryFrame::new(Side::Attacking, "1:48", Point3D::new(15.0, 5.0, 50.0))
        } else {
            TelemetryFrame::new(Side::Attacking, "0:45", Point3D::new(5.0, 5.0, 50.0))
        };
        frames.push(frame);
        // defenders standing in the zone never count
        frames.push(TelemetryFrame::new(
            Side::Defending,
            "1:52",
            Point3D::new(5.0, 5.0, 50.0),
        ));
    }
    frames
}

#[test]
fn six_of_ten_is_common() {
    let frames = round(6);
    let zone = square_zone();
    let report = EntranceAggregator::new(&zone, &config())
        .unwrap()
        .evaluate(&frames)
        .unwrap();

    assert_eq!(report.attacking_frames, 10);
    assert_eq!(report.entered_frames, 6);
    assert!((report.ratio - 0.6).abs() < 1e-12);
    assert!(is_attacking_entrance_common(&frames, &zone, &config()).unwrap());
}

#[test]
fn four_of_ten_is_not_common() {
    let frames = round(4);
    let zone = square_zone();
    let report = EntranceAggregator::new(&zone, &config())
        .unwrap()
        .evaluate(&frames)
        .unwrap();

    assert_eq!(report.entered_frames, 4);
    assert!((report.ratio - 0.4).abs() < 1e-12);
    assert!(!is_attacking_entrance_common(&frames, &zone, &config()).unwrap());
}

#[test]
fn exactly_half_is_common() {
    assert!(is_attacking_entrance_common(&round(5), &square_zone(), &config()).unwrap());
}

#[test]
fn out_of_band_height_never_enters() {
    let frames: Vec<TelemetryFrame> = (0..4)
        .map(|_| TelemetryFrame::new(Side::Attacking, "2:00", Point3D::new(5.0, 5.0, 200.0)))
        .collect();
    assert!(!is_attacking_entrance_common(&frames, &square_zone(), &config()).unwrap());
}

#[test]
fn no_attackers_is_an_error() {
    let frames = vec![
        TelemetryFrame::new(Side::Defending, "1:59", Point3D::new(5.0, 5.0, 50.0)),
        TelemetryFrame::new(Side::Defending, "1:10", Point3D::new(1.0, 1.0, 50.0)),
    ];
    let err = is_attacking_entrance_common(&frames, &square_zone(), &config()).unwrap_err();
    assert!(matches!(err, EntryError::EmptyAttackerSet));
}

#[test]
fn segment_and_point_zones_ignore_height() {
    let wall = BoundarySpec::from_pairs(&[(0.0, 0.0), (0.0, 10.0)]).unwrap();
    let spot = BoundarySpec::from_pairs(&[(3.0, 4.0)]).unwrap();
    let frames = vec![
        TelemetryFrame::new(Side::Attacking, "1:59", Point3D::new(0.0, 5.0, 9000.0)),
        TelemetryFrame::new(Side::Attacking, "1:59", Point3D::new(3.0, 4.0, -50.0)),
    ];

    let on_wall = EntranceAggregator::new(&wall, &config())
        .unwrap()
        .evaluate(&frames)
        .unwrap();
    assert_eq!(on_wall.entered_frames, 1);

    let on_spot = EntranceAggregator::new(&spot, &config())
        .unwrap()
        .evaluate(&frames)
        .unwrap();
    assert_eq!(on_spot.entered_frames, 1);
}
