//! Weapon-class tallies over frame inventories.
//!
//! Classes that never appear are absent from the tally; lookups through
//! `WeaponTally::get` return zero for them.

use std::collections::BTreeMap;

use super::frame::{Side, TelemetryFrame};

/// Count per weapon class, ordered by class name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeaponTally {
    counts: BTreeMap<String, u32>,
}

impl WeaponTally {
    pub fn record(&mut self, weapon_class: &str) {
        *self.counts.entry(weapon_class.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, weapon_class: &str) -> u32 {
        self.counts.get(weapon_class).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Tally the weapon classes carried in a single frame.
pub fn count_weapon_classes(frame: &TelemetryFrame) -> WeaponTally {
    let mut tally = WeaponTally::default();
    for item in &frame.inventory {
        tally.record(&item.weapon_class);
    }
    tally
}

/// Tally weapon classes across frames, optionally restricted to one side.
pub fn count_weapon_classes_for<'a, I>(frames: I, side: Option<Side>) -> WeaponTally
where
    I: IntoIterator<Item = &'a TelemetryFrame>,
{
    let mut tally = WeaponTally::default();
    for frame in frames {
        if side.map_or(true, |s| s == frame.side) {
            for item in &frame.inventory {
                tally.record(&item.weapon_class);
            }
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3D;

    fn frame(side: Side, classes: &[&str]) -> TelemetryFrame {
        TelemetryFrame::new(side, "1:50", Point3D::default()).with_inventory(classes.iter().copied())
    }

    #[test]
    fn test_single_frame_tally() {
        let tally = count_weapon_classes(&frame(Side::Attacking, &["Rifle", "Pistols", "Rifle"]));
        assert_eq!(tally.get("Rifle"), 2);
        assert_eq!(tally.get("Pistols"), 1);
        assert_eq!(tally.get("SMG"), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_empty_inventory() {
        let tally = count_weapon_classes(&frame(Side::Defending, &[]));
        assert!(tally.is_empty());
        assert_eq!(tally.get("Rifle"), 0);
    }

    #[test]
    fn test_side_filter() {
        let frames = vec![
            frame(Side::Attacking, &["Rifle", "Grenade"]),
            frame(Side::Defending, &["SMG"]),
            frame(Side::Attacking, &["Rifle"]),
        ];
        let t_side = count_weapon_classes_for(&frames, Some(Side::Attacking));
        assert_eq!(
            t_side.iter().collect::<Vec<_>>(),
            vec![("Grenade", 1), ("Rifle", 2)]
        );

        let all = count_weapon_classes_for(&frames, None);
        assert_eq!(all.get("SMG"), 1);
        assert_eq!(all.total(), 4);
    }
}
