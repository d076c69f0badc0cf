use serde::{Deserialize, Serialize};

/// Lower edge of the default vertical band (map height units)
pub const DEFAULT_Z_MIN: f64 = 285.0;

/// Upper edge of the default vertical band (map height units)
pub const DEFAULT_Z_MAX: f64 = 421.0;

/// Distance the ray origin is pushed left of the leftmost polygon vertex
pub const DEFAULT_RAY_MARGIN: f64 = 1.0;

/// Inclusive height range a point must fall in for polygon zones.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VerticalBand {
    pub z_min: f64,
    pub z_max: f64,
}

impl Default for VerticalBand {
    fn default() -> Self {
        Self {
            z_min: DEFAULT_Z_MIN,
            z_max: DEFAULT_Z_MAX,
        }
    }
}

impl VerticalBand {
    pub const fn new(z_min: f64, z_max: f64) -> Self {
        Self { z_min, z_max }
    }

    #[inline]
    pub fn contains(&self, z: f64) -> bool {
        z >= self.z_min && z <= self.z_max
    }
}

/// Fixed parameters applied to every membership query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembershipRules {
    pub band: VerticalBand,
    pub ray_margin: f64,
}

impl Default for MembershipRules {
    fn default() -> Self {
        Self {
            band: VerticalBand::default(),
            ray_margin: DEFAULT_RAY_MARGIN,
        }
    }
}

impl MembershipRules {
    pub fn with_band(band: VerticalBand) -> Self {
        Self {
            band,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_is_inclusive() {
        let band = VerticalBand::default();
        assert!(band.contains(DEFAULT_Z_MIN));
        assert!(band.contains(DEFAULT_Z_MAX));
        assert!(band.contains(300.0));
        assert!(!band.contains(284.9));
        assert!(!band.contains(421.5));
    }

    #[test]
    fn test_nan_height_is_outside() {
        assert!(!VerticalBand::new(0.0, 100.0).contains(f64::NAN));
    }
}
