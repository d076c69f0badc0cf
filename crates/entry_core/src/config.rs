//! # Analysis Configuration
//!
//! Fixed parameters for a run: the vertical band applied to polygon zones,
//! the entry window, and the "common" threshold.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = AnalysisConfig::load("configs/dust2_long.json")?;
//! let verdict = is_attacking_entrance_common(&frames, &zone, &config)?;
//! ```
//!
//! Every field is optional in JSON; missing fields take the defaults below.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};
use tracing::debug;

use crate::error::{EntryError, Result};
use crate::telemetry::ROUND_LENGTH_SECS;
use crate::zone::{MembershipRules, VerticalBand, DEFAULT_RAY_MARGIN};

/// Environment variable naming a JSON config file
pub const CONFIG_PATH_ENV: &str = "ENTRY_ZONE_CONFIG_PATH";

/// Countdown value (seconds) at which the entry window closes: 1:40
pub const DEFAULT_ENTRY_WINDOW_START_SECS: u32 = 100;

/// Share of attacking frames needed for an entrance to count as common
pub const DEFAULT_COMMON_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Height range for polygon zones
    pub band: VerticalBand,
    /// Frames with countdown clock >= this value are inside the entry window
    pub entry_window_start_secs: u32,
    /// Ratio at or above which entrance is common
    pub common_threshold: f64,
    /// Ray origin offset left of the zone (ray casting)
    pub ray_margin: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            band: VerticalBand::default(),
            entry_window_start_secs: DEFAULT_ENTRY_WINDOW_START_SECS,
            common_threshold: DEFAULT_COMMON_THRESHOLD,
            ray_margin: DEFAULT_RAY_MARGIN,
        }
    }
}

impl AnalysisConfig {
    /// Load from a JSON file and validate.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse from a JSON string and validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `ENTRY_ZONE_CONFIG_PATH`, or defaults when unset/blank.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        debug!(path, "loading analysis config from {}", CONFIG_PATH_ENV);
        Self::load(path)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.band.z_min.is_finite() || !self.band.z_max.is_finite() {
            return Err(EntryError::InvalidConfig(format!(
                "band bounds must be finite, got [{}, {}]",
                self.band.z_min, self.band.z_max
            )));
        }
        if self.band.z_min > self.band.z_max {
            return Err(EntryError::InvalidConfig(format!(
                "band.z_min must be <= band.z_max, got [{}, {}]",
                self.band.z_min, self.band.z_max
            )));
        }
        if !(self.common_threshold > 0.0 && self.common_threshold <= 1.0) {
            return Err(EntryError::InvalidConfig(format!(
                "common_threshold must be in (0.0, 1.0], got {}",
                self.common_threshold
            )));
        }
        if !(self.ray_margin > 0.0 && self.ray_margin.is_finite()) {
            return Err(EntryError::InvalidConfig(format!(
                "ray_margin must be a positive finite number, got {}",
                self.ray_margin
            )));
        }
        if self.entry_window_start_secs > ROUND_LENGTH_SECS {
            return Err(EntryError::InvalidConfig(format!(
                "entry_window_start_secs must be <= {}, got {}",
                ROUND_LENGTH_SECS, self.entry_window_start_secs
            )));
        }
        Ok(())
    }

    pub fn membership_rules(&self) -> MembershipRules {
        MembershipRules {
            band: self.band,
            ray_margin: self.ray_margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.band, VerticalBand::new(285.0, 421.0));
        assert_eq!(config.entry_window_start_secs, 100);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = AnalysisConfig::from_json(r#"{"band": {"z_min": 0.0, "z_max": 100.0}}"#).unwrap();
        assert_eq!(config.band, VerticalBand::new(0.0, 100.0));
        assert_eq!(config.common_threshold, DEFAULT_COMMON_THRESHOLD);
        assert_eq!(config.ray_margin, DEFAULT_RAY_MARGIN);
    }

    #[test]
    fn test_invalid_values_rejected() {
        for json in [
            r#"{"band": {"z_min": 500.0, "z_max": 100.0}}"#,
            r#"{"common_threshold": 0.0}"#,
            r#"{"common_threshold": 1.5}"#,
            r#"{"ray_margin": -1.0}"#,
            r#"{"entry_window_start_secs": 121}"#,
        ] {
            let err = AnalysisConfig::from_json(json).unwrap_err();
            assert!(matches!(err, EntryError::InvalidConfig(_)), "{}", json);
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = AnalysisConfig::from_json("{ band: ").unwrap_err();
        assert!(matches!(err, EntryError::Deserialization(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"entry_window_start_secs": 90, "common_threshold": 0.6}"#)
            .unwrap();

        let config = AnalysisConfig::load(file.path()).unwrap();
        assert_eq!(config.entry_window_start_secs, 90);
        assert_eq!(config.common_threshold, 0.6);
    }

    // Only test touching the process environment.
    #[test]
    fn test_from_env() {
        env::remove_var(CONFIG_PATH_ENV);
        assert_eq!(AnalysisConfig::from_env().unwrap(), AnalysisConfig::default());

        env::set_var(CONFIG_PATH_ENV, "   ");
        assert_eq!(AnalysisConfig::from_env().unwrap(), AnalysisConfig::default());

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"common_threshold": 0.75}"#).unwrap();
        env::set_var(CONFIG_PATH_ENV, file.path());
        let loaded = AnalysisConfig::from_env();
        env::remove_var(CONFIG_PATH_ENV);
        assert_eq!(loaded.unwrap().common_threshold, 0.75);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = AnalysisConfig::load("/nonexistent/entry_zone.json").unwrap_err();
        assert!(matches!(err, EntryError::Io(_)));
    }
}
