//! # Entrance Aggregator
//!
//! Decides whether the attacking side commonly enters a zone at round start.
//!
//! ## Algorithm
//! 1. Parse every frame's countdown clock (a malformed clock fails the run)
//! 2. Count every attacking-side frame (denominator)
//! 3. Count attacking frames inside the entry window AND inside the zone (numerator)
//! 4. Common when numerator / denominator >= threshold (default 0.5)
//!
//! The denominator spans the whole round while the numerator is limited to
//! the entry window. `EntranceReport::window_attacking_frames` carries the
//! window-only count for callers that want the other ratio.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::{EntryError, Result};
use crate::telemetry::TelemetryFrame;
use crate::zone::{BoundarySpec, MembershipRules};

/// Tallies and verdict from one aggregation pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntranceReport {
    /// All attacking-side frames (denominator)
    pub attacking_frames: u32,
    /// Attacking-side frames inside the entry window
    pub window_attacking_frames: u32,
    /// Attacking-side frames inside the entry window and inside the zone (numerator)
    pub entered_frames: u32,
    /// entered_frames / attacking_frames
    pub ratio: f64,
    pub threshold: f64,
    pub is_common: bool,
}

/// Single-pass aggregator bound to one zone and one config.
#[derive(Debug, Clone)]
pub struct EntranceAggregator<'a> {
    boundary: &'a BoundarySpec,
    rules: MembershipRules,
    window_start_secs: u32,
    threshold: f64,
}

impl<'a> EntranceAggregator<'a> {
    pub fn new(boundary: &'a BoundarySpec, config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            boundary,
            rules: config.membership_rules(),
            window_start_secs: config.entry_window_start_secs,
            threshold: config.common_threshold,
        })
    }

    pub fn evaluate<'f, I>(&self, frames: I) -> Result<EntranceReport>
    where
        I: IntoIterator<Item = &'f TelemetryFrame>,
    {
        let mut attacking_frames = 0u32;
        let mut window_attacking_frames = 0u32;
        let mut entered_frames = 0u32;

        for frame in frames {
            let clock = frame.clock()?;
            if !frame.is_attacking() {
                continue;
            }

            attacking_frames += 1;
            if clock.in_entry_window(self.window_start_secs) {
                window_attacking_frames += 1;
                if self.boundary.contains(frame.position, &self.rules) {
                    entered_frames += 1;
                }
            }
        }

        if attacking_frames == 0 {
            return Err(EntryError::EmptyAttackerSet);
        }

        let ratio = entered_frames as f64 / attacking_frames as f64;
        let is_common = ratio >= self.threshold;

        debug!(
            shape = self.boundary.shape().as_str(),
            attacking_frames,
            window_attacking_frames,
            entered_frames,
            ratio,
            is_common,
            "entrance aggregation complete"
        );

        Ok(EntranceReport {
            attacking_frames,
            window_attacking_frames,
            entered_frames,
            ratio,
            threshold: self.threshold,
            is_common,
        })
    }
}

/// Whether the attacking side commonly enters `boundary` during the entry window.
pub fn is_attacking_entrance_common(
    frames: &[TelemetryFrame],
    boundary: &BoundarySpec,
    config: &AnalysisConfig,
) -> Result<bool> {
    let report = EntranceAggregator::new(boundary, config)?.evaluate(frames)?;
    Ok(report.is_common)
}
