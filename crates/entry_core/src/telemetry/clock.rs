//! Countdown round clock.
//!
//! Frames carry the round clock as displayed in game, `M:SS`, counting down
//! from 2:00. The first 20 seconds of a round are clock values 1:40 - 2:00.

use serde::{Deserialize, Serialize};

use crate::error::{EntryError, Result};

/// Round length in seconds (clock starts at 2:00)
pub const ROUND_LENGTH_SECS: u32 = 120;

/// Remaining round time in whole seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoundClock(u32);

impl RoundClock {
    pub const fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    /// Parse `M:SS` into total seconds (`minutes * 60 + seconds`).
    ///
    /// Minutes are one or more ASCII digits, seconds exactly two.
    pub fn parse(raw: &str) -> Result<Self> {
        let malformed = || EntryError::MalformedClock {
            raw: raw.to_string(),
        };

        let (minutes, seconds) = raw.trim().split_once(':').ok_or_else(malformed)?;
        if !is_ascii_digits(minutes) || seconds.len() != 2 || !is_ascii_digits(seconds) {
            return Err(malformed());
        }
        let minutes: u32 = minutes.parse().map_err(|_| malformed())?;
        let seconds: u32 = seconds.parse().map_err(|_| malformed())?;
        if seconds >= 60 {
            return Err(malformed());
        }

        minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .map(Self)
            .ok_or_else(malformed)
    }

    pub fn total_secs(&self) -> u32 {
        self.0
    }

    /// True while the countdown is at or above `window_start_secs`.
    #[inline]
    pub fn in_entry_window(&self, window_start_secs: u32) -> bool {
        self.0 >= window_start_secs
    }
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl std::fmt::Display for RoundClock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
    }
}
