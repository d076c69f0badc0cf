//! # Telemetry Module
//!
//! Read-only records of recorded player state, one per sampled frame.
//!
//! - `clock` - Countdown round clock parsing
//! - `frame` - Frame records and side labels
//! - `inventory` - Weapon-class tallies

pub mod clock;
pub mod frame;
pub mod inventory;

pub use clock::{RoundClock, ROUND_LENGTH_SECS};
pub use frame::{InventoryItem, Side, TelemetryFrame};
pub use inventory::{count_weapon_classes, count_weapon_classes_for, WeaponTally};
