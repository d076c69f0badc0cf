//! # Analysis Module
//!
//! Round-level analysis over telemetry frames.
//!
//! - `entrance` - Attacking-side entrance through an entry zone

pub mod entrance;

pub use entrance::{is_attacking_entrance_common, EntranceAggregator, EntranceReport};
