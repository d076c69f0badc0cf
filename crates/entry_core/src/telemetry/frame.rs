use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::clock::RoundClock;
use crate::error::Result;
use crate::geometry::Point3D;

/// Team side for a frame. Serialized with the in-game labels `T` / `CT`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    #[serde(rename = "T", alias = "t", alias = "attacker", alias = "attacking")]
    Attacking,
    #[serde(rename = "CT", alias = "ct", alias = "defender", alias = "defending")]
    Defending,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Attacking => "T",
            Side::Defending => "CT",
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "T" | "t" | "attacker" | "attacking" => Ok(Side::Attacking),
            "CT" | "ct" | "defender" | "defending" => Ok(Side::Defending),
            other => Err(format!("unknown side '{}' (expected T or CT)", other)),
        }
    }
}

/// One carried item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryItem {
    pub weapon_class: String,
}

/// One sampled player frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TelemetryFrame {
    pub side: Side,
    /// Countdown clock as recorded, `M:SS`
    pub clock_time: String,
    #[serde(flatten)]
    pub position: Point3D,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
}

impl TelemetryFrame {
    pub fn new(side: Side, clock_time: impl Into<String>, position: Point3D) -> Self {
        Self {
            side,
            clock_time: clock_time.into(),
            position,
            inventory: Vec::new(),
        }
    }

    pub fn with_inventory<I, S>(mut self, weapon_classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inventory = weapon_classes
            .into_iter()
            .map(|c| InventoryItem {
                weapon_class: c.into(),
            })
            .collect();
        self
    }

    pub fn clock(&self) -> Result<RoundClock> {
        RoundClock::parse(&self.clock_time)
    }

    pub fn is_attacking(&self) -> bool {
        self.side == Side::Attacking
    }
}
