//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Distance on the hex map
pub type Hexes = i32;

/// Range band of an attack, ordered from closest to farthest
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RangeBand {
    #[default]
    Short,
    Medium,
    Long,
    Extreme,
}

impl RangeBand {
    pub const ALL: [RangeBand; 4] = [
        RangeBand::Short,
        RangeBand::Medium,
        RangeBand::Long,
        RangeBand::Extreme,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            RangeBand::Short => "short",
            RangeBand::Medium => "medium",
            RangeBand::Long => "long",
            RangeBand::Extreme => "extreme",
        }
    }
}

impl std::str::FromStr for RangeBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "short" => Ok(RangeBand::Short),
            "medium" | "med" => Ok(RangeBand::Medium),
            "long" => Ok(RangeBand::Long),
            "extreme" | "ext" => Ok(RangeBand::Extreme),
            other => Err(format!("unknown range band '{}'", other)),
        }
    }
}

/// The five range thresholds of a weapon: minimum plus the upper edge of each band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeTable {
    #[serde(default)]
    pub minimum: Hexes,
    pub short: Hexes,
    pub medium: Hexes,
    pub long: Hexes,
    #[serde(default)]
    pub extreme: Hexes,
}

impl RangeTable {
    pub const fn new(minimum: Hexes, short: Hexes, medium: Hexes, long: Hexes, extreme: Hexes) -> Self {
        Self {
            minimum,
            short,
            medium,
            long,
            extreme,
        }
    }

    /// `[minimum, short, medium, long, extreme]`
    pub fn as_array(&self) -> [Hexes; 5] {
        [self.minimum, self.short, self.medium, self.long, self.extreme]
    }

    /// Upper edge of a band
    pub fn limit(&self, band: RangeBand) -> Hexes {
        match band {
            RangeBand::Short => self.short,
            RangeBand::Medium => self.medium,
            RangeBand::Long => self.long,
            RangeBand::Extreme => self.extreme,
        }
    }

    /// Band a distance falls into, or `None` when it is beyond extreme range
    pub fn band_for(&self, distance: Hexes) -> Option<RangeBand> {
        RangeBand::ALL
            .into_iter()
            .find(|band| distance <= self.limit(*band))
    }
}

impl From<[Hexes; 5]> for RangeTable {
    fn from(values: [Hexes; 5]) -> Self {
        Self::new(values[0], values[1], values[2], values[3], values[4])
    }
}
