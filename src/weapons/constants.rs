//! Rules constants - every fixed range table and scale factor in one place

use crate::core::types::{Hexes, RangeTable};

// Sentinel damage codes as they appear in raw catalog data
pub const DAMAGE_BY_CLUSTER_TABLE: i32 = -2;
pub const DAMAGE_VARIABLE: i32 = -3;
pub const DAMAGE_SPECIAL: i32 = -4;
pub const DAMAGE_ARTILLERY: i32 = -5;

// Ammo-driven range tables
pub const ATM_EXTENDED_RANGE: RangeTable = RangeTable::new(4, 9, 18, 27, 36);
pub const ATM_HIGH_EXPLOSIVE: RangeTable = RangeTable::new(0, 3, 6, 9, 12);
pub const MML_LRM_RANGES: RangeTable = RangeTable::new(6, 7, 14, 21, 28);
pub const MML_SRM_RANGES: RangeTable = RangeTable::new(0, 3, 6, 9, 12);
pub const LRM_DEAD_FIRE: RangeTable = RangeTable::new(4, 5, 10, 15, 20);
pub const SRM_DEAD_FIRE: RangeTable = RangeTable::new(0, 2, 4, 6, 8);

// Point defense bays
pub const POINT_DEFENSE_MODE: &str = "Point Defense";
pub const PD_BAY_SHORT_POINT_DEFENSE: Hexes = 1;
pub const PD_BAY_SHORT_STANDARD: Hexes = 6;

/// Extreme band for capital missiles fired in bearings-only mode
pub const RANGE_BEARINGS_ONLY_OUT: Hexes = 5000;

// AT2 band edges (short, medium, long, extreme); there is no minimum range
pub const AT_CAPITAL_RANGES: [Hexes; 4] = [12, 24, 40, 50];
pub const AT_STANDARD_RANGES: [Hexes; 4] = [6, 12, 20, 25];

// BattleForce / AlphaStrike range bands in hexes
pub const BF_SHORT_RANGE: Hexes = 3;
pub const BF_MEDIUM_RANGE: Hexes = 12;
pub const BF_LONG_RANGE: Hexes = 21;
pub const BF_EXTREME_RANGE: Hexes = 30;

/// Minimum range penalty at BattleForce short range is `(12 - min) / 12`
pub const BF_MIN_RANGE_BASE: f64 = 12.0;
/// BattleForce damage loses 5% per point of to-hit modifier
pub const BF_TO_HIT_DISCOUNT: f64 = 0.05;
/// Detailed damage is divided by this to reach BattleForce scale
pub const BF_DAMAGE_SCALE: f64 = 10.0;
/// Cluster table roll used for average hits
pub const BF_CLUSTER_ROLL: u8 = 7;
/// Taser BattleForce damage at short range
pub const BF_TASER_SHORT_DAMAGE: f64 = 0.1;

// Fire starting target numbers
pub const FIRE_TN_FLAMER: u8 = 4;
pub const FIRE_TN_INCENDIARY_NEEDLES: u8 = 6;
pub const FIRE_TN_ENERGY: u8 = 7;
pub const FIRE_TN_DEFAULT: u8 = 9;

// Cost and construction
pub const ARMORED_COST_PER_CRITICAL: f64 = 150_000.0;
pub const SPLITTABLE_CRITICALS: i32 = 8;
