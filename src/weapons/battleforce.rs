//! BattleForce / AlphaStrike conversion
//!
//! Detailed weapon stats are folded into a handful of range-banded numbers
//! for the abstracted scoring mode. Results are on the BattleForce scale
//! (detailed damage divided by ten) and are not rounded here.

use crate::core::types::{Hexes, RangeBand};
use crate::weapons::ammo::AmmoFamily;
use crate::weapons::constants::{
    BF_CLUSTER_ROLL, BF_DAMAGE_SCALE, BF_EXTREME_RANGE, BF_LONG_RANGE, BF_MEDIUM_RANGE,
    BF_MIN_RANGE_BASE, BF_SHORT_RANGE, BF_TASER_SHORT_DAMAGE, BF_TO_HIT_DISCOUNT,
};
use crate::weapons::damage::damage_at;
use crate::weapons::descriptor::{BattleForceClass, DamageCode, SentinelCode, WeaponDescriptor};

/// Standard cluster hits table
///
/// One row per salvo size, one column per 2d6 roll from 2 to 12.
pub struct ClusterTable;

impl ClusterTable {
    pub const SIZES: [i32; 31] = [
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 27, 28, 29, 30, 40,
    ];

    const HITS: [[i32; 11]; 31] = [
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2],
        [1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3],
        [1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4],
        [1, 2, 2, 3, 3, 3, 3, 4, 4, 5, 5],
        [2, 2, 3, 3, 4, 4, 4, 5, 5, 6, 6],
        [2, 2, 3, 4, 4, 4, 4, 6, 6, 7, 7],
        [3, 3, 4, 4, 5, 5, 5, 6, 6, 8, 8],
        [3, 3, 4, 5, 5, 5, 5, 7, 7, 9, 9],
        [3, 3, 4, 6, 6, 6, 6, 8, 8, 10, 10],
        [4, 4, 5, 7, 7, 7, 7, 9, 9, 11, 11],
        [4, 4, 5, 8, 8, 8, 8, 10, 10, 12, 12],
        [4, 4, 5, 8, 8, 8, 8, 11, 11, 13, 13],
        [5, 5, 6, 9, 9, 9, 9, 11, 11, 14, 14],
        [5, 5, 6, 9, 9, 9, 9, 12, 12, 15, 15],
        [5, 5, 7, 10, 10, 10, 10, 13, 13, 16, 16],
        [5, 5, 7, 10, 10, 10, 10, 14, 14, 17, 17],
        [6, 6, 8, 11, 11, 11, 11, 14, 14, 18, 18],
        [6, 6, 8, 11, 11, 11, 11, 15, 15, 19, 19],
        [6, 6, 9, 12, 12, 12, 12, 16, 16, 20, 20],
        [7, 7, 9, 13, 13, 13, 13, 17, 17, 21, 21],
        [7, 7, 9, 14, 14, 14, 14, 18, 18, 22, 22],
        [7, 7, 10, 15, 15, 15, 15, 19, 19, 23, 23],
        [8, 8, 10, 16, 16, 16, 16, 20, 20, 24, 24],
        [8, 8, 10, 16, 16, 16, 16, 21, 21, 25, 25],
        [9, 9, 11, 17, 17, 17, 17, 21, 21, 26, 26],
        [9, 9, 11, 17, 17, 17, 17, 22, 22, 27, 27],
        [9, 9, 11, 17, 17, 17, 17, 23, 23, 28, 28],
        [10, 10, 12, 18, 18, 18, 18, 23, 23, 29, 29],
        [10, 10, 12, 18, 18, 18, 18, 24, 24, 30, 30],
        [12, 12, 18, 24, 24, 24, 24, 32, 32, 40, 40],
    ];

    /// Hits scored by a salvo of `size` on a 2d6 roll
    ///
    /// Rolls outside 2..=12 are clamped. Salvos of 31-39 or more than 40
    /// are split into the largest sizes that fit and the hits summed.
    pub fn hits(roll: u8, size: i32) -> i32 {
        let column = usize::from(roll.clamp(2, 12) - 2);
        let mut remaining = size;
        let mut hits = 0;
        while remaining > 0 {
            // SIZES starts at 1, so some row always fits
            let row = Self::SIZES
                .iter()
                .rposition(|&rack| rack <= remaining)
                .unwrap_or(0);
            hits += Self::HITS[row][column];
            remaining -= Self::SIZES[row];
        }
        hits
    }
}

/// Cluster hits for a roll and salvo size
pub fn cluster_hits(roll: u8, size: i32) -> i32 {
    ClusterTable::hits(roll, size)
}

/// BattleForce distance used for a band
pub fn battle_force_range(band: RangeBand) -> Hexes {
    match band {
        RangeBand::Short => BF_SHORT_RANGE,
        RangeBand::Medium => BF_MEDIUM_RANGE,
        RangeBand::Long => BF_LONG_RANGE,
        RangeBand::Extreme => BF_EXTREME_RANGE,
    }
}

/// BattleForce damage at a distance
pub fn battle_force_damage(descriptor: &WeaponDescriptor, range: Hexes) -> f64 {
    match descriptor.ammo_family {
        AmmoFamily::Taser => {
            return if range == BF_SHORT_RANGE {
                BF_TASER_SHORT_DAMAGE
            } else {
                0.0
            };
        }
        _ => {}
    }

    if range > descriptor.ranges.long {
        return 0.0;
    }

    let mut damage = f64::from(base_damage(descriptor, range));
    if range == BF_SHORT_RANGE && descriptor.ranges.minimum > 0 {
        damage = adjust_for_min_range(damage, descriptor.ranges.minimum);
    }
    damage -= damage * f64::from(descriptor.to_hit_modifier) * BF_TO_HIT_DISCOUNT;
    damage / BF_DAMAGE_SCALE
}

/// BattleForce damage of a squad firing the weapon together
pub fn battle_force_damage_for_squad(
    descriptor: &WeaponDescriptor,
    range: Hexes,
    squad_size: i32,
) -> f64 {
    f64::from(cluster_hits(BF_CLUSTER_ROLL, squad_size)) * battle_force_damage(descriptor, range)
}

/// Damage at each BattleForce band, short to extreme
pub fn battle_force_damage_by_band(descriptor: &WeaponDescriptor) -> [f64; 4] {
    RangeBand::ALL.map(|band| battle_force_damage(descriptor, battle_force_range(band)))
}

/// Minimum range penalty applied at BattleForce short range
pub fn adjust_for_min_range(damage: f64, minimum: Hexes) -> f64 {
    damage * (BF_MIN_RANGE_BASE - f64::from(minimum)) / BF_MIN_RANGE_BASE
}

fn base_damage(descriptor: &WeaponDescriptor, range: Hexes) -> i32 {
    let damage = match descriptor.damage {
        DamageCode::Sentinel(SentinelCode::Variable)
            if range == BF_MEDIUM_RANGE && descriptor.ranges.long < BF_LONG_RANGE =>
        {
            damage_at(descriptor, BF_LONG_RANGE)
        }
        DamageCode::Sentinel(SentinelCode::ByClusterTable) => {
            cluster_hits(BF_CLUSTER_ROLL, descriptor.rack_size) * descriptor.damage_per_missile
        }
        _ => damage_at(descriptor, range),
    };
    // special and artillery damage have no direct-fire value
    damage.max(0)
}

pub fn battle_force_class(descriptor: &WeaponDescriptor) -> BattleForceClass {
    descriptor.battle_force_class
}

/// AlphaStrike heat, falling back to the detailed heat value
pub fn alpha_strike_heat(descriptor: &WeaponDescriptor) -> i32 {
    descriptor.alpha_strike.heat.unwrap_or(descriptor.heat)
}

pub fn alpha_strike_heat_damage(descriptor: &WeaponDescriptor, band: RangeBand) -> i32 {
    descriptor.alpha_strike.heat_damage[band.index()]
}

pub fn has_indirect_fire(descriptor: &WeaponDescriptor) -> bool {
    descriptor.indirect_fire
}

/// Whether the weapon contributes to the AlphaStrike IF ability
pub fn is_alpha_strike_indirect_fire(descriptor: &WeaponDescriptor) -> bool {
    descriptor
        .alpha_strike
        .indirect_fire
        .unwrap_or(descriptor.indirect_fire)
}

pub fn is_alpha_strike_point_defense(descriptor: &WeaponDescriptor) -> bool {
    descriptor.alpha_strike.point_defense
}

pub fn round_attack_value(descriptor: &WeaponDescriptor, band: RangeBand) -> i32 {
    descriptor.attack_values.rounded(band)
}
