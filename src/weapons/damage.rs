//! Damage classification, maximum range band and fire starting
//!
//! `resolve_damage` never computes special-case damage. It only reports
//! which specialised calculator the caller has to consult.

use serde::Serialize;

use crate::core::types::{Hexes, RangeBand};
use crate::weapons::ammo::{AmmoFamily, Munition};
use crate::weapons::constants::{
    FIRE_TN_DEFAULT, FIRE_TN_ENERGY, FIRE_TN_FLAMER, FIRE_TN_INCENDIARY_NEEDLES,
};
use crate::weapons::descriptor::{AttackValueClass, DamageCode, SentinelCode, WeaponDescriptor};
use crate::weapons::flags::{AmmoFlag, WeaponFlag};
use crate::weapons::mounted::{FiringContext, MountedWeapon};

/// Damage of one attack, or a request to delegate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageResolution {
    Damage(i32),
    /// The caller must consult the calculator named by the code
    Delegate(SentinelCode),
}

impl DamageResolution {
    pub fn fixed(self) -> Option<i32> {
        match self {
            DamageResolution::Damage(value) => Some(value),
            DamageResolution::Delegate(_) => None,
        }
    }
}

/// Classify a weapon's damage at a range
///
/// The range is accepted for symmetry with the specialised calculators;
/// fixed damage does not depend on it.
pub fn resolve_damage(descriptor: &WeaponDescriptor, _range: Hexes) -> DamageResolution {
    match descriptor.damage {
        DamageCode::Fixed(value) => DamageResolution::Damage(value),
        DamageCode::Sentinel(code) => DamageResolution::Delegate(code),
    }
}

/// Numeric damage at a range where the descriptor alone can provide one
///
/// Variable-damage weapons read their per-band table against their own
/// bands. Sentinels with no table come back as the raw negative code.
pub fn damage_at(descriptor: &WeaponDescriptor, range: Hexes) -> i32 {
    match (descriptor.damage, descriptor.variable_damage) {
        (DamageCode::Fixed(value), _) => value,
        (DamageCode::Sentinel(SentinelCode::Variable), Some(table)) => {
            match descriptor.ranges.band_for(range) {
                Some(RangeBand::Short) => table.short,
                Some(RangeBand::Medium) => table.medium,
                _ => table.long,
            }
        }
        (code, _) => code.raw(),
    }
}

/// Farthest band the weapon can engage at with its linked ammo
pub fn max_range(weapon: &MountedWeapon) -> RangeBand {
    resolve_max_range(&weapon.context())
}

/// Farthest band for a firing context
pub fn resolve_max_range(ctx: &FiringContext<'_>) -> RangeBand {
    let descriptor = ctx.descriptor();
    let Some(ammo) = ctx.ammo_type() else {
        return descriptor.max_range;
    };

    if descriptor.attack_value_class == AttackValueClass::Atm && ammo.family.is_atm() {
        if ammo.has_munition(Munition::ExtendedRange) {
            return RangeBand::Extreme;
        } else if ammo.has_munition(Munition::HighExplosive) {
            return RangeBand::Short;
        }
    }

    if descriptor.ammo_family == AmmoFamily::Mml {
        return if ammo.has_flag(AmmoFlag::MmlLrm) {
            RangeBand::Long
        } else {
            RangeBand::Short
        };
    }

    descriptor.max_range
}

/// Target number to start a fire with this weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FireTarget {
    Impossible,
    AutomaticSuccess,
    Roll(u8),
}

/// Fire-starting target number; the first matching trait wins
pub fn fire_target(descriptor: &WeaponDescriptor) -> FireTarget {
    if descriptor.has_flag(WeaponFlag::NoFires) {
        FireTarget::Impossible
    } else if descriptor.has_flag(WeaponFlag::Flamer) {
        FireTarget::Roll(FIRE_TN_FLAMER)
    } else if descriptor.has_flag(WeaponFlag::Plasma)
        || descriptor.has_flag(WeaponFlag::PlasmaMfuk)
        || descriptor.has_flag(WeaponFlag::Inferno)
    {
        FireTarget::AutomaticSuccess
    } else if descriptor.has_flag(WeaponFlag::IncendiaryNeedles) {
        FireTarget::Roll(FIRE_TN_INCENDIARY_NEEDLES)
    } else if descriptor.has_flag(WeaponFlag::Ppc) || descriptor.has_flag(WeaponFlag::Laser) {
        FireTarget::Roll(FIRE_TN_ENERGY)
    } else {
        FireTarget::Roll(FIRE_TN_DEFAULT)
    }
}
