//! Range resolution
//!
//! Starts from the descriptor's bands and applies ammo and mode overrides in
//! a fixed order. Later rules win, and a missing ammo bin simply skips the
//! ammo rules.

use crate::core::types::{Hexes, RangeTable};
use crate::weapons::ammo::{AmmoFamily, Munition};
use crate::weapons::constants::{
    ATM_EXTENDED_RANGE, ATM_HIGH_EXPLOSIVE, AT_CAPITAL_RANGES, AT_STANDARD_RANGES, LRM_DEAD_FIRE,
    MML_LRM_RANGES, MML_SRM_RANGES, PD_BAY_SHORT_POINT_DEFENSE, PD_BAY_SHORT_STANDARD,
    POINT_DEFENSE_MODE, RANGE_BEARINGS_ONLY_OUT, SRM_DEAD_FIRE,
};
use crate::weapons::descriptor::WeaponDescriptor;
use crate::weapons::flags::{AmmoFlag, WeaponFlag};
use crate::weapons::mounted::{FiringContext, MountedWeapon};

/// Range bands of a weapon fired with its linked ammo
pub fn ranges(weapon: &MountedWeapon) -> RangeTable {
    resolve_ranges(&weapon.context())
}

/// Range bands for a firing context
pub fn resolve_ranges(ctx: &FiringContext<'_>) -> RangeTable {
    let descriptor = ctx.descriptor();
    let mut table = descriptor.ranges;

    if let Some(ammo) = ctx.ammo_type() {
        match descriptor.ammo_family {
            AmmoFamily::Atm if ammo.family == AmmoFamily::Atm => {
                if ammo.has_munition(Munition::ExtendedRange) {
                    table = ATM_EXTENDED_RANGE;
                } else if ammo.has_munition(Munition::HighExplosive) {
                    table = ATM_HIGH_EXPLOSIVE;
                }
            }
            AmmoFamily::Iatm if ammo.family == AmmoFamily::Iatm => {
                if ammo.has_munition(Munition::ExtendedRange) {
                    table = ATM_EXTENDED_RANGE;
                } else if ammo.has_munition(Munition::HighExplosive)
                    || ammo.has_munition(Munition::IatmImp)
                {
                    table = ATM_HIGH_EXPLOSIVE;
                }
            }
            AmmoFamily::Mml => {
                table = if ammo.has_flag(AmmoFlag::MmlLrm) {
                    MML_LRM_RANGES
                } else {
                    MML_SRM_RANGES
                };
                if ammo.has_munition(Munition::DeadFire) {
                    table = if ammo.has_flag(AmmoFlag::MmlLrm) {
                        LRM_DEAD_FIRE
                    } else {
                        SRM_DEAD_FIRE
                    };
                }
            }
            AmmoFamily::Lrm
                if ammo.family == AmmoFamily::Lrm && ammo.has_munition(Munition::DeadFire) =>
            {
                table = LRM_DEAD_FIRE;
            }
            AmmoFamily::Srm
                if ammo.family == AmmoFamily::Srm && ammo.has_munition(Munition::DeadFire) =>
            {
                table = SRM_DEAD_FIRE;
            }
            _ => {}
        }
    }

    if descriptor.has_flag(WeaponFlag::PdBay) {
        table.short = if ctx.weapon.is_in_mode(POINT_DEFENSE_MODE) {
            PD_BAY_SHORT_POINT_DEFENSE
        } else {
            PD_BAY_SHORT_STANDARD
        };
    }

    if ctx.weapon.is_in_bearings_only_mode() {
        table.extreme = RANGE_BEARINGS_ONLY_OUT;
    }

    table
}

/// Underwater bands as `[minimum, short, medium, long, extreme]`
pub fn water_ranges(descriptor: &WeaponDescriptor) -> [Hexes; 5] {
    let water = descriptor.water_ranges;
    [
        descriptor.ranges.minimum,
        water.short,
        water.medium,
        water.long,
        water.extreme,
    ]
}

/// AT2 band edges (short, medium, long, extreme)
pub fn at_ranges(descriptor: &WeaponDescriptor) -> [Hexes; 4] {
    if descriptor.capital {
        AT_CAPITAL_RANGES
    } else {
        AT_STANDARD_RANGES
    }
}
