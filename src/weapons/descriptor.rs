//! Weapon descriptors - the immutable stat block shared by every mounted copy
//!
//! One descriptor exists per weapon type. Context-dependent values (ammo,
//! firing mode) are computed by the resolver modules into fresh results and
//! never written back here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::{Hexes, RangeBand, RangeTable};
use crate::weapons::ammo::AmmoFamily;
use crate::weapons::constants::{
    ARMORED_COST_PER_CRITICAL, DAMAGE_ARTILLERY, DAMAGE_BY_CLUSTER_TABLE, DAMAGE_SPECIAL,
    DAMAGE_VARIABLE, SPLITTABLE_CRITICALS,
};
use crate::weapons::flags::{EquipmentFlag, WeaponFlag, WeaponFlags};

/// Damage that is not a fixed number and needs a specialised calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentinelCode {
    /// Roll on the cluster hits table
    ByClusterTable,
    /// Damage depends on range
    Variable,
    /// Family-specific rules
    Special,
    /// Distance-banded artillery tables
    Artillery,
}

impl SentinelCode {
    /// The reserved negative value used for this code in raw data
    pub fn raw(self) -> i32 {
        match self {
            SentinelCode::ByClusterTable => DAMAGE_BY_CLUSTER_TABLE,
            SentinelCode::Variable => DAMAGE_VARIABLE,
            SentinelCode::Special => DAMAGE_SPECIAL,
            SentinelCode::Artillery => DAMAGE_ARTILLERY,
        }
    }

    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            DAMAGE_BY_CLUSTER_TABLE => Some(SentinelCode::ByClusterTable),
            DAMAGE_VARIABLE => Some(SentinelCode::Variable),
            DAMAGE_SPECIAL => Some(SentinelCode::Special),
            DAMAGE_ARTILLERY => Some(SentinelCode::Artillery),
            _ => None,
        }
    }
}

/// Base damage of a weapon type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum DamageCode {
    Fixed(i32),
    Sentinel(SentinelCode),
}

impl DamageCode {
    /// Fixed damage, or the sentinel's reserved negative value
    pub fn raw(self) -> i32 {
        match self {
            DamageCode::Fixed(value) => value,
            DamageCode::Sentinel(code) => code.raw(),
        }
    }
}

impl Default for DamageCode {
    fn default() -> Self {
        DamageCode::Fixed(0)
    }
}

impl From<i32> for DamageCode {
    fn from(value: i32) -> Self {
        SentinelCode::from_raw(value)
            .map(DamageCode::Sentinel)
            .unwrap_or(DamageCode::Fixed(value))
    }
}

/// Per-band damage for weapons whose damage is `Variable`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableDamage {
    pub short: i32,
    pub medium: i32,
    pub long: i32,
}

/// Range bands under water; the minimum range is shared with the dry table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterRanges {
    pub short: Hexes,
    pub medium: Hexes,
    pub long: Hexes,
    pub extreme: Hexes,
}

/// Capital-scale attack values by band
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackValues {
    pub short: f64,
    pub medium: f64,
    pub long: f64,
    pub extreme: f64,
}

impl AttackValues {
    pub fn value(&self, band: RangeBand) -> f64 {
        match band {
            RangeBand::Short => self.short,
            RangeBand::Medium => self.medium,
            RangeBand::Long => self.long,
            RangeBand::Extreme => self.extreme,
        }
    }

    /// Attack value rounded up to a whole number
    pub fn rounded(&self, band: RangeBand) -> i32 {
        self.value(band).ceil() as i32
    }
}

/// Classification used for capital-ship bays and AT2 attack values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttackValueClass {
    #[default]
    None,
    Laser,
    PointDefense,
    Ppc,
    PulseLaser,
    Artillery,
    Plasma,
    Ac,
    LbxAc,
    Lrm,
    Srm,
    Mrm,
    Mml,
    Atm,
    RocketLauncher,
    CapitalLaser,
    CapitalPpc,
    CapitalAc,
    CapitalGauss,
    CapitalMissile,
    Ar10,
    Screen,
    SubCapitalCannon,
    CapitalMd,
    Ams,
    TeleMissile,
    Gauss,
    Thunderbolt,
    Mortar,
}

impl AttackValueClass {
    pub const ALL: [AttackValueClass; 29] = [
        AttackValueClass::None,
        AttackValueClass::Laser,
        AttackValueClass::PointDefense,
        AttackValueClass::Ppc,
        AttackValueClass::PulseLaser,
        AttackValueClass::Artillery,
        AttackValueClass::Plasma,
        AttackValueClass::Ac,
        AttackValueClass::LbxAc,
        AttackValueClass::Lrm,
        AttackValueClass::Srm,
        AttackValueClass::Mrm,
        AttackValueClass::Mml,
        AttackValueClass::Atm,
        AttackValueClass::RocketLauncher,
        AttackValueClass::CapitalLaser,
        AttackValueClass::CapitalPpc,
        AttackValueClass::CapitalAc,
        AttackValueClass::CapitalGauss,
        AttackValueClass::CapitalMissile,
        AttackValueClass::Ar10,
        AttackValueClass::Screen,
        AttackValueClass::SubCapitalCannon,
        AttackValueClass::CapitalMd,
        AttackValueClass::Ams,
        AttackValueClass::TeleMissile,
        AttackValueClass::Gauss,
        AttackValueClass::Thunderbolt,
        AttackValueClass::Mortar,
    ];
}

/// Weapon classes tracked separately from standard damage in BattleForce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BattleForceClass {
    #[default]
    Standard,
    Lrm,
    Srm,
    /// Not a separate category; contributes to both SRM and LRM
    Mml,
    Torp,
    Ac,
    Flak,
    Iatm,
    Rel,
    Capital,
    SubCapital,
    CapitalMissile,
}

/// How a weapon's damage is applied to infantry and battle armor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageClass {
    #[default]
    DirectFire,
    ClusterBallistic,
    Pulse,
    ClusterMissile,
    ClusterMissile1d6,
    ClusterMissile2d6,
    ClusterMissile3d6,
    BurstHalfD6,
    Burst1d6,
    Burst2d6,
    Burst3d6,
    Burst4d6,
    Burst5d6,
    Burst6d6,
    Burst7d6,
    /// BA vs BA damage for the BA plasma rifle
    Plasma,
}

/// Values used only when converting to the AlphaStrike scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphaStrikeTraits {
    /// Heat when it differs from the detailed heat value
    pub heat: Option<i32>,
    /// Heat damage inflicted per band (short, medium, long, extreme)
    pub heat_damage: [i32; 4],
    /// Contribution to the IF ability when it differs from indirect fire
    pub indirect_fire: Option<bool>,
    /// Contribution to the PNT ability
    pub point_defense: bool,
}

/// Immutable stat block of one weapon type
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeaponDescriptor {
    /// Display name
    pub name: String,
    /// Stable identity used in saved data
    pub internal_name: String,
    /// Additional lookup names
    pub aliases: Vec<String>,

    pub heat: i32,
    pub damage: DamageCode,
    pub variable_damage: Option<VariableDamage>,
    /// Damage of each missile or slug for cluster-table weapons
    pub damage_per_missile: i32,
    /// Missiles per salvo, AC size and so on
    pub rack_size: i32,
    pub ammo_family: AmmoFamily,

    pub ranges: RangeTable,
    pub water_ranges: WaterRanges,
    pub max_range: RangeBand,

    pub attack_values: AttackValues,
    pub attack_value_class: AttackValueClass,
    pub capital: bool,
    pub sub_capital: bool,
    pub missile_armor: i32,

    pub infantry_damage_class: DamageClass,
    pub ba_damage_class: DamageClass,
    pub battle_force_class: BattleForceClass,
    pub alpha_strike: AlphaStrikeTraits,
    /// Usable for LRM-style indirect fire
    pub indirect_fire: bool,

    pub flags: WeaponFlags,
    pub to_hit_modifier: i32,
    pub explosion_damage: i32,
    pub criticals: i32,
    pub tonnage: f64,
    pub cost: f64,
    /// Selectable firing modes, e.g. "Point Defense"
    pub modes: Vec<String>,
}

impl WeaponDescriptor {
    /// Typed flag query
    pub fn has_flag(&self, flag: WeaponFlag) -> bool {
        self.flags.contains(flag)
    }

    /// Flag query for flags whose domain is only known at runtime
    ///
    /// Asking a weapon about an ammo or misc flag is a caller bug; it is
    /// logged and answered with false so combat resolution can continue.
    pub fn has_equipment_flag(&self, flag: EquipmentFlag) -> bool {
        match flag {
            EquipmentFlag::Weapon(flag) => self.has_flag(flag),
            other => {
                tracing::warn!(
                    "Incorrect flag check on '{}': tested {} flag {} instead of a weapon flag",
                    self.internal_name,
                    other.domain(),
                    other
                );
                false
            }
        }
    }

    /// Flag query by name, as flags appear in catalog data
    pub fn has_flag_named(&self, name: &str) -> bool {
        match name.parse::<EquipmentFlag>() {
            Ok(flag) => self.has_equipment_flag(flag),
            Err(err) => {
                tracing::warn!("Incorrect flag check on '{}': {}", self.internal_name, err);
                false
            }
        }
    }

    /// Primary name, internal name and aliases, without duplicates
    pub fn lookup_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.aliases.len() + 2);
        for name in std::iter::once(self.name.as_str())
            .chain(std::iter::once(self.internal_name.as_str()))
            .chain(self.aliases.iter().map(String::as_str))
        {
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Index of a firing mode, matched case-insensitively
    pub fn mode_index(&self, mode: &str) -> Option<usize> {
        self.modes.iter().position(|m| m.eq_ignore_ascii_case(mode))
    }

    pub fn has_modes(&self) -> bool {
        !self.modes.is_empty()
    }

    /// Purchase cost; armored components pay extra per critical slot
    pub fn cost(&self, armored: bool) -> f64 {
        if armored {
            self.cost + ARMORED_COST_PER_CRITICAL * self.criticals as f64
        } else {
            self.cost
        }
    }

    /// Large weapons may be split across locations
    pub fn is_splittable(&self) -> bool {
        self.criticals >= SPLITTABLE_CRITICALS
    }
}

impl fmt::Display for WeaponDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Weapon] {}", self.internal_name)
    }
}
