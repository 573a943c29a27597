//! Trait flags for weapons, ammunition and miscellaneous equipment
//!
//! Each flag domain is a closed enum. Sets of flags are stored as a typed
//! bitset, so a weapon can only ever be asked about weapon flags at compile
//! time. Flags that arrive as strings (catalog data, CLI input) go through
//! `EquipmentFlag`, which keeps a runtime domain check.

use serde::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// A closed enumeration of flags that fits in a `FlagSet`
pub trait FlagDomain: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];
    const DOMAIN: &'static str;

    fn bit(self) -> u32;
    fn name(self) -> &'static str;

    /// Parse a flag name, case-insensitive, with an optional legacy `F_` prefix
    fn from_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        let bare = trimmed
            .strip_prefix("F_")
            .or_else(|| trimmed.strip_prefix("f_"))
            .unwrap_or(trimmed);
        Self::ALL
            .iter()
            .copied()
            .find(|flag| flag.name().eq_ignore_ascii_case(bare))
    }
}

macro_rules! flag_domain {
    ($(#[$meta:meta])* $ty:ident, $domain:literal { $($variant:ident => $name:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum $ty {
            $($variant),*
        }

        impl $crate::weapons::flags::FlagDomain for $ty {
            const ALL: &'static [Self] = &[$($ty::$variant),*];
            const DOMAIN: &'static str = $domain;

            fn bit(self) -> u32 {
                self as u32
            }

            fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),*
                }
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::weapons::flags::FlagDomain::name(*self))
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::weapons::flags::FlagDomain>::from_name(s)
                    .ok_or_else(|| format!("'{}' is not a {} flag", s, $domain))
            }
        }

        impl ::serde::Serialize for $ty {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::weapons::flags::FlagDomain::name(*self))
            }
        }
    };
}

pub(crate) use flag_domain;

flag_domain!(
    /// Boolean traits of a weapon type
    WeaponFlag, "weapon" {
        DirectFire => "direct_fire",
        Flamer => "flamer",
        Laser => "laser",
        Ppc => "ppc",
        AutoTarget => "auto_target",
        NoFires => "no_fires",
        SoloAttack => "solo_attack",
        Vgl => "vgl",
        Mg => "mg",
        Inferno => "inferno",
        Infantry => "infantry",
        MissileHits => "missile_hits",
        OneShot => "oneshot",
        Artillery => "artillery",
        Ballistic => "ballistic",
        Energy => "energy",
        Missile => "missile",
        Plasma => "plasma",
        IncendiaryNeedles => "incendiary_needles",
        Prototype => "prototype",
        HeatAsDice => "heat_as_dice",
        Ams => "ams",
        InfantryOnly => "infantry_only",
        Tag => "tag",
        C3m => "c3m",
        PlasmaMfuk => "plasma_mfuk",
        Extinguisher => "extinguisher",
        Pulse => "pulse",
        BurstFire => "burst_fire",
        Mga => "mga",
        NoAim => "no_aim",
        BombastLaser => "bombast_laser",
        CruiseMissile => "cruise_missile",
        BPod => "b_pod",
        Taser => "taser",
        AntiShip => "anti_ship",
        SpaceBomb => "space_bomb",
        MPod => "m_pod",
        DiveBomb => "dive_bomb",
        AltBomb => "alt_bomb",
        BaWeapon => "ba_weapon",
        MekWeapon => "mek_weapon",
        AeroWeapon => "aero_weapon",
        ProtoWeapon => "proto_weapon",
        TankWeapon => "tank_weapon",
        InfantryAttack => "infantry_attack",
        InfBurst => "inf_burst",
        InfAa => "inf_aa",
        InfNonpenetrating => "inf_nonpenetrating",
        InfPointBlank => "inf_point_blank",
        InfSupport => "inf_support",
        InfEncumber => "inf_encumber",
        InfArchaic => "inf_archaic",
        InfClimbingClaws => "inf_climbingclaws",
        C3mbs => "c3mbs",
        MassDriver => "mass_driver",
        Cws => "cws",
        MekMortar => "mek_mortar",
        BombWeapon => "bomb_weapon",
        BaIndividual => "ba_individual",
        PdBay => "pdbay",
        AmsBay => "amsbay",
        LargeMissile => "largemissile",
        Hyper => "hyper",
        DoubleOneShot => "double_oneshot",
        ErFlamer => "er_flamer",
        ArtemisCompatible => "artemis_compatible",
        MortarTypeIndirect => "mortartype_indirect",
        Tsemp => "tsemp",
        Repeating => "repeating",
    }
);

flag_domain!(
    /// Boolean traits of an ammunition type
    AmmoFlag, "ammo" {
        Mg => "ammo_mg",
        BattleArmor => "battlearmor",
        ProtoMek => "protomek",
        Hotload => "hotload",
        Encumbering => "encumbering",
        MmlLrm => "mml_lrm",
        CapitalMissile => "cap_missile",
        TeleMissile => "tele_missile",
        Screen => "screen",
        Nuclear => "nuclear",
    }
);

flag_domain!(
    /// Boolean traits of non-weapon equipment
    MiscFlag, "misc" {
        TargetingComputer => "targeting_computer",
        ArtemisIv => "artemis_iv",
        ArtemisV => "artemis_v",
        Apollo => "apollo",
        Case => "case",
        C3Slave => "c3_slave",
    }
);

/// Typed bitset over one flag domain
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagSet<F: FlagDomain> {
    bits: u128,
    _domain: PhantomData<F>,
}

pub type WeaponFlags = FlagSet<WeaponFlag>;
pub type AmmoFlags = FlagSet<AmmoFlag>;

impl<F: FlagDomain> FlagSet<F> {
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _domain: PhantomData,
        }
    }

    pub fn with(self, flag: F) -> Self {
        Self {
            bits: self.bits | (1u128 << flag.bit()),
            _domain: PhantomData,
        }
    }

    pub fn contains(&self, flag: F) -> bool {
        self.bits & (1u128 << flag.bit()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        F::ALL.iter().copied().filter(move |flag| self.contains(*flag))
    }
}

impl<F: FlagDomain> Default for FlagSet<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: FlagDomain> std::ops::BitOr<F> for FlagSet<F> {
    type Output = Self;
    fn bitor(self, rhs: F) -> Self {
        self.with(rhs)
    }
}

impl<F: FlagDomain> FromIterator<F> for FlagSet<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl<F: FlagDomain> fmt::Debug for FlagSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|flag| flag.name())).finish()
    }
}

impl<F: FlagDomain + Serialize> Serialize for FlagSet<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// A flag from any equipment domain
///
/// Used where the domain is only known at runtime. Weapon descriptors answer
/// false for anything but `EquipmentFlag::Weapon`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentFlag {
    Weapon(WeaponFlag),
    Ammo(AmmoFlag),
    Misc(MiscFlag),
}

impl EquipmentFlag {
    pub fn domain(&self) -> &'static str {
        match self {
            EquipmentFlag::Weapon(_) => WeaponFlag::DOMAIN,
            EquipmentFlag::Ammo(_) => AmmoFlag::DOMAIN,
            EquipmentFlag::Misc(_) => MiscFlag::DOMAIN,
        }
    }
}

impl From<WeaponFlag> for EquipmentFlag {
    fn from(flag: WeaponFlag) -> Self {
        EquipmentFlag::Weapon(flag)
    }
}

impl From<AmmoFlag> for EquipmentFlag {
    fn from(flag: AmmoFlag) -> Self {
        EquipmentFlag::Ammo(flag)
    }
}

impl From<MiscFlag> for EquipmentFlag {
    fn from(flag: MiscFlag) -> Self {
        EquipmentFlag::Misc(flag)
    }
}

impl fmt::Display for EquipmentFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquipmentFlag::Weapon(flag) => write!(f, "weapon:{}", flag),
            EquipmentFlag::Ammo(flag) => write!(f, "ammo:{}", flag),
            EquipmentFlag::Misc(flag) => write!(f, "misc:{}", flag),
        }
    }
}

impl FromStr for EquipmentFlag {
    type Err = String;

    /// Accepts `domain:name` or a bare name; bare names try weapon, ammo, then misc
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((domain, name)) = s.split_once(':') {
            return match domain.trim().to_ascii_lowercase().as_str() {
                "weapon" => name.parse().map(EquipmentFlag::Weapon),
                "ammo" => name.parse().map(EquipmentFlag::Ammo),
                "misc" => name.parse().map(EquipmentFlag::Misc),
                other => Err(format!("unknown flag domain '{}'", other)),
            };
        }
        WeaponFlag::from_name(s)
            .map(EquipmentFlag::Weapon)
            .or_else(|| AmmoFlag::from_name(s).map(EquipmentFlag::Ammo))
            .or_else(|| MiscFlag::from_name(s).map(EquipmentFlag::Misc))
            .ok_or_else(|| format!("unknown flag '{}'", s))
    }
}
