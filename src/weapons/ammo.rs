//! Ammunition families, munition sub-types and loaded ammunition

use serde::{Deserialize, Serialize};
use std::fmt;

use super::flags::{flag_domain, AmmoFlag, AmmoFlags, FlagSet};

/// Ammunition family a weapon accepts, or `Na` for weapons without ammo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmmoFamily {
    #[default]
    Na,
    Ac,
    AcLbx,
    AcUltra,
    AcRotary,
    Gauss,
    Mg,
    Lrm,
    LrmTorpedo,
    Srm,
    SrmTorpedo,
    Mml,
    Mrm,
    Atm,
    Iatm,
    RocketLauncher,
    Ams,
    Taser,
    Arrow4,
    LongTom,
    Sniper,
    Thumper,
    Plasma,
    Ar10,
    KillerWhale,
    WhiteShark,
    Barracuda,
    ScreenLauncher,
}

impl AmmoFamily {
    pub const ALL: [AmmoFamily; 28] = [
        AmmoFamily::Na,
        AmmoFamily::Ac,
        AmmoFamily::AcLbx,
        AmmoFamily::AcUltra,
        AmmoFamily::AcRotary,
        AmmoFamily::Gauss,
        AmmoFamily::Mg,
        AmmoFamily::Lrm,
        AmmoFamily::LrmTorpedo,
        AmmoFamily::Srm,
        AmmoFamily::SrmTorpedo,
        AmmoFamily::Mml,
        AmmoFamily::Mrm,
        AmmoFamily::Atm,
        AmmoFamily::Iatm,
        AmmoFamily::RocketLauncher,
        AmmoFamily::Ams,
        AmmoFamily::Taser,
        AmmoFamily::Arrow4,
        AmmoFamily::LongTom,
        AmmoFamily::Sniper,
        AmmoFamily::Thumper,
        AmmoFamily::Plasma,
        AmmoFamily::Ar10,
        AmmoFamily::KillerWhale,
        AmmoFamily::WhiteShark,
        AmmoFamily::Barracuda,
        AmmoFamily::ScreenLauncher,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AmmoFamily::Na => "NA",
            AmmoFamily::Ac => "AC",
            AmmoFamily::AcLbx => "AC_LBX",
            AmmoFamily::AcUltra => "AC_ULTRA",
            AmmoFamily::AcRotary => "AC_ROTARY",
            AmmoFamily::Gauss => "GAUSS",
            AmmoFamily::Mg => "MG",
            AmmoFamily::Lrm => "LRM",
            AmmoFamily::LrmTorpedo => "LRM_TORPEDO",
            AmmoFamily::Srm => "SRM",
            AmmoFamily::SrmTorpedo => "SRM_TORPEDO",
            AmmoFamily::Mml => "MML",
            AmmoFamily::Mrm => "MRM",
            AmmoFamily::Atm => "ATM",
            AmmoFamily::Iatm => "IATM",
            AmmoFamily::RocketLauncher => "ROCKET_LAUNCHER",
            AmmoFamily::Ams => "AMS",
            AmmoFamily::Taser => "TASER",
            AmmoFamily::Arrow4 => "ARROW4",
            AmmoFamily::LongTom => "LONG_TOM",
            AmmoFamily::Sniper => "SNIPER",
            AmmoFamily::Thumper => "THUMPER",
            AmmoFamily::Plasma => "PLASMA",
            AmmoFamily::Ar10 => "AR10",
            AmmoFamily::KillerWhale => "KILLER_WHALE",
            AmmoFamily::WhiteShark => "WHITE_SHARK",
            AmmoFamily::Barracuda => "BARRACUDA",
            AmmoFamily::ScreenLauncher => "SCREEN_LAUNCHER",
        }
    }

    /// ATM and improved ATM share the ER/HE range tables
    pub fn is_atm(self) -> bool {
        matches!(self, AmmoFamily::Atm | AmmoFamily::Iatm)
    }
}

impl fmt::Display for AmmoFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for AmmoFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        AmmoFamily::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown ammo family '{}'", s))
    }
}

flag_domain!(
    /// Munition sub-type carried by a specific ammo bin
    Munition, "munition" {
        Standard => "standard",
        ExtendedRange => "extended_range",
        HighExplosive => "high_explosive",
        IatmImp => "iatm_imp",
        DeadFire => "dead_fire",
        Inferno => "inferno",
        Fragmentation => "fragmentation",
        Swarm => "swarm",
        Thunder => "thunder",
        Tandem => "tandem_charge",
        Semiguided => "semiguided",
        ArtemisCapable => "artemis_capable",
    }
);

pub type MunitionSet = FlagSet<Munition>;

/// An ammunition type: family, munitions and ammo flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmmoType {
    pub family: AmmoFamily,
    pub munitions: MunitionSet,
    pub flags: AmmoFlags,
}

impl AmmoType {
    /// Standard ammunition of a family
    pub fn new(family: AmmoFamily) -> Self {
        Self {
            family,
            munitions: MunitionSet::empty(),
            flags: AmmoFlags::empty(),
        }
    }

    pub fn with_munition(mut self, munition: Munition) -> Self {
        self.munitions = self.munitions.with(munition);
        self
    }

    pub fn with_flag(mut self, flag: AmmoFlag) -> Self {
        self.flags = self.flags.with(flag);
        self
    }

    /// An empty munition set counts as standard rounds
    pub fn has_munition(&self, munition: Munition) -> bool {
        self.munitions.contains(munition)
            || (munition == Munition::Standard && self.munitions.is_empty())
    }

    pub fn has_flag(&self, flag: AmmoFlag) -> bool {
        self.flags.contains(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_parse() {
        assert_eq!("atm".parse::<AmmoFamily>(), Ok(AmmoFamily::Atm));
        assert_eq!("lrm-torpedo".parse::<AmmoFamily>(), Ok(AmmoFamily::LrmTorpedo));
        assert!("photon".parse::<AmmoFamily>().is_err());
    }

    #[test]
    fn test_family_serde_names_match_display() {
        for family in AmmoFamily::ALL {
            let json = serde_json::to_string(&family).unwrap();
            assert_eq!(json, format!("\"{}\"", family.name()));
        }
    }

    #[test]
    fn test_ammo_builder() {
        let ammo = AmmoType::new(AmmoFamily::Mml)
            .with_flag(AmmoFlag::MmlLrm)
            .with_munition(Munition::DeadFire);
        assert!(ammo.has_flag(AmmoFlag::MmlLrm));
        assert!(ammo.has_munition(Munition::DeadFire));
        assert!(!ammo.has_munition(Munition::ExtendedRange));
    }
}
