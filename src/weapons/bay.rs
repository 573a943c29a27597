//! Capital-ship weapon bays
//!
//! Capital vessels group weapons into bays by attack-value class. Every class
//! maps to exactly one bay; classes without a dedicated bay share `Misc`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::weapons::descriptor::{AttackValueClass, WeaponDescriptor};

/// Bay category a weapon is grouped into aboard capital vessels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BayType {
    Laser,
    Ams,
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
    Thunderbolt,
    Atm,
    RocketLauncher,
    CapitalLaser,
    SubCapitalLaser,
    CapitalPpc,
    CapitalAc,
    SubCapitalCannon,
    CapitalGauss,
    CapitalMassDriver,
    CapitalMissile,
    SubCapitalMissile,
    TeleMissile,
    Ar10,
    ScreenLauncher,
    Misc,
}

impl BayType {
    pub const ALL: [BayType; 29] = [
        BayType::Laser,
        BayType::Ams,
        BayType::PointDefense,
        BayType::Ppc,
        BayType::PulseLaser,
        BayType::Artillery,
        BayType::Plasma,
        BayType::Ac,
        BayType::LbxAc,
        BayType::Lrm,
        BayType::Srm,
        BayType::Mrm,
        BayType::Mml,
        BayType::Thunderbolt,
        BayType::Atm,
        BayType::RocketLauncher,
        BayType::CapitalLaser,
        BayType::SubCapitalLaser,
        BayType::CapitalPpc,
        BayType::CapitalAc,
        BayType::SubCapitalCannon,
        BayType::CapitalGauss,
        BayType::CapitalMassDriver,
        BayType::CapitalMissile,
        BayType::SubCapitalMissile,
        BayType::TeleMissile,
        BayType::Ar10,
        BayType::ScreenLauncher,
        BayType::Misc,
    ];

    /// Registry name of the bay weapon for this category
    pub fn lookup_name(self) -> &'static str {
        match self {
            BayType::Laser => "Laser Bay",
            BayType::Ams => "AMS Bay",
            BayType::PointDefense => "Point Defense Bay",
            BayType::Ppc => "PPC Bay",
            BayType::PulseLaser => "Pulse Laser Bay",
            BayType::Artillery => "Artillery Bay",
            BayType::Plasma => "Plasma Bay",
            BayType::Ac => "AC Bay",
            BayType::LbxAc => "LBX AC Bay",
            BayType::Lrm => "LRM Bay",
            BayType::Srm => "SRM Bay",
            BayType::Mrm => "MRM Bay",
            BayType::Mml => "MML Bay",
            BayType::Thunderbolt => "Thunderbolt Bay",
            BayType::Atm => "ATM Bay",
            BayType::RocketLauncher => "Rocket Launcher Bay",
            BayType::CapitalLaser => "Capital Laser Bay",
            BayType::SubCapitalLaser => "Sub-Capital Laser Bay",
            BayType::CapitalPpc => "Capital PPC Bay",
            BayType::CapitalAc => "Capital AC Bay",
            BayType::SubCapitalCannon => "Sub-Capital Cannon Bay",
            BayType::CapitalGauss => "Capital Gauss Bay",
            BayType::CapitalMassDriver => "Capital Mass Driver Bay",
            BayType::CapitalMissile => "Capital Missile Bay",
            BayType::SubCapitalMissile => "Sub-Capital Missile Bay",
            BayType::TeleMissile => "Tele-Operated Capital Missile Bay",
            BayType::Ar10 => "AR10 Bay",
            BayType::ScreenLauncher => "Screen Launcher Bay",
            BayType::Misc => "Misc Bay",
        }
    }
}

impl fmt::Display for BayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lookup_name())
    }
}

/// Bay for a weapon
///
/// With `capital_only` set, sub-capital weapons go into the full capital bay
/// of their class.
pub fn bay_type(descriptor: &WeaponDescriptor, capital_only: bool) -> BayType {
    bay_for_class(
        descriptor.attack_value_class,
        descriptor.sub_capital && !capital_only,
    )
}

/// Bay for an attack-value class
pub fn bay_for_class(class: AttackValueClass, sub_capital: bool) -> BayType {
    match class {
        AttackValueClass::Laser => BayType::Laser,
        AttackValueClass::Ams => BayType::Ams,
        AttackValueClass::PointDefense => BayType::PointDefense,
        AttackValueClass::Ppc => BayType::Ppc,
        AttackValueClass::PulseLaser => BayType::PulseLaser,
        AttackValueClass::Artillery => BayType::Artillery,
        AttackValueClass::Plasma => BayType::Plasma,
        AttackValueClass::Ac => BayType::Ac,
        AttackValueClass::LbxAc => BayType::LbxAc,
        AttackValueClass::Lrm => BayType::Lrm,
        AttackValueClass::Srm => BayType::Srm,
        AttackValueClass::Mrm => BayType::Mrm,
        AttackValueClass::Mml => BayType::Mml,
        AttackValueClass::Thunderbolt => BayType::Thunderbolt,
        AttackValueClass::Atm => BayType::Atm,
        AttackValueClass::RocketLauncher => BayType::RocketLauncher,
        AttackValueClass::CapitalLaser if sub_capital => BayType::SubCapitalLaser,
        AttackValueClass::CapitalLaser => BayType::CapitalLaser,
        AttackValueClass::CapitalPpc => BayType::CapitalPpc,
        AttackValueClass::CapitalAc if sub_capital => BayType::SubCapitalCannon,
        AttackValueClass::CapitalAc => BayType::CapitalAc,
        AttackValueClass::CapitalGauss => BayType::CapitalGauss,
        AttackValueClass::CapitalMd => BayType::CapitalMassDriver,
        AttackValueClass::CapitalMissile if sub_capital => BayType::SubCapitalMissile,
        AttackValueClass::CapitalMissile => BayType::CapitalMissile,
        AttackValueClass::TeleMissile => BayType::TeleMissile,
        AttackValueClass::Ar10 => BayType::Ar10,
        AttackValueClass::Screen => BayType::ScreenLauncher,
        AttackValueClass::None
        | AttackValueClass::Gauss
        | AttackValueClass::Mortar
        | AttackValueClass::SubCapitalCannon => BayType::Misc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn weapon(class: AttackValueClass, sub_capital: bool) -> WeaponDescriptor {
        WeaponDescriptor {
            attack_value_class: class,
            capital: true,
            sub_capital,
            ..Default::default()
        }
    }

    #[test]
    fn test_every_class_has_a_bay() {
        for class in AttackValueClass::ALL {
            for sub_capital in [false, true] {
                let bay = bay_for_class(class, sub_capital);
                assert!(BayType::ALL.contains(&bay));
            }
        }
    }

    #[test]
    fn test_lookup_names_unique() {
        let names: HashSet<&str> = BayType::ALL.iter().map(|b| b.lookup_name()).collect();
        assert_eq!(names.len(), BayType::ALL.len());
    }

    #[test]
    fn test_sub_capital_rule() {
        let laser = weapon(AttackValueClass::CapitalLaser, true);
        assert_eq!(bay_type(&laser, false), BayType::SubCapitalLaser);
        assert_eq!(bay_type(&laser, true), BayType::CapitalLaser);

        let cannon = weapon(AttackValueClass::CapitalAc, true);
        assert_eq!(bay_type(&cannon, false), BayType::SubCapitalCannon);
        assert_eq!(bay_type(&cannon, true), BayType::CapitalAc);

        let missile = weapon(AttackValueClass::CapitalMissile, true);
        assert_eq!(bay_type(&missile, false), BayType::SubCapitalMissile);
        assert_eq!(bay_type(&missile, true), BayType::CapitalMissile);
    }

    #[test]
    fn test_sub_capital_only_affects_three_classes() {
        let ppc = weapon(AttackValueClass::CapitalPpc, true);
        assert_eq!(bay_type(&ppc, false), BayType::CapitalPpc);
        let full = weapon(AttackValueClass::CapitalLaser, false);
        assert_eq!(bay_type(&full, false), BayType::CapitalLaser);
    }

    #[test]
    fn test_unbayed_classes_are_misc() {
        for class in [
            AttackValueClass::None,
            AttackValueClass::Gauss,
            AttackValueClass::Mortar,
            AttackValueClass::SubCapitalCannon,
        ] {
            assert_eq!(bay_for_class(class, false), BayType::Misc);
        }
        assert_eq!(bay_for_class(AttackValueClass::Screen, false), BayType::ScreenLauncher);
    }
}
