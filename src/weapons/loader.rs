//! Catalog loading
//!
//! Weapon types are declared in TOML files as `[[weapon]]` tables. A
//! definition is validated and converted into an immutable descriptor; the
//! registry takes it from there.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::config::UnknownFlagPolicy;
use crate::core::error::{ArsenalError, Result};
use crate::core::types::{Hexes, RangeBand, RangeTable};
use crate::weapons::ammo::AmmoFamily;
use crate::weapons::descriptor::{
    AlphaStrikeTraits, AttackValueClass, AttackValues, BattleForceClass, DamageClass, DamageCode,
    SentinelCode, VariableDamage, WaterRanges, WeaponDescriptor,
};
use crate::weapons::flags::{FlagDomain, WeaponFlag, WeaponFlags};

/// Damage as written in catalog data: a number (negative sentinels allowed)
/// or a sentinel name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawDamage {
    Value(i32),
    Named(String),
}

impl Default for RawDamage {
    fn default() -> Self {
        RawDamage::Value(0)
    }
}

impl RawDamage {
    pub fn to_code(&self) -> Result<DamageCode> {
        match self {
            RawDamage::Value(value) => Ok(DamageCode::from(*value)),
            RawDamage::Named(name) => match name.trim().to_ascii_lowercase().as_str() {
                "cluster" | "by_cluster_table" => {
                    Ok(DamageCode::Sentinel(SentinelCode::ByClusterTable))
                }
                "variable" => Ok(DamageCode::Sentinel(SentinelCode::Variable)),
                "special" => Ok(DamageCode::Sentinel(SentinelCode::Special)),
                "artillery" => Ok(DamageCode::Sentinel(SentinelCode::Artillery)),
                other => Err(ArsenalError::Validation(format!(
                    "unknown damage code '{}'",
                    other
                ))),
            },
        }
    }
}

/// Range bands as `[min, short, medium, long, extreme]` or as a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawRanges {
    List([Hexes; 5]),
    Table(RangeTable),
}

impl Default for RawRanges {
    fn default() -> Self {
        RawRanges::Table(RangeTable::default())
    }
}

impl From<RawRanges> for RangeTable {
    fn from(raw: RawRanges) -> Self {
        match raw {
            RawRanges::List(values) => RangeTable::from(values),
            RawRanges::Table(table) => table,
        }
    }
}

/// One `[[weapon]]` entry of a catalog file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeaponDefinition {
    pub name: String,
    /// Defaults to `name`
    pub internal_name: Option<String>,
    pub aliases: Vec<String>,

    pub heat: i32,
    pub damage: RawDamage,
    pub variable_damage: Option<VariableDamage>,
    /// Defaults to 1
    pub damage_per_missile: Option<i32>,
    pub rack_size: i32,
    pub ammo_family: AmmoFamily,

    pub ranges: RawRanges,
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
    pub indirect_fire: bool,

    pub flags: Vec<String>,
    pub to_hit_modifier: i32,
    pub explosion_damage: i32,
    pub criticals: i32,
    pub tonnage: f64,
    pub cost: f64,
    pub modes: Vec<String>,
}

impl WeaponDefinition {
    /// Check the definition for internal consistency
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("name must not be empty".to_string());
        }

        let ranges = RangeTable::from(self.ranges);
        if ranges.minimum < 0 {
            errors.push(format!("minimum range {} is negative", ranges.minimum));
        }
        let bands = [ranges.short, ranges.medium, ranges.long, ranges.extreme];
        if bands.windows(2).any(|pair| pair[0] > pair[1]) {
            errors.push(format!(
                "range bands must not decrease: {:?}",
                ranges.as_array()
            ));
        }

        match self.damage.to_code() {
            Ok(DamageCode::Fixed(value)) if value < 0 => {
                errors.push(format!("damage {} is not a sentinel code", value));
            }
            Ok(DamageCode::Sentinel(SentinelCode::Variable)) if self.variable_damage.is_none() => {
                errors.push("variable damage needs a variable_damage table".to_string());
            }
            Ok(DamageCode::Sentinel(SentinelCode::ByClusterTable)) if self.rack_size <= 0 => {
                errors.push("cluster damage needs a positive rack_size".to_string());
            }
            Ok(_) => {}
            Err(err) => errors.push(err.to_string()),
        }

        if self.criticals < 0 || self.tonnage < 0.0 || self.cost < 0.0 {
            errors.push("criticals, tonnage and cost must not be negative".to_string());
        }

        for (i, mode) in self.modes.iter().enumerate() {
            if self.modes[..i].iter().any(|m| m.eq_ignore_ascii_case(mode)) {
                errors.push(format!("mode '{}' listed twice", mode));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ArsenalError::Validation(format!(
                "weapon '{}': {}",
                self.name,
                errors.join(", ")
            )))
        }
    }

    /// Validate and convert into a descriptor
    pub fn into_descriptor(self, policy: UnknownFlagPolicy) -> Result<WeaponDescriptor> {
        self.validate()?;

        let internal_name = self
            .internal_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.name.clone());
        let flags = parse_flags(&internal_name, &self.flags, policy)?;
        let damage = self.damage.to_code()?;

        Ok(WeaponDescriptor {
            name: self.name,
            internal_name,
            aliases: self.aliases,
            heat: self.heat,
            damage,
            variable_damage: self.variable_damage,
            damage_per_missile: self.damage_per_missile.unwrap_or(1),
            rack_size: self.rack_size,
            ammo_family: self.ammo_family,
            ranges: self.ranges.into(),
            water_ranges: self.water_ranges,
            max_range: self.max_range,
            attack_values: self.attack_values,
            attack_value_class: self.attack_value_class,
            capital: self.capital,
            sub_capital: self.sub_capital,
            missile_armor: self.missile_armor,
            infantry_damage_class: self.infantry_damage_class,
            ba_damage_class: self.ba_damage_class,
            battle_force_class: self.battle_force_class,
            alpha_strike: self.alpha_strike,
            indirect_fire: self.indirect_fire,
            flags,
            to_hit_modifier: self.to_hit_modifier,
            explosion_damage: self.explosion_damage,
            criticals: self.criticals,
            tonnage: self.tonnage,
            cost: self.cost,
            modes: self.modes,
        })
    }
}

fn parse_flags(weapon: &str, names: &[String], policy: UnknownFlagPolicy) -> Result<WeaponFlags> {
    let mut flags = WeaponFlags::empty();
    for name in names {
        match WeaponFlag::from_name(name) {
            Some(flag) => flags = flags.with(flag),
            None => match policy {
                UnknownFlagPolicy::Warn => {
                    tracing::warn!("Skipping unknown flag '{}' on weapon '{}'", name, weapon);
                }
                UnknownFlagPolicy::Reject => {
                    return Err(ArsenalError::UnknownFlag {
                        weapon: weapon.to_string(),
                        flag: name.clone(),
                    });
                }
            },
        }
    }
    Ok(flags)
}

/// Top level of a catalog file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogFile {
    pub weapon: Vec<WeaponDefinition>,
}

/// Parse catalog TOML into descriptors
pub fn parse_catalog(content: &str, policy: UnknownFlagPolicy) -> Result<Vec<WeaponDescriptor>> {
    let file: CatalogFile = toml::from_str(content)?;
    file.weapon
        .into_iter()
        .map(|definition| definition.into_descriptor(policy))
        .collect()
}

/// Load one catalog file
pub fn load_file(path: &Path, policy: UnknownFlagPolicy) -> Result<Vec<WeaponDescriptor>> {
    let content = std::fs::read_to_string(path)?;
    let descriptors = parse_catalog(&content, policy).map_err(|e| ArsenalError::Catalog {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;
    tracing::debug!(
        "Loaded {} weapon types from {}",
        descriptors.len(),
        path.display()
    );
    Ok(descriptors)
}

/// Load all .toml files from a directory recursively, in path order
pub fn load_directory(path: &Path, policy: UnknownFlagPolicy) -> Result<Vec<WeaponDescriptor>> {
    let mut descriptors = Vec::new();
    load_directory_recursive(path, policy, &mut descriptors)?;
    Ok(descriptors)
}

fn load_directory_recursive(
    path: &Path,
    policy: UnknownFlagPolicy,
    descriptors: &mut Vec<WeaponDescriptor>,
) -> Result<()> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(path)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    entries.sort();

    for entry_path in entries {
        if entry_path.is_dir() {
            load_directory_recursive(&entry_path, policy, descriptors)?;
        } else if entry_path.extension().is_some_and(|ext| ext == "toml") {
            descriptors.extend(load_file(&entry_path, policy)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MML5: &str = r#"
        [[weapon]]
        name = "MML 5"
        internal_name = "ISMML5"
        aliases = ["IS MML-5"]
        heat = 3
        damage = "cluster"
        rack_size = 5
        ammo_family = "MML"
        ranges = [6, 7, 14, 21, 28]
        max_range = "long"
        attack_value_class = "MML"
        flags = ["missile", "F_ARTEMIS_COMPATIBLE", "mek_weapon"]
        criticals = 3
        tonnage = 3.0
        cost = 45000.0
    "#;

    #[test]
    fn test_parse_definition() {
        let weapons = parse_catalog(MML5, UnknownFlagPolicy::Reject).unwrap();
        assert_eq!(weapons.len(), 1);
        let mml = &weapons[0];
        assert_eq!(mml.internal_name, "ISMML5");
        assert_eq!(mml.damage, DamageCode::Sentinel(SentinelCode::ByClusterTable));
        assert_eq!(mml.damage_per_missile, 1);
        assert_eq!(mml.ranges.as_array(), [6, 7, 14, 21, 28]);
        assert_eq!(mml.max_range, RangeBand::Long);
        assert!(mml.has_flag(WeaponFlag::ArtemisCompatible));
        assert_eq!(mml.flags.len(), 3);
    }

    #[test]
    fn test_numeric_sentinel_and_table_ranges() {
        let content = r#"
            [[weapon]]
            name = "Arrow IV"
            damage = -5
            ranges = { minimum = 0, short = 1, medium = 2, long = 8, extreme = 8 }
        "#;
        let weapons = parse_catalog(content, UnknownFlagPolicy::Warn).unwrap();
        assert_eq!(weapons[0].damage, DamageCode::Sentinel(SentinelCode::Artillery));
        assert_eq!(weapons[0].internal_name, "Arrow IV");
        assert_eq!(weapons[0].ranges.long, 8);
    }

    #[test]
    fn test_unknown_flag_policy() {
        let content = r#"
            [[weapon]]
            name = "Odd Laser"
            ranges = [0, 3, 6, 9, 12]
            flags = ["laser", "photonic"]
        "#;
        let lenient = parse_catalog(content, UnknownFlagPolicy::Warn).unwrap();
        assert!(lenient[0].has_flag(WeaponFlag::Laser));
        assert_eq!(lenient[0].flags.len(), 1);

        let strict = parse_catalog(content, UnknownFlagPolicy::Reject);
        assert!(matches!(strict, Err(ArsenalError::UnknownFlag { .. })));
    }

    #[test]
    fn test_ammo_flag_is_not_a_weapon_flag() {
        let content = r#"
            [[weapon]]
            name = "Confused Launcher"
            flags = ["mml_lrm"]
        "#;
        assert!(matches!(
            parse_catalog(content, UnknownFlagPolicy::Reject),
            Err(ArsenalError::UnknownFlag { .. })
        ));
    }

    #[test]
    fn test_validation_errors() {
        let decreasing = r#"
            [[weapon]]
            name = "Backwards"
            ranges = [0, 9, 6, 3, 1]
        "#;
        assert!(matches!(
            parse_catalog(decreasing, UnknownFlagPolicy::Warn),
            Err(ArsenalError::Validation(_))
        ));

        let variable = r#"
            [[weapon]]
            name = "Needler"
            damage = "variable"
        "#;
        assert!(matches!(
            parse_catalog(variable, UnknownFlagPolicy::Warn),
            Err(ArsenalError::Validation(_))
        ));

        let negative = r#"
            [[weapon]]
            name = "Broken"
            damage = -1
        "#;
        assert!(matches!(
            parse_catalog(negative, UnknownFlagPolicy::Warn),
            Err(ArsenalError::Validation(_))
        ));

        let nameless = r#"
            [[weapon]]
            heat = 1
        "#;
        assert!(parse_catalog(nameless, UnknownFlagPolicy::Warn).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let content = r#"
            [[weapon]]
            name = "Typo"
            damgae = 5
        "#;
        assert!(matches!(
            parse_catalog(content, UnknownFlagPolicy::Warn),
            Err(ArsenalError::TomlError(_))
        ));
    }

    #[test]
    fn test_unknown_damage_name() {
        assert!(RawDamage::Named("lots".into()).to_code().is_err());
        assert_eq!(
            RawDamage::Named("Special".into()).to_code().unwrap(),
            DamageCode::Sentinel(SentinelCode::Special)
        );
    }

    #[test]
    fn test_empty_catalog() {
        assert!(parse_catalog("", UnknownFlagPolicy::Warn).unwrap().is_empty());
    }
}
