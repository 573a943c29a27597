//! Catalog integration tests
//!
//! Loads the shipped catalog from `data/weapons` and checks the registry
//! built from it, plus load errors from files on disk.

use battle_arsenal::core::config::{ArsenalConfig, UnknownFlagPolicy};
use battle_arsenal::core::error::ArsenalError;
use battle_arsenal::weapons::ammo::AmmoFamily;
use battle_arsenal::weapons::bay::{bay_type, BayType};
use battle_arsenal::weapons::descriptor::DamageCode;
use battle_arsenal::weapons::flags::WeaponFlag;
use battle_arsenal::weapons::registry::WeaponRegistry;
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn catalog_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/weapons")
}

fn load_catalog() -> WeaponRegistry {
    WeaponRegistry::load_directory(&catalog_dir(), &ArsenalConfig::default())
        .expect("shipped catalog should load")
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("arsenal-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_shipped_catalog_loads_strictly() {
    let config = ArsenalConfig {
        unknown_flags: UnknownFlagPolicy::Reject,
        ..ArsenalConfig::default()
    };
    let registry = WeaponRegistry::load_directory(&catalog_dir(), &config).unwrap();
    assert!(registry.len() >= 50);
}

#[test]
fn test_taser_entry() {
    let registry = load_catalog();
    let taser = registry.lookup("BattleMech Taser").unwrap();

    assert_eq!(taser.internal_name, "Mek Taser");
    assert_eq!(taser.heat, 6);
    assert_eq!(taser.damage, DamageCode::Fixed(1));
    assert_eq!(taser.rack_size, 1);
    assert_eq!(taser.ammo_family, AmmoFamily::Taser);
    assert_eq!(taser.ranges.as_array(), [0, 1, 2, 4, 6]);
    assert_eq!(taser.to_hit_modifier, 1);
    assert_eq!(taser.explosion_damage, 6);
    assert_eq!(taser.criticals, 3);
    assert_eq!(taser.tonnage, 4.0);
    assert_eq!(taser.cost, 200_000.0);
    for flag in [
        WeaponFlag::MekWeapon,
        WeaponFlag::Ballistic,
        WeaponFlag::DirectFire,
        WeaponFlag::Taser,
        WeaponFlag::TankWeapon,
    ] {
        assert!(taser.has_flag(flag), "missing {}", flag);
    }

    for alias in ["Mek Taser", "ISMekTaser", "ISBattleMechTaser"] {
        assert!(Arc::ptr_eq(taser, registry.lookup(alias).unwrap()));
    }
}

#[test]
fn test_vibro_blade_entry() {
    let registry = load_catalog();
    let blade = registry.lookup("prosthetic vibro blade").unwrap();
    assert!(blade.has_flag(WeaponFlag::NoFires));
    assert!(blade.has_flag(WeaponFlag::InfPointBlank));
    assert!(blade.has_flag(WeaponFlag::InfArchaic));
    assert_eq!(blade.ammo_family, AmmoFamily::Na);
    assert_eq!(blade.cost, 1000.0);
}

#[test]
fn test_every_bay_is_registered() {
    let registry = load_catalog();
    for bay in BayType::ALL {
        let descriptor = registry.bay_descriptor(bay).unwrap();
        assert_eq!(descriptor.name, bay.lookup_name());
        assert_eq!(bay_type(descriptor, false), bay, "bay {}", bay);
    }
}

#[test]
fn test_every_name_resolves_to_its_descriptor() {
    let registry = load_catalog();
    for descriptor in registry.iter() {
        for name in descriptor.lookup_names() {
            assert!(Arc::ptr_eq(descriptor, registry.lookup(name).unwrap()));
        }
        assert!(!registry.names_of(descriptor).is_empty());
    }
}

#[test]
fn test_missing_directory_is_io_error() {
    let missing = catalog_dir().join("no_such_dir");
    let result = WeaponRegistry::load_directory(&missing, &ArsenalConfig::default());
    assert!(matches!(result, Err(ArsenalError::IoError(_))));
}

#[test]
fn test_bad_file_reports_path() {
    let dir = scratch_dir("bad-file");
    std::fs::write(
        dir.join("broken.toml"),
        "[[weapon]]\nname = \"Broken\"\nranges = [0, 9, 6, 3, 1]\n",
    )
    .unwrap();

    let err = WeaponRegistry::load_directory(&dir, &ArsenalConfig::default()).unwrap_err();
    match &err {
        ArsenalError::Catalog { path, source } => {
            assert!(path.ends_with("broken.toml"));
            assert!(matches!(**source, ArsenalError::Validation(_)));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("broken.toml"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_collision_across_files_rejected() {
    let dir = scratch_dir("collision");
    std::fs::write(
        dir.join("a.toml"),
        "[[weapon]]\nname = \"Medium Laser\"\ninternal_name = \"ISMediumLaser\"\ndamage = 5\n",
    )
    .unwrap();
    let nested = dir.join("clan");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(
        nested.join("b.toml"),
        "[[weapon]]\nname = \"Medium Laser\"\ninternal_name = \"CLERMediumLaser\"\ndamage = 7\n",
    )
    .unwrap();

    let result = WeaponRegistry::load_directory(&dir, &ArsenalConfig::default());
    assert!(matches!(result, Err(ArsenalError::DuplicateName { .. })));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_config_file_overrides() {
    let dir = scratch_dir("config");
    let path = dir.join("arsenal.toml");
    std::fs::write(&path, "unknown_flags = \"reject\"\n").unwrap();

    let config = ArsenalConfig::from_toml_file(&path).unwrap();
    assert_eq!(config.unknown_flags, UnknownFlagPolicy::Reject);
    assert_eq!(config.catalog_dir, PathBuf::from("data/weapons"));
    let _ = std::fs::remove_dir_all(&dir);
}
