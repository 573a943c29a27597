//! Property tests for the resolvers

use battle_arsenal::core::types::RangeTable;
use battle_arsenal::weapons::ammo::{AmmoFamily, AmmoType, Munition};
use battle_arsenal::weapons::battleforce::{battle_force_damage, cluster_hits};
use battle_arsenal::weapons::bay::{bay_for_class, bay_type, BayType};
use battle_arsenal::weapons::descriptor::{AttackValueClass, DamageCode, WeaponDescriptor};
use battle_arsenal::weapons::flags::{AmmoFlag, FlagDomain};
use battle_arsenal::weapons::mounted::{FiringContext, MountedAmmo, MountedWeapon};
use battle_arsenal::weapons::range::resolve_ranges;
use proptest::prelude::*;
use std::sync::Arc;

fn range_table() -> impl Strategy<Value = RangeTable> {
    (0..6i32, 1..8i32, 0..8i32, 0..8i32, 0..8i32).prop_map(|(min, s, m, l, e)| {
        RangeTable::new(min, s, s + m, s + m + l, s + m + l + e)
    })
}

fn ammo_type() -> impl Strategy<Value = AmmoType> {
    (
        0..AmmoFamily::ALL.len(),
        proptest::collection::vec(0..Munition::ALL.len(), 0..3),
        any::<bool>(),
    )
        .prop_map(|(family, munitions, lrm)| {
            let mut ammo = AmmoType::new(AmmoFamily::ALL[family]);
            for munition in munitions {
                ammo = ammo.with_munition(Munition::ALL[munition]);
            }
            if lrm {
                ammo = ammo.with_flag(AmmoFlag::MmlLrm);
            }
            ammo
        })
}

proptest! {
    #[test]
    fn resolving_ranges_is_pure(
        family in 0..AmmoFamily::ALL.len(),
        base in range_table(),
        ammo in proptest::option::of(ammo_type()),
        bearings_only in any::<bool>(),
    ) {
        let descriptor = WeaponDescriptor {
            ammo_family: AmmoFamily::ALL[family],
            ranges: base,
            ..Default::default()
        };
        let snapshot = descriptor.clone();
        let mut weapon = MountedWeapon::new(Arc::new(descriptor));
        weapon.set_bearings_only(bearings_only);
        let bin = ammo.map(|a| MountedAmmo::new(a, 1));
        let ctx = FiringContext::with_ammo(&weapon, bin.as_ref());

        let first = resolve_ranges(&ctx);
        let second = resolve_ranges(&ctx);
        prop_assert_eq!(first, second);
        prop_assert_eq!(weapon.descriptor(), &snapshot);
    }

    #[test]
    fn every_class_maps_to_a_bay(
        class in 0..AttackValueClass::ALL.len(),
        sub_capital in any::<bool>(),
        capital_only in any::<bool>(),
    ) {
        let descriptor = WeaponDescriptor {
            attack_value_class: AttackValueClass::ALL[class],
            sub_capital,
            ..Default::default()
        };
        let bay = bay_type(&descriptor, capital_only);
        prop_assert!(BayType::ALL.contains(&bay));
        if capital_only || !sub_capital {
            prop_assert_eq!(bay, bay_for_class(AttackValueClass::ALL[class], false));
        }
    }

    #[test]
    fn battle_force_is_zero_beyond_long(
        damage in 0..30i32,
        base in range_table(),
        beyond in 1..20i32,
        to_hit in -2..4i32,
    ) {
        let descriptor = WeaponDescriptor {
            damage: DamageCode::Fixed(damage),
            ranges: base,
            to_hit_modifier: to_hit,
            ..Default::default()
        };
        prop_assert_eq!(battle_force_damage(&descriptor, base.long + beyond), 0.0);
    }

    #[test]
    fn cluster_hits_never_exceed_salvo(roll in 2u8..=12, size in 1..120i32) {
        let hits = cluster_hits(roll, size);
        prop_assert!(hits >= 1);
        prop_assert!(hits <= size);
    }
}
