//! Weapon types and the rules that resolve them in play
//!
//! Descriptors are immutable and shared through the registry. Everything
//! that depends on how a weapon is fired (ammo, mode, bearings-only fire) is
//! computed by the resolver modules from a `FiringContext`.

pub mod ammo;
pub mod battleforce;
pub mod bay;
pub mod constants;
pub mod damage;
pub mod descriptor;
pub mod dispatch;
pub mod flags;
pub mod loader;
pub mod mounted;
pub mod range;
pub mod registry;

pub use ammo::{AmmoFamily, AmmoType, Munition};
pub use battleforce::{battle_force_damage, battle_force_damage_for_squad, cluster_hits};
pub use bay::{bay_type, BayType};
pub use damage::{damage_at, fire_target, max_range, resolve_damage, DamageResolution, FireTarget};
pub use descriptor::{AttackValueClass, DamageCode, SentinelCode, WeaponDescriptor};
pub use dispatch::{dispatch_handler, HandlerFactory, HandlerKind, ToHitData, WeaponAttackAction};
pub use flags::{AmmoFlag, EquipmentFlag, WeaponFlag, WeaponFlags};
pub use mounted::{FiringContext, MountedAmmo, MountedWeapon};
pub use range::{ranges, resolve_ranges};
pub use registry::{RegistryBuilder, WeaponRegistry};
