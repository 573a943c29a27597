//! Attack handler selection
//!
//! The core only decides which kind of handler resolves an attack. Building
//! the handler, and everything it needs from the running game, belongs to the
//! caller's factory.

use serde::Serialize;
use std::fmt;

use crate::weapons::ammo::AmmoFamily;
use crate::weapons::descriptor::WeaponDescriptor;
use crate::weapons::mounted::MountedWeapon;

/// Attack handler implementations known to the game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerKind {
    /// Generic direct-fire resolution
    #[default]
    DirectFire,
    MekTaser,
}

impl HandlerKind {
    /// Handler for a weapon family
    pub fn for_weapon(descriptor: &WeaponDescriptor) -> Self {
        match descriptor.ammo_family {
            AmmoFamily::Taser => HandlerKind::MekTaser,
            _ => HandlerKind::DirectFire,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HandlerKind::DirectFire => "direct_fire",
            HandlerKind::MekTaser => "mek_taser",
        }
    }
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Computed to-hit number for one attack
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToHitData {
    pub value: i32,
    pub description: String,
}

impl ToHitData {
    pub fn new(value: i32, description: impl Into<String>) -> Self {
        Self {
            value,
            description: description.into(),
        }
    }
}

/// Who fires which weapon at whom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeaponAttackAction {
    pub attacker_id: u32,
    pub target_id: u32,
    pub weapon_id: u32,
}

/// Builds attack handlers; owns whatever game state they need
pub trait HandlerFactory {
    type Handler;

    fn build(
        &self,
        kind: HandlerKind,
        to_hit: &ToHitData,
        action: &WeaponAttackAction,
    ) -> Self::Handler;
}

/// Build the handler for an attack with a weapon
///
/// Exactly one handler is built per call.
pub fn dispatch_handler<F: HandlerFactory>(
    weapon: &MountedWeapon,
    to_hit: &ToHitData,
    action: &WeaponAttackAction,
    factory: &F,
) -> F::Handler {
    let kind = HandlerKind::for_weapon(weapon.descriptor());
    tracing::debug!(
        "Dispatching {} handler for {} (attacker {} -> target {})",
        kind,
        weapon.descriptor().internal_name,
        action.attacker_id,
        action.target_id
    );
    factory.build(kind, to_hit, action)
}
