//! Mounted weapons and ammunition, and the per-attack firing context
//!
//! A mounted weapon is one copy of a weapon type on a unit. It shares its
//! descriptor with every other copy and only owns the state that changes
//! during play: the selected firing mode, bearings-only fire, linked ammo.

use std::sync::Arc;

use crate::core::error::{ArsenalError, Result};
use crate::weapons::ammo::AmmoType;
use crate::weapons::descriptor::WeaponDescriptor;

/// An ammunition bin
#[derive(Debug, Clone, PartialEq)]
pub struct MountedAmmo {
    pub ammo: AmmoType,
    pub shots_left: u32,
}

impl MountedAmmo {
    pub fn new(ammo: AmmoType, shots_left: u32) -> Self {
        Self { ammo, shots_left }
    }

    pub fn ammo_type(&self) -> &AmmoType {
        &self.ammo
    }
}

/// One weapon mounted on a unit
#[derive(Debug, Clone)]
pub struct MountedWeapon {
    descriptor: Arc<WeaponDescriptor>,
    mode: usize,
    bearings_only: bool,
    linked_ammo: Option<MountedAmmo>,
}

impl MountedWeapon {
    pub fn new(descriptor: Arc<WeaponDescriptor>) -> Self {
        Self {
            descriptor,
            mode: 0,
            bearings_only: false,
            linked_ammo: None,
        }
    }

    pub fn descriptor(&self) -> &WeaponDescriptor {
        &self.descriptor
    }

    /// Select a firing mode by name
    pub fn set_mode(&mut self, mode: &str) -> Result<()> {
        let index = self
            .descriptor
            .mode_index(mode)
            .ok_or_else(|| ArsenalError::UnknownMode {
                weapon: self.descriptor.internal_name.clone(),
                mode: mode.to_string(),
            })?;
        self.mode = index;
        Ok(())
    }

    /// Current mode name; the first listed mode until another is selected
    pub fn current_mode(&self) -> Option<&str> {
        self.descriptor.modes.get(self.mode).map(String::as_str)
    }

    pub fn is_in_mode(&self, mode: &str) -> bool {
        self.current_mode()
            .is_some_and(|current| current.eq_ignore_ascii_case(mode))
    }

    pub fn set_bearings_only(&mut self, bearings_only: bool) {
        self.bearings_only = bearings_only;
    }

    pub fn is_in_bearings_only_mode(&self) -> bool {
        self.bearings_only
    }

    pub fn link_ammo(&mut self, ammo: MountedAmmo) {
        self.linked_ammo = Some(ammo);
    }

    pub fn unlink_ammo(&mut self) -> Option<MountedAmmo> {
        self.linked_ammo.take()
    }

    pub fn linked_ammo(&self) -> Option<&MountedAmmo> {
        self.linked_ammo.as_ref()
    }

    /// Firing context using the linked ammo
    pub fn context(&self) -> FiringContext<'_> {
        FiringContext::new(self)
    }
}

/// Everything one resolution call needs to know about how a weapon is fired
///
/// Borrowed for the duration of a single call and never stored.
#[derive(Debug, Clone, Copy)]
pub struct FiringContext<'a> {
    pub weapon: &'a MountedWeapon,
    pub ammo: Option<&'a MountedAmmo>,
}

impl<'a> FiringContext<'a> {
    pub fn new(weapon: &'a MountedWeapon) -> Self {
        Self {
            weapon,
            ammo: weapon.linked_ammo(),
        }
    }

    /// Context with an explicit ammo bin instead of the linked one
    pub fn with_ammo(weapon: &'a MountedWeapon, ammo: Option<&'a MountedAmmo>) -> Self {
        Self { weapon, ammo }
    }

    pub fn descriptor(&self) -> &'a WeaponDescriptor {
        self.weapon.descriptor()
    }

    pub fn ammo_type(&self) -> Option<&'a AmmoType> {
        self.ammo.map(MountedAmmo::ammo_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weapons::ammo::AmmoFamily;

    fn pd_bay() -> Arc<WeaponDescriptor> {
        Arc::new(WeaponDescriptor {
            name: "Point Defense Bay".into(),
            internal_name: "Point Defense Bay".into(),
            modes: vec!["Normal".into(), "Point Defense".into()],
            ..Default::default()
        })
    }

    #[test]
    fn test_default_mode_is_first() {
        let weapon = MountedWeapon::new(pd_bay());
        assert_eq!(weapon.current_mode(), Some("Normal"));
        assert!(!weapon.is_in_mode("Point Defense"));
    }

    #[test]
    fn test_set_mode() {
        let mut weapon = MountedWeapon::new(pd_bay());
        weapon.set_mode("point defense").unwrap();
        assert!(weapon.is_in_mode("Point Defense"));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let mut weapon = MountedWeapon::new(pd_bay());
        assert!(matches!(
            weapon.set_mode("Overdrive"),
            Err(ArsenalError::UnknownMode { .. })
        ));
        assert_eq!(weapon.current_mode(), Some("Normal"));
    }

    #[test]
    fn test_no_modes() {
        let weapon = MountedWeapon::new(Arc::new(WeaponDescriptor::default()));
        assert!(!weapon.descriptor().has_modes());
        assert_eq!(weapon.current_mode(), None);
        assert!(!weapon.is_in_mode("Normal"));
    }

    #[test]
    fn test_context_uses_linked_ammo() {
        let mut weapon = MountedWeapon::new(pd_bay());
        assert!(weapon.context().ammo.is_none());
        weapon.link_ammo(MountedAmmo::new(AmmoType::new(AmmoFamily::Atm), 10));
        let ctx = weapon.context();
        assert_eq!(ctx.ammo_type().map(|a| a.family), Some(AmmoFamily::Atm));
        let explicit = FiringContext::with_ammo(&weapon, None);
        assert!(explicit.ammo.is_none());
    }
}
