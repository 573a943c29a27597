//! Weapon type registry
//!
//! Every weapon type is registered once and shared as an `Arc`. Names are
//! bound case-insensitively; the primary name, the internal name and every
//! alias resolve to the same descriptor. A `RegistryBuilder` collects the
//! catalog and `build` freezes it into a `WeaponRegistry`, which has no
//! mutating methods and can be shared freely across threads.

use ahash::AHashMap;
use std::path::Path;
use std::sync::Arc;

use crate::core::config::{ArsenalConfig, UnknownFlagPolicy};
use crate::core::error::{ArsenalError, Result};
use crate::weapons::bay::BayType;
use crate::weapons::descriptor::WeaponDescriptor;
use crate::weapons::loader;

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Collects weapon types before the catalog is frozen
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    weapons: Vec<Arc<WeaponDescriptor>>,
    by_name: AHashMap<String, usize>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a weapon type under all of its names
    ///
    /// Fails without changing the builder if any name is already bound to a
    /// different descriptor. Registering an identical descriptor again
    /// returns the instance that is already shared.
    pub fn register(&mut self, descriptor: WeaponDescriptor) -> Result<Arc<WeaponDescriptor>> {
        let names: Vec<String> = descriptor
            .lookup_names()
            .into_iter()
            .map(normalize)
            .collect();

        let mut existing_index = None;
        for name in &names {
            if let Some(&index) = self.by_name.get(name) {
                let existing = &self.weapons[index];
                if **existing != descriptor {
                    return Err(ArsenalError::DuplicateName {
                        name: name.clone(),
                        existing: existing.internal_name.clone(),
                        incoming: descriptor.internal_name.clone(),
                    });
                }
                existing_index = Some(index);
            }
        }

        let index = match existing_index {
            Some(index) => index,
            None => {
                self.weapons.push(Arc::new(descriptor));
                self.weapons.len() - 1
            }
        };
        for name in names {
            self.by_name.entry(name).or_insert(index);
        }
        Ok(Arc::clone(&self.weapons[index]))
    }

    /// Register every descriptor in order, stopping at the first conflict
    pub fn register_all(
        &mut self,
        descriptors: impl IntoIterator<Item = WeaponDescriptor>,
    ) -> Result<()> {
        for descriptor in descriptors {
            self.register(descriptor)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// Freeze the catalog
    pub fn build(self) -> WeaponRegistry {
        tracing::info!(
            "Weapon registry built: {} weapon types, {} lookup names",
            self.weapons.len(),
            self.by_name.len()
        );
        WeaponRegistry {
            weapons: self.weapons,
            by_name: self.by_name,
        }
    }
}

/// Frozen catalog of weapon types
#[derive(Debug, Default)]
pub struct WeaponRegistry {
    weapons: Vec<Arc<WeaponDescriptor>>,
    by_name: AHashMap<String, usize>,
}

impl WeaponRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Load every catalog file under a directory and freeze the result
    pub fn load_directory(path: &Path, config: &ArsenalConfig) -> Result<Self> {
        let descriptors = loader::load_directory(path, config.unknown_flags)?;
        let mut builder = RegistryBuilder::new();
        builder.register_all(descriptors)?;
        Ok(builder.build())
    }

    /// Build a registry from catalog TOML text
    pub fn from_catalog_str(content: &str, policy: UnknownFlagPolicy) -> Result<Self> {
        let mut builder = RegistryBuilder::new();
        builder.register_all(loader::parse_catalog(content, policy)?)?;
        Ok(builder.build())
    }

    /// Weapon type by any of its names
    pub fn lookup(&self, name: &str) -> Result<&Arc<WeaponDescriptor>> {
        self.get(name)
            .ok_or_else(|| ArsenalError::NotFound(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&Arc<WeaponDescriptor>> {
        self.by_name
            .get(&normalize(name))
            .map(|&index| &self.weapons[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&normalize(name))
    }

    /// Weapon types in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<WeaponDescriptor>> {
        self.weapons.iter()
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// Normalized names bound to a registered descriptor, sorted
    pub fn names_of(&self, descriptor: &Arc<WeaponDescriptor>) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .by_name
            .iter()
            .filter(|(_, index)| Arc::ptr_eq(&self.weapons[**index], descriptor))
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// The shared bay weapon for a bay category
    pub fn bay_descriptor(&self, bay: BayType) -> Result<&Arc<WeaponDescriptor>> {
        self.lookup(bay.lookup_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weapon(name: &str, internal: &str, aliases: &[&str]) -> WeaponDescriptor {
        WeaponDescriptor {
            name: name.into(),
            internal_name: internal.into(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_aliases_share_instance() {
        let mut builder = RegistryBuilder::new();
        builder
            .register(weapon("BattleMech Taser", "Mek Taser", &["ISMekTaser", "ISBattleMechTaser"]))
            .unwrap();
        let registry = builder.build();

        let by_name = registry.lookup("BattleMech Taser").unwrap();
        for name in ["Mek Taser", "ISMekTaser", "isbattlemechtaser", "  ISMEKTASER "] {
            assert!(Arc::ptr_eq(by_name, registry.lookup(name).unwrap()));
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut builder = RegistryBuilder::new();
        builder.register(weapon("Medium Laser", "ISMediumLaser", &[])).unwrap();
        let err = builder
            .register(weapon("Medium Laser", "CLMediumLaser", &[]))
            .unwrap_err();
        assert!(matches!(err, ArsenalError::DuplicateName { .. }));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_reregistering_same_descriptor_is_noop() {
        let mut builder = RegistryBuilder::new();
        let first = builder.register(weapon("PPC", "ISPPC", &["IS PPC"])).unwrap();
        let second = builder.register(weapon("PPC", "ISPPC", &["IS PPC"])).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_not_found() {
        let registry = RegistryBuilder::new().build();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.lookup("Gauss Rifle"),
            Err(ArsenalError::NotFound(_))
        ));
        assert!(registry.get("Gauss Rifle").is_none());
    }

    #[test]
    fn test_names_of() {
        let mut builder = RegistryBuilder::new();
        let taser = builder
            .register(weapon("BattleMech Taser", "Mek Taser", &["ISMekTaser"]))
            .unwrap();
        let registry = builder.build();
        assert_eq!(
            registry.names_of(&taser),
            vec!["battlemech taser", "ismektaser", "mek taser"]
        );
    }

    #[test]
    fn test_bay_descriptor() {
        let mut builder = RegistryBuilder::new();
        builder.register(weapon("Laser Bay", "Laser Bay", &[])).unwrap();
        let registry = builder.build();
        assert_eq!(
            registry.bay_descriptor(BayType::Laser).unwrap().name,
            "Laser Bay"
        );
        assert!(registry.bay_descriptor(BayType::Ppc).is_err());
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WeaponRegistry>();
    }
}
