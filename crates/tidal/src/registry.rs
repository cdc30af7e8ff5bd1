//! Ordered, deduplicated collection of the migrations an application ships with.
//!
//! A [`Registry`] is an ordinary owned value: build one at startup, fill it from
//! generated code or the loader, then hand it to whatever applies the migrations.
//! [`SharedRegistry`] wraps it for the case where registration happens from several
//! threads.

use crate::descriptor::Descriptor;
use crate::error::{Result, TidalError, TidalErrorExt};
use crate::migration::{Migration, Revision};
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;
use tracing::{debug, warn};

/// Migrations sorted ascending by [`Revision`], at most one per revision.
///
/// # Example
///
/// ```rust
/// use tidal::{Descriptor, Migration, Registry, Revision, TidalError};
///
/// let mut registry = Registry::new();
/// for rev in [23, 2, 9] {
///     let d = Descriptor::new("-- migrate: up\nSELECT 1;\n".as_bytes(), "m.sql")?;
///     registry.register(Migration::new(Revision::new(rev), "m", d))?;
/// }
///
/// let order: Vec<u64> = registry.iter().map(|m| m.revision().get()).collect();
/// assert_eq!(order, [2, 9, 23]);
///
/// let d = Descriptor::new("".as_bytes(), "dup.sql")?;
/// let dup = registry.register(Migration::new(Revision::new(9), "dup", d));
/// assert!(matches!(dup, Err(TidalError::DuplicateRevision { .. })));
/// # Ok::<(), TidalError>(())
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    migrations: Vec<Migration>,
}

impl Registry {
    #[must_use]
    pub const fn new() -> Self {
        Self { migrations: Vec::new() }
    }

    /// Inserts a migration at the position that keeps the registry sorted.
    ///
    /// # Errors
    /// Returns [`TidalError::DuplicateRevision`] if the revision is already taken; the
    /// registry is left untouched in that case.
    pub fn register(&mut self, migration: Migration) -> Result<()> {
        let revision = migration.revision();
        match self.migrations.binary_search_by_key(&revision, Migration::revision) {
            Ok(idx) => {
                warn!(
                    %revision,
                    existing = self.migrations[idx].name(),
                    rejected = migration.name(),
                    "Duplicate migration revision"
                );
                Err(TidalError::DuplicateRevision { revision, context: None })
            },
            Err(idx) => {
                debug!(%revision, name = migration.name(), "Registered migration");
                self.migrations.insert(idx, migration);
                Ok(())
            },
        }
    }

    /// Registers raw descriptor bytes, typically a `static` emitted by the generator.
    ///
    /// The revision is always supplied by the caller. The migration is named after the
    /// descriptor's header, which also rejects malformed data before it is stored.
    ///
    /// # Errors
    /// Returns [`TidalError::MalformedDescriptor`] for bytes that are not a descriptor,
    /// or [`TidalError::DuplicateRevision`] as in [`Registry::register`].
    pub fn register_descriptor(
        &mut self,
        revision: Revision,
        raw: impl Into<Descriptor>,
    ) -> Result<()> {
        self.register(migration_from_raw(revision, raw.into())?)
    }

    /// Drops every registered migration.
    pub fn reset(&mut self) {
        debug!(count = self.migrations.len(), "Registry reset");
        self.migrations.clear();
    }

    /// All migrations in ascending revision order.
    #[must_use]
    pub fn migrations(&self) -> &[Migration] {
        &self.migrations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Migration> {
        self.migrations.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.migrations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.migrations.is_empty()
    }

    #[must_use]
    pub fn get(&self, revision: Revision) -> Option<&Migration> {
        self.migrations
            .binary_search_by_key(&revision, Migration::revision)
            .ok()
            .map(|idx| &self.migrations[idx])
    }

    /// The migration with the highest revision.
    #[must_use]
    pub fn latest(&self) -> Option<&Migration> {
        self.migrations.last()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Migration;
    type IntoIter = std::slice::Iter<'a, Migration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Thread-safe handle to a [`Registry`].
///
/// Mutations are serialized under one write lock. Readers are expected once registration
/// is complete, and see the ordered sequence through [`SharedRegistry::read`].
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// See [`Registry::register`].
    pub fn register(&self, migration: Migration) -> Result<()> {
        self.inner.write().register(migration)
    }

    /// # Errors
    /// See [`Registry::register_descriptor`].
    pub fn register_descriptor(
        &self,
        revision: Revision,
        raw: impl Into<Descriptor>,
    ) -> Result<()> {
        // Decode the header before taking the lock.
        let migration = migration_from_raw(revision, raw.into())?;
        self.register(migration)
    }

    pub fn reset(&self) {
        self.inner.write().reset();
    }

    /// Read access to the ordered migrations.
    pub fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.inner.read()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }
}

impl From<Registry> for SharedRegistry {
    fn from(registry: Registry) -> Self {
        Self { inner: Arc::new(RwLock::new(registry)) }
    }
}

/// Names a migration after its descriptor header, rejecting malformed data.
fn migration_from_raw(revision: Revision, descriptor: Descriptor) -> Result<Migration> {
    let info = descriptor.info().context(format!("Registering revision {revision}"))?;
    Ok(Migration::new(revision, info.name, descriptor))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn migration(rev: u64) -> Migration {
        Migration::new(Revision::new(rev), format!("m{rev}"), Descriptor::from_static(&[]))
    }

    fn revisions(registry: &Registry) -> Vec<u64> {
        registry.iter().map(|m| m.revision().get()).collect()
    }

    #[test]
    fn test_register_keeps_ascending_order() {
        let mut registry = Registry::new();
        for rev in [23, 2, 9, 8, 41, 5, 13, 14] {
            registry.register(migration(rev)).unwrap();
        }

        assert_eq!(registry.len(), 8);
        assert_eq!(revisions(&registry), [2, 5, 8, 9, 13, 14, 23, 41]);
        assert_eq!(registry.latest().map(Migration::revision), Some(Revision::new(41)));
    }

    #[test]
    fn test_duplicate_revision_leaves_registry_untouched() {
        let mut registry = Registry::new();
        for rev in [3, 1, 2] {
            registry.register(migration(rev)).unwrap();
        }

        let err = registry.register(migration(2)).unwrap_err();
        assert!(matches!(
            err,
            TidalError::DuplicateRevision { revision, .. } if revision == Revision::new(2)
        ));
        assert_eq!(revisions(&registry), [1, 2, 3]);
        assert_eq!(registry.get(Revision::new(2)).map(Migration::name), Some("m2"));
    }

    #[test]
    fn test_reset_behaves_like_fresh_registry() {
        let mut registry = Registry::new();
        registry.register(migration(7)).unwrap();
        registry.register(migration(1)).unwrap();

        registry.reset();
        assert!(registry.is_empty());

        registry.register(migration(7)).unwrap();
        registry.register(migration(4)).unwrap();
        assert_eq!(revisions(&registry), [4, 7]);
    }

    #[test]
    fn test_register_descriptor_rejects_garbage() {
        let mut registry = Registry::new();
        let err = registry.register_descriptor(Revision::new(1), b"nope".to_vec()).unwrap_err();

        assert!(matches!(err, TidalError::MalformedDescriptor { context: Some(_), .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_descriptor_names_from_header() {
        let sql = "-- migrate: up\nSELECT 1;\n";
        let d = Descriptor::new(sql.as_bytes(), "0042_answer.sql").unwrap();
        let mut registry = Registry::new();
        registry.register_descriptor(Revision::new(42), d.into_bytes()).unwrap();

        let m = registry.get(Revision::new(42)).unwrap();
        assert_eq!(m.name(), "0042_answer.sql");
        assert_eq!(m.up().unwrap(), "SELECT 1;\n");
    }

    #[test]
    fn test_both_registries_name_descriptors_alike() {
        let raw = Descriptor::new("-- package: foo\n".as_bytes(), "0007_seed.sql")
            .unwrap()
            .into_bytes();

        let mut owned = Registry::new();
        owned.register_descriptor(Revision::new(7), raw.clone()).unwrap();
        let shared = SharedRegistry::new();
        shared.register_descriptor(Revision::new(7), raw).unwrap();

        let shared = shared.read();
        let a = owned.get(Revision::new(7)).unwrap();
        let b = shared.get(Revision::new(7)).unwrap();
        assert_eq!(a.name(), b.name());
        assert_eq!(a.descriptor(), b.descriptor());

        let err = SharedRegistry::new()
            .register_descriptor(Revision::new(1), b"nope".to_vec())
            .unwrap_err();
        assert!(matches!(err, TidalError::MalformedDescriptor { context: Some(_), .. }));
    }

    #[test]
    fn test_shared_registry_concurrent_registration() {
        let shared = SharedRegistry::new();

        let handles: Vec<_> = (0..8u64)
            .map(|t| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    for i in 0..16u64 {
                        shared.register(migration(i * 8 + t)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let registry = shared.read();
        assert_eq!(registry.len(), 128);
        assert_eq!(revisions(&registry), (0..128).collect::<Vec<_>>());
    }
}
