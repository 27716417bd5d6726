//! Identifier-to-factory binding table.
//!
//! The registry is an explicitly constructed object, not a language-level
//! global: bootstrap builds it, hands it to a dispatcher behind an `Arc`, and
//! from then on it is only read. The write-once/read-many discipline means
//! lookups need no locking; the `Arc` handoff is the memory-visibility
//! barrier between bootstrap writes and concurrent readers.

use crate::core::packet::{Packet, PacketId, PacketKind};
use crate::error::RegistryError;
use std::collections::HashMap;
use tracing::debug;

/// Zero-argument factory producing one fresh, independent [`Packet`] instance
/// per invocation. Factories must never hand out a shared or cached instance;
/// each in-flight decode gets its own.
pub type Factory = Box<dyn Fn() -> Box<dyn Packet> + Send + Sync>;

/// Read-mostly mapping from packet identifier to factory.
///
/// Logically unordered; iteration order is never relied upon for behavior.
/// Lookup is O(1) regardless of how many kinds the protocol accumulates, and
/// adding a kind is one localized [`register_kind`] call at bootstrap.
///
/// [`register_kind`]: Registry::register_kind
#[derive(Default)]
pub struct Registry {
    factories: HashMap<PacketId, Factory>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `id` to `factory`.
    ///
    /// Fails with [`RegistryError::DuplicateId`] if `id` is already bound;
    /// re-registration is a hard error because a silent overwrite would mask
    /// a build defect.
    pub fn register(&mut self, id: PacketId, factory: Factory) -> Result<(), RegistryError> {
        if self.factories.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }
        self.factories.insert(id, factory);
        debug!(id, "registered packet kind");
        Ok(())
    }

    /// Bind a statically known kind under its protocol-assigned id.
    pub fn register_kind<P: PacketKind>(&mut self) -> Result<(), RegistryError> {
        self.register(P::ID, Box::new(|| Box::new(P::default())))
    }

    /// Look up the factory bound to `id`.
    ///
    /// Pure and side-effect free; safe for unbounded concurrent callers once
    /// bootstrap has completed.
    pub fn lookup(&self, id: PacketId) -> Option<&Factory> {
        self.factories.get(&id)
    }

    /// Whether `id` is bound.
    pub fn contains(&self, id: PacketId) -> bool {
        self.factories.contains_key(&id)
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether no kinds are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registered identifiers, in no particular order. Diagnostics only.
    pub fn ids(&self) -> impl Iterator<Item = PacketId> + '_ {
        self.factories.keys().copied()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<PacketId> = self.ids().collect();
        ids.sort_unstable();
        f.debug_struct("Registry").field("ids", &ids).finish()
    }
}
