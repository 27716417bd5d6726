//! Registration bootstrap: the static id table.
//!
//! Every built-in kind is bound here, once, before any decoding starts. The
//! registry is returned by value rather than installed in a global so the
//! one-time-write discipline is explicit: the caller builds it, wraps it in
//! an `Arc`, and after that hand-off nothing writes to it again. Constructing
//! a fresh registry per call also lets every test bootstrap in isolation.
//!
//! Adding a packet kind to the protocol is one `register_kind` line below.

use crate::core::registry::Registry;
use crate::error::RegistryError;
use crate::protocol::dispatcher::Dispatcher;
use crate::protocol::packets::{
    Bye, EvalPbCommand, GameCommand, GamePacket, PacketViolationWarning, Ping, Pong,
};
use std::sync::Arc;
use tracing::debug;

/// Build a fresh registry binding every built-in packet kind.
///
/// # Errors
/// [`RegistryError::DuplicateId`] if two kinds claim the same identifier.
/// That is a build defect; callers should abort initialization rather than
/// continue with a partial table.
pub fn builtin_registry() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    registry.register_kind::<Ping>()?;
    registry.register_kind::<Pong>()?;
    registry.register_kind::<Bye>()?;
    registry.register_kind::<PacketViolationWarning>()?;
    registry.register_kind::<EvalPbCommand>()?;
    registry.register_kind::<GameCommand>()?;
    registry.register_kind::<GamePacket>()?;
    debug!(kinds = registry.len(), "packet registry bootstrapped");
    Ok(registry)
}

/// Build a dispatcher over the built-in registry with default limits.
pub fn builtin_dispatcher() -> Result<Dispatcher, RegistryError> {
    Ok(Dispatcher::new(Arc::new(builtin_registry()?)))
}
