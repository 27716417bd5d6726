//! Frame dispatcher: raw bytes in, typed packet out.

use crate::config::{DispatchConfig, ID_WIDTH};
use crate::core::packet::Packet;
use crate::core::registry::Registry;
use crate::error::DispatchError;
use std::sync::Arc;
use tracing::{debug, trace};

/// Turns one de-framed byte buffer into a freshly allocated, fully decoded
/// [`Packet`] via registry lookup.
///
/// Holds the registry behind an `Arc` and never mutates it, so a dispatcher
/// is `Clone` and [`decode_frame`](Dispatcher::decode_frame) is safe from any
/// number of threads at once. Each call is an independent, finite synchronous
/// computation; no state is shared between in-flight decodes.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<Registry>,
    max_payload_size: usize,
}

impl Dispatcher {
    /// Create a dispatcher over `registry` with default limits.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self::with_config(registry, &DispatchConfig::default())
    }

    /// Create a dispatcher over `registry` with explicit limits.
    pub fn with_config(registry: Arc<Registry>, config: &DispatchConfig) -> Self {
        Self {
            registry,
            max_payload_size: config.max_payload_size,
        }
    }

    /// The registry this dispatcher reads from.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Decode one frame into its typed packet.
    ///
    /// The leading byte selects the kind; the remainder is handed to that
    /// kind's own `decode`. The dispatcher imposes no minimum payload length;
    /// a zero-length body is judged by the kind itself.
    ///
    /// # Errors
    /// - [`DispatchError::TruncatedFrame`] if `raw` is shorter than the id
    ///   field; no factory is invoked.
    /// - [`DispatchError::OversizedFrame`] if the payload exceeds the
    ///   configured maximum; no factory is invoked.
    /// - [`DispatchError::UnknownPacketId`] if the id is not registered; no
    ///   factory is invoked. Expected under version drift and left to caller
    ///   policy; the dispatcher never guesses a fallback kind.
    /// - [`DispatchError::Malformed`] wrapping the kind's [`DecodeError`]
    ///   if the payload is structurally invalid.
    ///
    /// [`DecodeError`]: crate::error::DecodeError
    pub fn decode_frame(&self, raw: &[u8]) -> Result<Box<dyn Packet>, DispatchError> {
        if raw.len() < ID_WIDTH {
            return Err(DispatchError::TruncatedFrame);
        }
        let (id, payload) = (raw[0], &raw[ID_WIDTH..]);

        if payload.len() > self.max_payload_size {
            return Err(DispatchError::OversizedFrame {
                len: payload.len(),
                max: self.max_payload_size,
            });
        }

        let factory = self.registry.lookup(id).ok_or_else(|| {
            debug!(id, "frame carries unregistered packet id");
            DispatchError::UnknownPacketId(id)
        })?;

        let mut packet = factory();
        packet
            .decode(payload)
            .map_err(|source| DispatchError::Malformed { id, source })?;

        trace!(id, payload_len = payload.len(), "decoded frame");
        Ok(packet)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .field("max_payload_size", &self.max_payload_size)
            .finish()
    }
}
