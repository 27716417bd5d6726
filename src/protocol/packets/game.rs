//! Opaque game-traffic packet.

use crate::core::packet::{Packet, PacketId, PacketKind};
use crate::error::DecodeError;
use bytes::{BufMut, Bytes, BytesMut};
use std::any::Any;

/// An already-serialized game packet tunneled through this protocol.
///
/// The body is the remainder of the frame, carried verbatim; its inner layout
/// belongs to the game protocol and is not interpreted here. A zero-length
/// body is legal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GamePacket {
    /// Raw game-protocol bytes.
    pub content: Bytes,
}

impl Packet for GamePacket {
    fn id(&self) -> PacketId {
        Self::ID
    }

    fn encode(&self, buf: &mut BytesMut) {
        buf.put_slice(&self.content);
    }

    fn decode(&mut self, payload: &[u8]) -> Result<(), DecodeError> {
        self.content = Bytes::copy_from_slice(payload);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl PacketKind for GamePacket {
    const ID: PacketId = 7;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn any_payload_is_legal() {
        let mut packet = GamePacket::default();
        packet.decode(&[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
        assert_eq!(packet.content.as_ref(), &[0xDE, 0xAD, 0xBE, 0xEF]);

        packet.decode(&[]).unwrap();
        assert!(packet.content.is_empty());
    }
}
