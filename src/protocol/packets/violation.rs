//! Protocol-violation report packet.

use crate::core::packet::{Packet, PacketId, PacketKind};
use crate::core::wire;
use crate::error::DecodeError;
use bytes::BytesMut;
use std::any::Any;

/// Sent by a peer that observed a protocol violation, carrying a
/// human-readable description of what was rejected.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PacketViolationWarning {
    /// Description of the violation.
    pub text: String,
}

impl Packet for PacketViolationWarning {
    fn id(&self) -> PacketId {
        Self::ID
    }

    fn encode(&self, buf: &mut BytesMut) {
        wire::put_string(buf, &self.text);
    }

    fn decode(&mut self, payload: &[u8]) -> Result<(), DecodeError> {
        let mut buf = payload;
        let text = wire::read_string(&mut buf)?;
        wire::expect_end(buf)?;
        self.text = text;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl PacketKind for PacketViolationWarning {
    const ID: PacketId = 4;
}
