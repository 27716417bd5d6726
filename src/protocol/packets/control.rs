//! Connection-control packets: `Ping`, `Pong`, `Bye`.
//!
//! All three carry no body. A zero-length payload is the only legal encoding;
//! trailing bytes after the id are malformed.

use crate::core::packet::{Packet, PacketId, PacketKind};
use crate::core::wire;
use crate::error::DecodeError;
use bytes::BytesMut;
use std::any::Any;

macro_rules! empty_packet {
    ($(#[$doc:meta])* $name:ident = $id:expr) => {
        $(#[$doc])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl Packet for $name {
            fn id(&self) -> PacketId {
                Self::ID
            }

            fn encode(&self, _buf: &mut BytesMut) {}

            fn decode(&mut self, payload: &[u8]) -> Result<(), DecodeError> {
                wire::expect_end(payload)
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        impl PacketKind for $name {
            const ID: PacketId = $id;
        }
    };
}

empty_packet! {
    /// Liveness probe; the peer answers with [`Pong`].
    Ping = 1
}

empty_packet! {
    /// Reply to a [`Ping`].
    Pong = 2
}

empty_packet! {
    /// Orderly close: the sender will transmit no further frames.
    Bye = 3
}
