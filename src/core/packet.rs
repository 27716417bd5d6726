//! Packet capability and frame encoding.
//!
//! [`Packet`] is the contract every registrable type satisfies: report its
//! own wire identifier, encode its payload into a byte buffer, decode its
//! payload from one. The dispatcher and registry know nothing else about a
//! kind, which is what keeps adding a new packet kind a one-line change at
//! the bootstrap table.

use crate::config::ID_WIDTH;
use crate::error::DecodeError;
use bytes::{BufMut, Bytes, BytesMut};
use std::any::Any;
use std::fmt;

/// Wire-level packet type identifier: the first byte of every frame.
///
/// Assigned by the protocol specification, unique within a registry, and
/// stable across protocol versions (never reassigned to a different kind).
pub type PacketId = u8;

/// The capability every registrable packet type must provide.
///
/// Implementations mutate only `self`; no I/O, no global state. `decode` must
/// be total over malformed input: any structurally invalid payload fails with
/// a [`DecodeError`], never reads out of bounds, and never leaves `self`
/// observably half-mutated before the error reaches the caller (decode into
/// locals, assign on success).
pub trait Packet: fmt::Debug + Send + Sync {
    /// The constant identifier this kind encodes and decodes as.
    fn id(&self) -> PacketId;

    /// Serialize the payload (everything after the id byte) into `buf`.
    fn encode(&self, buf: &mut BytesMut);

    /// Populate `self` from `payload`, the frame bytes after the id field.
    ///
    /// A zero-length payload is valid input; whether it is a legal body is
    /// each kind's own decision.
    fn decode(&mut self, payload: &[u8]) -> Result<(), DecodeError>;

    /// Downcast seam for handlers that need the concrete type.
    fn as_any(&self) -> &dyn Any;
}

/// A statically known packet kind: a [`Packet`] with a default (empty)
/// constructor and a protocol-assigned identifier.
///
/// This is the registration surface; [`Registry::register_kind`] binds
/// `Self::ID` to a factory producing `Self::default()`.
///
/// [`Registry::register_kind`]: crate::core::registry::Registry::register_kind
pub trait PacketKind: Packet + Default + 'static {
    /// The identifier assigned to this kind by the protocol specification.
    const ID: PacketId;
}

/// Encode a full frame: the id byte followed by the packet's payload.
///
/// Left inverse of [`Dispatcher::decode_frame`]: decoding the returned bytes
/// through a registry that binds the packet's kind yields an equal instance.
///
/// [`Dispatcher::decode_frame`]: crate::protocol::dispatcher::Dispatcher::decode_frame
pub fn encode_frame(packet: &dyn Packet) -> Bytes {
    let mut buf = BytesMut::with_capacity(ID_WIDTH + 64);
    buf.put_u8(packet.id());
    packet.encode(&mut buf);
    buf.freeze()
}
