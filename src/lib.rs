//! # packet-registry
//!
//! Packet registry and dispatch core for a binary network protocol.
//!
//! A process-wide, read-mostly table maps a wire-level packet identifier to a
//! factory producing a fresh, mutable instance of the matching packet type,
//! so an inbound frame decodes into the correct concrete type without the
//! decode loop knowing every packet kind. Adding a kind is a one-line change
//! at the bootstrap table; the dispatcher, transport, and existing kinds are
//! untouched.
//!
//! ## Wire Format
//! ```text
//! [PacketId(1)] [Payload(N)]
//! ```
//!
//! ## Usage
//! ```rust
//! use packet_registry::protocol::bootstrap::builtin_dispatcher;
//! use packet_registry::protocol::packets::Ping;
//! use packet_registry::{Packet, PacketKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dispatcher = builtin_dispatcher()?;
//! let packet = dispatcher.decode_frame(&[0x01])?;
//! assert_eq!(packet.id(), Ping::ID);
//! # Ok(())
//! # }
//! ```
//!
//! ## Guarantees
//! - Registry writes happen only at bootstrap; lookups are lock-free and safe
//!   from any number of concurrent decodes after the `Arc` hand-off
//! - Every factory invocation allocates an independent instance; in-flight
//!   decodes never share state
//! - Unknown identifiers and malformed payloads are typed, recoverable
//!   errors, never panics and never a guessed fallback kind

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;

pub use crate::core::packet::{encode_frame, Packet, PacketId, PacketKind};
pub use crate::core::registry::{Factory, Registry};
pub use crate::error::{ConfigError, DecodeError, DispatchError, RegistryError};
pub use crate::protocol::dispatcher::Dispatcher;
