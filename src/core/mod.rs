//! # Core Protocol Components
//!
//! The extensibility seam of the protocol: the packet capability, the
//! identifier-to-factory registry, and the binary wire primitives.
//!
//! ## Components
//! - **Packet**: the contract every registrable kind satisfies
//! - **Registry**: write-once/read-many id-to-factory table
//! - **Wire**: bounds-checked payload read/write helpers
//!
//! ## Wire Format
//! ```text
//! [PacketId(1)] [Payload(N)]
//! ```
//!
//! ## Security
//! - Maximum payload size enforced before any factory runs
//! - Every payload read is bounds-checked; decode never panics on bad input

pub mod packet;
pub mod registry;
pub(crate) mod wire;
