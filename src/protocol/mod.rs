//! # Protocol Layer
//!
//! The dispatch loop's building blocks: the built-in packet kinds, the
//! bootstrap table binding them, and the dispatcher that turns raw frames
//! into typed packets.
//!
//! ## Data Flow
//! ```text
//! transport frame -> Dispatcher::decode_frame -> Registry lookup
//!                 -> factory() -> instance.decode(payload) -> Box<dyn Packet>
//! ```

pub mod bootstrap;
pub mod dispatcher;
pub mod packets;
