//! Built-in packet kinds.
//!
//! One module per family; each kind declares its protocol-assigned id as
//! `PacketKind::ID`. The complete id table lives in
//! [`bootstrap`](crate::protocol::bootstrap), which binds every kind here
//! into the registry.

pub mod command;
pub mod control;
pub mod game;
pub mod violation;

pub use command::{EvalPbCommand, GameCommand};
pub use control::{Bye, Ping, Pong};
pub use game::GamePacket;
pub use violation::PacketViolationWarning;
