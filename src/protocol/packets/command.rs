//! Command-carrying packets.
//!
//! Both kinds transport a single command string; they differ in who executes
//! it. `EvalPbCommand` is evaluated by the builder process itself, while
//! `GameCommand` is forwarded verbatim into the game session.

use crate::core::packet::{Packet, PacketId, PacketKind};
use crate::core::wire;
use crate::error::DecodeError;
use bytes::BytesMut;
use std::any::Any;

/// A command line for the builder process to evaluate.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EvalPbCommand {
    /// The command to evaluate.
    pub command: String,
}

/// A command to forward into the game session unchanged.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GameCommand {
    /// The command to forward.
    pub command: String,
}

macro_rules! command_packet {
    ($name:ident = $id:expr) => {
        impl Packet for $name {
            fn id(&self) -> PacketId {
                Self::ID
            }

            fn encode(&self, buf: &mut BytesMut) {
                wire::put_string(buf, &self.command);
            }

            fn decode(&mut self, payload: &[u8]) -> Result<(), DecodeError> {
                let mut buf = payload;
                let command = wire::read_string(&mut buf)?;
                wire::expect_end(buf)?;
                self.command = command;
                Ok(())
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

command_packet!(EvalPbCommand = 5);
command_packet!(GameCommand = 6);
