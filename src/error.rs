//! # Error Types
//!
//! Typed errors for every failure path in the registry and dispatch core.
//!
//! This module defines all error variants that can occur during protocol
//! operations, from bootstrap defects to per-frame decode failures.
//!
//! ## Error Categories
//! - **Registry Errors**: duplicate identifier bindings at bootstrap
//! - **Decode Errors**: malformed payloads inside a single packet kind
//! - **Dispatch Errors**: frame-level failures (truncation, unknown ids)
//! - **Config Errors**: invalid configuration files or values
//!
//! All errors implement `std::error::Error` for interoperability. Every
//! failure is returned to the immediate caller as a typed result; nothing in
//! this crate retries or swallows an error.
//!
//! ## Recoverability
//! `RegistryError` indicates a build-time defect and should abort
//! initialization. All `DispatchError` variants are recoverable: the caller
//! decides whether to drop the frame and continue (forward-compatible skip for
//! [`DispatchError::UnknownPacketId`]) or tear the connection down
//! ([`DispatchError::TruncatedFrame`] usually means the stream is
//! desynchronized).

use crate::core::packet::PacketId;
use thiserror::Error;

/// Errors raised while binding packet kinds into a [`Registry`].
///
/// [`Registry`]: crate::core::registry::Registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The identifier is already bound to another factory. Identifiers are
    /// assigned by the protocol specification and never shared, so hitting
    /// this at bootstrap is a build defect, not a runtime condition.
    #[error("packet id {0} is already registered")]
    DuplicateId(PacketId),
}

/// Errors raised by an individual packet kind's `decode` routine.
///
/// Decoding is total over malformed input: any structurally invalid payload
/// fails with one of these variants rather than panicking or reading out of
/// bounds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload ended before a required field could be read.
    #[error("unexpected end of payload: needed {needed} more bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Bytes the next field required.
        needed: usize,
        /// Bytes actually left in the payload.
        remaining: usize,
    },

    /// A string field was not valid UTF-8.
    #[error("invalid UTF-8 in string field: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Bytes remained after the last field of a fixed-layout packet.
    #[error("{0} trailing bytes after final field")]
    TrailingBytes(usize),
}

/// Errors raised by [`Dispatcher::decode_frame`].
///
/// [`Dispatcher::decode_frame`]: crate::protocol::dispatcher::Dispatcher::decode_frame
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The frame is shorter than the identifier field; the caller should
    /// treat the stream as desynchronized.
    #[error("frame truncated before packet id")]
    TruncatedFrame,

    /// The identifier is not bound in the registry. Expected under protocol
    /// version drift: a newer peer may send kinds this build does not know.
    /// No factory is invoked; the caller chooses skip-or-terminate.
    #[error("unknown packet id {0}")]
    UnknownPacketId(PacketId),

    /// The payload exceeds the configured maximum, rejected before any
    /// factory invocation.
    #[error("frame payload of {len} bytes exceeds maximum of {max}")]
    OversizedFrame {
        /// Payload length observed on the wire.
        len: usize,
        /// Configured maximum payload size.
        max: usize,
    },

    /// The kind's own decode routine rejected the payload.
    #[error("malformed payload for packet id {id}: {source}")]
    Malformed {
        /// Identifier of the offending kind.
        id: PacketId,
        /// Underlying decode failure.
        source: DecodeError,
    },
}

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file was not valid TOML.
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// One or more values failed validation.
    #[error("configuration validation failed:\n  - {}", .0.join("\n  - "))]
    Invalid(Vec<String>),
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_error_display_includes_offending_id() {
        let err = DispatchError::UnknownPacketId(9);
        assert_eq!(err.to_string(), "unknown packet id 9");
    }

    #[test]
    fn malformed_preserves_nested_cause() {
        let err = DispatchError::Malformed {
            id: 5,
            source: DecodeError::UnexpectedEof {
                needed: 4,
                remaining: 1,
            },
        };
        let text = err.to_string();
        assert!(text.contains("packet id 5"));
        assert!(text.contains("needed 4 more bytes"));
    }
}
