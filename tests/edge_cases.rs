#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Comprehensive edge-case tests for production-grade reliability
//! Tests boundary conditions, error scenarios, and registry contract violations

use packet_registry::config::DispatchConfig;
use packet_registry::error::{DecodeError, DispatchError, RegistryError};
use packet_registry::protocol::bootstrap::builtin_dispatcher;
use packet_registry::protocol::packets::{
    EvalPbCommand, GameCommand, GamePacket, PacketViolationWarning, Ping, Pong,
};
use packet_registry::{Dispatcher, Packet, PacketKind, Registry};
use std::sync::Arc;

// ============================================================================
// REGISTRY CONTRACT EDGE CASES
// ============================================================================

#[test]
fn test_duplicate_registration_rejected() {
    let mut registry = Registry::new();
    registry.register_kind::<Ping>().unwrap();
    assert_eq!(
        registry.register_kind::<Ping>(),
        Err(RegistryError::DuplicateId(Ping::ID))
    );
}

#[test]
fn test_duplicate_id_across_different_kinds_rejected() {
    // Two distinct kinds claiming one id is exactly the build defect
    // DuplicateId exists to surface.
    let mut registry = Registry::new();
    registry
        .register(1, Box::new(|| Box::new(Ping)))
        .unwrap();
    assert_eq!(
        registry.register(1, Box::new(|| Box::new(Pong))),
        Err(RegistryError::DuplicateId(1))
    );

    // The original binding must survive the rejected insert.
    let packet = registry.lookup(1).unwrap()();
    assert_eq!(packet.id(), Ping::ID);
}

#[test]
fn test_registration_order_is_irrelevant() {
    let mut forward = Registry::new();
    forward.register_kind::<Ping>().unwrap();
    forward.register_kind::<Pong>().unwrap();

    let mut reverse = Registry::new();
    reverse.register_kind::<Pong>().unwrap();
    reverse.register_kind::<Ping>().unwrap();

    for registry in [&forward, &reverse] {
        assert_eq!(registry.lookup(Ping::ID).unwrap()().id(), Ping::ID);
        assert_eq!(registry.lookup(Pong::ID).unwrap()().id(), Pong::ID);
    }
}

#[test]
fn test_lookup_on_empty_registry() {
    let registry = Registry::new();
    assert!(registry.is_empty());
    assert!(registry.lookup(1).is_none());
}

#[test]
fn test_factory_instances_are_independent() {
    let mut registry = Registry::new();
    registry.register_kind::<GameCommand>().unwrap();
    let factory = registry.lookup(GameCommand::ID).unwrap();

    let mut first = factory();
    let second = factory();

    // Populate the first; the second must stay untouched.
    first
        .decode(&[0x00, 0x00, 0x00, 0x02, b'h', b'i'])
        .unwrap();

    assert_eq!(
        first.as_any().downcast_ref::<GameCommand>().unwrap().command,
        "hi"
    );
    assert_eq!(
        second.as_any().downcast_ref::<GameCommand>().unwrap().command,
        ""
    );
}

// ============================================================================
// MALFORMED PAYLOAD EDGE CASES
// ============================================================================

#[test]
fn test_control_packet_with_body_is_malformed() {
    let dispatcher = builtin_dispatcher().unwrap();
    let err = dispatcher.decode_frame(&[Ping::ID, 0xFF]).unwrap_err();
    assert_eq!(
        err,
        DispatchError::Malformed {
            id: Ping::ID,
            source: DecodeError::TrailingBytes(1),
        }
    );
}

#[test]
fn test_truncated_string_length_prefix() {
    let dispatcher = builtin_dispatcher().unwrap();
    let err = dispatcher
        .decode_frame(&[EvalPbCommand::ID, 0x00, 0x00])
        .unwrap_err();
    assert_eq!(
        err,
        DispatchError::Malformed {
            id: EvalPbCommand::ID,
            source: DecodeError::UnexpectedEof {
                needed: 4,
                remaining: 2,
            },
        }
    );
}

#[test]
fn test_length_claim_beyond_payload() {
    let dispatcher = builtin_dispatcher().unwrap();
    // Claims a 1000-byte string but the frame ends immediately.
    let err = dispatcher
        .decode_frame(&[GameCommand::ID, 0x00, 0x00, 0x03, 0xE8])
        .unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Malformed {
            id,
            source: DecodeError::UnexpectedEof { needed: 1000, .. },
        } if id == GameCommand::ID
    ));
}

#[test]
fn test_invalid_utf8_in_string_field() {
    let dispatcher = builtin_dispatcher().unwrap();
    let err = dispatcher
        .decode_frame(&[PacketViolationWarning::ID, 0x00, 0x00, 0x00, 0x02, 0xC3, 0x28])
        .unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Malformed {
            id,
            source: DecodeError::InvalidUtf8(_),
        } if id == PacketViolationWarning::ID
    ));
}

#[test]
fn test_zero_length_body_judged_per_kind() {
    // The dispatcher imposes no minimum payload length; each kind rules on
    // its own body.
    let dispatcher = builtin_dispatcher().unwrap();

    // Legal for control packets and opaque game traffic.
    assert!(dispatcher.decode_frame(&[Ping::ID]).is_ok());
    assert!(dispatcher.decode_frame(&[GamePacket::ID]).is_ok());

    // Illegal for string-carrying kinds: the length prefix is mandatory.
    assert!(dispatcher.decode_frame(&[EvalPbCommand::ID]).is_err());
}

// ============================================================================
// FRAME-LEVEL EDGE CASES
// ============================================================================

#[test]
fn test_single_byte_frame_is_not_truncated() {
    // One byte is exactly the id field; truncation means shorter than that.
    let dispatcher = builtin_dispatcher().unwrap();
    assert!(dispatcher.decode_frame(&[Ping::ID]).is_ok());
}

#[test]
fn test_oversized_payload_rejected_before_decode() {
    let mut registry = Registry::new();
    registry.register_kind::<GamePacket>().unwrap();
    let config = DispatchConfig {
        max_payload_size: 8,
    };
    let dispatcher = Dispatcher::with_config(Arc::new(registry), &config);

    let mut frame = vec![GamePacket::ID];
    frame.extend_from_slice(&[0u8; 9]);

    let err = dispatcher.decode_frame(&frame).unwrap_err();
    assert_eq!(err, DispatchError::OversizedFrame { len: 9, max: 8 });

    // At the limit, the frame goes through.
    assert!(dispatcher.decode_frame(&frame[..9]).is_ok());
}

#[test]
fn test_failed_decode_discards_partial_instance() {
    // A malformed frame surfaces only the error; the half-decoded instance
    // is dropped inside the dispatcher, never handed out.
    let dispatcher = builtin_dispatcher().unwrap();
    let result = dispatcher.decode_frame(&[GameCommand::ID, 0x00]);
    assert!(result.is_err());

    // The dispatcher stays fully usable afterwards.
    assert!(dispatcher.decode_frame(&[Ping::ID]).is_ok());
}
