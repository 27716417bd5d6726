//! Bounds-checked primitives for the binary payload layout.
//!
//! Every read validates the remaining length before touching the buffer, so
//! packet decode routines stay total over arbitrary input. Strings travel as
//! a u32 big-endian length prefix followed by UTF-8 bytes.

use crate::error::DecodeError;
use bytes::{Buf, BufMut, BytesMut};

/// Read a big-endian u32, failing if fewer than four bytes remain.
pub(crate) fn read_u32(buf: &mut &[u8]) -> Result<u32, DecodeError> {
    if buf.len() < 4 {
        return Err(DecodeError::UnexpectedEof {
            needed: 4,
            remaining: buf.len(),
        });
    }
    Ok(buf.get_u32())
}

/// Read a length-prefixed UTF-8 string.
pub(crate) fn read_string(buf: &mut &[u8]) -> Result<String, DecodeError> {
    let len = read_u32(buf)? as usize;
    if buf.len() < len {
        return Err(DecodeError::UnexpectedEof {
            needed: len,
            remaining: buf.len(),
        });
    }
    let text = std::str::from_utf8(&buf[..len])?.to_owned();
    buf.advance(len);
    Ok(text)
}

/// Write a length-prefixed UTF-8 string.
pub(crate) fn put_string(buf: &mut BytesMut, text: &str) {
    buf.put_u32(text.len() as u32);
    buf.put_slice(text.as_bytes());
}

/// Fail with [`DecodeError::TrailingBytes`] unless the payload is exhausted.
pub(crate) fn expect_end(buf: &[u8]) -> Result<(), DecodeError> {
    if buf.is_empty() {
        Ok(())
    } else {
        Err(DecodeError::TrailingBytes(buf.len()))
    }
}
