//! Single-byte null markers.
//!
//! Null sorts before every other value ascending (`0x00`) and after every
//! other value descending (`0xFF`); neither byte collides with any other
//! codec's marker space.

use crate::kind::{NULL_DESC_MARKER, NULL_MARKER};

#[inline]
pub fn encode_null_ascending(out: &mut Vec<u8>) {
    out.push(NULL_MARKER);
}

#[inline]
pub fn encode_null_descending(out: &mut Vec<u8>) {
    out.push(NULL_DESC_MARKER);
}

/// Strip a null marker (either direction) off the front of `buf`, if one is
/// present. Returns whether a marker was consumed and the remainder.
#[inline]
pub fn decode_if_null(buf: &[u8]) -> (bool, &[u8]) {
    match buf.first() {
        Some(&(NULL_MARKER | NULL_DESC_MARKER)) => (true, &buf[1..]),
        _ => (false, buf),
    }
}
