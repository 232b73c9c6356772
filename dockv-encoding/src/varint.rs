//! Variable-width, order-preserving integer encodings.
//!
//! The tag byte both identifies the encoding and carries the sort class:
//!
//! - `INT_MIN..INT_ZERO`: negative values. The tag is `INT_ZERO - w` for a
//!   `w`-byte payload, so wider magnitudes get smaller tags and the most
//!   negative values sort first. The payload is the low `w` bytes of the
//!   two's-complement representation, big-endian.
//! - `INT_ZERO..=INT_ZERO + INT_SMALL`: the value `tag - INT_ZERO` itself,
//!   no payload. Small non-negative integers cost a single byte.
//! - `..=INT_MAX`: large non-negative values, tag `INT_MAX - 8 + w` for a
//!   `w`-byte big-endian magnitude payload of minimal width.
//!
//! Tag ordering separates the width/sign classes before any payload byte is
//! compared, which is what makes the variable width safe for sorting.
//!
//! Descending integers reuse the ascending codec on the bitwise complement
//! of the value: `!v` reverses numeric order while staying inside the same
//! tag space, so [`peek_kind`](crate::peek_kind) classifies both directions
//! identically.

use crate::errors::{Error, Result};
use crate::kind::{INT_MAX, INT_MAX_WIDTH, INT_MIN, INT_SMALL, INT_ZERO};

/// Minimal big-endian byte width of a non-zero magnitude.
#[inline]
fn payload_width(mag: u64) -> usize {
    debug_assert!(mag != 0);
    INT_MAX_WIDTH - mag.leading_zeros() as usize / 8
}

/// Append the ascending encoding of an unsigned 64-bit value to `out`.
pub fn encode_uvarint_ascending(out: &mut Vec<u8>, v: u64) {
    if v <= INT_SMALL as u64 {
        out.push(INT_ZERO + v as u8);
        return;
    }
    let w = payload_width(v);
    out.push(INT_MAX - INT_MAX_WIDTH as u8 + w as u8);
    out.extend_from_slice(&v.to_be_bytes()[INT_MAX_WIDTH - w..]);
}

/// Append the descending encoding of an unsigned 64-bit value to `out`.
///
/// Zero is the bare `INT_ZERO` tag; any other value stores the complemented
/// low bytes under a tag that shrinks as the width grows.
pub fn encode_uvarint_descending(out: &mut Vec<u8>, v: u64) {
    if v == 0 {
        out.push(INT_ZERO);
        return;
    }
    let w = payload_width(v);
    out.push(INT_MIN + INT_MAX_WIDTH as u8 - w as u8);
    out.extend_from_slice(&(!v).to_be_bytes()[INT_MAX_WIDTH - w..]);
}

/// Decode one ascending uvarint off the front of `buf`.
pub fn decode_uvarint_ascending(buf: &[u8]) -> Result<(&[u8], u64)> {
    let Some((&tag, rest)) = buf.split_first() else {
        return Err(Error::InsufficientBytes {
            buf: buf.to_vec(),
            target: "uvarint",
        });
    };
    let length = tag as i64 - INT_ZERO as i64;
    if length <= INT_SMALL as i64 {
        if length < 0 {
            return Err(Error::InvalidUvarintLength {
                buf: buf.to_vec(),
                length,
            });
        }
        return Ok((rest, length as u64));
    }
    let length = (length - INT_SMALL as i64) as usize;
    if length > INT_MAX_WIDTH {
        return Err(Error::InvalidUvarintLength {
            buf: buf.to_vec(),
            length: length as i64,
        });
    }
    if rest.len() < length {
        return Err(Error::InsufficientBytes {
            buf: buf.to_vec(),
            target: "uvarint",
        });
    }
    let mut v = 0u64;
    for &b in &rest[..length] {
        v = (v << 8) | b as u64;
    }
    Ok((&rest[length..], v))
}

/// Decode one descending uvarint off the front of `buf`.
pub fn decode_uvarint_descending(buf: &[u8]) -> Result<(&[u8], u64)> {
    let Some((&tag, rest)) = buf.split_first() else {
        return Err(Error::InsufficientBytes {
            buf: buf.to_vec(),
            target: "uvarint",
        });
    };
    let length = INT_ZERO as i64 - tag as i64;
    if !(0..=INT_MAX_WIDTH as i64).contains(&length) {
        return Err(Error::InvalidUvarintLength {
            buf: buf.to_vec(),
            length,
        });
    }
    let length = length as usize;
    if rest.len() < length {
        return Err(Error::InsufficientBytes {
            buf: buf.to_vec(),
            target: "uvarint",
        });
    }
    let mut v = 0u64;
    for &b in &rest[..length] {
        v = (v << 8) | !b as u64;
    }
    Ok((&rest[length..], v))
}

/// Append the ascending encoding of a signed 64-bit value to `out`.
pub fn encode_varint_ascending(out: &mut Vec<u8>, v: i64) {
    if v >= 0 {
        encode_uvarint_ascending(out, v as u64);
        return;
    }
    // Width chosen from the magnitude; the payload keeps the low bytes of
    // the two's-complement bits, which compare correctly once the tag has
    // separated the width classes.
    let w = payload_width((v as u64).wrapping_neg());
    out.push(INT_MIN + INT_MAX_WIDTH as u8 - w as u8);
    out.extend_from_slice(&(v as u64).to_be_bytes()[INT_MAX_WIDTH - w..]);
}

/// Append the descending encoding of a signed 64-bit value to `out`.
#[inline]
pub fn encode_varint_descending(out: &mut Vec<u8>, v: i64) {
    encode_varint_ascending(out, !v);
}

/// Decode one ascending varint off the front of `buf`.
pub fn decode_varint_ascending(buf: &[u8]) -> Result<(&[u8], i64)> {
    let Some((&tag, rest)) = buf.split_first() else {
        return Err(Error::InsufficientBytes {
            buf: buf.to_vec(),
            target: "varint",
        });
    };
    let length = tag as i64 - INT_ZERO as i64;
    if length < 0 {
        let length = (-length) as usize;
        if length > INT_MAX_WIDTH {
            return Err(Error::InvalidUvarintLength {
                buf: buf.to_vec(),
                length: length as i64,
            });
        }
        if rest.len() < length {
            return Err(Error::InsufficientBytes {
                buf: buf.to_vec(),
                target: "varint",
            });
        }
        // Sign-extend from the payload width.
        let mut v: i64 = -1;
        for &b in &rest[..length] {
            v = (v << 8) | b as i64;
        }
        return Ok((&rest[length..], v));
    }
    let (rest, uv) = decode_uvarint_ascending(buf)?;
    if uv > i64::MAX as u64 {
        return Err(Error::VarintOverflow {
            buf: buf.to_vec(),
            value: uv,
        });
    }
    Ok((rest, uv as i64))
}

/// Decode one descending varint off the front of `buf`.
pub fn decode_varint_descending(buf: &[u8]) -> Result<(&[u8], i64)> {
    let (rest, v) = decode_varint_ascending(buf)?;
    Ok((rest, !v))
}
