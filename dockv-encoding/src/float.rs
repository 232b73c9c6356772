//! Order-preserving encoding for IEEE-754 doubles.
//!
//! A single class tag splits values into NaN, negative, zero, and positive
//! bands; only the negative and positive bands carry an 8-byte payload.
//! Positive payloads are the raw bit pattern big-endian (already
//! monotonically increasing for same-sign values); negative payloads invert
//! all 64 bits, which reverses the pattern's decreasing-with-magnitude order.
//! Positive and negative zero collapse into the payload-free zero tag.
//!
//! IEEE-754 leaves NaN unordered, so we order it explicitly: the ascending
//! NaN tag sorts before every number, and a distinct descending tag sorts
//! after every number, keeping NaN first in either direction.

use crate::errors::{Error, Result};
use crate::kind::{FLOAT_NAN, FLOAT_NAN_DESC, FLOAT_NEG, FLOAT_POS, FLOAT_ZERO, Kind};
use crate::peek_kind;

/// Append the ascending encoding of `f` to `out`.
pub fn encode_float_ascending(out: &mut Vec<u8>, f: f64) {
    if f.is_nan() {
        out.push(FLOAT_NAN);
        return;
    }
    if f == 0.0 {
        out.push(FLOAT_ZERO);
        return;
    }
    let bits = f.to_bits();
    if bits & (1 << 63) != 0 {
        out.push(FLOAT_NEG);
        out.extend_from_slice(&(!bits).to_be_bytes());
    } else {
        out.push(FLOAT_POS);
        out.extend_from_slice(&bits.to_be_bytes());
    }
}

/// Append the descending encoding of `f` to `out`.
///
/// Encoded as the ascending encoding of `-f`, which flips the band tags and
/// payload ordering in one step; NaN gets its dedicated descending tag.
pub fn encode_float_descending(out: &mut Vec<u8>, f: f64) {
    if f.is_nan() {
        out.push(FLOAT_NAN_DESC);
        return;
    }
    encode_float_ascending(out, -f);
}

/// Decode one ascending float off the front of `buf`.
pub fn decode_float_ascending(buf: &[u8]) -> Result<(&[u8], f64)> {
    if peek_kind(buf) != Kind::Float {
        return Err(Error::MarkersNotFound {
            buf: buf.to_vec(),
            markers: vec![FLOAT_NAN, FLOAT_NEG, FLOAT_ZERO, FLOAT_POS, FLOAT_NAN_DESC],
        });
    }
    let rest = &buf[1..];
    match buf[0] {
        FLOAT_NAN | FLOAT_NAN_DESC => Ok((rest, f64::NAN)),
        FLOAT_ZERO => Ok((rest, 0.0)),
        FLOAT_NEG => {
            let (rest, bits) = decode_payload(buf, rest)?;
            Ok((rest, f64::from_bits(!bits)))
        }
        FLOAT_POS => {
            let (rest, bits) = decode_payload(buf, rest)?;
            Ok((rest, f64::from_bits(bits)))
        }
        // peek_kind only admits the five float tags.
        _ => Err(Error::MarkersNotFound {
            buf: buf.to_vec(),
            markers: vec![FLOAT_NAN, FLOAT_NEG, FLOAT_ZERO, FLOAT_POS, FLOAT_NAN_DESC],
        }),
    }
}

/// Decode one descending float off the front of `buf`.
pub fn decode_float_descending(buf: &[u8]) -> Result<(&[u8], f64)> {
    let (rest, f) = decode_float_ascending(buf)?;
    Ok((rest, -f))
}

fn decode_payload<'a>(full: &[u8], rest: &'a [u8]) -> Result<(&'a [u8], u64)> {
    if rest.len() < 8 {
        return Err(Error::InsufficientBytes {
            buf: full.to_vec(),
            target: "float64",
        });
    }
    let (head, rest) = rest.split_at(8);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(head);
    Ok((rest, u64::from_be_bytes(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc_asc(f: f64) -> Vec<u8> {
        let mut out = Vec::new();
        encode_float_ascending(&mut out, f);
        out
    }

    fn enc_desc(f: f64) -> Vec<u8> {
        let mut out = Vec::new();
        encode_float_descending(&mut out, f);
        out
    }

    #[test]
    fn class_tags() {
        assert_eq!(enc_asc(f64::NAN), [0x01]);
        assert_eq!(enc_asc(0.0), [0x03]);
        assert_eq!(enc_asc(-0.0), [0x03]);
        assert_eq!(enc_asc(-1.5)[0], 0x02);
        assert_eq!(enc_asc(1.5)[0], 0x04);
        assert_eq!(enc_desc(f64::NAN), [0x05]);
        // Descending flips the sign bands.
        assert_eq!(enc_desc(1.5)[0], 0x02);
        assert_eq!(enc_desc(-1.5)[0], 0x04);
    }

    /// Values in increasing numeric order, NaN first (its defined position
    /// ascending), covering sign boundaries, subnormals, and infinities.
    const ORDERED: &[f64] = &[
        f64::NEG_INFINITY,
        f64::MIN,
        -1.0e10,
        -1.5,
        -1.0,
        -f64::MIN_POSITIVE,
        -5e-324, // most negative subnormal magnitude
        0.0,
        5e-324, // smallest positive subnormal
        f64::MIN_POSITIVE,
        1.0,
        1.5,
        1.0e10,
        f64::MAX,
        f64::INFINITY,
    ];

    #[test]
    fn roundtrip_and_order_ascending() {
        let mut prev = enc_asc(f64::NAN);
        for &f in ORDERED {
            let enc = enc_asc(f);
            assert!(prev < enc, "asc order broken at {f}");
            let (rest, dec) = decode_float_ascending(&enc).unwrap();
            assert!(rest.is_empty());
            assert_eq!(dec, f);
            prev = enc;
        }
    }

    #[test]
    fn roundtrip_and_order_descending() {
        let mut prev: Option<Vec<u8>> = None;
        for &f in ORDERED {
            let enc = enc_desc(f);
            if let Some(p) = prev {
                assert!(p > enc, "desc order broken at {f}");
            }
            let (rest, dec) = decode_float_descending(&enc).unwrap();
            assert!(rest.is_empty());
            assert_eq!(dec, f);
            prev = Some(enc);
        }
        // NaN sorts first descending as well: its tag exceeds every number's.
        let nan = enc_desc(f64::NAN);
        assert!(nan > enc_desc(f64::INFINITY));
        let (_, dec) = decode_float_descending(&nan).unwrap();
        assert!(dec.is_nan());
    }

    #[test]
    fn nan_roundtrips_ascending() {
        let enc = enc_asc(f64::NAN);
        let (rest, dec) = decode_float_ascending(&enc).unwrap();
        assert!(rest.is_empty());
        assert!(dec.is_nan());
    }

    #[test]
    fn negative_zero_collapses() {
        assert_eq!(enc_asc(-0.0), enc_asc(0.0));
        let (_, dec) = decode_float_ascending(&enc_asc(-0.0)).unwrap();
        assert!(dec == 0.0 && dec.is_sign_positive());
    }

    #[test]
    fn remainder_is_preserved() {
        let mut buf = enc_asc(3.25);
        buf.extend_from_slice(&[0x06, 0x07]);
        let (rest, dec) = decode_float_ascending(&buf).unwrap();
        assert_eq!(dec, 3.25);
        assert_eq!(rest, &[0x06, 0x07]);
    }

    #[test]
    fn decode_errors() {
        assert!(matches!(
            decode_float_ascending(&[]),
            Err(Error::MarkersNotFound { .. })
        ));
        assert!(matches!(
            decode_float_ascending(&[0x42]),
            Err(Error::MarkersNotFound { .. })
        ));
        // Payload-bearing tag with a short payload.
        assert!(matches!(
            decode_float_ascending(&[0x04, 0x01, 0x02]),
            Err(Error::InsufficientBytes { .. })
        ));
    }
}
