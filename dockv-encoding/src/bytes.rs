//! Escape-based, self-terminating encoding for arbitrary byte strings.
//!
//! Ascending layout: a marker byte, then the data with every literal `0x00`
//! replaced by the pair `(0x00, 0xFF)`, then the terminator `(0x00, 0x01)`.
//! Because `0x00` never appears unescaped inside the body, the first
//! `(0x00, 0x01)` pair unambiguously ends the value, and a strict prefix of
//! another string always sorts first: its terminator is smaller than any
//! continuation byte the longer string could present at that position.
//!
//! Descending is the same encoding produced under the descending marker with
//! every byte after the marker ones'-complemented. Inversion is bijective and
//! order-reversing, so sort order flips while self-termination is preserved;
//! the decoder just runs the identical state machine with the inverted
//! constants and un-inverts the recovered output.

use crate::errors::{Error, Result};
use crate::kind::{BYTES_DESC_MARKER, BYTES_MARKER};

/// Escape constants for one encoding direction.
struct Escapes {
    escape: u8,
    escaped_term: u8,
    escaped_00: u8,
    escaped_ff: u8,
    marker: u8,
}

const ASCENDING_ESCAPES: Escapes = Escapes {
    escape: 0x00,
    escaped_term: 0x01,
    escaped_00: 0xFF,
    escaped_ff: 0x00,
    marker: BYTES_MARKER,
};

const DESCENDING_ESCAPES: Escapes = Escapes {
    escape: 0xFF,
    escaped_term: 0xFE,
    escaped_00: 0x00,
    escaped_ff: 0xFF,
    marker: BYTES_DESC_MARKER,
};

/// Append the ascending encoding of `data` to `out`.
pub fn encode_bytes_ascending(out: &mut Vec<u8>, data: &[u8]) {
    out.reserve(data.len() + 3);
    out.push(BYTES_MARKER);
    for &b in data {
        if b == ASCENDING_ESCAPES.escape {
            out.push(ASCENDING_ESCAPES.escape);
            out.push(ASCENDING_ESCAPES.escaped_00);
        } else {
            out.push(b);
        }
    }
    out.push(ASCENDING_ESCAPES.escape);
    out.push(ASCENDING_ESCAPES.escaped_term);
}

/// Append the descending encoding of `data` to `out`.
///
/// Produced as the ascending encoding with the descending marker substituted
/// and every byte after the marker inverted, keeping the ascending codec the
/// single source of truth for the escape scheme.
pub fn encode_bytes_descending(out: &mut Vec<u8>, data: &[u8]) {
    let start = out.len();
    encode_bytes_ascending(out, data);
    out[start] = BYTES_DESC_MARKER;
    for b in &mut out[start + 1..] {
        *b = !*b;
    }
}

/// Strings encode as their UTF-8 bytes; there is no string-specific escaping.
#[inline]
pub fn encode_string_ascending(out: &mut Vec<u8>, s: &str) {
    encode_bytes_ascending(out, s.as_bytes());
}

#[inline]
pub fn encode_string_descending(out: &mut Vec<u8>, s: &str) {
    encode_bytes_descending(out, s.as_bytes());
}

/// Decode one ascending byte-string value off the front of `buf`.
///
/// Returns the remainder after the terminator and the recovered bytes.
pub fn decode_bytes_ascending(buf: &[u8]) -> Result<(&[u8], Vec<u8>)> {
    decode_bytes_internal(buf, &ASCENDING_ESCAPES, false)
}

/// Decode one descending byte-string value off the front of `buf`.
pub fn decode_bytes_descending(buf: &[u8]) -> Result<(&[u8], Vec<u8>)> {
    decode_bytes_internal(buf, &DESCENDING_ESCAPES, true)
}

fn decode_bytes_internal<'a>(
    buf: &'a [u8],
    e: &Escapes,
    invert: bool,
) -> Result<(&'a [u8], Vec<u8>)> {
    let mut rest = match buf.split_first() {
        Some((&marker, rest)) if marker == e.marker => rest,
        _ => {
            return Err(Error::MarkersNotFound {
                buf: buf.to_vec(),
                markers: vec![e.marker],
            });
        }
    };

    let mut out = Vec::new();
    loop {
        let Some(pos) = rest.iter().position(|&b| b == e.escape) else {
            return Err(Error::TerminatorNotFound { buf: buf.to_vec() });
        };
        if pos + 1 >= rest.len() {
            return Err(Error::MalformedEscape { buf: buf.to_vec() });
        }
        let follow = rest[pos + 1];
        if follow == e.escaped_term {
            out.extend_from_slice(&rest[..pos]);
            rest = &rest[pos + 2..];
            break;
        }
        if follow != e.escaped_00 {
            return Err(Error::UnknownEscapeSequence {
                buf: buf.to_vec(),
                escape: [e.escape, follow],
            });
        }
        out.extend_from_slice(&rest[..pos]);
        out.push(e.escaped_ff);
        rest = &rest[pos + 2..];
    }

    if invert {
        for b in &mut out {
            *b = !*b;
        }
    }
    Ok((rest, out))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Literal byte vectors, listed in ascending lexicographic order of both
    /// the raw values and their encodings.
    const ASCENDING_CASES: &[(&[u8], &[u8])] = &[
        (&[0, 1, b'a'], &[0x06, 0x00, 0xFF, 1, b'a', 0x00, 0x01]),
        (&[0, b'a'], &[0x06, 0x00, 0xFF, b'a', 0x00, 0x01]),
        (&[0, 0xFF, b'a'], &[0x06, 0x00, 0xFF, 0xFF, b'a', 0x00, 0x01]),
        (&[b'a'], &[0x06, b'a', 0x00, 0x01]),
        (&[b'b'], &[0x06, b'b', 0x00, 0x01]),
        (&[b'b', 0], &[0x06, b'b', 0x00, 0xFF, 0x00, 0x01]),
        (
            &[b'b', 0, 0],
            &[0x06, b'b', 0x00, 0xFF, 0x00, 0xFF, 0x00, 0x01],
        ),
        (
            &[b'b', 0, 0, b'a'],
            &[0x06, b'b', 0x00, 0xFF, 0x00, 0xFF, b'a', 0x00, 0x01],
        ),
        (&[b'b', 0xFF], &[0x06, b'b', 0xFF, 0x00, 0x01]),
        (
            b"hello",
            &[0x06, b'h', b'e', b'l', b'l', b'o', 0x00, 0x01],
        ),
    ];

    #[test]
    fn encode_decode_ascending() {
        let mut prev: Option<Vec<u8>> = None;
        for &(value, expected) in ASCENDING_CASES {
            let mut enc = Vec::new();
            encode_bytes_ascending(&mut enc, value);
            assert_eq!(enc, expected, "encoding of {value:02x?}");
            if let Some(p) = prev {
                assert!(p < enc, "{p:02x?} should sort before {enc:02x?}");
            }

            let (rest, dec) = decode_bytes_ascending(&enc).unwrap();
            assert_eq!(dec, value);
            assert!(rest.is_empty());

            // Trailing data comes back untouched.
            enc.extend_from_slice(b"remainder");
            let (rest, dec) = decode_bytes_ascending(&enc).unwrap();
            assert_eq!(dec, value);
            assert_eq!(rest, b"remainder");

            prev = Some(enc[..enc.len() - b"remainder".len()].to_vec());
        }
    }

    #[test]
    fn encode_decode_descending() {
        // Same vectors as the ascending table; descending order is reversed.
        let mut prev: Option<Vec<u8>> = None;
        for &(value, asc) in ASCENDING_CASES.iter().rev() {
            let mut enc = Vec::new();
            encode_bytes_descending(&mut enc, value);

            // Marker substituted, everything after it inverted.
            assert_eq!(enc[0], 0x07);
            let inverted: Vec<u8> = asc[1..].iter().map(|b| !b).collect();
            assert_eq!(&enc[1..], &inverted[..]);

            if let Some(p) = prev {
                assert!(p < enc, "{p:02x?} should sort before {enc:02x?}");
            }

            let (rest, dec) = decode_bytes_descending(&enc).unwrap();
            assert_eq!(dec, value);
            assert!(rest.is_empty());

            enc.extend_from_slice(b"tail");
            let (rest, _) = decode_bytes_descending(&enc).unwrap();
            assert_eq!(rest, b"tail");

            prev = Some(enc[..enc.len() - b"tail".len()].to_vec());
        }
    }

    #[test]
    fn descending_literal_terminator() {
        let mut enc = Vec::new();
        encode_bytes_descending(&mut enc, b"hello");
        assert_eq!(
            enc,
            [0x07, !b'h', !b'e', !b'l', !b'l', !b'o', 0xFF, 0xFE]
        );
    }

    #[test]
    fn string_delegates_to_bytes() {
        let mut via_str = Vec::new();
        encode_string_ascending(&mut via_str, "a");
        assert_eq!(via_str, [0x06, b'a', 0x00, 0x01]);

        let mut via_bytes = Vec::new();
        encode_bytes_ascending(&mut via_bytes, "a".as_bytes());
        assert_eq!(via_str, via_bytes);

        via_str.clear();
        encode_string_descending(&mut via_str, "a");
        assert_eq!(via_str, [0x07, !b'a', 0xFF, 0xFE]);

        via_bytes.clear();
        encode_bytes_descending(&mut via_bytes, "a".as_bytes());
        assert_eq!(via_str, via_bytes);
    }

    #[test]
    fn prefix_sorts_before_extension() {
        for (shorter, longer) in [
            (&b"ab"[..], &b"abc"[..]),
            (b"", b"\x00"),
            (b"b\x00", b"b\x00\x00"),
        ] {
            let mut a = Vec::new();
            let mut b = Vec::new();
            encode_bytes_ascending(&mut a, shorter);
            encode_bytes_ascending(&mut b, longer);
            assert!(a < b);
            assert!(!b.starts_with(&a), "no encoding is a prefix of another");

            a.clear();
            b.clear();
            encode_bytes_descending(&mut a, shorter);
            encode_bytes_descending(&mut b, longer);
            assert!(a > b);
            assert!(!a.starts_with(&b));
        }
    }

    #[test]
    fn decode_errors_ascending() {
        assert_eq!(
            decode_bytes_ascending(&[b'a']),
            Err(Error::MarkersNotFound {
                buf: vec![b'a'],
                markers: vec![0x06],
            })
        );
        assert_eq!(
            decode_bytes_ascending(&[0x06, b'a']),
            Err(Error::TerminatorNotFound {
                buf: vec![0x06, b'a'],
            })
        );
        assert_eq!(
            decode_bytes_ascending(&[0x06, b'a', 0x00]),
            Err(Error::MalformedEscape {
                buf: vec![0x06, b'a', 0x00],
            })
        );
        for bad in [0x00u8, 0x02] {
            assert_eq!(
                decode_bytes_ascending(&[0x06, b'a', 0x00, bad]),
                Err(Error::UnknownEscapeSequence {
                    buf: vec![0x06, b'a', 0x00, bad],
                    escape: [0x00, bad],
                })
            );
        }
    }

    #[test]
    fn decode_errors_descending() {
        assert!(matches!(
            decode_bytes_descending(&[b'a']),
            Err(Error::MarkersNotFound { .. })
        ));
        assert!(matches!(
            decode_bytes_descending(&[0x07, !b'a']),
            Err(Error::TerminatorNotFound { .. })
        ));
        assert!(matches!(
            decode_bytes_descending(&[0x07, !b'a', 0xFF]),
            Err(Error::MalformedEscape { .. })
        ));
        for bad in [0xFFu8, 0xFD] {
            assert!(matches!(
                decode_bytes_descending(&[0x07, !b'a', 0xFF, bad]),
                Err(Error::UnknownEscapeSequence { .. })
            ));
        }
    }

    #[test]
    fn empty_input_roundtrips() {
        let mut enc = Vec::new();
        encode_bytes_ascending(&mut enc, &[]);
        assert_eq!(enc, [0x06, 0x00, 0x01]);
        let (rest, dec) = decode_bytes_ascending(&enc).unwrap();
        assert!(rest.is_empty());
        assert!(dec.is_empty());

        enc.clear();
        encode_bytes_descending(&mut enc, &[]);
        assert_eq!(enc, [0x07, 0xFF, 0xFE]);
        let (_, dec) = decode_bytes_descending(&enc).unwrap();
        assert!(dec.is_empty());
    }
}
