//! First-byte classification of encoded buffers.
//!
//! Every encoding starts with a marker byte that identifies the codec which
//! produced it. The marker ranges never overlap, which is what lets
//! [`decode_field_value`](crate::decode_field_value) pick a decoder without
//! an external schema:
//!
//! | first byte            | kind        |
//! |-----------------------|-------------|
//! | `0x00`, `0xFF`        | `Null`      |
//! | `0x01`..=`0x05`       | `Float`     |
//! | `0x06`                | `Bytes`     |
//! | `0x07`                | `BytesDesc` |
//! | `0x80`..=`0xFD`       | `Int`       |
//! | anything else / empty | `Unknown`   |
//!
//! These values are part of the stored key format and must stay fixed.

// Null markers (ascending / descending).
pub(crate) const NULL_MARKER: u8 = 0x00;
pub(crate) const NULL_DESC_MARKER: u8 = 0xFF;

// Float class tags. NaN sorts before every number ascending; the descending
// direction gets its own tag so NaN sorts after every number there too.
pub(crate) const FLOAT_NAN: u8 = 0x01;
pub(crate) const FLOAT_NEG: u8 = 0x02;
pub(crate) const FLOAT_ZERO: u8 = 0x03;
pub(crate) const FLOAT_POS: u8 = 0x04;
pub(crate) const FLOAT_NAN_DESC: u8 = 0x05;

// Byte-string markers.
pub(crate) const BYTES_MARKER: u8 = 0x06;
pub(crate) const BYTES_DESC_MARKER: u8 = 0x07;

// Variable-width integer tag space. Tags below INT_ZERO are negative values
// (wider magnitude => smaller tag); INT_ZERO + v is a one-byte encoding for
// 0 <= v <= INT_SMALL; tags above that carry 1-8 big-endian payload bytes.
pub(crate) const INT_MIN: u8 = 0x80;
pub(crate) const INT_MAX: u8 = 0xFD;
pub(crate) const INT_MAX_WIDTH: usize = 8;
pub(crate) const INT_ZERO: u8 = INT_MIN + INT_MAX_WIDTH as u8;
pub(crate) const INT_SMALL: u8 = INT_MAX - INT_ZERO - INT_MAX_WIDTH as u8;

/// Logical kind of the encoding at the front of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Unknown,
    Null,
    Int,
    Float,
    Bytes,
    BytesDesc,
}

/// Classify the first byte of `buf` without consuming any input.
///
/// Returns [`Kind::Unknown`] for an empty buffer or a byte outside every
/// marker range.
pub fn peek_kind(buf: &[u8]) -> Kind {
    let Some(&m) = buf.first() else {
        return Kind::Unknown;
    };
    match m {
        NULL_MARKER | NULL_DESC_MARKER => Kind::Null,
        BYTES_MARKER => Kind::Bytes,
        BYTES_DESC_MARKER => Kind::BytesDesc,
        INT_MIN..=INT_MAX => Kind::Int,
        FLOAT_NAN..=FLOAT_NAN_DESC => Kind::Float,
        _ => Kind::Unknown,
    }
}
