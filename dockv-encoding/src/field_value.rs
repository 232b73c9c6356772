//! Polymorphic encode/decode over field values.
//!
//! This is the entry point the storage and index layers call: one function
//! appends a value's encoding to a growing key buffer, the other pulls one
//! value off the front of a stored key and returns the remainder, so a
//! composite key is decoded by threading the remainder through successive
//! calls.

use crate::bytes::{decode_bytes_ascending, decode_bytes_descending};
use crate::bytes::{encode_bytes_ascending, encode_bytes_descending};
use crate::errors::{Error, Result};
use crate::float::{decode_float_ascending, decode_float_descending};
use crate::float::{encode_float_ascending, encode_float_descending};
use crate::kind::Kind;
use crate::null::{decode_if_null, encode_null_ascending, encode_null_descending};
use crate::varint::{decode_varint_ascending, decode_varint_descending};
use crate::varint::{encode_varint_ascending, encode_varint_descending};
use crate::{Direction, peek_kind};

/// The closed value domain the key encoding supports.
///
/// Strings encode as their UTF-8 bytes and therefore live in the `Bytes`
/// variant; the `From<&str>`/`From<String>` conversions do exactly that.
///
/// `Bool` is encoded as the integer 0 or 1: there is no distinct boolean
/// marker in the key format, so decoding the encoding of `Bool(true)` yields
/// `Int(1)`. Callers that need boolean identity back must carry that in
/// their schema, not in the key bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Bytes(Vec<u8>),
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(v as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Bytes(v.as_bytes().to_vec())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Bytes(v.into_bytes())
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(v: Vec<u8>) -> Self {
        FieldValue::Bytes(v)
    }
}

impl From<&[u8]> for FieldValue {
    fn from(v: &[u8]) -> Self {
        FieldValue::Bytes(v.to_vec())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => FieldValue::Null,
        }
    }
}

/// Append the encoding of one value to `out` under `direction`.
///
/// Encoding never fails for any [`FieldValue`].
pub fn encode_field_value(out: &mut Vec<u8>, value: &FieldValue, direction: Direction) {
    match (value, direction) {
        (FieldValue::Null, Direction::Ascending) => encode_null_ascending(out),
        (FieldValue::Null, Direction::Descending) => encode_null_descending(out),
        (FieldValue::Bool(v), Direction::Ascending) => {
            encode_varint_ascending(out, i64::from(*v))
        }
        (FieldValue::Bool(v), Direction::Descending) => {
            encode_varint_descending(out, i64::from(*v))
        }
        (FieldValue::Int(v), Direction::Ascending) => encode_varint_ascending(out, *v),
        (FieldValue::Int(v), Direction::Descending) => encode_varint_descending(out, *v),
        (FieldValue::Float(v), Direction::Ascending) => encode_float_ascending(out, *v),
        (FieldValue::Float(v), Direction::Descending) => encode_float_descending(out, *v),
        (FieldValue::Bytes(v), Direction::Ascending) => encode_bytes_ascending(out, v),
        (FieldValue::Bytes(v), Direction::Descending) => encode_bytes_descending(out, v),
    }
}

/// Decode one value off the front of `buf`, returning the remainder and the
/// value.
///
/// The codec is picked by peeking the marker byte; `direction` must agree
/// with how the buffer was encoded. Any mismatch, unrecognized marker, or
/// delegate decode failure surfaces as
/// [`Error::CanNotDecodeFieldValue`] carrying the offending buffer and, when
/// one exists, the underlying error.
pub fn decode_field_value(buf: &[u8], direction: Direction) -> Result<(&[u8], FieldValue)> {
    let (is_null, rest) = decode_if_null(buf);
    if is_null {
        return Ok((rest, FieldValue::Null));
    }

    let kind = peek_kind(buf);
    match (kind, direction) {
        (Kind::Int, Direction::Ascending) => {
            let (rest, v) = wrap(kind, buf, decode_varint_ascending(buf))?;
            Ok((rest, FieldValue::Int(v)))
        }
        (Kind::Int, Direction::Descending) => {
            let (rest, v) = wrap(kind, buf, decode_varint_descending(buf))?;
            Ok((rest, FieldValue::Int(v)))
        }
        (Kind::Float, Direction::Ascending) => {
            let (rest, v) = wrap(kind, buf, decode_float_ascending(buf))?;
            Ok((rest, FieldValue::Float(v)))
        }
        (Kind::Float, Direction::Descending) => {
            let (rest, v) = wrap(kind, buf, decode_float_descending(buf))?;
            Ok((rest, FieldValue::Float(v)))
        }
        (Kind::Bytes, Direction::Ascending) => {
            let (rest, v) = wrap(kind, buf, decode_bytes_ascending(buf))?;
            Ok((rest, FieldValue::Bytes(v)))
        }
        (Kind::BytesDesc, Direction::Descending) => {
            let (rest, v) = wrap(kind, buf, decode_bytes_descending(buf))?;
            Ok((rest, FieldValue::Bytes(v)))
        }
        // Unknown marker, or a bytes marker under the opposite direction.
        _ => Err(Error::CanNotDecodeFieldValue {
            buf: buf.to_vec(),
            kind,
            source: None,
        }),
    }
}

fn wrap<'a, T>(kind: Kind, buf: &[u8], res: Result<(&'a [u8], T)>) -> Result<(&'a [u8], T)> {
    res.map_err(|e| Error::CanNotDecodeFieldValue {
        buf: buf.to_vec(),
        kind,
        source: Some(Box::new(e)),
    })
}
