//! Order-preserving binary key encoding for DocKV.
//!
//! Every sortable storage key and index key in DocKV is built from the codecs
//! in this crate. Each codec turns a typed value into a byte sequence such
//! that unsigned lexicographic comparison of the encoded bytes reproduces the
//! value's natural ordering, ascending or descending. Encodings are also
//! self-delimiting: decoding pulls exactly one value off the front of a
//! buffer and returns the untouched remainder, so multiple values can be
//! concatenated into a single composite key with no length metadata between
//! them.
//!
//! ## Codecs
//!
//! - [`bytes`]: escape-based encoding for arbitrary byte strings (and
//!   therefore UTF-8 strings).
//! - [`varint`]: variable-width (1-9 byte) encodings for `i64` and `u64`.
//! - [`float`]: `f64` with an explicit total order over NaN and signed zero.
//! - [`null`]: single-byte null markers.
//! - [`kind`]: [`peek_kind`] classifies the first byte of an encoded buffer
//!   without consuming it.
//! - [`field_value`]: the dispatcher the index layer actually calls, covering
//!   the closed [`FieldValue`] domain.
//!
//! ## Purity
//!
//! Every function here is a stateless transform over caller-supplied buffers:
//! no globals, no locks, no I/O. Calls are safe from any number of threads.
//!
//! The byte layout is an on-disk format shared between nodes. Marker values
//! and payload layouts must never change for existing kinds; see the table in
//! [`kind`].

#![forbid(unsafe_code)]

pub mod errors;
pub use errors::{Error, Result};

pub mod bytes;
pub use bytes::*;

pub mod varint;
pub use varint::*;

pub mod float;
pub use float::*;

pub mod null;
pub use null::*;

pub mod kind;
pub use kind::*;

pub mod field_value;
pub use field_value::*;

/// Sort direction a value is encoded under.
///
/// Ascending and descending encodings of the same value are different byte
/// strings and are never comparable to each other; a decoder must be told
/// (or infer from the marker) which direction produced a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}
