//! Decode-time errors for the key encoding codecs.
//!
//! Encoding a supported value never fails; every variant here is a
//! data-integrity failure surfaced while decoding. Each variant carries an
//! owned copy of the offending buffer so the caller can log or report the
//! exact bytes that did not parse. Nothing in this crate retries or swallows
//! an error: whether a malformed key means "skip it" or "abort the
//! transaction" is the index layer's call, not ours.

use thiserror::Error;

use crate::kind::Kind;

/// Result type alias used throughout the encoding crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The buffer is shorter than the minimum length implied by its tag.
    #[error("insufficient bytes to decode {target} from buffer {buf:02x?}")]
    InsufficientBytes { buf: Vec<u8>, target: &'static str },

    /// The expected type-prefix byte is absent; the buffer does not start a
    /// recognized encoding.
    #[error("did not find marker {markers:02x?} in buffer {buf:02x?}")]
    MarkersNotFound { buf: Vec<u8>, markers: Vec<u8> },

    /// A byte-string encoding's escape terminator never appeared before the
    /// buffer ended (truncated or corrupted data).
    #[error("did not find terminator in buffer {buf:02x?}")]
    TerminatorNotFound { buf: Vec<u8> },

    /// An escape byte appears with no following byte to disambiguate it.
    #[error("malformed escape in buffer {buf:02x?}")]
    MalformedEscape { buf: Vec<u8> },

    /// An escape byte is followed by something that is neither the
    /// escaped-zero nor the terminator marker.
    #[error("unknown escape sequence {escape:02x?} in buffer {buf:02x?}")]
    UnknownEscapeSequence { buf: Vec<u8>, escape: [u8; 2] },

    /// An integer tag implies a payload width no valid encoding can have.
    #[error("invalid length for uvarint: {length}")]
    InvalidUvarintLength { buf: Vec<u8>, length: i64 },

    /// The decoded magnitude does not fit in a signed 64-bit integer.
    #[error("varint {value} overflows int64")]
    VarintOverflow { buf: Vec<u8>, value: u64 },

    /// Umbrella error from [`decode_field_value`](crate::decode_field_value):
    /// an unrecognized or direction-mismatched tag, or a failure from the
    /// delegated codec (carried in `source`).
    #[error("can not decode field value of kind {kind:?} from buffer {buf:02x?}")]
    CanNotDecodeFieldValue {
        buf: Vec<u8>,
        kind: Kind,
        source: Option<Box<Error>>,
    },
}
