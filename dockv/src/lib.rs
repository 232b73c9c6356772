//! DocKV: a peer-to-peer document database.
//!
//! This crate is the unified entrypoint for the DocKV crates. It currently
//! re-exports the key encoding layer, the foundation every sortable storage
//! key and index key is built on.
//!
//! # Quick Start
//!
//! Append typed values to a key buffer and pull them back off the front:
//!
//! ```rust
//! use dockv::encoding::{Direction, FieldValue, decode_field_value, encode_field_value};
//!
//! let mut key = Vec::new();
//! encode_field_value(&mut key, &FieldValue::Int(42), Direction::Ascending);
//! encode_field_value(&mut key, &"title".into(), Direction::Ascending);
//!
//! let (rest, first) = decode_field_value(&key, Direction::Ascending).unwrap();
//! assert_eq!(first, FieldValue::Int(42));
//! let (rest, second) = decode_field_value(rest, Direction::Ascending).unwrap();
//! assert_eq!(second, FieldValue::Bytes(b"title".to_vec()));
//! assert!(rest.is_empty());
//! ```
//!
//! # Architecture
//!
//! - **Key encoding** (`dockv-encoding`): order-preserving, self-delimiting
//!   binary encodings for null, boolean, integer, float, and byte-string
//!   values, in both sort directions.

pub use dockv_encoding as encoding;

// Re-export the types call sites touch most, so simple users never need the
// nested path.
pub use dockv_encoding::{Direction, Error, FieldValue, Kind, Result};
