//! mpackr — A pure-Rust MessagePack codec.
//!
//! This crate converts between a dynamic value model and the MessagePack
//! wire format with full type fidelity: arbitrary-precision integers up to
//! the unsigned 64-bit wire envelope, a binary/text payload distinction, and
//! maps that preserve wire order (including duplicate keys).
//!
//! # Architecture
//!
//! - **`codec`** — Binary encoding/decoding plus the `pack`/`unpack` entry
//!   points
//! - **`types`** — The `Value` model (scalars, text, symbols, containers)
//! - **`options`** — Decode-time configuration (`symbolize_keys`, text
//!   encoding)
//! - **`error`** — Encode and decode error taxonomies
//!
//! # Example
//!
//! ```
//! use mpackr::{pack, unpack, Value};
//!
//! let value = Value::Array(vec![Value::from(1u8), Value::from("two")]);
//! let bytes = pack(&value)?;
//! assert_eq!(unpack(&bytes)?, value);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec;
pub mod error;
pub mod options;
pub mod types;

pub use codec::{pack, unpack, unpack_with};
pub use error::{DecodeError, EncodeError};
pub use options::DecodeOptions;
pub use types::{Symbol, Text, TextEncoding, Value};
