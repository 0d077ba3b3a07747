//! MessagePack binary encoding format.
//!
//! MessagePack is a compact, self-describing binary presentation format for
//! richly-typed data. It uses big-endian byte ordering exclusively.
//!
//! The encoder and decoder share only the tag constants in [`marker`] and
//! hold no state between calls: the encoder appends to a caller-owned
//! buffer, the decoder consumes from a caller-owned cursor.

pub mod decode;
pub mod encode;
pub mod marker;

pub use decode::decode_value;
pub use encode::encode_value;

use bytes::{Bytes, BytesMut};

use crate::error::{DecodeError, EncodeError};
use crate::options::DecodeOptions;
use crate::types::Value;

/// Encodes a value into a freshly allocated buffer.
pub fn pack(value: &Value) -> Result<Bytes, EncodeError> {
    let mut buf = BytesMut::new();
    encode_value(&mut buf, value)?;
    Ok(buf.freeze())
}

/// Decodes the first value in `bytes` with default options.
///
/// Trailing bytes after the first complete value are ignored; use
/// [`decode_value`] with a shared cursor to consume a concatenated sequence
/// of values.
pub fn unpack(bytes: &[u8]) -> Result<Value, DecodeError> {
    unpack_with(bytes, &DecodeOptions::default())
}

/// Decodes the first value in `bytes` with the supplied options.
pub fn unpack_with(bytes: &[u8], options: &DecodeOptions) -> Result<Value, DecodeError> {
    let mut cursor = bytes;
    decode_value(&mut cursor, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack_round_trip() {
        let value = Value::Map(vec![
            (Value::from("list"), Value::Array(vec![Value::from(1u8)])),
            (Value::from("ok"), Value::from(true)),
        ]);
        let bytes = pack(&value).unwrap();
        assert_eq!(unpack(&bytes).unwrap(), value);
    }

    #[test]
    fn unpack_ignores_trailing_bytes() {
        assert_eq!(unpack(&[0xC0, 0xC0]).unwrap(), Value::Nil);
    }
}
