//! MessagePack decoding: bytes → `Value`.

use bytes::Buf;
use num_bigint::BigInt;

use super::marker;
use crate::error::DecodeError;
use crate::options::DecodeOptions;
use crate::types::{Symbol, Text, Value};

/// Decodes a single `Value`, consuming exactly its bytes from the buffer.
///
/// The buffer position is the cursor: repeated calls over the same buffer
/// decode a sequence of back-to-back values. Any failure aborts the whole
/// decode with no partial value and no resynchronization.
pub fn decode_value(buf: &mut impl Buf, options: &DecodeOptions) -> Result<Value, DecodeError> {
    ensure_remaining(buf, 1)?;

    let tag = buf.get_u8();
    match tag {
        // POSITIVE_FIXINT
        0x00..=0x7F => Ok(Value::Integer(BigInt::from(tag))),

        // NEGATIVE_FIXINT
        0xE0..=0xFF => Ok(Value::Integer(BigInt::from(tag as i8))),

        marker::NIL => Ok(Value::Nil),
        marker::FALSE => Ok(Value::Boolean(false)),
        marker::TRUE => Ok(Value::Boolean(true)),

        // Float (32-bit wire encoding is widened on decode)
        marker::FLOAT_32 => {
            ensure_remaining(buf, 4)?;
            Ok(Value::Float(f64::from(buf.get_f32())))
        }
        marker::FLOAT_64 => {
            ensure_remaining(buf, 8)?;
            Ok(Value::Float(buf.get_f64()))
        }

        // Unsigned integers. The 8-byte width goes through the raw u64 so
        // values above i64::MAX keep their magnitude instead of wrapping
        // negative.
        marker::UINT_8 => {
            ensure_remaining(buf, 1)?;
            Ok(Value::Integer(BigInt::from(buf.get_u8())))
        }
        marker::UINT_16 => {
            ensure_remaining(buf, 2)?;
            Ok(Value::Integer(BigInt::from(buf.get_u16())))
        }
        marker::UINT_32 => {
            ensure_remaining(buf, 4)?;
            Ok(Value::Integer(BigInt::from(buf.get_u32())))
        }
        marker::UINT_64 => {
            ensure_remaining(buf, 8)?;
            Ok(Value::Integer(BigInt::from(buf.get_u64())))
        }

        // Signed integers
        marker::INT_8 => {
            ensure_remaining(buf, 1)?;
            Ok(Value::Integer(BigInt::from(buf.get_i8())))
        }
        marker::INT_16 => {
            ensure_remaining(buf, 2)?;
            Ok(Value::Integer(BigInt::from(buf.get_i16())))
        }
        marker::INT_32 => {
            ensure_remaining(buf, 4)?;
            Ok(Value::Integer(BigInt::from(buf.get_i32())))
        }
        marker::INT_64 => {
            ensure_remaining(buf, 8)?;
            Ok(Value::Integer(BigInt::from(buf.get_i64())))
        }

        // Binary
        marker::BIN_8 => {
            ensure_remaining(buf, 1)?;
            let len = buf.get_u8() as usize;
            decode_bytes_data(buf, len)
        }
        marker::BIN_16 => {
            ensure_remaining(buf, 2)?;
            let len = buf.get_u16() as usize;
            decode_bytes_data(buf, len)
        }
        marker::BIN_32 => {
            ensure_remaining(buf, 4)?;
            let len = buf.get_u32() as usize;
            decode_bytes_data(buf, len)
        }

        // String
        0xA0..=0xBF => decode_text_data(buf, (tag & 0x1F) as usize, options),
        marker::STR_8 => {
            ensure_remaining(buf, 1)?;
            let len = buf.get_u8() as usize;
            decode_text_data(buf, len, options)
        }
        marker::STR_16 => {
            ensure_remaining(buf, 2)?;
            let len = buf.get_u16() as usize;
            decode_text_data(buf, len, options)
        }
        marker::STR_32 => {
            ensure_remaining(buf, 4)?;
            let len = buf.get_u32() as usize;
            decode_text_data(buf, len, options)
        }

        // Array
        0x90..=0x9F => decode_array_data(buf, (tag & 0x0F) as usize, options),
        marker::ARRAY_16 => {
            ensure_remaining(buf, 2)?;
            let len = buf.get_u16() as usize;
            decode_array_data(buf, len, options)
        }
        marker::ARRAY_32 => {
            ensure_remaining(buf, 4)?;
            let len = buf.get_u32() as usize;
            decode_array_data(buf, len, options)
        }

        // Map
        0x80..=0x8F => decode_map_data(buf, (tag & 0x0F) as usize, options),
        marker::MAP_16 => {
            ensure_remaining(buf, 2)?;
            let len = buf.get_u16() as usize;
            decode_map_data(buf, len, options)
        }
        marker::MAP_32 => {
            ensure_remaining(buf, 4)?;
            let len = buf.get_u32() as usize;
            decode_map_data(buf, len, options)
        }

        // 0xC1 and the ext family (0xC7..0xC9, 0xD4..0xD8) are not part of
        // the supported tag set.
        _ => Err(DecodeError::InvalidTag(tag)),
    }
}

fn ensure_remaining(buf: &impl Buf, needed: usize) -> Result<(), DecodeError> {
    if buf.remaining() < needed {
        Err(DecodeError::UnexpectedEndOfInput {
            needed,
            remaining: buf.remaining(),
        })
    } else {
        Ok(())
    }
}

fn decode_bytes_data(buf: &mut impl Buf, len: usize) -> Result<Value, DecodeError> {
    ensure_remaining(buf, len)?;
    let mut data = vec![0u8; len];
    buf.copy_to_slice(&mut data);
    Ok(Value::Bytes(data))
}

fn decode_text_data(
    buf: &mut impl Buf,
    len: usize,
    options: &DecodeOptions,
) -> Result<Value, DecodeError> {
    ensure_remaining(buf, len)?;
    let mut data = vec![0u8; len];
    buf.copy_to_slice(&mut data);
    let encoding = options.text_encoding();
    if !encoding.validates(&data) {
        return Err(DecodeError::InvalidTextEncoding(encoding));
    }
    Ok(Value::Text(Text::with_encoding(data, encoding)))
}

fn decode_array_data(
    buf: &mut impl Buf,
    len: usize,
    options: &DecodeOptions,
) -> Result<Value, DecodeError> {
    // Each element takes at least one byte, so a count beyond the remaining
    // bytes can never complete.
    ensure_remaining(buf, len)?;
    let mut items = Vec::with_capacity(len);
    for _ in 0..len {
        items.push(decode_value(buf, options)?);
    }
    Ok(Value::Array(items))
}

/// Decodes map pairs in wire order, keeping duplicates. Text keys become
/// symbols when the option is set; values and non-key texts never do.
fn decode_map_data(
    buf: &mut impl Buf,
    len: usize,
    options: &DecodeOptions,
) -> Result<Value, DecodeError> {
    ensure_remaining(buf, len.saturating_mul(2))?;
    let mut pairs = Vec::with_capacity(len);
    for _ in 0..len {
        let key = match decode_value(buf, options)? {
            Value::Text(text) if options.symbolizes_keys() => {
                let encoding = text.encoding();
                let name = text
                    .decoded()
                    .ok_or(DecodeError::InvalidTextEncoding(encoding))?;
                Value::Symbol(Symbol::new(name))
            }
            other => other,
        };
        let value = decode_value(buf, options)?;
        pairs.push((key, value));
    }
    Ok(Value::Map(pairs))
}
