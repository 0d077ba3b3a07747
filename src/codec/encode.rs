//! MessagePack encoding: `Value` → bytes.

use bytes::{BufMut, BytesMut};
use num_bigint::{BigInt, Sign};

use super::marker;
use crate::error::EncodeError;
use crate::types::{Symbol, Text, Value};

/// Encodes a `Value` into the buffer using the smallest wire representation
/// that exactly fits.
///
/// On error the buffer may hold a partial prefix; callers must discard it.
pub fn encode_value(buf: &mut BytesMut, value: &Value) -> Result<(), EncodeError> {
    match value {
        Value::Nil => {
            buf.put_u8(marker::NIL);
            Ok(())
        }
        Value::Boolean(b) => {
            buf.put_u8(if *b { marker::TRUE } else { marker::FALSE });
            Ok(())
        }
        Value::Integer(i) => encode_int(buf, i),
        Value::Float(f) => {
            encode_float(buf, *f);
            Ok(())
        }
        Value::Bytes(b) => encode_bytes(buf, b),
        Value::Text(t) => encode_text(buf, t),
        Value::Symbol(s) => encode_symbol(buf, s),
        Value::Array(items) => encode_array(buf, items),
        Value::Map(pairs) => encode_map(buf, pairs),
    }
}

/// Encodes an integer, preferring the unsigned tag family for nonnegative
/// values and the signed family for negative ones. Magnitudes outside
/// `[-2^63, 2^64 - 1]` have no wire representation.
pub fn encode_int(buf: &mut BytesMut, value: &BigInt) -> Result<(), EncodeError> {
    if value.sign() == Sign::Minus {
        let Ok(v) = i64::try_from(value) else {
            return Err(EncodeError::IntegerOverflow(value.clone()));
        };
        if v >= -32 {
            // NEGATIVE_FIXINT: single two's-complement byte
            buf.put_i8(v as i8);
        } else if v >= i64::from(i8::MIN) {
            buf.put_u8(marker::INT_8);
            buf.put_i8(v as i8);
        } else if v >= i64::from(i16::MIN) {
            buf.put_u8(marker::INT_16);
            buf.put_i16(v as i16);
        } else if v >= i64::from(i32::MIN) {
            buf.put_u8(marker::INT_32);
            buf.put_i32(v as i32);
        } else {
            buf.put_u8(marker::INT_64);
            buf.put_i64(v);
        }
    } else {
        let Ok(v) = u64::try_from(value) else {
            return Err(EncodeError::IntegerOverflow(value.clone()));
        };
        if v <= 127 {
            // POSITIVE_FIXINT: single byte
            buf.put_u8(v as u8);
        } else if v <= u64::from(u8::MAX) {
            buf.put_u8(marker::UINT_8);
            buf.put_u8(v as u8);
        } else if v <= u64::from(u16::MAX) {
            buf.put_u8(marker::UINT_16);
            buf.put_u16(v as u16);
        } else if v <= u64::from(u32::MAX) {
            buf.put_u8(marker::UINT_32);
            buf.put_u32(v as u32);
        } else {
            buf.put_u8(marker::UINT_64);
            buf.put_u64(v);
        }
    }
    Ok(())
}

/// Encodes a float with the 64-bit wire tag.
pub fn encode_float(buf: &mut BytesMut, value: f64) {
    buf.put_u8(marker::FLOAT_64);
    buf.put_f64(value);
}

/// Encodes a text payload, transcoding to UTF-8 when the declared encoding
/// differs (size = byte length after transcoding, not char count).
pub fn encode_text(buf: &mut BytesMut, text: &Text) -> Result<(), EncodeError> {
    let utf8 = text
        .encoding()
        .to_utf8(text.as_bytes())
        .ok_or(EncodeError::InvalidText(text.encoding()))?;
    encode_str_header(buf, utf8.len())?;
    buf.put_slice(&utf8);
    Ok(())
}

/// Encodes a symbol as its name in the str family.
pub fn encode_symbol(buf: &mut BytesMut, symbol: &Symbol) -> Result<(), EncodeError> {
    encode_str_header(buf, symbol.name().len())?;
    buf.put_slice(symbol.name().as_bytes());
    Ok(())
}

fn encode_str_header(buf: &mut BytesMut, len: usize) -> Result<(), EncodeError> {
    if len <= 31 {
        buf.put_u8(marker::FIXSTR | len as u8);
    } else if len <= 255 {
        buf.put_u8(marker::STR_8);
        buf.put_u8(len as u8);
    } else if len <= 65535 {
        buf.put_u8(marker::STR_16);
        buf.put_u16(len as u16);
    } else {
        buf.put_u8(marker::STR_32);
        buf.put_u32(len_to_u32(len)?);
    }
    Ok(())
}

pub fn encode_bytes(buf: &mut BytesMut, value: &[u8]) -> Result<(), EncodeError> {
    let len = value.len();
    if len <= 255 {
        buf.put_u8(marker::BIN_8);
        buf.put_u8(len as u8);
    } else if len <= 65535 {
        buf.put_u8(marker::BIN_16);
        buf.put_u16(len as u16);
    } else {
        buf.put_u8(marker::BIN_32);
        buf.put_u32(len_to_u32(len)?);
    }
    buf.put_slice(value);
    Ok(())
}

pub fn encode_array(buf: &mut BytesMut, items: &[Value]) -> Result<(), EncodeError> {
    let len = items.len();
    if len <= 15 {
        buf.put_u8(marker::FIXARRAY | len as u8);
    } else if len <= 65535 {
        buf.put_u8(marker::ARRAY_16);
        buf.put_u16(len as u16);
    } else {
        buf.put_u8(marker::ARRAY_32);
        buf.put_u32(len_to_u32(len)?);
    }
    for item in items {
        encode_value(buf, item)?;
    }
    Ok(())
}

/// Encodes map pairs in the order supplied by the input.
pub fn encode_map(buf: &mut BytesMut, pairs: &[(Value, Value)]) -> Result<(), EncodeError> {
    let len = pairs.len();
    if len <= 15 {
        buf.put_u8(marker::FIXMAP | len as u8);
    } else if len <= 65535 {
        buf.put_u8(marker::MAP_16);
        buf.put_u16(len as u16);
    } else {
        buf.put_u8(marker::MAP_32);
        buf.put_u32(len_to_u32(len)?);
    }
    for (key, value) in pairs {
        encode_value(buf, key)?;
        encode_value(buf, value)?;
    }
    Ok(())
}

fn len_to_u32(len: usize) -> Result<u32, EncodeError> {
    u32::try_from(len).map_err(|_| EncodeError::TooLong(len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TextEncoding;

    fn encoded(value: &Value) -> Vec<u8> {
        let mut buf = BytesMut::new();
        encode_value(&mut buf, value).expect("encode failed");
        buf.to_vec()
    }

    #[test]
    fn encode_nil_marker() {
        assert_eq!(encoded(&Value::Nil), [0xC0]);
    }

    #[test]
    fn encode_booleans() {
        assert_eq!(encoded(&Value::from(true)), [0xC3]);
        assert_eq!(encoded(&Value::from(false)), [0xC2]);
    }

    #[test]
    fn encode_positive_fixint() {
        assert_eq!(encoded(&Value::from(0u8)), [0x00]);
        assert_eq!(encoded(&Value::from(42u8)), [0x2A]);
        assert_eq!(encoded(&Value::from(127u8)), [0x7F]);
    }

    #[test]
    fn encode_negative_fixint() {
        assert_eq!(encoded(&Value::from(-1i64)), [0xFF]);
        assert_eq!(encoded(&Value::from(-32i64)), [0xE0]);
    }

    #[test]
    fn encode_unsigned_widths() {
        assert_eq!(encoded(&Value::from(128u32)), [0xCC, 0x80]);
        assert_eq!(encoded(&Value::from(256u32)), [0xCD, 0x01, 0x00]);
        assert_eq!(
            encoded(&Value::from(0x0165_9851u32)),
            [0xCE, 0x01, 0x65, 0x98, 0x51]
        );
        assert_eq!(
            encoded(&Value::from(0x0008_525A_60D0_2D3Cu64)),
            [0xCF, 0x00, 0x08, 0x52, 0x5A, 0x60, 0xD0, 0x2D, 0x3C]
        );
    }

    #[test]
    fn encode_signed_widths() {
        assert_eq!(encoded(&Value::from(-33i64)), [0xD0, 0xDF]);
        assert_eq!(encoded(&Value::from(-129i64)), [0xD1, 0xFF, 0x7F]);
        assert_eq!(
            encoded(&Value::from(-8_444_910i64)),
            [0xD2, 0xFF, 0x7F, 0x24, 0x12]
        );
        assert_eq!(
            encoded(&Value::from(-41_957_882_392_009_710i64)),
            [0xD3, 0xFF, 0x6A, 0xEF, 0x87, 0x3C, 0x7F, 0x24, 0x12]
        );
    }

    #[test]
    fn encode_64_bit_extremes() {
        assert_eq!(
            encoded(&Value::from(u64::MAX)),
            [0xCF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
        );
        assert_eq!(
            encoded(&Value::from(i64::MIN)),
            [0xD3, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn integer_overflow_is_rejected() {
        let too_big = BigInt::from(u64::MAX) + 1;
        let result = encode_int(&mut BytesMut::new(), &too_big);
        assert!(matches!(result, Err(EncodeError::IntegerOverflow(_))));

        let too_small = BigInt::from(i64::MIN) - 1;
        let result = encode_int(&mut BytesMut::new(), &too_small);
        assert!(matches!(result, Err(EncodeError::IntegerOverflow(_))));
    }

    #[test]
    fn encode_float64_always() {
        let bytes = encoded(&Value::from(-2.1));
        assert_eq!(
            bytes,
            [0xCB, 0xC0, 0x00, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xCD]
        );

        let bytes = encoded(&Value::from(1.0));
        assert_eq!(bytes[0], marker::FLOAT_64);
        assert_eq!(&bytes[1..], 1.0f64.to_be_bytes());
    }

    #[test]
    fn encode_fixstr() {
        assert_eq!(encoded(&Value::from("")), [0xA0]);
        assert_eq!(
            encoded(&Value::from("hello world")),
            b"\xabhello world"
        );
        let max_fix = "y".repeat(31);
        assert_eq!(encoded(&Value::from(max_fix.as_str()))[0], 0xBF);
    }

    #[test]
    fn encode_str_tiers() {
        let s = "x".repeat(32);
        let bytes = encoded(&Value::from(s.as_str()));
        assert_eq!(&bytes[..2], [marker::STR_8, 32]);

        let s = "x".repeat(0xDDDD);
        let bytes = encoded(&Value::from(s.as_str()));
        assert_eq!(&bytes[..3], [marker::STR_16, 0xDD, 0xDD]);

        let s = "x".repeat(0x10000);
        let bytes = encoded(&Value::from(s.as_str()));
        assert_eq!(&bytes[..5], [marker::STR_32, 0x00, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn encode_latin1_text_transcodes_to_utf8() {
        // "olé" declared as ISO-8859-1
        let text = Text::with_encoding(vec![0x6F, 0x6C, 0xE9], TextEncoding::Latin1);
        assert_eq!(encoded(&Value::Text(text)), b"\xa4ol\xc3\xa9");
    }

    #[test]
    fn encode_invalid_utf8_text_fails() {
        let text = Text::with_encoding(vec![0xFF, 0xFE], TextEncoding::Utf8);
        let result = encode_value(&mut BytesMut::new(), &Value::Text(text));
        assert!(matches!(
            result,
            Err(EncodeError::InvalidText(TextEncoding::Utf8))
        ));
    }

    #[test]
    fn encode_symbol_as_str() {
        assert_eq!(encoded(&Value::Symbol(Symbol::new("symbol"))), b"\xa6symbol");
    }

    #[test]
    fn encode_bytes_tiers() {
        assert_eq!(
            encoded(&Value::Bytes(vec![0x07; 5])),
            [&[0xC4u8, 0x05][..], &[0x07; 5][..]].concat()
        );
        let bytes = encoded(&Value::Bytes(vec![0x07; 0x100]));
        assert_eq!(&bytes[..3], [0xC5, 0x01, 0x00]);
        let bytes = encoded(&Value::Bytes(vec![0x07; 0x10000]));
        assert_eq!(&bytes[..5], [0xC6, 0x00, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn encode_array_tiers() {
        assert_eq!(encoded(&Value::Array(vec![])), [0x90]);
        assert_eq!(
            encoded(&Value::Array(vec![Value::from(1u8), Value::from(2u8)])),
            [0x92, 0x01, 0x02]
        );

        let fifteen = Value::Array(vec![Value::Nil; 15]);
        assert_eq!(encoded(&fifteen)[0], 0x9F);

        let sixteen = Value::Array(vec![Value::Nil; 16]);
        assert_eq!(&encoded(&sixteen)[..3], [marker::ARRAY_16, 0x00, 0x10]);

        let big = Value::Array(vec![Value::from(false); 0x111]);
        let bytes = encoded(&big);
        assert_eq!(&bytes[..3], [marker::ARRAY_16, 0x01, 0x11]);
        assert_eq!(bytes.len(), 3 + 0x111);

        let huge = Value::Array(vec![Value::from(false); 0x10000]);
        let bytes = encoded(&huge);
        assert_eq!(&bytes[..5], [marker::ARRAY_32, 0x00, 0x01, 0x00, 0x00]);
        assert_eq!(bytes.len(), 5 + 0x10000);
    }

    #[test]
    fn encode_map_tiers() {
        assert_eq!(encoded(&Value::Map(vec![])), [0x80]);
        assert_eq!(
            encoded(&Value::Map(vec![(Value::from("foo"), Value::from("bar"))])),
            b"\x81\xa3foo\xa3bar"
        );

        let sixteen: Vec<(Value, Value)> = (0..16u8)
            .map(|i| (Value::from(i), Value::from(true)))
            .collect();
        assert_eq!(&encoded(&Value::Map(sixteen))[..3], [marker::MAP_16, 0x00, 0x10]);

        let huge: Vec<(Value, Value)> = (0..0x10000u32)
            .map(|i| (Value::from(i), Value::from(true)))
            .collect();
        assert_eq!(
            &encoded(&Value::Map(huge))[..5],
            [marker::MAP_32, 0x00, 0x01, 0x00, 0x00]
        );
    }

    #[test]
    fn encode_map_preserves_supplied_order() {
        let map = Value::Map(vec![
            (Value::from("b"), Value::from(1u8)),
            (Value::from("a"), Value::from(2u8)),
        ]);
        assert_eq!(encoded(&map), [0x82, 0xA1, b'b', 0x01, 0xA1, b'a', 0x02]);
    }

    #[test]
    fn encode_nested_containers() {
        // [[[[1, 2], 3], 4]]
        let value = Value::Array(vec![Value::Array(vec![
            Value::Array(vec![
                Value::Array(vec![Value::from(1u8), Value::from(2u8)]),
                Value::from(3u8),
            ]),
            Value::from(4u8),
        ])]);
        assert_eq!(
            encoded(&value),
            [0x91, 0x92, 0x92, 0x92, 0x01, 0x02, 0x03, 0x04]
        );
    }
}
