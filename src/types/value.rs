//! MessagePack value types.

use std::fmt;

use num_bigint::BigInt;

use super::encoding::TextEncoding;

/// A value in the MessagePack data model.
///
/// This is the closed set of shapes the codec operates on: every host value
/// is classified into exactly one variant before encoding, and every decoded
/// byte sequence produces exactly one variant. Map entries are kept as an
/// ordered pair list so that wire order survives a round trip and duplicate
/// keys stay representable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Boolean(bool),
    Integer(BigInt),
    Float(f64),
    Bytes(Vec<u8>),
    Text(Text),
    Symbol(Symbol),
    Array(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Returns the value as a bool, if it is a `Boolean` variant.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as an i64, if it is an `Integer` variant in range.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => i64::try_from(i).ok(),
            _ => None,
        }
    }

    /// Returns the value as an f64, if it is a `Float` variant.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the value as a string slice, if it is a `Text` variant whose
    /// payload is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(t) => t.as_str(),
            _ => None,
        }
    }

    /// Returns the value as a byte slice, if it is a `Bytes` variant.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value as an element slice, if it is an `Array` variant.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the value as an ordered pair slice, if it is a `Map` variant.
    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Self::Map(pairs) => Some(pairs),
            _ => None,
        }
    }
}

/// A textual payload: raw bytes plus their declared encoding.
///
/// The encoder transcodes non-UTF-8 payloads to UTF-8 before emission; the
/// decoder tags every textual payload with the encoding configured in
/// [`DecodeOptions`](crate::options::DecodeOptions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    bytes: Vec<u8>,
    encoding: TextEncoding,
}

impl Text {
    /// Creates a UTF-8 text payload.
    pub fn utf8(s: impl Into<String>) -> Self {
        Self {
            bytes: s.into().into_bytes(),
            encoding: TextEncoding::Utf8,
        }
    }

    /// Creates a text payload with an explicit declared encoding. No
    /// validation happens here; the codec validates at the point of use.
    pub fn with_encoding(bytes: Vec<u8>, encoding: TextEncoding) -> Self {
        Self { bytes, encoding }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Returns the payload as a string slice if it is valid UTF-8,
    /// regardless of the declared encoding.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    /// Decodes the payload under its declared encoding.
    pub fn decoded(&self) -> Option<String> {
        self.encoding.decode(&self.bytes)
    }
}

/// An interned-symbol map key.
///
/// Produced in place of plain `Text` keys when the `symbolize_keys` decode
/// option is set. Host bindings with a real symbol table can intern the name
/// when constructing their own representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

// -- Convenience conversions --

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<BigInt> for Value {
    fn from(i: BigInt) -> Self {
        Self::Integer(i)
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(i: $t) -> Self {
                Self::Integer(BigInt::from(i))
            }
        })*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(Text::utf8(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(Text::utf8(s))
    }
}

impl From<Text> for Value {
    fn from(t: Text) -> Self {
        Self::Text(t)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Self::Symbol(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Vec<(Value, Value)>> for Value {
    fn from(pairs: Vec<(Value, Value)>) -> Self {
        Self::Map(pairs)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            Self::Text(t) => write!(f, "\"{}\"", String::from_utf8_lossy(t.as_bytes())),
            Self::Symbol(s) => write!(f, "{s}"),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(pairs) => {
                write!(f, "{{")?;
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_the_right_variant() {
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from(42i64), Value::Integer(BigInt::from(42)));
        assert_eq!(Value::from(u64::MAX), Value::Integer(BigInt::from(u64::MAX)));
        assert_eq!(Value::from(1.5), Value::Float(1.5));
        assert_eq!(Value::from("hi"), Value::Text(Text::utf8("hi")));
        assert_eq!(Value::from(vec![0xDEu8, 0xAD]), Value::Bytes(vec![0xDE, 0xAD]));
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::from(7u8).as_i64(), Some(7));
        assert_eq!(Value::from("hey").as_str(), Some("hey"));
        assert_eq!(Value::Nil.as_i64(), None);
        let big = Value::Integer(BigInt::from(u64::MAX));
        assert_eq!(big.as_i64(), None);
    }

    #[test]
    fn map_keeps_pair_order() {
        let map = Value::Map(vec![
            (Value::from("b"), Value::from(1u8)),
            (Value::from("a"), Value::from(2u8)),
        ]);
        let pairs = map.as_map().unwrap();
        assert_eq!(pairs[0].0.as_str(), Some("b"));
        assert_eq!(pairs[1].0.as_str(), Some("a"));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::from("x").to_string(), "\"x\"");
        assert_eq!(Value::Symbol(Symbol::new("key")).to_string(), ":key");
        let arr = Value::Array(vec![Value::from(1u8), Value::Nil]);
        assert_eq!(arr.to_string(), "[1, nil]");
    }
}
