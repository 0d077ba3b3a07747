//! Error types for the codec.

use num_bigint::BigInt;

use crate::types::TextEncoding;

/// Errors that can occur while encoding a value.
///
/// Every error is terminal for the encode call; the output buffer may hold
/// a partial prefix and must be discarded by the caller.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("cannot pack type: {0}")]
    UnsupportedType(String),

    #[error("integer out of 64-bit wire range: {0}")]
    IntegerOverflow(BigInt),

    #[error("payload of {0} bytes exceeds the 32-bit length limit")]
    TooLong(usize),

    #[error("text payload is not valid {0}")]
    InvalidText(TextEncoding),
}

impl EncodeError {
    /// Classification failure for a host type with no `Value` mapping.
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType(type_name.into())
    }
}

/// Errors that can occur while decoding a buffer.
///
/// Every error is terminal for the decode call; no partial value is returned
/// and no resynchronization is attempted.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unexpected end of input: need {needed} bytes but only {remaining} remain")]
    UnexpectedEndOfInput { needed: usize, remaining: usize },

    #[error("unknown tag byte: 0x{0:02X}")]
    InvalidTag(u8),

    #[error("text payload is not valid {0}")]
    InvalidTextEncoding(TextEncoding),
}
