//! MessagePack tag byte constants.

// Nil
pub const NIL: u8 = 0xC0;

// Boolean
pub const FALSE: u8 = 0xC2;
pub const TRUE: u8 = 0xC3;

// Binary
pub const BIN_8: u8 = 0xC4;
pub const BIN_16: u8 = 0xC5;
pub const BIN_32: u8 = 0xC6;

// Float (IEEE 754 big-endian; FLOAT_32 is accepted on decode and widened,
// the encoder always emits FLOAT_64)
pub const FLOAT_32: u8 = 0xCA;
pub const FLOAT_64: u8 = 0xCB;

// Unsigned integer
pub const UINT_8: u8 = 0xCC;
pub const UINT_16: u8 = 0xCD;
pub const UINT_32: u8 = 0xCE;
pub const UINT_64: u8 = 0xCF;

// Signed integer
pub const INT_8: u8 = 0xD0;
pub const INT_16: u8 = 0xD1;
pub const INT_32: u8 = 0xD2;
pub const INT_64: u8 = 0xD3;

// String
// FIXSTR: 0xA0..=0xBF (low 5 bits = byte length 0..31)
pub const STR_8: u8 = 0xD9;
pub const STR_16: u8 = 0xDA;
pub const STR_32: u8 = 0xDB;

// Array
// FIXARRAY: 0x90..=0x9F (low 4 bits = item count 0..15)
pub const ARRAY_16: u8 = 0xDC;
pub const ARRAY_32: u8 = 0xDD;

// Map
// FIXMAP: 0x80..=0x8F (low 4 bits = entry count 0..15)
pub const MAP_16: u8 = 0xDE;
pub const MAP_32: u8 = 0xDF;

// POSITIVE_FIXINT: 0x00..=0x7F (0..127)
// NEGATIVE_FIXINT: 0xE0..=0xFF (-32..-1)

// Base tag bytes for the fix families; the length or count is OR-ed into
// the low bits.
pub const FIXSTR: u8 = 0xA0;
pub const FIXARRAY: u8 = 0x90;
pub const FIXMAP: u8 = 0x80;
