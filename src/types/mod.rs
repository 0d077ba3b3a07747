//! MessagePack value types and text encodings.

mod encoding;
mod value;

pub use encoding::TextEncoding;
pub use value::{Symbol, Text, Value};
