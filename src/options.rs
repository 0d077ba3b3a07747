//! Decode-time configuration.

use crate::types::TextEncoding;

/// Options applied while reconstructing values from wire bytes.
///
/// Resolved once per decode call from caller overrides layered over the
/// defaults, and read-only thereafter. The encoder takes no options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    symbolize_keys: bool,
    encoding: TextEncoding,
}

impl DecodeOptions {
    /// Creates options with the defaults: plain text keys, UTF-8.
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts map keys that decode to text into interned symbols.
    /// Non-key texts are never affected.
    pub fn symbolize_keys(mut self, symbolize: bool) -> Self {
        self.symbolize_keys = symbolize;
        self
    }

    /// Sets the encoding applied to every decoded text payload.
    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn symbolizes_keys(&self) -> bool {
        self.symbolize_keys
    }

    pub fn text_encoding(&self) -> TextEncoding {
        self.encoding
    }
}
