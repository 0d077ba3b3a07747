//! Text encoding identifiers.

use std::borrow::Cow;
use std::fmt;

/// Declared encoding of a [`Text`](super::Text) payload.
///
/// The wire format itself always carries UTF-8 in the str family; this
/// identifier records how the payload bytes are to be interpreted on the
/// host side of the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Ascii,
    Latin1,
}

impl TextEncoding {
    /// Returns true if `bytes` form a valid payload under this encoding.
    pub fn validates(self, bytes: &[u8]) -> bool {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes).is_ok(),
            Self::Ascii => bytes.is_ascii(),
            // Every byte is a code point in ISO-8859-1.
            Self::Latin1 => true,
        }
    }

    /// Decodes `bytes` under this encoding into an owned string, or `None`
    /// if the payload is not valid.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            Self::Ascii => {
                let s = std::str::from_utf8(bytes).ok()?;
                s.is_ascii().then(|| s.to_owned())
            }
            Self::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }

    /// Transcodes `bytes` from this encoding into UTF-8, or `None` if the
    /// payload is not valid. ASCII and already-valid UTF-8 pass through
    /// without copying.
    pub fn to_utf8(self, bytes: &[u8]) -> Option<Cow<'_, [u8]>> {
        match self {
            Self::Utf8 | Self::Ascii => self.validates(bytes).then_some(Cow::Borrowed(bytes)),
            Self::Latin1 => {
                if bytes.is_ascii() {
                    Some(Cow::Borrowed(bytes))
                } else {
                    let s: String = bytes.iter().map(|&b| char::from(b)).collect();
                    Some(Cow::Owned(s.into_bytes()))
                }
            }
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Utf8 => "UTF-8",
            Self::Ascii => "US-ASCII",
            Self::Latin1 => "ISO-8859-1",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_validation() {
        assert!(TextEncoding::Utf8.validates("olé".as_bytes()));
        assert!(!TextEncoding::Utf8.validates(&[0xFF, 0xFE]));
    }

    #[test]
    fn ascii_validation() {
        assert!(TextEncoding::Ascii.validates(b"plain"));
        assert!(!TextEncoding::Ascii.validates("olé".as_bytes()));
    }

    #[test]
    fn latin1_accepts_anything() {
        assert!(TextEncoding::Latin1.validates(&[0x00, 0xE9, 0xFF]));
    }

    #[test]
    fn latin1_transcodes_to_utf8() {
        // "olé" in ISO-8859-1
        let transcoded = TextEncoding::Latin1.to_utf8(&[0x6F, 0x6C, 0xE9]).unwrap();
        assert_eq!(&transcoded[..], "olé".as_bytes());
    }

    #[test]
    fn latin1_decode_maps_bytes_to_code_points() {
        assert_eq!(
            TextEncoding::Latin1.decode(&[0x6F, 0x6C, 0xE9]),
            Some("olé".to_string())
        );
    }

    #[test]
    fn invalid_utf8_does_not_decode() {
        assert_eq!(TextEncoding::Utf8.decode(&[0xC3]), None);
    }
}
