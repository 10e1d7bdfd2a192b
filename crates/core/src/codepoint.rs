//! Codepoint newtype and its persisted hexadecimal form

use crate::error::Error;
use crate::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// First codepoint of the Basic Multilingual Plane private-use area
pub const PRIVATE_USE_START: Codepoint = Codepoint(0xe000);

/// Last codepoint of the Basic Multilingual Plane private-use area
pub const PRIVATE_USE_END: Codepoint = Codepoint(0xf8ff);

/// Lowest codepoint handed out to a new icon
pub const DEFAULT_BASE: Codepoint = Codepoint(0xea01);

/// A Unicode scalar value assigned to an icon glyph
///
/// Persisted as lowercase hex without a `0x` prefix (`ea01`).
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Codepoint(u32);

impl Codepoint {
    /// Create a codepoint from its numeric value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Numeric value
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The codepoint as a `char`, if it is a valid scalar value
    pub fn as_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// Next codepoint, or `None` on overflow
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Whether this codepoint lies in the BMP private-use area
    pub fn is_private_use(self) -> bool {
        (PRIVATE_USE_START..=PRIVATE_USE_END).contains(&self)
    }

    /// Convert to lowercase hex string
    pub fn to_hex(self) -> String {
        format!("{:x}", self.0)
    }

    /// Parse from hex string
    ///
    /// Accepts 1-8 hex digits of either case. Prefixes, signs and
    /// whitespace are rejected, as are surrogates and values above
    /// U+10FFFF.
    pub fn from_hex(hex: &str) -> Result<Self> {
        if hex.is_empty() || hex.len() > 8 {
            return Err(Error::InvalidHex(hex.to_string()));
        }

        let mut value = 0u32;
        for &c in hex.as_bytes() {
            let nibble = hex_char_to_nibble(c).ok_or_else(|| Error::InvalidHex(hex.to_string()))?;
            value = (value << 4) | u32::from(nibble);
        }
        if char::from_u32(value).is_none() {
            return Err(Error::NotScalar(hex.to_string()));
        }
        Ok(Self(value))
    }
}

/// Helper function to convert a hex character to a nibble
fn hex_char_to_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl std::fmt::Debug for Codepoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Codepoint(U+{:04X})", self.0)
    }
}

impl std::fmt::Display for Codepoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl std::str::FromStr for Codepoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Codepoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Codepoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}
