//! Byte order selection for every multi-byte decode
//!
//! A single enum value chosen when a `Decoder` is built and threaded through
//! every width-specific conversion. There is no per-call override.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParserError, Result};

/// Byte order of multi-byte values
///
/// For 32-bit value `0x12345678`:
/// - `BigEndian`: [0x12, 0x34, 0x56, 0x78]
/// - `LittleEndian`: [0x78, 0x56, 0x34, 0x12]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ByteOrder {
    /// Big-endian: most significant byte first
    ///
    /// Network byte order.
    /// Example: 0x0102 → [0x01, 0x02]
    BigEndian,

    /// Little-endian: least significant byte first
    ///
    /// Intel x86 native byte order.
    /// Example: 0x0102 → [0x02, 0x01]
    LittleEndian,
}

impl ByteOrder {
    /// Parse from common string representations (case-insensitive)
    ///
    /// - "big", "be", "big_endian", "ABCD" → BigEndian
    /// - "little", "le", "little_endian", "DCBA" → LittleEndian
    ///
    /// Anything else is `None`; callers never get a silent default.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "");
        match normalized.as_str() {
            "big" | "be" | "big_endian" | "bigendian" | "abcd" => Some(Self::BigEndian),
            "little" | "le" | "little_endian" | "littleendian" | "dcba" => {
                Some(Self::LittleEndian)
            },
            _ => None,
        }
    }

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BigEndian => "big",
            Self::LittleEndian => "little",
        }
    }

    pub fn is_big_endian(&self) -> bool {
        matches!(self, Self::BigEndian)
    }

    pub fn is_little_endian(&self) -> bool {
        matches!(self, Self::LittleEndian)
    }
}

impl FromStr for ByteOrder {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| ParserError::invalid_byte_order(s))
    }
}

impl TryFrom<&str> for ByteOrder {
    type Error = ParserError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for ByteOrder {
    type Error = ParserError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ByteOrder> for &'static str {
    fn from(order: ByteOrder) -> Self {
        order.as_str()
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for ByteOrder {
    /// Default to big-endian (network byte order)
    fn default() -> Self {
        Self::BigEndian
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(ByteOrder::parse("big"), Some(ByteOrder::BigEndian));
        assert_eq!(ByteOrder::parse("BE"), Some(ByteOrder::BigEndian));
        assert_eq!(ByteOrder::parse("Big-Endian"), Some(ByteOrder::BigEndian));
        assert_eq!(ByteOrder::parse("ABCD"), Some(ByteOrder::BigEndian));

        assert_eq!(ByteOrder::parse("little"), Some(ByteOrder::LittleEndian));
        assert_eq!(ByteOrder::parse("le"), Some(ByteOrder::LittleEndian));
        assert_eq!(
            ByteOrder::parse("LITTLE_ENDIAN"),
            Some(ByteOrder::LittleEndian)
        );
        assert_eq!(ByteOrder::parse("dcba"), Some(ByteOrder::LittleEndian));
    }

    #[test]
    fn test_parse_rejects_typos() {
        assert_eq!(ByteOrder::parse("bgi"), None);
        assert_eq!(ByteOrder::parse("CDAB"), None);
        assert_eq!(ByteOrder::parse(""), None);

        let err = "littel".parse::<ByteOrder>().unwrap_err();
        assert_eq!(err, ParserError::InvalidByteOrder("littel".to_string()));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
            assert_eq!(order.to_string().parse::<ByteOrder>().unwrap(), order);
        }
    }

    #[test]
    fn test_properties() {
        assert!(ByteOrder::BigEndian.is_big_endian());
        assert!(!ByteOrder::BigEndian.is_little_endian());
        assert!(ByteOrder::LittleEndian.is_little_endian());
    }

    #[test]
    fn test_default() {
        assert_eq!(ByteOrder::default(), ByteOrder::BigEndian);
    }
}
