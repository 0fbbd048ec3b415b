//! Decode targets and decoded values
//!
//! `TypeTag` is the closed set of targets the dynamic dispatcher accepts.
//! `Scalar`, `ScalarArray` and `DecodedValue` are tagged unions, so the kind
//! that produced a value always travels with it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bytes::Unit;
use crate::error::{ParserError, Result};

// ============================================================================
// Scalar Kinds
// ============================================================================

/// The eight numeric element types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 8] = [
        Self::Int16,
        Self::Uint16,
        Self::Int32,
        Self::Uint32,
        Self::Int64,
        Self::Uint64,
        Self::Float32,
        Self::Float64,
    ];

    /// Parse from string representation (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "int16" | "i16" | "short" => Some(Self::Int16),
            "uint16" | "u16" | "word" => Some(Self::Uint16),
            "int32" | "i32" | "long" => Some(Self::Int32),
            "uint32" | "u32" | "dword" => Some(Self::Uint32),
            "int64" | "i64" => Some(Self::Int64),
            "uint64" | "u64" => Some(Self::Uint64),
            "float32" | "f32" | "float" => Some(Self::Float32),
            "float64" | "f64" | "double" => Some(Self::Float64),
            _ => None,
        }
    }

    /// Size in bytes
    pub fn width(&self) -> usize {
        match self {
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Int64 | Self::Uint64 | Self::Float64 => 8,
        }
    }

    /// Unit description used in size mismatch errors
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Int16 => i16::UNIT,
            Self::Uint16 => u16::UNIT,
            Self::Int32 => i32::UNIT,
            Self::Uint32 => u32::UNIT,
            Self::Int64 => i64::UNIT,
            Self::Uint64 => u64::UNIT,
            Self::Float32 => f32::UNIT,
            Self::Float64 => f64::UNIT,
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, Self::Int16 | Self::Int32 | Self::Int64)
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Int16 => "int16",
            Self::Uint16 => "uint16",
            Self::Int32 => "int32",
            Self::Uint32 => "uint32",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        };
        write!(f, "{}", s)
    }
}

// ============================================================================
// Type Tags
// ============================================================================

/// Runtime-selected decode target
///
/// Discriminants are the wire values accepted by `Decoder::decode_raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TypeTag {
    Bits16 = 0,
    Bits32 = 1,
    Bits64 = 2,
    Int16 = 3,
    Uint16 = 4,
    Int32 = 5,
    Uint32 = 6,
    Int64 = 7,
    Uint64 = 8,
    Float32 = 9,
    Float64 = 10,
    Int16Arr = 11,
    Uint16Arr = 12,
    Int32Arr = 13,
    Uint32Arr = 14,
    Int64Arr = 15,
    Uint64Arr = 16,
    Float32Arr = 17,
    Float64Arr = 18,
}

/// What a `TypeTag` asks the dispatcher to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Decode the signed integer kind, then render its binary digits
    BitString(ScalarKind),
    Scalar(ScalarKind),
    Array(ScalarKind),
}

impl TypeTag {
    pub const ALL: [TypeTag; 19] = [
        Self::Bits16,
        Self::Bits32,
        Self::Bits64,
        Self::Int16,
        Self::Uint16,
        Self::Int32,
        Self::Uint32,
        Self::Int64,
        Self::Uint64,
        Self::Float32,
        Self::Float64,
        Self::Int16Arr,
        Self::Uint16Arr,
        Self::Int32Arr,
        Self::Uint32Arr,
        Self::Int64Arr,
        Self::Uint64Arr,
        Self::Float32Arr,
        Self::Float64Arr,
    ];

    pub fn from_u8(tag: u8) -> Option<Self> {
        Self::ALL.get(usize::from(tag)).copied()
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Tag selecting a single value of `kind`
    pub fn scalar(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Int16 => Self::Int16,
            ScalarKind::Uint16 => Self::Uint16,
            ScalarKind::Int32 => Self::Int32,
            ScalarKind::Uint32 => Self::Uint32,
            ScalarKind::Int64 => Self::Int64,
            ScalarKind::Uint64 => Self::Uint64,
            ScalarKind::Float32 => Self::Float32,
            ScalarKind::Float64 => Self::Float64,
        }
    }

    /// Tag selecting an array of `kind`
    pub fn array(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Int16 => Self::Int16Arr,
            ScalarKind::Uint16 => Self::Uint16Arr,
            ScalarKind::Int32 => Self::Int32Arr,
            ScalarKind::Uint32 => Self::Uint32Arr,
            ScalarKind::Int64 => Self::Int64Arr,
            ScalarKind::Uint64 => Self::Uint64Arr,
            ScalarKind::Float32 => Self::Float32Arr,
            ScalarKind::Float64 => Self::Float64Arr,
        }
    }

    pub fn target(self) -> Target {
        match self {
            Self::Bits16 => Target::BitString(ScalarKind::Int16),
            Self::Bits32 => Target::BitString(ScalarKind::Int32),
            Self::Bits64 => Target::BitString(ScalarKind::Int64),
            Self::Int16 => Target::Scalar(ScalarKind::Int16),
            Self::Uint16 => Target::Scalar(ScalarKind::Uint16),
            Self::Int32 => Target::Scalar(ScalarKind::Int32),
            Self::Uint32 => Target::Scalar(ScalarKind::Uint32),
            Self::Int64 => Target::Scalar(ScalarKind::Int64),
            Self::Uint64 => Target::Scalar(ScalarKind::Uint64),
            Self::Float32 => Target::Scalar(ScalarKind::Float32),
            Self::Float64 => Target::Scalar(ScalarKind::Float64),
            Self::Int16Arr => Target::Array(ScalarKind::Int16),
            Self::Uint16Arr => Target::Array(ScalarKind::Uint16),
            Self::Int32Arr => Target::Array(ScalarKind::Int32),
            Self::Uint32Arr => Target::Array(ScalarKind::Uint32),
            Self::Int64Arr => Target::Array(ScalarKind::Int64),
            Self::Uint64Arr => Target::Array(ScalarKind::Uint64),
            Self::Float32Arr => Target::Array(ScalarKind::Float32),
            Self::Float64Arr => Target::Array(ScalarKind::Float64),
        }
    }

    pub fn is_array(self) -> bool {
        matches!(self.target(), Target::Array(_))
    }

    /// Parse from string representation (case-insensitive)
    ///
    /// Scalar names follow `ScalarKind::parse`; arrays take an `_arr`, `arr`
    /// or `[]` suffix (`"u16[]"`, `"float32_arr"`); bit strings are
    /// `"bits16"`/`"bit16"` and so on.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "bits16" | "bit16" => return Some(Self::Bits16),
            "bits32" | "bit32" => return Some(Self::Bits32),
            "bits64" | "bit64" => return Some(Self::Bits64),
            _ => {},
        }

        let array_base = lower
            .strip_suffix("[]")
            .or_else(|| lower.strip_suffix("_arr"))
            .or_else(|| lower.strip_suffix("arr"));
        match array_base {
            Some(base) => ScalarKind::parse(base).map(Self::array),
            None => ScalarKind::parse(&lower).map(Self::scalar),
        }
    }
}

impl TryFrom<u8> for TypeTag {
    type Error = ParserError;

    fn try_from(tag: u8) -> Result<Self> {
        Self::from_u8(tag).ok_or(ParserError::UnsupportedType(tag))
    }
}

impl From<TypeTag> for u8 {
    fn from(tag: TypeTag) -> Self {
        tag.as_u8()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target() {
            Target::BitString(kind) => write!(f, "bits{}", kind.width() * 8),
            Target::Scalar(kind) => write!(f, "{}", kind),
            Target::Array(kind) => write!(f, "{}_arr", kind),
        }
    }
}

// ============================================================================
// Decoded Values
// ============================================================================

/// One decoded numeric value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Scalar {
    Int16(i16),
    Uint16(u16),
    Int32(i32),
    Uint32(u32),
    Int64(i64),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::Int16(_) => ScalarKind::Int16,
            Self::Uint16(_) => ScalarKind::Uint16,
            Self::Int32(_) => ScalarKind::Int32,
            Self::Uint32(_) => ScalarKind::Uint32,
            Self::Int64(_) => ScalarKind::Int64,
            Self::Uint64(_) => ScalarKind::Uint64,
            Self::Float32(_) => ScalarKind::Float32,
            Self::Float64(_) => ScalarKind::Float64,
        }
    }

    /// Widen to f64 (lossy above 2^53 for 64-bit integers)
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int16(v) => f64::from(v),
            Self::Uint16(v) => f64::from(v),
            Self::Int32(v) => f64::from(v),
            Self::Uint32(v) => f64::from(v),
            Self::Int64(v) => v as f64,
            Self::Uint64(v) => v as f64,
            Self::Float32(v) => f64::from(v),
            Self::Float64(v) => v,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int16(v) => write!(f, "{}", v),
            Self::Uint16(v) => write!(f, "{}", v),
            Self::Int32(v) => write!(f, "{}", v),
            Self::Uint32(v) => write!(f, "{}", v),
            Self::Int64(v) => write!(f, "{}", v),
            Self::Uint64(v) => write!(f, "{}", v),
            Self::Float32(v) => write!(f, "{}", v),
            Self::Float64(v) => write!(f, "{}", v),
        }
    }
}

/// Homogeneous decoded array, one variant per element kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum ScalarArray {
    Int16(Vec<i16>),
    Uint16(Vec<u16>),
    Int32(Vec<i32>),
    Uint32(Vec<u32>),
    Int64(Vec<i64>),
    Uint64(Vec<u64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

macro_rules! with_array {
    ($array:expr, $values:ident => $body:expr) => {
        match $array {
            ScalarArray::Int16($values) => $body,
            ScalarArray::Uint16($values) => $body,
            ScalarArray::Int32($values) => $body,
            ScalarArray::Uint32($values) => $body,
            ScalarArray::Int64($values) => $body,
            ScalarArray::Uint64($values) => $body,
            ScalarArray::Float32($values) => $body,
            ScalarArray::Float64($values) => $body,
        }
    };
}

fn element_kind<T: Unit>(_: &[T]) -> ScalarKind {
    T::KIND
}

impl ScalarArray {
    pub fn kind(&self) -> ScalarKind {
        with_array!(self, values => element_kind(values.as_slice()))
    }

    pub fn len(&self) -> usize {
        with_array!(self, values => values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<Scalar> {
        with_array!(self, values => values.get(index).map(|v| v.into_scalar()))
    }

    pub fn iter(&self) -> impl Iterator<Item = Scalar> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Re-wrap every element as a standalone `Scalar`
    pub fn into_scalars(self) -> Vec<Scalar> {
        with_array!(self, values => values.into_iter().map(Unit::into_scalar).collect())
    }
}

/// Result of tag-driven dispatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum DecodedValue {
    /// 16 binary digits
    Bits16(String),
    /// 32 binary digits
    Bits32(String),
    /// 64 binary digits
    Bits64(String),
    Scalar(Scalar),
    Array(ScalarArray),
}

impl DecodedValue {
    /// The tag that produces this shape of value
    pub fn tag(&self) -> TypeTag {
        match self {
            Self::Bits16(_) => TypeTag::Bits16,
            Self::Bits32(_) => TypeTag::Bits32,
            Self::Bits64(_) => TypeTag::Bits64,
            Self::Scalar(scalar) => TypeTag::scalar(scalar.kind()),
            Self::Array(array) => TypeTag::array(array.kind()),
        }
    }

    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Self::Scalar(scalar) => Some(*scalar),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ScalarArray> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_bits(&self) -> Option<&str> {
        match self {
            Self::Bits16(bits) | Self::Bits32(bits) | Self::Bits64(bits) => Some(bits),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_tag_wire_values() {
        assert_eq!(TypeTag::Bits16.as_u8(), 0);
        assert_eq!(TypeTag::Int16.as_u8(), 3);
        assert_eq!(TypeTag::Float64.as_u8(), 10);
        assert_eq!(TypeTag::Int16Arr.as_u8(), 11);
        assert_eq!(TypeTag::Float64Arr.as_u8(), 18);

        for tag in TypeTag::ALL {
            assert_eq!(TypeTag::from_u8(tag.as_u8()), Some(tag));
        }
    }

    #[test]
    fn test_tag_out_of_range() {
        assert_eq!(TypeTag::from_u8(19), None);
        assert_eq!(TypeTag::from_u8(u8::MAX), None);
        assert_eq!(
            TypeTag::try_from(200u8).unwrap_err(),
            ParserError::UnsupportedType(200)
        );
    }

    #[test]
    fn test_tag_targets() {
        assert_eq!(
            TypeTag::Bits32.target(),
            Target::BitString(ScalarKind::Int32)
        );
        for kind in ScalarKind::ALL {
            assert_eq!(TypeTag::scalar(kind).target(), Target::Scalar(kind));
            assert_eq!(TypeTag::array(kind).target(), Target::Array(kind));
            assert!(TypeTag::array(kind).is_array());
            assert!(!TypeTag::scalar(kind).is_array());
        }
    }

    #[test]
    fn test_tag_parse_and_display() {
        assert_eq!(TypeTag::parse("u16"), Some(TypeTag::Uint16));
        assert_eq!(TypeTag::parse("FLOAT"), Some(TypeTag::Float32));
        assert_eq!(TypeTag::parse("u16[]"), Some(TypeTag::Uint16Arr));
        assert_eq!(TypeTag::parse("double_arr"), Some(TypeTag::Float64Arr));
        assert_eq!(TypeTag::parse("int32arr"), Some(TypeTag::Int32Arr));
        assert_eq!(TypeTag::parse("bit64"), Some(TypeTag::Bits64));
        assert_eq!(TypeTag::parse("int8"), None);
        assert_eq!(TypeTag::parse("bits8"), None);

        for tag in TypeTag::ALL {
            assert_eq!(TypeTag::parse(&tag.to_string()), Some(tag));
        }
    }

    #[test]
    fn test_tag_serde_matches_display() {
        for tag in TypeTag::ALL {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag));
        }
    }

    #[test]
    fn test_kind_widths_and_units() {
        assert_eq!(ScalarKind::Uint16.width(), 2);
        assert_eq!(ScalarKind::Float32.width(), 4);
        assert_eq!(ScalarKind::Int64.width(), 8);
        assert_eq!(ScalarKind::Int16.unit(), "2-byte/16-bit units");
        assert_eq!(ScalarKind::Float64.unit(), "8-byte/64-bit units");
        assert!(ScalarKind::Int32.is_signed());
        assert!(!ScalarKind::Uint32.is_signed());
        assert!(ScalarKind::Float32.is_float());
    }

    #[test]
    fn test_scalar_display_and_widen() {
        assert_eq!(Scalar::Int16(-5).to_string(), "-5");
        assert_eq!(Scalar::Float64(2.5).to_string(), "2.5");
        assert_eq!(Scalar::Uint32(7).as_f64(), 7.0);
        assert_eq!(Scalar::Float32(0.5).as_f64(), 0.5);
        assert_eq!(Scalar::Int64(-3).kind(), ScalarKind::Int64);
    }

    #[test]
    fn test_array_accessors() {
        let array = ScalarArray::Uint16(vec![10, 20, 30]);
        assert_eq!(array.kind(), ScalarKind::Uint16);
        assert_eq!(array.len(), 3);
        assert_eq!(array.get(1), Some(Scalar::Uint16(20)));
        assert_eq!(array.get(3), None);
        assert_eq!(
            array.iter().collect::<Vec<_>>(),
            vec![Scalar::Uint16(10), Scalar::Uint16(20), Scalar::Uint16(30)]
        );
        assert_eq!(array.clone().into_scalars().len(), 3);

        let empty = ScalarArray::Float64(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.kind(), ScalarKind::Float64);
    }

    #[test]
    fn test_decoded_value_carries_tag() {
        assert_eq!(
            DecodedValue::Scalar(Scalar::Float32(1.0)).tag(),
            TypeTag::Float32
        );
        assert_eq!(
            DecodedValue::Array(ScalarArray::Int64(vec![])).tag(),
            TypeTag::Int64Arr
        );
        assert_eq!(DecodedValue::Bits16("0".repeat(16)).tag(), TypeTag::Bits16);
    }

    #[test]
    fn test_decoded_value_serde() {
        let value = DecodedValue::Scalar(Scalar::Uint16(10));
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(
            json,
            r#"{"type":"scalar","data":{"kind":"uint16","value":10}}"#
        );
        let back: DecodedValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
