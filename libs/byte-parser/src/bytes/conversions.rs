//! Numeric type conversions with byte order support
//!
//! Provides the width-typed building blocks the `Decoder` is made of:
//! - Fixed-size byte arrays → numeric types (infallible)
//! - Byte slices → one numeric value (exact width checked once, in `window`)
//! - Byte slices → arrays of numeric values (length checked before decoding)
//! - Signed integers → fixed-width binary digit strings
//!
//! Signed and floating-point values are bit-for-bit reinterpretations of the
//! unsigned pattern: no arithmetic conversion, no NaN canonicalization.

use tracing::debug;

use super::ByteOrder;
use crate::error::{ParserError, Result};
use crate::types::{Scalar, ScalarArray, ScalarKind};

/// A fixed-width numeric element that can be decoded from raw bytes
pub trait Unit: Copy + Sized {
    /// Raw byte window, always `[u8; Self::WIDTH]`
    type Bytes: Copy + for<'a> TryFrom<&'a [u8]>;

    /// Width in bytes
    const WIDTH: usize;

    /// Unit description reported by size mismatches
    const UNIT: &'static str;

    const KIND: ScalarKind;

    /// Decode one value from exactly `WIDTH` bytes
    fn from_bytes(bytes: Self::Bytes, order: ByteOrder) -> Self;

    fn into_scalar(self) -> Scalar;

    fn into_array(values: Vec<Self>) -> ScalarArray;
}

pub(crate) const UNIT_16: &str = "2-byte/16-bit units";
pub(crate) const UNIT_32: &str = "4-byte/32-bit units";
pub(crate) const UNIT_64: &str = "8-byte/64-bit units";

macro_rules! impl_unit {
    ($($t:ty => $width:literal, $unit:expr, $kind:ident;)*) => {$(
        impl Unit for $t {
            type Bytes = [u8; $width];
            const WIDTH: usize = $width;
            const UNIT: &'static str = $unit;
            const KIND: ScalarKind = ScalarKind::$kind;

            #[inline]
            fn from_bytes(bytes: [u8; $width], order: ByteOrder) -> Self {
                match order {
                    ByteOrder::BigEndian => <$t>::from_be_bytes(bytes),
                    ByteOrder::LittleEndian => <$t>::from_le_bytes(bytes),
                }
            }

            #[inline]
            fn into_scalar(self) -> Scalar {
                Scalar::$kind(self)
            }

            #[inline]
            fn into_array(values: Vec<Self>) -> ScalarArray {
                ScalarArray::$kind(values)
            }
        }
    )*}
}

impl_unit! {
    i16 => 2, UNIT_16, Int16;
    u16 => 2, UNIT_16, Uint16;
    i32 => 4, UNIT_32, Int32;
    u32 => 4, UNIT_32, Uint32;
    i64 => 8, UNIT_64, Int64;
    u64 => 8, UNIT_64, Uint64;
    f32 => 4, UNIT_32, Float32;
    f64 => 8, UNIT_64, Float64;
}

// ============================================================================
// Slice Boundary
// ============================================================================

/// Borrow exactly one `T`-sized window out of `bytes`
///
/// This is the only place a slice is checked against a scalar width; every
/// slice-based scalar decode and every array chunk goes through it.
pub fn window<T: Unit>(bytes: &[u8]) -> Result<T::Bytes> {
    <T::Bytes as TryFrom<&[u8]>>::try_from(bytes).map_err(|_| {
        debug!(
            kind = %T::KIND,
            expected = T::WIDTH,
            actual = bytes.len(),
            "Rejected scalar window"
        );
        ParserError::width_mismatch(T::WIDTH, bytes.len())
    })
}

/// Decode a single value from a slice of exactly `T::WIDTH` bytes
pub fn decode_unit<T: Unit>(bytes: &[u8], order: ByteOrder) -> Result<T> {
    window::<T>(bytes).map(|raw| T::from_bytes(raw, order))
}

/// Decode a slice into consecutive `T` values
///
/// Fails before producing any element unless `bytes.len()` is a whole
/// multiple of `T::WIDTH`. Element `i` comes from bytes `[i*W, (i+1)*W)`.
pub fn decode_units<T: Unit>(bytes: &[u8], order: ByteOrder) -> Result<Vec<T>> {
    if bytes.len() % T::WIDTH != 0 {
        debug!(
            kind = %T::KIND,
            len = bytes.len(),
            unit = T::UNIT,
            "Rejected array input"
        );
        return Err(ParserError::size_mismatch(T::UNIT, bytes.len()));
    }

    let mut values = Vec::with_capacity(bytes.len() / T::WIDTH);
    for chunk in bytes.chunks_exact(T::WIDTH) {
        values.push(T::from_bytes(window::<T>(chunk)?, order));
    }
    Ok(values)
}

// ============================================================================
// Binary String Formatting
// ============================================================================

/// Render as 16 binary digits (two's complement for negatives)
pub fn format_bits_i16(value: i16) -> String {
    format!("{:016b}", value)
}

/// Render as 32 binary digits (two's complement for negatives)
pub fn format_bits_i32(value: i32) -> String {
    format!("{:032b}", value)
}

/// Render as 64 binary digits (two's complement for negatives)
pub fn format_bits_i64(value: i64) -> String {
    format!("{:064b}", value)
}
