//! Byte-order configured decoder
//!
//! `Decoder` is the single entry point: statically typed scalar and array
//! decoders, bit extraction, and `decode`, which picks the decode routine
//! from a runtime `TypeTag`.
//!
//! # Width checking
//!
//! The `to_*` scalar decoders take fixed-size arrays, so the width is part
//! of their signature and they cannot fail. Everything that takes a slice
//! (`read_slice`, `decode_scalar`, the array decoders and `decode`) checks
//! the length first and returns `WidthMismatch` or `SizeMismatch` without
//! decoding anything.

use tracing::{debug, trace};

use crate::bytes::{self as codec, ByteOrder, Unit};
use crate::config::DecoderConfig;
use crate::error::{ParserError, Result};
use crate::types::{DecodedValue, Scalar, ScalarArray, ScalarKind, Target, TypeTag};

/// Binary buffer decoder bound to one byte order
///
/// Holds no state besides its `ByteOrder`, so it is `Copy` and can be shared
/// between threads freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decoder {
    order: ByteOrder,
}

macro_rules! typed_decoders {
    ($($t:ty, $width:literal => $scalar:ident, $array:ident;)*) => {$(
        #[doc = concat!("Decode one `", stringify!($t), "` from ", stringify!($width), " bytes")]
        #[inline]
        pub fn $scalar(&self, bytes: [u8; $width]) -> $t {
            <$t as Unit>::from_bytes(bytes, self.order)
        }

        #[doc = concat!("Decode consecutive `", stringify!($t), "` values")]
        ///
        /// Fails with `SizeMismatch` unless the input is a whole number of units.
        pub fn $array(&self, bytes: &[u8]) -> Result<Vec<$t>> {
            codec::decode_units::<$t>(bytes, self.order)
        }
    )*}
}

impl Decoder {
    pub fn new(order: ByteOrder) -> Self {
        debug!(order = %order, "Decoder created");
        Self { order }
    }

    /// Build from a byte order name ("big", "little", ...)
    ///
    /// Unrecognized names are rejected instead of falling back to either order.
    pub fn from_order_str(order: &str) -> Result<Self> {
        order.parse().map(Self::new)
    }

    pub fn from_config(config: &DecoderConfig) -> Self {
        Self::new(config.byte_order)
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    // ========================================================================
    // Scalar and array decoders
    // ========================================================================

    typed_decoders! {
        i16, 2 => to_i16, to_i16_arr;
        u16, 2 => to_u16, to_u16_arr;
        i32, 4 => to_i32, to_i32_arr;
        u32, 4 => to_u32, to_u32_arr;
        i64, 8 => to_i64, to_i64_arr;
        u64, 8 => to_u64, to_u64_arr;
        f32, 4 => to_f32, to_f32_arr;
        f64, 8 => to_f64, to_f64_arr;
    }

    /// Generic form of the `to_*` scalar decoders
    #[inline]
    pub fn read<T: Unit>(&self, bytes: T::Bytes) -> T {
        T::from_bytes(bytes, self.order)
    }

    /// Decode one value from a slice that must be exactly `T::WIDTH` long
    pub fn read_slice<T: Unit>(&self, bytes: &[u8]) -> Result<T> {
        codec::decode_unit::<T>(bytes, self.order)
    }

    /// Generic form of the `to_*_arr` array decoders
    pub fn read_array<T: Unit>(&self, bytes: &[u8]) -> Result<Vec<T>> {
        codec::decode_units::<T>(bytes, self.order)
    }

    /// Decode one value of a runtime-selected kind
    pub fn decode_scalar(&self, kind: ScalarKind, bytes: &[u8]) -> Result<Scalar> {
        match kind {
            ScalarKind::Int16 => self.scalar_of::<i16>(bytes),
            ScalarKind::Uint16 => self.scalar_of::<u16>(bytes),
            ScalarKind::Int32 => self.scalar_of::<i32>(bytes),
            ScalarKind::Uint32 => self.scalar_of::<u32>(bytes),
            ScalarKind::Int64 => self.scalar_of::<i64>(bytes),
            ScalarKind::Uint64 => self.scalar_of::<u64>(bytes),
            ScalarKind::Float32 => self.scalar_of::<f32>(bytes),
            ScalarKind::Float64 => self.scalar_of::<f64>(bytes),
        }
    }

    /// Decode an array of a runtime-selected kind
    pub fn decode_array(&self, kind: ScalarKind, bytes: &[u8]) -> Result<ScalarArray> {
        match kind {
            ScalarKind::Int16 => self.array_of::<i16>(bytes),
            ScalarKind::Uint16 => self.array_of::<u16>(bytes),
            ScalarKind::Int32 => self.array_of::<i32>(bytes),
            ScalarKind::Uint32 => self.array_of::<u32>(bytes),
            ScalarKind::Int64 => self.array_of::<i64>(bytes),
            ScalarKind::Uint64 => self.array_of::<u64>(bytes),
            ScalarKind::Float32 => self.array_of::<f32>(bytes),
            ScalarKind::Float64 => self.array_of::<f64>(bytes),
        }
    }

    fn scalar_of<T: Unit>(&self, bytes: &[u8]) -> Result<Scalar> {
        self.read_slice::<T>(bytes).map(Unit::into_scalar)
    }

    fn array_of<T: Unit>(&self, bytes: &[u8]) -> Result<ScalarArray> {
        self.read_array::<T>(bytes).map(T::into_array)
    }

    // ========================================================================
    // Bit extraction
    // ========================================================================

    /// 8 bits of `byte`, least significant first
    pub fn to_bit(&self, byte: u8) -> [u8; 8] {
        codec::to_bit(byte)
    }

    /// 8 bits per input byte, byte blocks in input order
    pub fn to_bit_arr(&self, bytes: &[u8]) -> Vec<u8> {
        codec::to_bit_arr(bytes)
    }

    // ========================================================================
    // Dynamic dispatch
    // ========================================================================

    /// Decode according to a runtime `TypeTag`
    ///
    /// - `Bits16/32/64`: decode the signed integer of that width and render
    ///   it as zero-padded two's-complement binary digits
    /// - scalar tags: exactly one unit of input, else `WidthMismatch`
    /// - array tags: a whole number of units, else `SizeMismatch`
    pub fn decode(&self, tag: TypeTag, bytes: &[u8]) -> Result<DecodedValue> {
        trace!(%tag, len = bytes.len(), order = %self.order, "Dispatching decode");

        match tag.target() {
            Target::BitString(kind) => self.decode_bit_string(tag, kind, bytes),
            Target::Scalar(kind) => self.decode_scalar(kind, bytes).map(DecodedValue::Scalar),
            Target::Array(kind) => self.decode_array(kind, bytes).map(DecodedValue::Array),
        }
    }

    /// Same as `decode`, with the tag given as its wire value
    ///
    /// Values outside the tag set fail with `UnsupportedType`.
    pub fn decode_raw(&self, tag: u8, bytes: &[u8]) -> Result<DecodedValue> {
        let tag = TypeTag::try_from(tag)?;
        self.decode(tag, bytes)
    }

    /// Decode into a flat sequence of scalars
    ///
    /// Scalar tags give a one-element sequence and array tags one element per
    /// unit. Bit string tags have no scalar form and are `UnsupportedType`.
    pub fn decode_flat(&self, tag: TypeTag, bytes: &[u8]) -> Result<Vec<Scalar>> {
        match tag.target() {
            Target::Scalar(kind) => Ok(vec![self.decode_scalar(kind, bytes)?]),
            Target::Array(kind) => Ok(self.decode_array(kind, bytes)?.into_scalars()),
            Target::BitString(_) => Err(ParserError::UnsupportedType(tag.as_u8())),
        }
    }

    fn decode_bit_string(
        &self,
        tag: TypeTag,
        kind: ScalarKind,
        bytes: &[u8],
    ) -> Result<DecodedValue> {
        let value = match kind {
            ScalarKind::Int16 => {
                DecodedValue::Bits16(codec::format_bits_i16(self.read_slice(bytes)?))
            },
            ScalarKind::Int32 => {
                DecodedValue::Bits32(codec::format_bits_i32(self.read_slice(bytes)?))
            },
            ScalarKind::Int64 => {
                DecodedValue::Bits64(codec::format_bits_i64(self.read_slice(bytes)?))
            },
            _ => return Err(ParserError::UnsupportedType(tag.as_u8())),
        };
        Ok(value)
    }
}
