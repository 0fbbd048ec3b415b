//! Byte Parser
//!
//! Decodes in-memory byte buffers into typed numeric values under a byte
//! order chosen once, when the `Decoder` is built.
//!
//! # Architecture
//!
//! This library provides:
//! - **Decoder**: scalar and array decoders for i16/u16/i32/u32/i64/u64/f32/f64,
//!   bit extraction, and tag-driven dynamic dispatch
//! - **Bytes Utilities**: byte order, bit operations, width-typed conversions
//! - **Types**: `TypeTag`, `ScalarKind` and the tagged decode results
//! - **Config / Logging**: figment-based configuration, tracing bootstrap
//!
//! # Example
//!
//! ```
//! use byte_parser::{ByteOrder, DecodedValue, Decoder, Scalar, TypeTag};
//!
//! let decoder = Decoder::new(ByteOrder::BigEndian);
//! assert_eq!(decoder.to_u16([0x00, 0x0A]), 10);
//!
//! let value = decoder.decode(TypeTag::Float32, &[0x3F, 0x80, 0x00, 0x00])?;
//! assert_eq!(value, DecodedValue::Scalar(Scalar::Float32(1.0)));
//! # Ok::<(), byte_parser::ParserError>(())
//! ```

pub mod bytes;
pub mod config;
pub mod decoder;
pub mod error;
pub mod logging;
pub mod types;

// Re-export core types
pub use bytes::{ByteOrder, Unit};
pub use config::DecoderConfig;
pub use decoder::Decoder;
pub use error::{ParserError, Result};
pub use types::{DecodedValue, Scalar, ScalarArray, ScalarKind, Target, TypeTag};
