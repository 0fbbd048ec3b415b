//! Binary data processing utilities
//!
//! Byte order handling, bit extraction and width-typed numeric conversions.
//! Nothing in here keeps state; every function is a pure function of its
//! input bytes and the byte order it is handed.

pub mod bit_ops;
pub mod byte_order;
pub mod conversions;

pub use bit_ops::*;
pub use byte_order::ByteOrder;
pub use conversions::*;
