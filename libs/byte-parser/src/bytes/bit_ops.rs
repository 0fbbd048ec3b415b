//! Bit-level extraction
//!
//! Expands bytes into one `u8` per bit (0 or 1). Ordering is LSB-first
//! within each byte; bytes keep their input order.

/// Expand one byte into its 8 bits, least significant bit first
///
/// `to_bit(0b0000_0101)` → `[1, 0, 1, 0, 0, 0, 0, 0]`
#[inline]
pub fn to_bit(byte: u8) -> [u8; 8] {
    let mut bits = [0u8; 8];
    let mut datum = byte;
    for bit in bits.iter_mut() {
        *bit = datum & 1;
        datum >>= 1;
    }
    bits
}

/// Expand a byte slice into `8 * bytes.len()` bits
///
/// Bits of byte `i` occupy output positions `[8i, 8i + 8)`.
pub fn to_bit_arr(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        bits.extend_from_slice(&to_bit(byte));
    }
    bits
}

/// Extract single bit from u8 value
#[inline]
pub fn extract_bit_u8(value: u8, bit_index: u8) -> bool {
    debug_assert!(bit_index < 8, "Bit index out of range: {}", bit_index);
    (value & (1 << bit_index)) != 0
}
