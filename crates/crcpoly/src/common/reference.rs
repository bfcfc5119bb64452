//! Bitwise reference implementations.
//!
//! These process one bit at a time and mirror the mathematical definition of a
//! reflected CRC directly. Every table-driven kernel must produce identical
//! results. They are intentionally slow and only used as test oracles.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
#![allow(clippy::indexing_slicing)]

/// Bitwise CRC-32 computation (reflected, LSB-first).
///
/// Returns the raw register; the caller applies any final XOR.
#[must_use]
pub const fn crc32_bitwise(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Bitwise CRC-64 computation (reflected, LSB-first).
#[must_use]
pub const fn crc64_bitwise(poly: u64, init: u64, data: &[u8]) -> u64 {
  let mut crc = init;
  let mut i = 0;
  while i < data.len() {
    crc ^= data[i] as u64;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;

  const CHECK: &[u8] = b"123456789";

  #[test]
  fn check_values() {
    assert_eq!(!crc32_bitwise(0xEDB8_8320, !0, CHECK), 0xCBF4_3926);
    assert_eq!(!crc32_bitwise(0x82F6_3B78, !0, CHECK), 0xE306_9283);
    assert_eq!(!crc64_bitwise(0xC96C_5795_D787_0F42, !0, CHECK), 0x995D_C9BB_DF19_39FA);
    assert_eq!(!crc64_bitwise(0xD800_0000_0000_0000, !0, CHECK), 0xB909_56C7_75A4_1001);
  }

  // Compile-time evaluation.
  const _: () = assert!(!crc32_bitwise(0xEDB8_8320, !0, CHECK) == 0xCBF4_3926);
}
