//! Const-fn CRC lookup table generation.
//!
//! Both widths use slice-by-8 tables: `tables[0]` is the classic 256-entry
//! byte table and `tables[k]` advances an entry of `tables[k-1]` by one more
//! zero byte.
//!
//! | Width | Tables | Size |
//! |-------|--------|------|
//! | 32-bit | 8×256×u32 | 8 KiB |
//! | 64-bit | 8×256×u64 | 16 KiB |

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..8).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32 Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a single CRC-32 lookup table entry.
///
/// Uses bit-by-bit computation with the reflected polynomial.
#[must_use]
pub const fn crc32_table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = index as u32;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate 8 CRC-32 lookup tables for slice-by-8 computation.
///
/// # Arguments
///
/// * `poly` - The reflected polynomial
#[must_use]
pub const fn generate_crc32_tables_8(poly: u32) -> [[u32; 256]; 8] {
  let mut tables = [[0u32; 256]; 8];

  let mut i = 0u32;
  while i < 256 {
    tables[0][i as usize] = crc32_table_entry(poly, i as u8);
    i += 1;
  }

  let mut k = 1usize;
  while k < 8 {
    i = 0;
    while i < 256 {
      let prev = tables[k - 1][i as usize];
      tables[k][i as usize] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
      i += 1;
    }
    k += 1;
  }

  tables
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-64 Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a single CRC-64 lookup table entry.
#[must_use]
pub const fn crc64_table_entry(poly: u64, index: u8) -> u64 {
  let mut crc = index as u64;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate 8 CRC-64 lookup tables for slice-by-8 computation.
#[must_use]
pub const fn generate_crc64_tables_8(poly: u64) -> [[u64; 256]; 8] {
  let mut tables = [[0u64; 256]; 8];

  let mut i = 0u64;
  while i < 256 {
    tables[0][i as usize] = crc64_table_entry(poly, i as u8);
    i += 1;
  }

  let mut k = 1usize;
  while k < 8 {
    i = 0;
    while i < 256 {
      let prev = tables[k - 1][i as usize];
      tables[k][i as usize] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
      i += 1;
    }
    k += 1;
  }

  tables
}
