//! Portable CRC update kernels using lookup tables.
//!
//! All kernels work on the raw (pre-inverted) register. Callers own the
//! `~init` / `~xorout` convention.
//!
//! # Algorithm Overview
//!
//! Slice-by-8 processes 8 bytes per iteration using 8 precomputed lookup
//! tables. Each table holds the CRC contribution of one byte at a specific
//! distance from the end of the word, so a word costs 8 independent lookups
//! instead of 8 dependent ones. The bytewise kernel is the classic
//! one-table loop and wins for very short inputs.

// SAFETY: All array indexing in this module uses bounded indices:
// - as_chunks guarantees chunk sizes
// - Table indices use `& 0xFF` (0..255) or explicit byte extraction
#![allow(clippy::indexing_slicing)]

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32
// ─────────────────────────────────────────────────────────────────────────────

/// Byte-at-a-time CRC-32 update.
#[inline]
pub fn bytewise_32(mut crc: u32, data: &[u8], table: &[u32; 256]) -> u32 {
  for &byte in data {
    let index = ((crc ^ u32::from(byte)) & 0xFF) as usize;
    crc = table[index] ^ (crc >> 8);
  }
  crc
}

/// Update CRC-32 state using the slice-by-8 algorithm.
///
/// # Arguments
///
/// * `crc` - Current CRC state (pre-inverted)
/// * `data` - Input data
/// * `tables` - 8 lookup tables (256 entries each)
#[inline]
pub fn slice8_32(mut crc: u32, data: &[u8], tables: &[[u32; 256]; 8]) -> u32 {
  let (chunks, remainder) = data.as_chunks::<8>();

  for chunk in chunks {
    let a = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) ^ crc;
    let b = u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);

    crc = tables[7][(a & 0xFF) as usize]
      ^ tables[6][((a >> 8) & 0xFF) as usize]
      ^ tables[5][((a >> 16) & 0xFF) as usize]
      ^ tables[4][(a >> 24) as usize]
      ^ tables[3][(b & 0xFF) as usize]
      ^ tables[2][((b >> 8) & 0xFF) as usize]
      ^ tables[1][((b >> 16) & 0xFF) as usize]
      ^ tables[0][(b >> 24) as usize];
  }

  bytewise_32(crc, remainder, &tables[0])
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-64
// ─────────────────────────────────────────────────────────────────────────────

/// Byte-at-a-time CRC-64 update.
#[inline]
pub fn bytewise_64(mut crc: u64, data: &[u8], table: &[u64; 256]) -> u64 {
  for &byte in data {
    let index = ((crc ^ u64::from(byte)) & 0xFF) as usize;
    crc = table[index] ^ (crc >> 8);
  }
  crc
}

/// Update CRC-64 state using the slice-by-8 algorithm.
///
/// Processes 8 bytes per iteration (1× the CRC width in bytes).
#[inline]
pub fn slice8_64(mut crc: u64, data: &[u8], tables: &[[u64; 256]; 8]) -> u64 {
  let (chunks, remainder) = data.as_chunks::<8>();

  for chunk in chunks {
    let val = u64::from_le_bytes(*chunk) ^ crc;

    crc = tables[7][(val & 0xFF) as usize]
      ^ tables[6][((val >> 8) & 0xFF) as usize]
      ^ tables[5][((val >> 16) & 0xFF) as usize]
      ^ tables[4][((val >> 24) & 0xFF) as usize]
      ^ tables[3][((val >> 32) & 0xFF) as usize]
      ^ tables[2][((val >> 40) & 0xFF) as usize]
      ^ tables[1][((val >> 48) & 0xFF) as usize]
      ^ tables[0][(val >> 56) as usize];
  }

  bytewise_64(crc, remainder, &tables[0])
}
