//! CRC-32 over any reflected polynomial.
//!
//! This module provides:
//! - [`Poly`] - tables for one polynomial, with `checksum`, `update` and `combine`
//! - [`Digest`] - a streaming, marshalable checksum over a shared [`Poly`]
//! - [`ieee`], [`castagnoli`], [`koopman`] - shared well-known polynomials
//!
//! # Example
//!
//! ```
//! use crcpoly::crc32;
//!
//! let poly = crc32::ieee();
//! assert_eq!(poly.checksum(b"123456789"), 0xCBF4_3926);
//!
//! let (a, b) = b"123456789".split_at(4);
//! let combined = poly.combine(poly.checksum(a), poly.checksum(b), b.len() as i64);
//! assert_eq!(combined, 0xCBF4_3926);
//! ```

use alloc::{sync::Arc, vec::Vec};

use traits::{Checksum, ChecksumCombine, InvalidPolynomial, StateMarshal, UnmarshalError};

use crate::common::{
  cache::Shared,
  portable::{bytewise_32, slice8_32},
  tables::generate_crc32_tables_8,
};

/// IEEE 802.3 (Ethernet, gzip, zip, PNG), reflected.
pub const IEEE: u32 = 0xEDB8_8320;

/// Castagnoli (iSCSI, SCTP, ext4, Btrfs), reflected.
pub const CASTAGNOLI: u32 = 0x82F6_3B78;

/// Koopman, reflected.
pub const KOOPMAN: u32 = 0xEB31_D82E;

define_poly! {
  width: 32,
  word: u32,
  tables: generate_crc32_tables_8,
  bytewise: bytewise_32,
  slice8: slice8_32,
  magic: b"crc\x01",
  table_sum: ieee,
  known: [
    /// The shared IEEE polynomial.
    IEEE => ieee, IEEE_SHARED, "IEEE";
    /// The shared Castagnoli polynomial.
    CASTAGNOLI => castagnoli, CASTAGNOLI_SHARED, "Castagnoli";
    /// The shared Koopman polynomial.
    KOOPMAN => koopman, KOOPMAN_SHARED, "Koopman";
  ],
}
