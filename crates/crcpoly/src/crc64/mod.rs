//! CRC-64 over any reflected polynomial.
//!
//! This module provides:
//! - [`Poly`] - tables for one polynomial, with `checksum`, `update` and `combine`
//! - [`Digest`] - a streaming, marshalable checksum over a shared [`Poly`]
//! - [`iso`], [`ecma`] - shared well-known polynomials
//!
//! With the `~init` / `~xorout` convention, [`ECMA`] yields CRC-64/XZ and
//! [`ISO`] yields CRC-64/GO-ISO.
//!
//! # Example
//!
//! ```
//! use crcpoly::crc64;
//!
//! let poly = crc64::ecma();
//! assert_eq!(poly.checksum(b"123456789"), 0x995D_C9BB_DF19_39FA);
//! ```

use alloc::{sync::Arc, vec::Vec};

use traits::{Checksum, ChecksumCombine, InvalidPolynomial, StateMarshal, UnmarshalError};

use crate::common::{
  cache::Shared,
  portable::{bytewise_64, slice8_64},
  tables::generate_crc64_tables_8,
};

/// ISO 3309 (HDLC), reflected.
pub const ISO: u64 = 0xD800_0000_0000_0000;

/// ECMA-182, reflected.
pub const ECMA: u64 = 0xC96C_5795_D787_0F42;

define_poly! {
  width: 64,
  word: u64,
  tables: generate_crc64_tables_8,
  bytewise: bytewise_64,
  slice8: slice8_64,
  magic: b"crc\x02",
  table_sum: iso,
  known: [
    /// The shared ISO polynomial.
    ISO => iso, ISO_SHARED, "ISO";
    /// The shared ECMA polynomial.
    ECMA => ecma, ECMA_SHARED, "ECMA";
  ],
}
