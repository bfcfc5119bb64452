//! CRC-32 and CRC-64 over arbitrary reflected polynomials, with O(log n)
//! checksum combination.
//!
//! Given the checksums of two adjacent blocks and the length of the second,
//! [`combine`](crc32::Poly::combine) produces the checksum of their
//! concatenation without reading either block again. Blocks can therefore be
//! checksummed in parallel (or incrementally, out of order) and still yield the
//! value a single sequential pass would produce.
//!
//! # Well-Known Polynomials
//!
//! | Accessor | Reflected | Check (`"123456789"`) | Use Cases |
//! |----------|-----------|-----------------------|-----------|
//! | [`crc32::ieee`] | 0xEDB88320 | 0xCBF43926 | Ethernet, gzip, zip, PNG |
//! | [`crc32::castagnoli`] | 0x82F63B78 | 0xE3069283 | iSCSI, SCTP, ext4, Btrfs |
//! | [`crc32::koopman`] | 0xEB31D82E | 0x2D3DD0AE | |
//! | [`crc64::iso`] | 0xD800000000000000 | 0xB90956C775A41001 | HDLC |
//! | [`crc64::ecma`] | 0xC96C5795D7870F42 | 0x995DC9BBDF1939FA | XZ Utils, 7-Zip |
//!
//! These are process-wide singletons built on first use. Any other non-zero
//! polynomial works through [`crc32::make_poly`] / [`crc64::make_poly`].
//!
//! # Example
//!
//! ```rust
//! use crcpoly::{Checksum, crc32};
//!
//! let poly = crc32::ieee();
//!
//! // One-shot computation
//! let data = b"123456789";
//! let crc = poly.checksum(data);
//! assert_eq!(crc, 0xCBF4_3926);
//!
//! // Streaming computation
//! let mut digest = crc32::Digest::new(poly.clone());
//! digest.update(b"1234");
//! digest.update(b"56789");
//! assert_eq!(digest.finalize(), crc);
//!
//! // Combine independently computed checksums
//! let (a, b) = data.split_at(4);
//! let combined = poly.combine(poly.checksum(a), poly.checksum(b), b.len() as i64);
//! assert_eq!(combined, crc);
//! ```
//!
//! # Features
//!
//! - `std` (default): `OnceLock`-backed caches, environment overrides, `io::Write`
//! - `diag`: [`diag`] selection diagnostics
//! - `tracing`: structured events at table construction and cache initialization
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc`). Disable the `std`
//! feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! crcpoly = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

pub mod config;
pub mod crc32;
pub mod crc64;
#[cfg(feature = "diag")]
pub mod diag;
pub mod parallel;

#[doc(hidden)]
pub mod __internal {
  pub use crate::common::gf2::{Word, mult_mod_p, power_table, x2n_mod_p};
}

pub use config::{UpdateConfig, UpdateForce, UpdateTunables};
pub use traits::{Checksum, ChecksumCombine, InvalidPolynomial, StateMarshal, UnmarshalError};
#[cfg(feature = "std")]
pub use traits::{ChecksumReader, ChecksumWriter};

/// CRC-32 polynomial tables.
pub type Poly32 = crc32::Poly;
/// CRC-64 polynomial tables.
pub type Poly64 = crc64::Poly;
/// Streaming CRC-32.
pub type Digest32 = crc32::Digest;
/// Streaming CRC-64.
pub type Digest64 = crc64::Digest;
