//! Core checksum traits for crcpoly.
//!
//! This crate provides the foundational traits that the CRC polynomial types
//! and their streaming digests conform to. It is `no_std` compatible and has
//! zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Implemented by |
//! |-------|---------|----------------|
//! | [`Checksum`] | Streaming, resettable checksum state | `crc32::Digest`, `crc64::Digest` |
//! | [`ChecksumCombine`] | Polynomial-level checksum, update and combine | `crc32::Poly`, `crc64::Poly` |
//! | [`StateMarshal`] | Save/restore the running state of a streaming checksum | `crc32::Digest`, `crc64::Digest` |
//!
//! # Error Types
//!
//! - [`InvalidPolynomial`] - A generator polynomial that cannot define a CRC
//! - [`UnmarshalError`] - A marshaled state that cannot be restored
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;
pub mod io;

pub use checksum::{Checksum, ChecksumCombine, StateMarshal};
pub use error::{InvalidPolynomial, UnmarshalError};
#[cfg(feature = "std")]
pub use io::{ChecksumReader, ChecksumWriter};
