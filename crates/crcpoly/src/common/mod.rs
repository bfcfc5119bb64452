//! Common utilities for CRC computation.
//!
//! This module provides:
//! - GF(2) polynomial arithmetic for `combine()`
//! - Const-fn lookup table generation and portable update kernels
//! - Exactly-once storage for shared polynomial tables

pub mod cache;
pub mod gf2;
pub mod portable;
pub mod tables;

#[cfg(test)]
mod proptests;
#[cfg(test)]
pub(crate) mod reference;
