//! Optional diagnostics for polynomial tables and kernel selection.
//!
//! This module is behind `cfg(feature = "diag")` and is intended for
//! explainable/debuggable selection without affecting normal builds.

use alloc::sync::Arc;

use crate::config::{self, UpdateForce};

/// High-level reason for a selection outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionReason {
  /// A forced mode was active (thresholds bypassed).
  Forced,
  /// Below the bytewise → slice-by-8 threshold.
  BelowSlice8Threshold,
  /// Normal auto selection.
  Auto,
}

/// What a polynomial is and how an input of `len` bytes would be processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolyDiag {
  pub width: u32,
  pub polynomial: u64,
  pub name: Option<&'static str>,
  pub shared: bool,
  pub len: usize,
  pub requested_force: UpdateForce,
  pub bytewise_to_slice8: usize,
  pub selected_kernel: &'static str,
  pub reason: SelectionReason,
}

impl PolyDiag {
  pub(crate) fn new(width: u32, polynomial: u64, name: Option<&'static str>, shared: bool, len: usize) -> Self {
    let cfg = config::get();
    let reason = match cfg.requested_force {
      UpdateForce::Bytewise | UpdateForce::Slice8 => SelectionReason::Forced,
      UpdateForce::Auto if len < cfg.tunables.bytewise_to_slice8 => SelectionReason::BelowSlice8Threshold,
      UpdateForce::Auto => SelectionReason::Auto,
    };
    Self {
      width,
      polynomial,
      name,
      shared,
      len,
      requested_force: cfg.requested_force,
      bytewise_to_slice8: cfg.tunables.bytewise_to_slice8,
      selected_kernel: cfg.kernel_for_len(len).name(),
      reason,
    }
  }
}

/// Diagnose a CRC-32 polynomial for an input of `len` bytes.
#[inline]
#[must_use]
pub fn crc32(poly: &Arc<crate::crc32::Poly>, len: usize) -> PolyDiag {
  crate::crc32::diagnose(poly, len)
}

/// Diagnose a CRC-64 polynomial for an input of `len` bytes.
#[inline]
#[must_use]
pub fn crc64(poly: &Arc<crate::crc64::Poly>, len: usize) -> PolyDiag {
  crate::crc64::diagnose(poly, len)
}
