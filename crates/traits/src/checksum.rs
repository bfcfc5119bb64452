//! Checksum traits.
//!
//! - **Polynomial level**: one-shot checksum, resumable update and combine,
//!   all as pure functions of an immutable polynomial
//! - **Streaming**: incremental, resettable state for byte streams
//! - **Marshaling**: the running state of a stream can be saved and restored

use core::fmt::Debug;

use crate::error::UnmarshalError;

/// Streaming checksum state.
///
/// A value of this trait accumulates bytes and reports the checksum of
/// everything written since construction or the last [`reset`](Self::reset).
///
/// # Usage
///
/// ```rust,ignore
/// use crcpoly::{Checksum, crc32};
///
/// let mut digest = crc32::Digest::new(crc32::ieee());
/// digest.update(b"hello ");
/// digest.update(b"world");
/// let crc = digest.finalize();
/// ```
///
/// # Implementor Requirements
///
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the state to that of a freshly constructed value
/// - the result must not depend on how the input was split across `update` calls
pub trait Checksum: Clone {
  /// Output size in bytes.
  ///
  /// - CRC-32: 4
  /// - CRC-64: 8
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Update the state with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the state with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the state with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of all data written so far.
  ///
  /// This method does not consume the state; further updates continue from
  /// the current value.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset to the checksum of empty data.
  fn reset(&mut self);

  /// Wrap a reader to compute the checksum transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use std::fs::File;
  ///
  /// use crcpoly::{Checksum, crc32};
  ///
  /// let file = File::open("data.bin")?;
  /// let mut reader = crc32::Digest::new(crc32::castagnoli()).reader(file);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("CRC: {:08x}", reader.crc());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(self, inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner, self)
  }

  /// Wrap a writer to compute the checksum transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(self, inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner, self)
  }
}

/// Checksum operations bound to a single generator polynomial.
///
/// The combine operation computes `crc(A || B)` from `crc(A)`, `crc(B)`, and
/// `len(B)` without touching the bytes of either block. This enables parallel
/// checksum computation:
///
/// 1. Split data into chunks
/// 2. Compute checksums in parallel
/// 3. Combine results in order
///
/// # Mathematical Background
///
/// ```text
/// crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
/// ```
///
/// # Usage
///
/// ```rust,ignore
/// use crcpoly::{ChecksumCombine, crc32};
///
/// let poly = crc32::castagnoli();
/// let (a, b) = b"hello world".split_at(6);
///
/// let combined = poly.combine(poly.checksum(a), poly.checksum(b), b.len() as i64);
/// assert_eq!(combined, poly.checksum(b"hello world"));
/// ```
pub trait ChecksumCombine {
  /// The checksum (and polynomial) word type.
  type Output: Copy + Eq + Debug + Default;

  /// The generator polynomial in LSB-first (reversed) form.
  #[must_use]
  fn polynomial(&self) -> Self::Output;

  /// Fold `data` into a running checksum `sum`.
  ///
  /// `update(checksum(A), B) == checksum(A || B)`.
  #[must_use]
  fn update(&self, sum: Self::Output, data: &[u8]) -> Self::Output;

  /// Combine the checksum of a block of `next_len` bytes (`next`) onto `prev`.
  ///
  /// `next` must have been computed from a fresh zero state. A zero `prev` or a
  /// non-positive `next_len` short-circuits.
  #[must_use]
  fn combine(&self, prev: Self::Output, next: Self::Output, next_len: i64) -> Self::Output;

  /// Compute the checksum of `data` from the empty state.
  #[inline]
  #[must_use]
  fn checksum(&self, data: &[u8]) -> Self::Output {
    self.update(Self::Output::default(), data)
  }

  /// Compute the checksum of multiple buffers as if they were concatenated.
  #[inline]
  #[must_use]
  fn checksum_vectored(&self, bufs: &[&[u8]]) -> Self::Output {
    bufs
      .iter()
      .fold(Self::Output::default(), |sum, buf| self.update(sum, buf))
  }
}

/// Save and restore the running state of a streaming checksum.
///
/// The marshaled form is self-describing: it carries an identifier for the
/// checksum width and a fingerprint of the polynomial's table, so a state can
/// only be restored into a value using the same polynomial.
pub trait StateMarshal {
  /// Fixed-size marshaled state.
  type State: AsRef<[u8]>;

  /// Serialize the current running state.
  #[must_use]
  fn marshal_binary(&self) -> Self::State;

  /// Restore a state produced by [`marshal_binary`](Self::marshal_binary).
  ///
  /// On error, `self` is left unchanged.
  ///
  /// # Errors
  ///
  /// Returns an [`UnmarshalError`] describing why `state` was rejected.
  fn unmarshal_binary(&mut self, state: &[u8]) -> Result<(), UnmarshalError>;
}
