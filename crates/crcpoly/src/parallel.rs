//! Chunked checksum computation utilities.
//!
//! The combine operation computes `crc(A || B)` from `crc(A)`, `crc(B)`, and
//! `len(B)` in O(log n) time, so chunks can be checksummed independently and
//! folded in order afterwards.
//!
//! This module does NOT add any dependencies. Users bring their own
//! parallelism (rayon, std::thread, tokio, etc.) and use these helpers to
//! combine results.
//!
//! # Example: Manual Parallelism
//!
//! ```
//! use crcpoly::{crc32, parallel::checksum_chunks};
//!
//! let poly = crc32::castagnoli();
//! let data = b"The quick brown fox jumps over the lazy dog";
//! let chunks: Vec<&[u8]> = data.chunks(16).collect();
//!
//! assert_eq!(checksum_chunks(&*poly, &chunks), poly.checksum(data));
//! ```
//!
//! # Example: With Rayon (user brings dependency)
//!
//! ```ignore
//! use rayon::prelude::*;
//! use crcpoly::{crc64, parallel::combine_checksums};
//!
//! let poly = crc64::ecma();
//! let checksums: Vec<(u64, i64)> = large_data
//!     .par_chunks(1024 * 1024)
//!     .map(|chunk| (poly.checksum(chunk), chunk.len() as i64))
//!     .collect();
//!
//! let crc = combine_checksums(&*poly, &checksums);
//! ```

use traits::ChecksumCombine;

#[inline]
fn len_i64(len: usize) -> i64 {
  i64::try_from(len).unwrap_or(i64::MAX)
}

/// Compute the checksum of the concatenation of `chunks`.
///
/// Each chunk is checksummed from the empty state and folded onto the running
/// result with [`ChecksumCombine::combine`].
///
/// # Empty Input
///
/// Returns the checksum of empty data.
///
/// ```
/// use crcpoly::{crc32, parallel::checksum_chunks};
///
/// let empty: &[&[u8]] = &[];
/// assert_eq!(checksum_chunks(&*crc32::ieee(), empty), 0);
/// ```
#[inline]
pub fn checksum_chunks<P: ChecksumCombine + ?Sized>(poly: &P, chunks: &[&[u8]]) -> P::Output {
  let Some((first, rest)) = chunks.split_first() else {
    return poly.checksum(&[]);
  };

  let mut result = poly.checksum(first);
  for chunk in rest {
    result = poly.combine(result, poly.checksum(chunk), len_i64(chunk.len()));
  }

  result
}

/// Combine pre-computed `(checksum, length)` pairs in order.
///
/// # Example
///
/// ```
/// use crcpoly::{crc64, parallel::combine_checksums};
///
/// let poly = crc64::iso();
/// let (a, b) = b"hello world".split_at(6);
/// let checksums = [(poly.checksum(a), a.len() as i64), (poly.checksum(b), b.len() as i64)];
///
/// assert_eq!(combine_checksums(&*poly, &checksums), poly.checksum(b"hello world"));
/// ```
///
/// # Panics
///
/// Panics if `checksums` is empty. Use [`combine_checksums_or`] for fallible version.
#[inline]
#[allow(clippy::expect_used)] // Intentional panic documented above
pub fn combine_checksums<P: ChecksumCombine + ?Sized>(poly: &P, checksums: &[(P::Output, i64)]) -> P::Output {
  combine_checksums_or(poly, checksums).expect("checksums slice must not be empty")
}

/// Combine pre-computed checksums, returning `None` if empty.
///
/// The length of the first pair is never needed.
///
/// ```
/// use crcpoly::{crc32, parallel::combine_checksums_or};
///
/// let poly = crc32::ieee();
/// assert_eq!(combine_checksums_or(&*poly, &[]), None);
/// assert_eq!(combine_checksums_or(&*poly, &[(0x1234_5678, 100)]), Some(0x1234_5678));
/// ```
#[inline]
pub fn combine_checksums_or<P: ChecksumCombine + ?Sized>(poly: &P, checksums: &[(P::Output, i64)]) -> Option<P::Output> {
  let ((first, _), rest) = checksums.split_first()?;
  Some(
    rest
      .iter()
      .fold(*first, |acc, &(crc, len)| poly.combine(acc, crc, len)),
  )
}

/// Iterator adapter for computing a checksum over chunked data.
///
/// This struct is created by [`checksum_iter`]. See its documentation for more.
#[derive(Debug)]
pub struct ChecksumIter<'a, I, P: ?Sized> {
  inner: I,
  poly: &'a P,
}

impl<I, P> ChecksumIter<'_, I, P>
where
  I: Iterator,
  I::Item: AsRef<[u8]>,
  P: ChecksumCombine + ?Sized,
{
  /// Consume the iterator and compute the combined checksum.
  ///
  /// ```
  /// use crcpoly::{crc32, parallel::checksum_iter};
  ///
  /// let poly = crc32::koopman();
  /// let chunks = vec![b"hello ".to_vec(), b"world".to_vec()];
  /// assert_eq!(checksum_iter(&*poly, chunks.iter()).finalize(), poly.checksum(b"hello world"));
  /// ```
  #[inline]
  pub fn finalize(self) -> P::Output {
    let poly = self.poly;
    let mut iter = self.inner;

    let Some(first) = iter.next() else {
      return poly.checksum(&[]);
    };

    iter.fold(poly.checksum(first.as_ref()), |acc, chunk| {
      let chunk = chunk.as_ref();
      poly.combine(acc, poly.checksum(chunk), len_i64(chunk.len()))
    })
  }
}

/// Create an iterator adapter that folds per-chunk checksums.
#[inline]
pub fn checksum_iter<I, P>(poly: &P, iter: I) -> ChecksumIter<'_, I::IntoIter, P>
where
  I: IntoIterator,
  I::Item: AsRef<[u8]>,
  P: ChecksumCombine + ?Sized,
{
  ChecksumIter {
    inner: iter.into_iter(),
    poly,
  }
}
