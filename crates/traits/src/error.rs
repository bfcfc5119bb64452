//! Error types for checksum construction and state restoration.
//!
//! Small `Copy` errors with no allocation, usable in `no_std` builds.

use core::fmt;

/// The generator polynomial cannot define a CRC.
///
/// The only rejected value is zero: `p(x) = x^W` divides `x^(2^k)` for large
/// enough `k`, so the power table of `x` would collapse to zero.
///
/// # Examples
///
/// ```
/// use traits::InvalidPolynomial;
///
/// fn check(poly: u32) -> Result<u32, InvalidPolynomial> {
///   if poly == 0 {
///     Err(InvalidPolynomial::new())
///   } else {
///     Ok(poly)
///   }
/// }
///
/// assert!(check(0).is_err());
/// assert_eq!(check(0xEDB8_8320), Ok(0xEDB8_8320));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct InvalidPolynomial;

impl InvalidPolynomial {
  /// Create a new invalid-polynomial error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for InvalidPolynomial {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for InvalidPolynomial {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("invalid polynomial: generator must be non-zero")
  }
}

impl core::error::Error for InvalidPolynomial {}

/// A marshaled checksum state was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum UnmarshalError {
  /// The state does not start with the identifier for this checksum width.
  InvalidIdentifier,
  /// The state has the right identifier but the wrong length.
  InvalidSize,
  /// The state was produced with a different polynomial.
  TableMismatch,
}

impl UnmarshalError {
  /// Short, stable description of the error.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::InvalidIdentifier => "invalid hash state identifier",
      Self::InvalidSize => "invalid hash state size",
      Self::TableMismatch => "tables do not match",
    }
  }
}

impl fmt::Display for UnmarshalError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl core::error::Error for UnmarshalError {}
