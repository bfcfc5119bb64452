//! Polynomial arithmetic over GF(2) for CRC combination.
//!
//! Checksum values and generator polynomials are `W`-bit words in reflected
//! (LSB-first) form: bit `W-1` holds the coefficient of `x^0` and bit `0` the
//! coefficient of `x^(W-1)`. In that encoding `1 << (W-1)` is the polynomial `1`
//! and `1 << (W-2)` is `x`.
//!
//! # Mathematical Background
//!
//! For reflected CRCs:
//! ```text
//! crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
//! ```
//!
//! `x^(8n)` is built by square-and-multiply over a table of `x^(2^k) mod G(x)`,
//! so a combine costs O(W * log n) bit operations.

use core::{
  fmt::Debug,
  ops::{BitAnd, BitXor, BitXorAssign, Shr, ShrAssign, Sub},
};

mod sealed {
  pub trait Sealed {}
  impl Sealed for u32 {}
  impl Sealed for u64 {}
}

/// A CRC register word.
///
/// Implemented for `u32` (CRC-32) and `u64` (CRC-64) only.
pub trait Word:
  sealed::Sealed
  + Copy
  + Eq
  + Debug
  + Default
  + BitAnd<Output = Self>
  + BitXor<Output = Self>
  + BitXorAssign
  + Shr<u32, Output = Self>
  + ShrAssign<u32>
  + Sub<Output = Self>
  + Send
  + Sync
  + 'static
{
  /// Register width in bits.
  const BITS: u32;
  /// The all-zero word.
  const ZERO: Self;
  /// The word with only bit 0 set.
  const ONE: Self;
  /// The reflected encoding of the polynomial `1` (`1 << (W-1)`).
  const TOP: Self;
}

impl Word for u32 {
  const BITS: u32 = u32::BITS;
  const ZERO: Self = 0;
  const ONE: Self = 1;
  const TOP: Self = 1 << (u32::BITS - 1);
}

impl Word for u64 {
  const BITS: u32 = u64::BITS;
  const ZERO: Self = 0;
  const ONE: Self = 1;
  const TOP: Self = 1 << (u64::BITS - 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Multiplication
// ─────────────────────────────────────────────────────────────────────────────

/// Return `a(x) * b(x) mod p(x)` where `p` is the reflected generator.
///
/// `a` is scanned from its `x^0` coefficient upward and the scan stops at the
/// last set bit, so the cost is proportional to the degree of `a`.
///
/// # Panics
///
/// `a` must be non-zero. A zero multiplicand never reaches the early exit and
/// panics as an internal invariant violation.
#[inline]
#[must_use]
pub fn mult_mod_p<W: Word>(poly: W, a: W, mut b: W) -> W {
  let mut m = W::TOP;
  let mut v = W::ZERO;
  while m != W::ZERO {
    if a & m != W::ZERO {
      v ^= b;
      if a & (m - W::ONE) == W::ZERO {
        return v;
      }
    }
    let carry = b & W::ONE != W::ZERO;
    b >>= 1;
    if carry {
      b ^= poly;
    }
    m >>= 1;
  }
  unreachable!("mult_mod_p called with a zero multiplicand")
}

// ─────────────────────────────────────────────────────────────────────────────
// Power Table
// ─────────────────────────────────────────────────────────────────────────────

/// Build the table of `x^(2^k) mod p(x)` for `k` in `0..N`.
///
/// Entry 0 is `x` itself (`1 << (W-2)`); every later entry squares its
/// predecessor. Callers must reject `poly == 0` first: `x^W` absorbs every
/// high enough power of `x` and the squaring chain would hit a zero operand.
#[must_use]
pub fn power_table<W: Word, const N: usize>(poly: W) -> [W; N] {
  let mut table = [W::ZERO; N];
  let mut p = W::TOP >> 1;
  for (k, slot) in table.iter_mut().enumerate() {
    if k > 0 {
      p = mult_mod_p(poly, p, p);
    }
    *slot = p;
  }
  table
}

/// Return `x^(n * 2^k) mod p(x)` using a power table from [`power_table`].
///
/// `n == 0` yields the polynomial `1`. Table indices wrap modulo `N` as zlib's
/// do; for `N == W` that only matters once `k` passes `W`, i.e. for lengths of
/// at least `2^(W-3)` bytes.
#[inline]
#[must_use]
pub fn x2n_mod_p<W: Word, const N: usize>(poly: W, table: &[W; N], mut n: u64, mut k: usize) -> W {
  let mut p = W::TOP;
  while n != 0 {
    if n & 1 != 0 {
      if let Some(&x2k) = table.get(k % N) {
        p = mult_mod_p(poly, x2k, p);
      }
    }
    n >>= 1;
    k += 1;
  }
  p
}

/// Fold the checksum of a `next_len`-byte block onto `prev`.
///
/// A zero `prev` means "nothing before" and returns `next` unchanged; a
/// non-positive length returns `prev`.
#[inline]
#[must_use]
pub fn combine<W: Word, const N: usize>(poly: W, table: &[W; N], prev: W, next: W, next_len: i64) -> W {
  if prev == W::ZERO {
    return next;
  }
  let Ok(len) = u64::try_from(next_len) else {
    return prev;
  };
  if len == 0 {
    return prev;
  }
  mult_mod_p(poly, prev, x2n_mod_p(poly, table, len, 3)) ^ next
}
