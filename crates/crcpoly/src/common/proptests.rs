//! Property tests for checksum and combine across polynomials.
//!
//! Two invariants are checked against the bitwise reference (the mathematical
//! definition of a reflected CRC), for well-known and arbitrary polynomials:
//!
//! 1. **Combine correctness**: `crc(A || B) == combine(crc(A), crc(B), len(B))`
//! 2. **Chunking equivalence**: any chunking through [`Digest`] equals one-shot

#![cfg(all(test, not(miri)))]

extern crate std;

use std::vec::Vec;

use proptest::prelude::*;
use traits::Checksum;

use super::reference::{crc32_bitwise, crc64_bitwise};
use crate::{crc32, crc64};

fn arb_poly32() -> impl Strategy<Value = u32> {
  prop_oneof![
    Just(crc32::IEEE),
    Just(crc32::CASTAGNOLI),
    Just(crc32::KOOPMAN),
    1u32..=u32::MAX,
  ]
}

fn arb_poly64() -> impl Strategy<Value = u64> {
  prop_oneof![Just(crc64::ISO), Just(crc64::ECMA), 1u64..=u64::MAX]
}

fn chunk_lengths() -> impl Strategy<Value = Vec<usize>> {
  proptest::collection::vec(0usize..=97, 0..=12)
}

fn split_by<'a>(mut data: &'a [u8], lengths: &[usize]) -> Vec<&'a [u8]> {
  let mut out = Vec::new();
  for &len in lengths {
    let (head, tail) = data.split_at(len.min(data.len()));
    out.push(head);
    data = tail;
  }
  out.push(data);
  out
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(128))]

  #[test]
  fn crc32_combine_correctness(
    poly in arb_poly32(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    split in any::<prop::sample::Index>(),
  ) {
    let p = crc32::make_poly(poly);
    let (a, b) = data.split_at(split.index(data.len() + 1));

    let expected = !crc32_bitwise(poly, !0, &data);
    prop_assert_eq!(p.checksum(&data), expected);
    prop_assert_eq!(p.combine(p.checksum(a), p.checksum(b), b.len() as i64), expected);
    prop_assert_eq!(p.update(p.checksum(a), b), expected);
  }

  #[test]
  fn crc64_combine_correctness(
    poly in arb_poly64(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    split in any::<prop::sample::Index>(),
  ) {
    let p = crc64::make_poly(poly);
    let (a, b) = data.split_at(split.index(data.len() + 1));

    let expected = !crc64_bitwise(poly, !0, &data);
    prop_assert_eq!(p.checksum(&data), expected);
    prop_assert_eq!(p.combine(p.checksum(a), p.checksum(b), b.len() as i64), expected);
  }

  #[test]
  fn crc32_chunking_equivalence(
    poly in arb_poly32(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    lengths in chunk_lengths(),
  ) {
    let p = crc32::make_poly(poly);
    let mut digest = crc32::Digest::new(p.clone());
    for chunk in split_by(&data, &lengths) {
      digest.update(chunk);
    }
    prop_assert_eq!(digest.finalize(), p.checksum(&data));
  }

  #[test]
  fn crc64_chunking_equivalence(
    poly in arb_poly64(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    lengths in chunk_lengths(),
  ) {
    let p = crc64::make_poly(poly);
    let mut digest = crc64::Digest::new(p.clone());
    for chunk in split_by(&data, &lengths) {
      digest.update(chunk);
    }
    prop_assert_eq!(digest.finalize(), p.checksum(&data));
  }

  #[test]
  fn combine_is_associative(
    a in proptest::collection::vec(any::<u8>(), 0..=256),
    b in proptest::collection::vec(any::<u8>(), 0..=256),
    c in proptest::collection::vec(any::<u8>(), 0..=256),
  ) {
    let p = crc64::ecma();
    let (ca, cb, cc) = (p.checksum(&a), p.checksum(&b), p.checksum(&c));
    let (lb, lc) = (b.len() as i64, c.len() as i64);

    let left = p.combine(p.combine(ca, cb, lb), cc, lc);
    let right = p.combine(ca, p.combine(cb, cc, lc), lb + lc);
    prop_assert_eq!(left, right);
  }
}
