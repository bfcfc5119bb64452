//! Fuzz target for combine over arbitrary polynomials.
//!
//! Splits the input at arbitrary points and checks that folding the chunk
//! checksums with `combine` matches the one-shot checksum.

#![no_main]

use arbitrary::Arbitrary;
use crcpoly::{crc32, crc64, parallel::checksum_chunks};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  poly32: u32,
  poly64: u64,
  data: Vec<u8>,
  splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  // Normalize splits to valid range and sort
  let mut splits: Vec<usize> = input.splits.iter().map(|s| s % (data.len() + 1)).collect();
  splits.sort_unstable();
  splits.dedup();

  let mut chunks = Vec::new();
  let mut prev = 0;
  for &split in &splits {
    chunks.push(&data[prev..split]);
    prev = split;
  }
  chunks.push(&data[prev..]);

  if let Ok(poly) = crc32::try_make_poly(input.poly32) {
    assert_eq!(checksum_chunks(&*poly, &chunks), poly.checksum(data), "crc32 {poly:?} combine chain mismatch");
  }
  if let Ok(poly) = crc64::try_make_poly(input.poly64) {
    assert_eq!(checksum_chunks(&*poly, &chunks), poly.checksum(data), "crc64 {poly:?} combine chain mismatch");
  }
});
