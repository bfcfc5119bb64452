//! Fuzz target for the streaming digest.
//!
//! Tests that arbitrary sequences of update calls produce the one-shot result.

#![no_main]

use arbitrary::Arbitrary;
use crcpoly::{Checksum, crc32, crc64};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<u8>,
}

fn feed<C: Checksum>(hasher: &mut C, data: &[u8], chunk_sizes: &[u8]) {
  let mut offset = 0;
  let mut chunk_idx = 0;
  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      usize::from(chunk_sizes[chunk_idx % chunk_sizes.len()]).max(1)
    };
    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }
}

fuzz_target!(|input: Input| {
  for poly in [crc32::ieee(), crc32::castagnoli(), crc32::koopman()] {
    let mut hasher = crc32::Digest::new(poly.clone());
    feed(&mut hasher, &input.data, &input.chunk_sizes);
    assert_eq!(hasher.finalize(), poly.checksum(&input.data), "crc32 {poly:?} streaming mismatch");
  }

  for poly in [crc64::iso(), crc64::ecma()] {
    let mut hasher = crc64::Digest::new(poly.clone());
    feed(&mut hasher, &input.data, &input.chunk_sizes);
    assert_eq!(hasher.finalize(), poly.checksum(&input.data), "crc64 {poly:?} streaming mismatch");
  }
});
