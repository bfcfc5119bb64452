//! Checksum a buffer on several threads and fold the results with `combine`.
//!
//! Run: `cargo run -p crcpoly --example parallel`

use std::{thread, time::Instant};

use crcpoly::{crc32, crc64, parallel::combine_checksums};

fn main() {
  let data: Vec<u8> = (0..(16u32 << 20)).map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8).collect();
  let workers = thread::available_parallelism().map_or(4, |n| n.get());
  let chunk_len = data.len().div_ceil(workers);

  let poly = crc64::ecma();
  let start = Instant::now();
  let sums: Vec<(u64, i64)> = thread::scope(|s| {
    let handles: Vec<_> = data
      .chunks(chunk_len)
      .map(|chunk| {
        let poly = &poly;
        s.spawn(move || (poly.checksum(chunk), chunk.len() as i64))
      })
      .collect();
    handles.into_iter().map(|h| h.join().expect("worker panicked")).collect()
  });
  let combined = combine_checksums(&*poly, &sums);
  let parallel = start.elapsed();

  let start = Instant::now();
  let sequential = poly.checksum(&data);
  let serial = start.elapsed();

  println!("crc64/ecma  {workers} threads: {combined:#018x} in {parallel:?}");
  println!("crc64/ecma  1 thread:   {sequential:#018x} in {serial:?}");
  assert_eq!(combined, sequential);

  let ieee = crc32::ieee();
  let (head, tail) = data.split_at(data.len() / 3);
  let joined = ieee.combine(ieee.checksum(head), ieee.checksum(tail), tail.len() as i64);
  println!("crc32/ieee  combine:    {joined:#010x}");
  assert_eq!(joined, ieee.checksum(&data));
}
