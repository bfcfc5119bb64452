use std::sync::Arc;

use crcpoly::{Checksum, crc32, crc64};

struct XorShift(u64);

impl XorShift {
  fn next(&mut self) -> u64 {
    let mut x = self.0;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    self.0 = x;
    x
  }

  fn buf(&mut self, max: usize) -> Vec<u8> {
    let len = (self.next() % max as u64) as usize;
    (0..len).map(|_| self.next() as u8).collect()
  }
}

/// Four edge cases, then 128 seeded random pairs of up to 255 bytes each.
fn poly_cases() -> Vec<(Vec<u8>, Vec<u8>)> {
  let zeroes = vec![0u8; 8];
  let mut cases = vec![
    (Vec::new(), Vec::new()),
    (Vec::new(), zeroes.clone()),
    (zeroes.clone(), Vec::new()),
    (zeroes.clone(), zeroes),
  ];
  let mut rng = XorShift(42);
  for _ in 0..128 {
    cases.push((rng.buf(256), rng.buf(256)));
  }
  cases
}

fn crc32_polys() -> Vec<Arc<crc32::Poly>> {
  vec![
    crc32::ieee(),
    crc32::castagnoli(),
    crc32::koopman(),
    crc32::make_poly(crc32::CASTAGNOLI.reverse_bits()),
  ]
}

fn crc64_polys() -> Vec<Arc<crc64::Poly>> {
  vec![crc64::iso(), crc64::ecma(), crc64::make_poly(crc64::ISO.reverse_bits())]
}

#[test]
fn crc32_streaming_and_combine_agree() {
  for (a, b) in poly_cases() {
    for p in crc32_polys() {
      let a_sum = p.checksum(&a);
      let b_sum = p.checksum(&b);
      let want = p.update(a_sum, &b);

      let mut h = crc32::Digest::new(p.clone());
      h.update(&a);
      h.update(&b);
      assert_eq!(h.finalize(), want, "poly={:#010x} hash", p.polynomial());

      assert_eq!(
        p.combine(a_sum, b_sum, b.len() as i64),
        want,
        "poly={:#010x} combine({a_sum:#010x}, {b_sum:#010x}, {})",
        p.polynomial(),
        b.len()
      );
    }
  }
}

#[test]
fn crc64_streaming_and_combine_agree() {
  for (a, b) in poly_cases() {
    for p in crc64_polys() {
      let a_sum = p.checksum(&a);
      let b_sum = p.checksum(&b);
      let want = p.update(a_sum, &b);

      let mut h = crc64::Digest::new(p.clone());
      h.update(&a);
      h.update(&b);
      assert_eq!(h.finalize(), want, "poly={:#018x} hash", p.polynomial());

      assert_eq!(
        p.combine(a_sum, b_sum, b.len() as i64),
        want,
        "poly={:#018x} combine({a_sum:#018x}, {b_sum:#018x}, {})",
        p.polynomial(),
        b.len()
      );
    }
  }
}

#[test]
fn check_values() {
  let check = b"123456789";
  assert_eq!(crc32::ieee().checksum(check), 0xCBF4_3926);
  assert_eq!(crc32::castagnoli().checksum(check), 0xE306_9283);
  assert_eq!(crc64::ecma().checksum(check), 0x995D_C9BB_DF19_39FA);
  assert_eq!(crc64::iso().checksum(check), 0xB909_56C7_75A4_1001);

  let ieee = crc32::ieee();
  assert_eq!(ieee.combine(ieee.checksum(b"1234"), ieee.checksum(b"56789"), 5), 0xCBF4_3926);
}

#[test]
fn combine_identities() {
  let p = crc32::castagnoli();
  for x in [1u32, 0x1234_5678, u32::MAX] {
    assert_eq!(p.combine(0, x, 1 << 20), x);
    for n in [0i64, -1, -4096, i64::MIN] {
      assert_eq!(p.combine(x, 0xabcd_ef01, n), x);
    }
  }
}

#[test]
fn combine_long_zero_runs() {
  // Checksums of zero blocks come from `update`, the combined value from a
  // single O(log n) combine.
  let p = crc64::ecma();
  let zeros = vec![0u8; 1 << 16];
  let head = p.checksum(b"head");
  let zsum = p.checksum(&zeros);
  assert_eq!(p.combine(head, zsum, zeros.len() as i64), p.update(head, &zeros));
}

#[test]
fn deterministic_and_distinct() {
  let data = b"The quick brown fox jumps over the lazy dog";
  let sums: Vec<u32> = crc32_polys().iter().map(|p| p.checksum(data)).collect();
  for (i, a) in sums.iter().enumerate() {
    for b in &sums[i + 1..] {
      assert_ne!(a, b);
    }
  }
  assert_eq!(sums, crc32_polys().iter().map(|p| p.checksum(data)).collect::<Vec<_>>());
  assert_ne!(crc64::iso().checksum(data), crc64::ecma().checksum(data));
}

#[test]
fn fresh_and_shared_tables_are_equivalent() {
  let shared = crc32::ieee();
  let fresh = crc32::Poly::new(crc32::IEEE);
  let data: Vec<u8> = (0..=255).collect();
  assert_eq!(shared.polynomial(), fresh.polynomial());
  assert_eq!(shared.checksum(&data), fresh.checksum(&data));
  assert_eq!(shared.power_table(), fresh.power_table());
  assert_eq!(shared.byte_table(), fresh.byte_table());
}
