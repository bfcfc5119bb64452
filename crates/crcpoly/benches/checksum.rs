//! Checksum throughput benchmarks.
//!
//! Run: `cargo bench -p crcpoly --bench checksum`
//!
//! Kernel selection can be pinned with `CRCPOLY_FORCE=bytewise|slice8`.

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use crcpoly::{crc32, crc64};

const SIZES: [usize; 6] = [16, 64, 256, 4096, 65536, 1 << 20];

fn gen_bytes(len: usize) -> Vec<u8> {
  let mut x = 0x0123_4567_89ab_cdefu64;
  (0..len)
    .map(|_| {
      x ^= x << 13;
      x ^= x >> 7;
      x ^= x << 17;
      x as u8
    })
    .collect()
}

fn bench_crc32(c: &mut Criterion) {
  for (name, poly) in [("ieee", crc32::ieee()), ("castagnoli", crc32::castagnoli())] {
    let mut group = c.benchmark_group(format!("crc32/{name}"));
    for len in SIZES {
      let data = gen_bytes(len);
      group.throughput(Throughput::Bytes(len as u64));
      group.bench_with_input(BenchmarkId::new(crc32::Poly::kernel_name_for_len(len), len), &data, |b, data| {
        b.iter(|| black_box(poly.checksum(black_box(data))));
      });
    }
    group.finish();
  }
}

fn bench_crc64(c: &mut Criterion) {
  for (name, poly) in [("iso", crc64::iso()), ("ecma", crc64::ecma())] {
    let mut group = c.benchmark_group(format!("crc64/{name}"));
    for len in SIZES {
      let data = gen_bytes(len);
      group.throughput(Throughput::Bytes(len as u64));
      group.bench_with_input(BenchmarkId::new(crc64::Poly::kernel_name_for_len(len), len), &data, |b, data| {
        b.iter(|| black_box(poly.checksum(black_box(data))));
      });
    }
    group.finish();
  }
}

fn bench_table_build(c: &mut Criterion) {
  let mut group = c.benchmark_group("make_poly");
  group.bench_function("crc32/uncached", |b| b.iter(|| crc32::Poly::new(black_box(0x8F6E_37A0))));
  group.bench_function("crc64/uncached", |b| b.iter(|| crc64::Poly::new(black_box(0x9A6C_9329_AC4B_C9B5))));
  group.bench_function("crc32/shared", |b| b.iter(|| crc32::make_poly(black_box(crc32::IEEE))));
  group.finish();
}

criterion_group!(benches, bench_crc32, bench_crc64, bench_table_build);
criterion_main!(benches);
