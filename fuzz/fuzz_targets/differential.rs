//! Differential fuzzing against `crc-fast`.
//!
//! IEEE, Castagnoli and ECMA are catalogued CRCs, so both implementations must
//! agree on every input.

#![no_main]

use crc_fast::CrcAlgorithm;
use crcpoly::{crc32, crc64};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let ours = crc32::ieee().checksum(data);
  let reference = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, data) as u32;
  assert_eq!(ours, reference, "CRC-32/IEEE mismatch: ours={ours:#010x}, reference={reference:#010x}, len={}", data.len());

  let ours = crc32::castagnoli().checksum(data);
  let reference = crc_fast::checksum(CrcAlgorithm::Crc32Iscsi, data) as u32;
  assert_eq!(ours, reference, "CRC-32C mismatch: ours={ours:#010x}, reference={reference:#010x}, len={}", data.len());

  let ours = crc64::ecma().checksum(data);
  let reference = crc_fast::checksum(CrcAlgorithm::Crc64Xz, data);
  assert_eq!(ours, reference, "CRC-64/XZ mismatch: ours={ours:#018x}, reference={reference:#018x}, len={}", data.len());
});
