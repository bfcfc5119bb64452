//! Fuzz target for digest state restoration.
//!
//! Arbitrary bytes must never panic `unmarshal_binary`, a rejected state must
//! leave the digest untouched, and an accepted state must re-marshal verbatim.

#![no_main]

use crcpoly::{Checksum, StateMarshal, crc32, crc64};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let mut d32 = crc32::Digest::new(crc32::ieee());
  d32.update(b"seed");
  let before = d32.finalize();
  match d32.unmarshal_binary(data) {
    Ok(()) => assert_eq!(d32.marshal_binary().as_slice(), data),
    Err(_) => assert_eq!(d32.finalize(), before),
  }

  let mut d64 = crc64::Digest::new(crc64::iso());
  d64.update(b"seed");
  let before = d64.finalize();
  match d64.unmarshal_binary(data) {
    Ok(()) => assert_eq!(d64.marshal_binary().as_slice(), data),
    Err(_) => assert_eq!(d64.finalize(), before),
  }
});
