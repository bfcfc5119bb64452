//! Runtime configuration for update-kernel selection (overrides + thresholds).
//!
//! Every kernel produces identical checksums; these knobs only trade speed.
//!
//! Environment overrides (read once per process under `std`):
//!
//! | Variable | Values |
//! |----------|--------|
//! | `CRCPOLY_FORCE` | `auto`, `bytewise` (`byte`, `table`), `slice8` (`slice-by-8`) |
//! | `CRCPOLY_THRESHOLD_BYTEWISE_TO_SLICE8` | byte count (`usize`) |

/// Default input length at which slice-by-8 takes over from the bytewise loop.
pub const DEFAULT_BYTEWISE_TO_SLICE8: usize = 16;

/// Forced kernel selection for checksum updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UpdateForce {
  /// Pick by input length.
  #[default]
  Auto,
  /// Always use the byte-at-a-time table loop.
  Bytewise,
  /// Always use slice-by-8.
  Slice8,
}

impl UpdateForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Bytewise => "bytewise",
      Self::Slice8 => "slice8",
    }
  }
}

/// Kernel selection thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpdateTunables {
  /// Bytes where slice-by-8 becomes faster than bytewise.
  pub bytewise_to_slice8: usize,
}

impl Default for UpdateTunables {
  fn default() -> Self {
    Self {
      bytewise_to_slice8: DEFAULT_BYTEWISE_TO_SLICE8,
    }
  }
}

/// Full update configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct UpdateConfig {
  /// Requested force mode (env).
  pub requested_force: UpdateForce,
  /// Thresholds used by the selector.
  pub tunables: UpdateTunables,
}

/// The update kernels, named for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kernel {
  Bytewise,
  Slice8,
}

impl Kernel {
  pub(crate) const fn name(self) -> &'static str {
    match self {
      Self::Bytewise => "portable/bytewise",
      Self::Slice8 => "portable/slice8",
    }
  }
}

impl UpdateConfig {
  /// Select the kernel for an input of `len` bytes.
  #[inline]
  #[must_use]
  pub(crate) fn kernel_for_len(&self, len: usize) -> Kernel {
    match self.requested_force {
      UpdateForce::Bytewise => Kernel::Bytewise,
      UpdateForce::Slice8 => Kernel::Slice8,
      UpdateForce::Auto if len < self.tunables.bytewise_to_slice8 => Kernel::Bytewise,
      UpdateForce::Auto => Kernel::Slice8,
    }
  }
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: UpdateForce,
  bytewise_to_slice8: Option<usize>,
}

#[cfg(any(feature = "std", test))]
fn parse_usize(value: &str) -> Option<usize> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }
  value.parse::<usize>().ok()
}

#[cfg(any(feature = "std", test))]
fn parse_force(value: &str) -> Option<UpdateForce> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }

  if value.eq_ignore_ascii_case("auto") {
    return Some(UpdateForce::Auto);
  }
  if value.eq_ignore_ascii_case("bytewise") || value.eq_ignore_ascii_case("byte") || value.eq_ignore_ascii_case("table")
  {
    return Some(UpdateForce::Bytewise);
  }
  if value.eq_ignore_ascii_case("slice8") || value.eq_ignore_ascii_case("slice-by-8") {
    return Some(UpdateForce::Slice8);
  }

  None
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn var(name: &str) -> Option<std::string::String> {
    std::env::var(name).ok()
  }

  Overrides {
    force: var("CRCPOLY_FORCE")
      .as_deref()
      .and_then(parse_force)
      .unwrap_or(UpdateForce::Auto),
    bytewise_to_slice8: var("CRCPOLY_THRESHOLD_BYTEWISE_TO_SLICE8")
      .as_deref()
      .and_then(parse_usize),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

fn apply(ov: Overrides) -> UpdateConfig {
  let mut tunables = UpdateTunables::default();
  if let Some(v) = ov.bytewise_to_slice8 {
    tunables.bytewise_to_slice8 = v;
  }

  UpdateConfig {
    requested_force: ov.force,
    tunables,
  }
}

/// Get the effective update configuration.
#[inline]
#[must_use]
pub fn get() -> UpdateConfig {
  apply(overrides())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn force_parsing() {
    assert_eq!(parse_force("auto"), Some(UpdateForce::Auto));
    assert_eq!(parse_force("  BYTEWISE "), Some(UpdateForce::Bytewise));
    assert_eq!(parse_force("table"), Some(UpdateForce::Bytewise));
    assert_eq!(parse_force("Slice-By-8"), Some(UpdateForce::Slice8));
    assert_eq!(parse_force("slice8"), Some(UpdateForce::Slice8));
    assert_eq!(parse_force(""), None);
    assert_eq!(parse_force("avx512"), None);
  }

  #[test]
  fn threshold_parsing() {
    assert_eq!(parse_usize(" 64 "), Some(64));
    assert_eq!(parse_usize(""), None);
    assert_eq!(parse_usize("-1"), None);
    assert_eq!(parse_usize("lots"), None);
  }

  #[test]
  fn as_str_round_trips_through_parser() {
    for force in [UpdateForce::Auto, UpdateForce::Bytewise, UpdateForce::Slice8] {
      assert_eq!(parse_force(force.as_str()), Some(force));
    }
  }

  #[test]
  fn overrides_apply_on_top_of_defaults() {
    let cfg = apply(Overrides::default());
    assert_eq!(cfg.requested_force, UpdateForce::Auto);
    assert_eq!(cfg.tunables.bytewise_to_slice8, DEFAULT_BYTEWISE_TO_SLICE8);

    let cfg = apply(Overrides {
      force: UpdateForce::Slice8,
      bytewise_to_slice8: Some(128),
    });
    assert_eq!(cfg.requested_force, UpdateForce::Slice8);
    assert_eq!(cfg.tunables.bytewise_to_slice8, 128);
  }

  #[test]
  fn kernel_selection() {
    let auto = UpdateConfig::default();
    assert_eq!(auto.kernel_for_len(0), Kernel::Bytewise);
    assert_eq!(auto.kernel_for_len(DEFAULT_BYTEWISE_TO_SLICE8 - 1), Kernel::Bytewise);
    assert_eq!(auto.kernel_for_len(DEFAULT_BYTEWISE_TO_SLICE8), Kernel::Slice8);

    let forced = UpdateConfig {
      requested_force: UpdateForce::Bytewise,
      ..UpdateConfig::default()
    };
    assert_eq!(forced.kernel_for_len(1 << 20), Kernel::Bytewise);
    assert_eq!(Kernel::Slice8.name(), "portable/slice8");
  }
}
