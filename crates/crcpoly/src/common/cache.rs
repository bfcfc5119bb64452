//! Exactly-once lazy storage for the shared polynomial singletons.
//!
//! `Shared<T>` has the semantics of `std::sync::OnceLock` but also works on
//! `no_std` targets.
//!
//! # Caching Strategy
//!
//! - **std**: Uses `OnceLock` for thread-safe lazy initialization
//! - **no_std**: Uses an atomic state machine (uninit → initializing → ready);
//!   losers of the initialization race spin until the winner publishes

#[cfg(not(feature = "std"))]
use core::cell::UnsafeCell;
#[cfg(not(feature = "std"))]
use core::mem::MaybeUninit;

/// A value that is constructed on first access and never again.
///
/// - Zero-cost after first initialization (an acquire load)
/// - The initializer runs at most once, even under concurrent first access
/// - No reader ever observes a partially constructed value
pub struct Shared<T> {
  #[cfg(feature = "std")]
  inner: std::sync::OnceLock<T>,

  #[cfg(not(feature = "std"))]
  state: core::sync::atomic::AtomicU8,
  #[cfg(not(feature = "std"))]
  value: UnsafeCell<MaybeUninit<T>>,
}

// SAFETY: The value is written exactly once, by the thread that won the
// UNINIT → INITING transition, and only read after READY is observed with
// Acquire ordering (paired with the Release store that publishes it).
#[allow(unsafe_code)]
#[cfg(not(feature = "std"))]
unsafe impl<T: Send + Sync> Sync for Shared<T> {}

impl<T> Shared<T> {
  #[cfg(not(feature = "std"))]
  const UNINIT: u8 = 0;
  #[cfg(not(feature = "std"))]
  const INITING: u8 = 1;
  #[cfg(not(feature = "std"))]
  const READY: u8 = 2;

  /// Create a new empty cell.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      #[cfg(feature = "std")]
      inner: std::sync::OnceLock::new(),

      #[cfg(not(feature = "std"))]
      state: core::sync::atomic::AtomicU8::new(0),
      #[cfg(not(feature = "std"))]
      value: UnsafeCell::new(MaybeUninit::uninit()),
    }
  }

  /// Get the value, initializing it with `f` if this is the first access.
  #[inline]
  pub fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
    #[cfg(feature = "std")]
    {
      self.inner.get_or_init(f)
    }

    #[cfg(not(feature = "std"))]
    {
      use core::sync::atomic::Ordering;

      if self.state.load(Ordering::Acquire) != Self::READY
        && self
          .state
          .compare_exchange(Self::UNINIT, Self::INITING, Ordering::AcqRel, Ordering::Acquire)
          .is_ok()
      {
        let value = f();
        // SAFETY: We hold exclusive access during INITING state
        #[allow(unsafe_code)]
        unsafe {
          (*self.value.get()).write(value);
        }
        self.state.store(Self::READY, Ordering::Release);
      }

      // Another thread may be initializing - spin wait
      while self.state.load(Ordering::Acquire) != Self::READY {
        core::hint::spin_loop();
      }

      // SAFETY: Value is initialized when state is READY and never written again
      #[allow(unsafe_code)]
      unsafe {
        (*self.value.get()).assume_init_ref()
      }
    }
  }

  /// Get the value if it has already been initialized.
  #[inline]
  #[must_use]
  pub fn get(&self) -> Option<&T> {
    #[cfg(feature = "std")]
    {
      self.inner.get()
    }

    #[cfg(not(feature = "std"))]
    {
      use core::sync::atomic::Ordering;

      if self.state.load(Ordering::Acquire) == Self::READY {
        // SAFETY: Value is initialized when state is READY
        #[allow(unsafe_code)]
        Some(unsafe { (*self.value.get()).assume_init_ref() })
      } else {
        None
      }
    }
  }
}

impl<T> Default for Shared<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Shared<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Shared").field("value", &self.get()).finish()
  }
}

#[cfg(all(test, feature = "std"))]
mod tests {
  extern crate std;

  use core::sync::atomic::{AtomicUsize, Ordering};
  use std::{sync::Arc, thread, vec::Vec};

  use super::*;

  #[test]
  fn initializes_once() {
    let cell = Shared::new();
    let mut calls = 0;
    assert_eq!(*cell.get_or_init(|| {
      calls += 1;
      7u32
    }), 7);
    assert_eq!(*cell.get_or_init(|| 9u32), 7);
    assert_eq!(calls, 1);
  }

  #[test]
  fn get_before_init_is_none() {
    let cell: Shared<u64> = Shared::new();
    assert!(cell.get().is_none());
    cell.get_or_init(|| 3);
    assert_eq!(cell.get(), Some(&3));
  }

  #[test]
  fn concurrent_first_access_runs_initializer_once() {
    static CELL: Shared<Arc<u64>> = Shared::new();
    static CALLS: AtomicUsize = AtomicUsize::new(0);

    let handles: Vec<_> = (0..16)
      .map(|_| {
        thread::spawn(|| {
          let v = CELL.get_or_init(|| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            Arc::new(42)
          });
          Arc::clone(v)
        })
      })
      .collect();

    let values: Vec<Arc<u64>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    for v in &values {
      assert!(Arc::ptr_eq(v, &values[0]));
    }
  }
}
