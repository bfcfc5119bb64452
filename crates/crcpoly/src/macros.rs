//! Internal macros for per-width polynomial types.
//!
//! CRC-32 and CRC-64 share identical structure and differ only in word type,
//! table generator, kernels and the set of well-known polynomials.

/// Emit a `trace!` event when a polynomial's tables are built.
#[cfg(feature = "tracing")]
macro_rules! trace_table_build {
  ($width:expr, $poly:expr) => {
    ::tracing::trace!(width = $width, poly = $poly, "building crc tables")
  };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_table_build {
  ($width:expr, $poly:expr) => {};
}

/// Emit a `debug!` event when a shared polynomial singleton is initialized.
#[cfg(feature = "tracing")]
macro_rules! debug_singleton_init {
  ($name:expr) => {
    ::tracing::debug!(name = $name, "initializing shared crc polynomial")
  };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_singleton_init {
  ($name:expr) => {};
}

/// Generate a width module's polynomial table, streaming digest and
/// well-known polynomial cache.
///
/// This macro creates:
/// - `SIZE`, `MARSHALED_SIZE`
/// - `Poly` with `new`, `try_new`, `checksum`, `update`, `combine`, `name`, ...
/// - `ChecksumCombine` for `Poly`
/// - one `Arc<Poly>` accessor per well-known polynomial, plus `make_poly` and
///   `try_make_poly`
/// - `Digest` with `Checksum`, `StateMarshal` and (under `std`) `io::Write`
///
/// # Arguments
///
/// - `width`: register width in bits (also the power table length)
/// - `word`: register word type
/// - `tables` / `bytewise` / `slice8`: table generator and update kernels
/// - `magic`: marshaled-state identifier
/// - `table_sum`: accessor of the polynomial whose checksum fingerprints tables
/// - `known`: `CONST => accessor, CELL, "Name";` per well-known polynomial
macro_rules! define_poly {
  (
    width: $width:literal,
    word: $w:ty,
    tables: $gen_tables:path,
    bytewise: $bytewise:path,
    slice8: $slice8:path,
    magic: $magic:expr,
    table_sum: $table_sum_poly:ident,
    known: [
      $( $(#[$kdoc:meta])* $konst:ident => $accessor:ident, $cell:ident, $kname:literal; )+
    ],
  ) => {
    /// Size of a checksum in bytes.
    pub const SIZE: usize = size_of::<$w>();

    /// Size of a marshaled [`Digest`] state in bytes.
    pub const MARSHALED_SIZE: usize = MAGIC.len() + 2 * SIZE;

    const MAGIC: &[u8; 4] = $magic;

    // ─────────────────────────────────────────────────────────────────────────
    // Poly
    // ─────────────────────────────────────────────────────────────────────────

    #[doc = concat!("Precomputed tables for one reflected CRC-", stringify!($width), " polynomial.")]
    ///
    /// Holds the byte tables used by [`update`](Self::update) and the power
    /// table of `x^(2^k) mod p(x)` used by [`combine`](Self::combine). A `Poly`
    /// is immutable after construction and can be shared freely across
    /// threads; the well-known polynomials are shared as process-wide
    /// singletons.
    pub struct Poly {
      poly: $w,
      x2n: [$w; $width],
      tables: [[$w; 256]; 8],
    }

    impl Poly {
      /// Build the tables for `poly` (reflected form).
      ///
      /// This does not consult the shared cache; see [`make_poly`].
      ///
      /// # Panics
      ///
      /// Panics if `poly` is zero. Use [`try_new`](Self::try_new) to handle that
      /// case as an error.
      #[must_use]
      pub fn new(poly: $w) -> Self {
        match Self::try_new(poly) {
          Ok(p) => p,
          Err(err) => panic!("{err}"),
        }
      }

      /// Build the tables for `poly`, rejecting the degenerate zero generator.
      ///
      /// # Errors
      ///
      /// Returns [`InvalidPolynomial`] if `poly` is zero.
      pub fn try_new(poly: $w) -> Result<Self, InvalidPolynomial> {
        if poly == 0 {
          return Err(InvalidPolynomial::new());
        }
        trace_table_build!($width, poly);
        Ok(Self {
          poly,
          x2n: crate::common::gf2::power_table(poly),
          tables: $gen_tables(poly),
        })
      }

      /// The generator polynomial in reflected form.
      #[inline]
      #[must_use]
      pub const fn polynomial(&self) -> $w {
        self.poly
      }

      /// The well-known name of this polynomial, if it is one.
      #[must_use]
      pub const fn name(&self) -> Option<&'static str> {
        match self.poly {
          $( $konst => Some($kname), )+
          _ => None,
        }
      }

      /// Checksum of `data` from the empty state.
      #[inline]
      #[must_use]
      pub fn checksum(&self, data: &[u8]) -> $w {
        self.update(0, data)
      }

      /// Fold `data` into the running checksum `sum`.
      ///
      /// `update(checksum(a), b) == checksum(a ++ b)`.
      #[inline]
      #[must_use]
      pub fn update(&self, sum: $w, data: &[u8]) -> $w {
        !self.update_raw(!sum, data)
      }

      /// Checksum of `next_len` bytes whose checksum is `next`, appended to
      /// data whose checksum is `prev`.
      ///
      /// `combine(checksum(a), checksum(b), b.len()) == checksum(a ++ b)`.
      /// A zero `prev` returns `next`; a non-positive `next_len` returns `prev`.
      #[inline]
      #[must_use]
      pub fn combine(&self, prev: $w, next: $w, next_len: i64) -> $w {
        crate::common::gf2::combine(self.poly, &self.x2n, prev, next, next_len)
      }

      /// Returns the kernel name that the selector would choose for `len`.
      ///
      /// This is intended for debugging/benchmarking and does not allocate.
      #[must_use]
      pub fn kernel_name_for_len(len: usize) -> &'static str {
        crate::config::get().kernel_for_len(len).name()
      }

      /// The power table: entry `k` is `x^(2^k) mod p(x)`.
      #[inline]
      #[must_use]
      pub const fn power_table(&self) -> &[$w; $width] {
        &self.x2n
      }

      /// The classic 256-entry byte table.
      #[inline]
      #[must_use]
      pub const fn byte_table(&self) -> &[$w; 256] {
        let [table, ..] = &self.tables;
        table
      }

      /// Whether `this` is the process-wide shared instance for its polynomial.
      #[must_use]
      pub fn is_shared(this: &Arc<Self>) -> bool {
        shared_cell(this.poly)
          .and_then(|cell| cell.get())
          .is_some_and(|shared| Arc::ptr_eq(shared, this))
      }

      /// Fingerprint of the byte table, embedded in marshaled digest state.
      fn table_sum(&self) -> $w {
        let sum_poly = $table_sum_poly();
        self
          .byte_table()
          .iter()
          .fold(0, |sum, entry| sum_poly.update(sum, &entry.to_be_bytes()))
      }

      #[inline]
      fn update_raw(&self, crc: $w, data: &[u8]) -> $w {
        match crate::config::get().kernel_for_len(data.len()) {
          crate::config::Kernel::Bytewise => $bytewise(crc, data, self.byte_table()),
          crate::config::Kernel::Slice8 => $slice8(crc, data, &self.tables),
        }
      }
    }

    impl PartialEq for Poly {
      fn eq(&self, other: &Self) -> bool {
        self.poly == other.poly
      }
    }

    impl Eq for Poly {}

    impl core::fmt::Debug for Poly {
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Poly")
          .field("width", &$width)
          .field("poly", &format_args!("{:#x}", self.poly))
          .field("name", &self.name())
          .finish_non_exhaustive()
      }
    }

    impl ChecksumCombine for Poly {
      type Output = $w;

      #[inline]
      fn polynomial(&self) -> $w {
        Poly::polynomial(self)
      }

      #[inline]
      fn update(&self, sum: $w, data: &[u8]) -> $w {
        Poly::update(self, sum, data)
      }

      #[inline]
      fn combine(&self, prev: $w, next: $w, next_len: i64) -> $w {
        Poly::combine(self, prev, next, next_len)
      }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Well-Known Polynomial Cache
    // ─────────────────────────────────────────────────────────────────────────

    $( static $cell: Shared<Arc<Poly>> = Shared::new(); )+

    fn shared_cell(poly: $w) -> Option<&'static Shared<Arc<Poly>>> {
      match poly {
        $( $konst => Some(&$cell), )+
        _ => None,
      }
    }

    $(
      $(#[$kdoc])*
      ///
      /// The tables are built on first use and shared by every later caller.
      #[must_use]
      pub fn $accessor() -> Arc<Poly> {
        Arc::clone($cell.get_or_init(|| {
          debug_singleton_init!(concat!("crc", stringify!($width), "/", $kname));
          Arc::new(Poly::new($konst))
        }))
      }
    )+

    /// Get the tables for `poly`.
    ///
    /// Well-known polynomials return the shared singleton; any other value
    /// builds fresh, uncached tables.
    ///
    /// # Panics
    ///
    /// Panics if `poly` is zero. Use [`try_make_poly`] to handle that case.
    #[must_use]
    pub fn make_poly(poly: $w) -> Arc<Poly> {
      match poly {
        $( $konst => $accessor(), )+
        _ => Arc::new(Poly::new(poly)),
      }
    }

    /// Fallible [`make_poly`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPolynomial`] if `poly` is zero.
    pub fn try_make_poly(poly: $w) -> Result<Arc<Poly>, InvalidPolynomial> {
      match poly {
        $( $konst => Ok($accessor()), )+
        _ => Poly::try_new(poly).map(Arc::new),
      }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Digest
    // ─────────────────────────────────────────────────────────────────────────

    #[doc = concat!("Streaming CRC-", stringify!($width), " over a shared [`Poly`].")]
    ///
    /// Writing `a` then `b` yields the same value as `poly.update(poly.checksum(a), b)`.
    /// The running state can be saved with
    /// [`marshal_binary`](StateMarshal::marshal_binary) and restored into a
    /// digest over the same polynomial.
    #[derive(Clone)]
    pub struct Digest {
      poly: Arc<Poly>,
      crc: $w,
    }

    impl Digest {
      /// Bytes consumed per step.
      pub const BLOCK_SIZE: usize = 1;

      /// Create an empty digest over `poly`.
      #[inline]
      #[must_use]
      pub fn new(poly: Arc<Poly>) -> Self {
        Self { poly, crc: 0 }
      }

      /// The polynomial this digest uses.
      #[inline]
      #[must_use]
      pub fn poly(&self) -> &Arc<Poly> {
        &self.poly
      }

      /// The current checksum as big-endian bytes.
      #[inline]
      #[must_use]
      pub fn sum_bytes(&self) -> [u8; SIZE] {
        self.crc.to_be_bytes()
      }

      /// Append the big-endian checksum to `out`.
      #[inline]
      pub fn append_sum(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.sum_bytes());
      }
    }

    impl core::fmt::Debug for Digest {
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Digest")
          .field("poly", &self.poly)
          .field("crc", &format_args!("{:#x}", self.crc))
          .finish()
      }
    }

    impl Checksum for Digest {
      const OUTPUT_SIZE: usize = SIZE;
      type Output = $w;

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.crc = self.poly.update(self.crc, data);
      }

      #[inline]
      fn finalize(&self) -> $w {
        self.crc
      }

      #[inline]
      fn reset(&mut self) {
        self.crc = 0;
      }
    }

    impl StateMarshal for Digest {
      type State = [u8; MARSHALED_SIZE];

      fn marshal_binary(&self) -> Self::State {
        let mut out = [0u8; MARSHALED_SIZE];
        let (magic, rest) = out.split_at_mut(MAGIC.len());
        magic.copy_from_slice(MAGIC);
        let (table_sum, crc) = rest.split_at_mut(SIZE);
        table_sum.copy_from_slice(&self.poly.table_sum().to_be_bytes());
        crc.copy_from_slice(&self.crc.to_be_bytes());
        out
      }

      fn unmarshal_binary(&mut self, state: &[u8]) -> Result<(), UnmarshalError> {
        let Some(rest) = state.strip_prefix(MAGIC) else {
          return Err(UnmarshalError::InvalidIdentifier);
        };
        if state.len() != MARSHALED_SIZE {
          return Err(UnmarshalError::InvalidSize);
        }
        let Some((table_sum, crc)) = rest.split_first_chunk::<SIZE>() else {
          return Err(UnmarshalError::InvalidSize);
        };
        let Some(crc) = crc.first_chunk::<SIZE>() else {
          return Err(UnmarshalError::InvalidSize);
        };
        if <$w>::from_be_bytes(*table_sum) != self.poly.table_sum() {
          return Err(UnmarshalError::TableMismatch);
        }
        self.crc = <$w>::from_be_bytes(*crc);
        Ok(())
      }
    }

    #[cfg(feature = "std")]
    impl std::io::Write for Digest {
      #[inline]
      fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Checksum::update(self, buf);
        Ok(buf.len())
      }

      #[inline]
      fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
      }
    }

    #[cfg(feature = "diag")]
    pub(crate) fn diagnose(poly: &Arc<Poly>, len: usize) -> crate::diag::PolyDiag {
      crate::diag::PolyDiag::new($width, u64::from(poly.poly), poly.name(), Poly::is_shared(poly), len)
    }
  };
}
