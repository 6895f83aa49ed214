//! # lane-adler32
//!
//! An Adler-32 checksum whose inner loop works on batches of vector lanes.
//!
//! ## Features
//!
//! - Results identical to the byte-at-a-time definition for every input
//! - Support `no_std` (with `default-features = false`)
//! - Runtime CPU feature detection (when `std` enabled)
//! - NEON accumulation engine on ARM, scalar fallback everywhere else
//! - Incremental use: a checksum can seed the next call
//!
//! ## Quick start
//!
//! ```rust
//! use lane_adler32::Adler32;
//!
//! let mut adler = Adler32::new();
//! adler.write(b"rust is pretty cool, man");
//! let hash = adler.finish();
//!
//! println!("{}", hash);
//! // 1921255656
//! ```
//!
//! Streaming callers can keep only the checksum between buffers:
//!
//! ```rust
//! use lane_adler32::update;
//!
//! let first = update(1, Some(b"Wiki"));
//! assert_eq!(update(first, Some(b"pedia")), 0x11E6_0398);
//! assert_eq!(update(first, None), 1);
//! ```
//!
//! ## Feature flags
//!
//! * `std` - Enabled by default
//!
//! Enables std support, see [CPU Feature Detection](#cpu-feature-detection) for
//! runtime detection support, and the [`read`] / [`bufread`] helpers.
//!
//! * `nightly`
//!
//! Enables the NEON engine on 32-bit `arm`, whose intrinsics are unstable.
//!
//! * `const-generics` - Enabled by default
//!
//! Enables [`Adler32Hash`] for byte arrays by value.
//!
//! ## Strategies
//!
//! | strategy | arch                        | notes                              |
//! | -------- | --------------------------- | ---------------------------------- |
//! | `neon`   | `aarch64`, `arm` (nightly)  | 32 bytes per iteration             |
//! | `lanes`  | any                         | NEON lane arithmetic, no intrinsics |
//! | `scalar` | any                         | byte-at-a-time reference           |
//!
//! ## CPU Feature Detection
//! With `std`, NEON support is detected at runtime through
//! `std::arch::is_aarch64_feature_detected` when an `Adler32` is constructed.
//! Without `std`, detection falls back to the `target-feature` flags supplied
//! to rustc.

#![warn(
    clippy::all,
    clippy::cargo,
    clippy::complexity,
    clippy::correctness,
    clippy::nursery,
    clippy::pedantic,
    clippy::perf,
    clippy::restriction,
    clippy::style,
    clippy::suspicious
)]
#![allow(clippy::as_conversions, reason = "Redundant with specific checks.")]
#![allow(
    clippy::arithmetic_side_effects,
    reason = "Accumulator growth is bounded by NMAX and proven at compile time."
)]
#![allow(
    clippy::blanket_clippy_restriction_lints,
    reason = "Overly verbose to individually enable."
)]
#![allow(clippy::similar_names, reason = "Convention.")]
#![allow(clippy::implicit_return, reason = "Follow Rust idiomatic returns.")]
#![allow(clippy::inline_always, reason = "Intended.")]
#![allow(clippy::min_ident_chars, reason = "Convention.")]
#![allow(clippy::missing_inline_in_public_items, reason = "Not beneficial.")]
#![allow(clippy::mod_module_files, reason = "Maintain existing layout.")]
#![allow(clippy::multiple_unsafe_ops_per_block, reason = "Readability.")]
#![allow(clippy::undocumented_unsafe_blocks, reason = "Intrinsics.")]
#![allow(
    clippy::single_call_fn,
    reason = "Single use functions are used for clarity and composability."
)]
#![allow(clippy::separated_literal_suffix, reason = "Desired style.")]
#![allow(clippy::single_char_lifetime_names, reason = "Convention.")]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(
    all(feature = "nightly", target_arch = "arm"),
    feature(arm_target_feature, stdarch_arm_feature_detection, stdarch_arm_neon_intrinsics)
)]

#[doc(hidden)]
pub mod hash;
#[doc(hidden)]
pub mod imp;

pub use imp::Strategy;

#[cfg(feature = "std")]
pub mod bufread {
    //! BufRead-based hashing.
    //!
    //! Hashes whatever the reader has buffered without copying it.
    //!
    //! # Example
    //! ```rust
    //! use std::io::{BufReader, Cursor};
    //!
    //! use lane_adler32::bufread::adler32;
    //!
    //! let mut reader = BufReader::new(Cursor::new(b"Wikipedia"));
    //! assert_eq!(adler32(&mut reader).unwrap(), 0x11E6_0398);
    //! ```
    use std::io::{BufRead, ErrorKind, Result};

    use crate::Adler32;

    /// Compute Adler-32 hash on buf reader until EOF.
    ///
    /// # Errors
    ///
    /// Returns a non-recoverable IO error; that is, not:
    /// - `ErrorKind::Interrupted`
    /// - `ErrorKind::UnexpectedEof`
    pub fn adler32<R: BufRead>(reader: &mut R) -> Result<u32> { update(1, reader) }

    /// Continues `checksum` with everything `reader` yields until EOF.
    ///
    /// # Errors
    ///
    /// See [`adler32`].
    pub fn update<R: BufRead>(checksum: u32, reader: &mut R) -> Result<u32> {
        let mut hash = Adler32::from_checksum(checksum);

        loop {
            let consumed = match reader.fill_buf() {
                | Ok([]) => return Ok(hash.finish()),
                | Ok(buf) => {
                    hash.write(buf);
                    buf.len()
                },
                | Err(err) => match err.kind() {
                    | ErrorKind::Interrupted => continue,
                    | ErrorKind::UnexpectedEof => return Ok(hash.finish()),
                    | _ => return Err(err),
                },
            };

            reader.consume(consumed);
        }
    }
}

#[cfg(feature = "std")]
pub mod read {
    //! Reader-based hashing.
    //!
    //! # Example
    //! ```rust
    //! use std::io::Cursor;
    //!
    //! use lane_adler32::read::adler32;
    //!
    //! let mut reader = Cursor::new(b"Wikipedia");
    //! assert_eq!(adler32(&mut reader).unwrap(), 0x11E6_0398);
    //! ```
    use std::io::{Read, Result};

    use crate::Adler32;

    /// Size of the stack buffer reads are copied into.
    const BUF_SIZE: usize = 8192;

    /// Compute Adler-32 hash on reader until EOF.
    ///
    /// # Errors
    ///
    /// Returns an IO error which may be recoverable.
    pub fn adler32<R: Read>(reader: &mut R) -> Result<u32> { update(1, reader) }

    /// Continues `checksum` with everything `reader` yields until EOF.
    ///
    /// # Errors
    ///
    /// Returns an IO error which may be recoverable.
    pub fn update<R: Read>(checksum: u32, reader: &mut R) -> Result<u32> {
        let mut hash = Adler32::from_checksum(checksum);
        let mut buf = [0; BUF_SIZE];

        loop {
            match reader.read(&mut buf)? {
                | 0 => return Ok(hash.finish()),
                | n => {
                    #[expect(
                        clippy::indexing_slicing,
                        reason = "A panic would mean the Read trait has been implemented \
                                  incorrectly."
                    )]
                    hash.write(&buf[..n]);
                },
            }
        }
    }
}

/// An adler32 hash generator type.
#[derive(Clone, Debug)]
pub struct Adler32 {
    /// The low-order 16 bits of the sum.
    a: u16,
    /// The high-order 16 bits of the sum.
    b: u16,
    /// Strategy that `update` was resolved from.
    strategy: Strategy,
    update: imp::Adler32Imp,
}

impl Adler32 {
    /// Return the hash value for the values written so far.
    ///
    /// Despite its name, the method does not reset the hasher’s internal state.
    /// Additional writes will continue from the current value. If you need
    /// to start a fresh hash value, you will have to use `reset`.
    #[must_use]
    pub const fn finish(&self) -> u32 {
        imp::combine::encode([self.a as u32, self.b as u32])
    }

    /// Construct a new `Adler32` using existing checksum.
    ///
    /// # Examples
    /// ```rust
    /// use lane_adler32::Adler32;
    ///
    /// let mut adler = Adler32::from_checksum(0xDEAD_BEAF);
    /// ```
    #[must_use]
    pub fn from_checksum(checksum: u32) -> Self {
        let mut adler = Self::new();
        adler.set_checksum(checksum);
        adler
    }

    /// Construct a new `Adler32` with the fastest strategy this CPU supports.
    ///
    /// # Examples
    /// ```rust
    /// use lane_adler32::Adler32;
    ///
    /// let mut adler = Adler32::new();
    /// ```
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Construct a new `Adler32` bound to `strategy`.
    ///
    /// Returns `None` if the CPU cannot run it.
    ///
    /// # Examples
    /// ```rust
    /// use lane_adler32::{Adler32, Strategy};
    ///
    /// let mut adler = Adler32::with_strategy(Strategy::Lanes).unwrap();
    /// adler.write(b"Wikipedia");
    /// assert_eq!(adler.finish(), 0x11E6_0398);
    /// ```
    #[must_use]
    pub fn with_strategy(strategy: Strategy) -> Option<Self> {
        let update = strategy.imp()?;

        Some(Self {
            a: 1,
            b: 0,
            strategy,
            update,
        })
    }

    /// The strategy this hasher runs.
    #[must_use]
    pub const fn strategy(&self) -> Strategy { self.strategy }

    /// Reset the internal state.
    pub const fn reset(&mut self) {
        self.a = 1;
        self.b = 0;
    }

    /// Computes hash for supplied data and store results in an internal state.
    pub fn write(&mut self, data: &[u8]) {
        let checksum = (self.update)(self.finish(), Some(data));
        self.set_checksum(checksum);
    }

    #[expect(clippy::cast_possible_truncation, reason = "Both halves fit in 16 bits.")]
    const fn set_checksum(&mut self, checksum: u32) {
        let [a, b] = imp::combine::decode(checksum);
        self.a = a as u16;
        self.b = b as u16;
    }
}

impl Default for Adler32 {
    fn default() -> Self {
        let strategy = imp::selected();

        Self {
            a: 1,
            b: 0,
            strategy,
            update: strategy.imp().unwrap_or(imp::scalar::update),
        }
    }
}

/// An Adler-32 hash-able type.
pub trait Adler32Hash {
    /// Feeds this value into `Adler32`.
    fn hash(&self) -> u32;
}

/// Compute Adler-32 hash on `Adler32Hash` type.
///
/// # Arguments
/// * `hash` - A Adler-32 hash-able type.
///
/// # Examples
/// ```rust
/// use lane_adler32::adler32;
///
/// let hash = adler32(b"Adler-32");
/// assert_eq!(hash, 0x0C34_027B);
/// ```
pub fn adler32<H: Adler32Hash + ?Sized>(hash: &H) -> u32 { hash.hash() }

/// Continues `checksum` over `data` using the fastest available strategy.
///
/// `None` is the missing-buffer case and always returns 1.
#[must_use]
pub fn update(checksum: u32, data: Option<&[u8]>) -> u32 { imp::get_imp()(checksum, data) }
