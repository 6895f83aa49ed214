//! Chunked driver shared by the lane-based strategies.
//!
//! The input is cut into chunks of at most [`NMAX`] bytes. Whole 16-byte
//! groups of each chunk go through an [`Accumulate`] engine, after which both
//! running sums are reduced modulo [`MOD`]. Whatever is left over once fewer
//! than 16 bytes remain goes through [`handle_tail`].

use super::combine::{decode, encode};

/// The largest prime smaller than 65536.
#[expect(clippy::decimal_literal_representation, reason = "Readability.")]
pub const MOD: u32 = 65521;
/// Bytes that may be accumulated between two reductions without `b`
/// overflowing a `u32`.
pub const NMAX: usize = 5552;
/// Width of one vector load.
pub const GROUP: usize = 16;
/// Two groups, the unit of the unrolled engine loop.
pub const WINDOW: usize = GROUP * 2;

/// Per-byte weights of `b` inside one 32-byte window.
pub const TAPS: [u8; WINDOW] = [
    32, 31, 30, 29, 28, 27, 26, 25, 24, 23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10, 9,
    8, 7, 6, 5, 4, 3, 2, 1,
];

// Compile-time proofs that operations cannot overflow
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "Intended."
)]
const _: () = {
    // Seeds are not reduced before the first chunk, so each half may be 0xFFFF.
    const MAX_SEED: u64 = 0xFFFF;
    const N: u64 = NMAX as u64;

    assert!(NMAX % GROUP == 0, "NMAX must be a whole number of groups");
    assert!(
        MAX_SEED + N * (u8::MAX as u64) <= (u32::MAX as u64),
        "Could not prove that accumulating NMAX bytes into `a` cannot overflow"
    );
    assert!(
        MAX_SEED + MAX_SEED * N + (u8::MAX as u64) * (N * (N + 1) / 2) <= (u32::MAX as u64),
        "Could not prove b accumulation is safe; b grows by `a * NMAX` plus the weighted sum of \
         NMAX bytes"
    );
    assert!(
        (u8::MAX as u64) * (32 + 24 + 16 + 8) <= (u16::MAX as u64),
        "Could not prove that a 16-bit weighted lane cannot overflow within one window"
    );
};

/// An engine that folds whole 16-byte groups into the running sums.
pub trait Accumulate {
    /// Adds the contribution of the first `groups * 16` bytes of `data` to
    /// `pair`, without reducing.
    ///
    /// Callers guarantee `groups * 16 <= data.len()` and `groups * 16 <= NMAX`.
    fn accumulate(pair: &mut [u32; 2], data: &[u8], groups: usize);
}

/// Computes the checksum of `data` continuing from `seed` with engine `E`.
///
/// `None` stands for a missing buffer and always yields 1, whatever the seed.
#[must_use]
pub fn update<E: Accumulate>(seed: u32, data: Option<&[u8]>) -> u32 {
    let Some(data) = data else {
        return 1;
    };

    let mut pair = decode(seed);
    let len = data.len();
    let mut n = NMAX;
    let mut done = 0;
    let mut i = 0;

    while i < len {
        // Subtracting keeps this correct when `i + n` would not fit in a usize.
        if len - i < n {
            n = len - i;
        }

        if n < GROUP {
            break;
        }

        #[expect(
            clippy::integer_division,
            clippy::integer_division_remainder_used,
            reason = "Whole groups only."
        )]
        let groups = n / GROUP;

        #[expect(clippy::indexing_slicing, reason = "`i < len`.")]
        E::accumulate(&mut pair, &data[i..], groups);
        reduce(&mut pair);

        done += groups * GROUP;
        i += n;
    }

    if done < len {
        #[expect(clippy::indexing_slicing, reason = "`done < len`.")]
        handle_tail(&mut pair, &data[done..]);
        reduce(&mut pair);
    }

    encode(pair)
}

/// Feeds `data` one byte at a time: `a += byte; b += a`.
///
/// Used for the sub-group remainder, so `data` is normally shorter than 16
/// bytes.
#[inline]
pub fn handle_tail(pair: &mut [u32; 2], data: &[u8]) {
    debug_assert!(
        data.len() <= NMAX,
        "Tail too long to accumulate without reduction (got {})",
        data.len()
    );

    let [mut a, mut b] = *pair;
    for byte in data {
        a = a.wrapping_add(u32::from(*byte));
        b = b.wrapping_add(a);
    }

    *pair = [a, b];
}

#[inline(always)]
fn reduce(pair: &mut [u32; 2]) {
    pair[0] %= MOD;
    pair[1] %= MOD;
}
