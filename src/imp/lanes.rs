//! Portable lane engine.
//!
//! Performs the same widening pairwise adds and multiply-accumulates as the
//! NEON engine, lane for lane, on plain arrays. It needs no CPU support and
//! serves as a cross-check for the vector code on any host.

use super::reduce::{self, Accumulate, GROUP, TAPS, WINDOW};

type U16x8 = [u16; 8];
type U32x4 = [u32; 4];

struct Lanes;

impl Accumulate for Lanes {
    #[inline]
    fn accumulate(pair: &mut [u32; 2], data: &[u8], groups: usize) { accum32(pair, data, groups) }
}

/// Computes the checksum of `data` continuing from `seed`.
#[must_use]
pub fn update(seed: u32, data: Option<&[u8]>) -> u32 { reduce::update::<Lanes>(seed, data) }

#[expect(clippy::indexing_slicing, reason = "Fixed-width halves of fixed-width windows.")]
fn accum32(pair: &mut [u32; 2], data: &[u8], groups: usize) {
    debug_assert!(
        groups * GROUP <= data.len(),
        "Not enough data for {} groups (got {} bytes)",
        groups,
        data.len()
    );

    let (first, second) = TAPS.split_at(GROUP);

    let mut adacc: U32x4 = [pair[0], 0, 0, 0];
    let mut s2acc: U32x4 = [pair[1], 0, 0, 0];

    let windows = data[..groups * GROUP].chunks_exact(WINDOW);
    let lone = windows.remainder();

    for window in windows {
        let (d0, d1) = window.split_at(GROUP);

        s2acc = add_shifted(s2acc, adacc, 5);

        let adler = padal_u8(paddl_u8(d0), d1);

        let mut sum2 = mull_u8(&first[..8], &d0[..8]);
        sum2 = mlal_u8(sum2, &first[8..], &d0[8..]);
        sum2 = mlal_u8(sum2, &second[..8], &d1[..8]);
        sum2 = mlal_u8(sum2, &second[8..], &d1[8..]);

        adacc = padal_u16(adacc, adler);
        s2acc = padal_u16(s2acc, sum2);
    }

    if !lone.is_empty() {
        s2acc = add_shifted(s2acc, adacc, 4);

        let adler = paddl_u8(lone);

        let mut sum2 = mull_u8(&second[..8], &lone[..8]);
        sum2 = mlal_u8(sum2, &second[8..], &lone[8..]);

        adacc = padal_u16(adacc, adler);
        s2acc = padal_u16(s2acc, sum2);
    }

    *pair = [horizontal_sum(adacc), horizontal_sum(s2acc)];
}

/// `acc + (v << shift)` per lane.
#[inline(always)]
fn add_shifted(acc: U32x4, v: U32x4, shift: u32) -> U32x4 {
    let mut out = acc;
    for (lane, x) in out.iter_mut().zip(v) {
        *lane = lane.wrapping_add(x << shift);
    }

    out
}

/// Adds adjacent bytes of a 16-byte group into eight 16-bit lanes.
#[inline(always)]
fn paddl_u8(v: &[u8]) -> U16x8 { padal_u8([0; 8], v) }

#[inline(always)]
fn padal_u8(acc: U16x8, v: &[u8]) -> U16x8 {
    let mut out = acc;
    for (lane, pair) in out.iter_mut().zip(v.chunks_exact(2)) {
        let sum: u16 = pair.iter().copied().map(u16::from).sum();
        *lane = lane.wrapping_add(sum);
    }

    out
}

/// Widening multiply of eight bytes by eight taps.
#[inline(always)]
fn mull_u8(taps: &[u8], v: &[u8]) -> U16x8 { mlal_u8([0; 8], taps, v) }

#[inline(always)]
fn mlal_u8(acc: U16x8, taps: &[u8], v: &[u8]) -> U16x8 {
    let mut out = acc;
    for ((lane, tap), byte) in out.iter_mut().zip(taps).zip(v) {
        *lane = lane.wrapping_add(u16::from(*tap) * u16::from(*byte));
    }

    out
}

/// Adds adjacent 16-bit lanes into four 32-bit accumulator lanes.
#[inline(always)]
fn padal_u16(acc: U32x4, v: U16x8) -> U32x4 {
    let mut out = acc;
    for (lane, pair) in out.iter_mut().zip(v.chunks_exact(2)) {
        let sum: u32 = pair.iter().copied().map(u32::from).sum();
        *lane = lane.wrapping_add(sum);
    }

    out
}

/// Pairwise reduction of four lanes, in the order the vector code uses.
#[inline(always)]
const fn horizontal_sum(v: U32x4) -> u32 {
    v[0].wrapping_add(v[1]).wrapping_add(v[2].wrapping_add(v[3]))
}
