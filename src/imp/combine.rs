//! Packing of the two running sums into the 32-bit checksum and back.

/// Splits a checksum into its `[a, b]` running sums.
///
/// Neither sum is reduced here; a seed with out-of-range halves is carried as
/// is until the first reduction step.
#[must_use]
#[inline(always)]
pub const fn decode(checksum: u32) -> [u32; 2] { [checksum & 0xFFFF, (checksum >> 16) & 0xFFFF] }

/// Packs `[a, b]` into `b << 16 | a`.
#[must_use]
#[inline(always)]
pub const fn encode(pair: [u32; 2]) -> u32 { (pair[1] << 16) | pair[0] }
