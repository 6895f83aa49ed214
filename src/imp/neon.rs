#[cfg(any(
    target_arch = "aarch64",
    all(feature = "nightly", target_arch = "arm", target_feature = "v7")
))]
mod imp {
    #[cfg(target_arch = "aarch64")]
    use core::arch::aarch64::{
        vaddq_u32, vdupq_n_u32, vget_high_u8, vget_high_u32, vget_lane_u32, vget_low_u8,
        vget_low_u32, vld1q_u8, vmlal_u8, vmull_u8, vpadalq_u8, vpadalq_u16, vpadd_u32, vpaddlq_u8,
        vsetq_lane_u32, vshlq_n_u32,
    };
    #[cfg(target_arch = "arm")]
    use core::arch::arm::{
        vaddq_u32, vdupq_n_u32, vget_high_u8, vget_high_u32, vget_lane_u32, vget_low_u8,
        vget_low_u32, vld1q_u8, vmlal_u8, vmull_u8, vpadalq_u8, vpadalq_u16, vpadd_u32, vpaddlq_u8,
        vsetq_lane_u32, vshlq_n_u32,
    };

    use crate::imp::reduce::{self, Accumulate, GROUP, TAPS, WINDOW};

    /// Only constructed behind `get_imp`, which checks for NEON first.
    struct Neon;

    impl Accumulate for Neon {
        #[inline(always)]
        fn accumulate(pair: &mut [u32; 2], data: &[u8], groups: usize) {
            unsafe { accum32(pair, data, groups) }
        }
    }

    pub fn update(seed: u32, data: Option<&[u8]>) -> u32 { reduce::update::<Neon>(seed, data) }

    /// Handles 32 bytes per iteration and a lone 16-byte group at the end.
    #[inline]
    #[cfg_attr(target_arch = "arm", target_feature(enable = "v7,neon"))]
    #[cfg_attr(target_arch = "aarch64", target_feature(enable = "neon"))]
    unsafe fn accum32(pair: &mut [u32; 2], data: &[u8], groups: usize) {
        debug_assert!(
            groups * GROUP <= data.len(),
            "Not enough data for {} groups (got {} bytes)",
            groups,
            data.len()
        );

        unsafe {
            let taps = TAPS.as_ptr();
            let t0 = vld1q_u8(taps);
            let t1 = vld1q_u8(taps.add(GROUP));
            let n_first_low = vget_low_u8(t0);
            let n_first_high = vget_high_u8(t0);
            let n_second_low = vget_low_u8(t1);
            let n_second_high = vget_high_u8(t1);

            let mut adacc = vsetq_lane_u32::<0>(pair[0], vdupq_n_u32(0));
            let mut s2acc = vsetq_lane_u32::<0>(pair[1], vdupq_n_u32(0));

            #[expect(clippy::indexing_slicing, reason = "Asserted above.")]
            let windows = data[..groups * GROUP].chunks_exact(WINDOW);
            let lone = windows.remainder();

            for window in windows {
                let ptr = window.as_ptr();
                let d0 = vld1q_u8(ptr);
                let d1 = vld1q_u8(ptr.add(GROUP));

                s2acc = vaddq_u32(s2acc, vshlq_n_u32::<5>(adacc));

                let mut adler = vpaddlq_u8(d0);
                adler = vpadalq_u8(adler, d1);

                let mut sum2 = vmull_u8(n_first_low, vget_low_u8(d0));
                sum2 = vmlal_u8(sum2, n_first_high, vget_high_u8(d0));
                sum2 = vmlal_u8(sum2, n_second_low, vget_low_u8(d1));
                sum2 = vmlal_u8(sum2, n_second_high, vget_high_u8(d1));

                adacc = vpadalq_u16(adacc, adler);
                s2acc = vpadalq_u16(s2acc, sum2);
            }

            if !lone.is_empty() {
                let d0 = vld1q_u8(lone.as_ptr());

                s2acc = vaddq_u32(s2acc, vshlq_n_u32::<4>(adacc));

                let adler = vpaddlq_u8(d0);

                let mut sum2 = vmull_u8(n_second_low, vget_low_u8(d0));
                sum2 = vmlal_u8(sum2, n_second_high, vget_high_u8(d0));

                adacc = vpadalq_u16(adacc, adler);
                s2acc = vpadalq_u16(s2acc, sum2);
            }

            let adacc2 = vpadd_u32(vget_low_u32(adacc), vget_high_u32(adacc));
            let s2acc2 = vpadd_u32(vget_low_u32(s2acc), vget_high_u32(s2acc));
            let sums = vpadd_u32(adacc2, s2acc2);

            pair[0] = vget_lane_u32::<0>(sums);
            pair[1] = vget_lane_u32::<1>(sums);
        }
    }
}

use super::Adler32Imp;

/// Resolves the NEON strategy if the CPU supports it.
#[must_use]
pub fn get_imp() -> Option<Adler32Imp> { get_imp_inner() }

#[inline]
#[cfg(all(feature = "std", target_arch = "aarch64"))]
fn get_imp_inner() -> Option<Adler32Imp> {
    std::arch::is_aarch64_feature_detected!("neon").then_some(imp::update as Adler32Imp)
}

#[inline]
#[cfg(all(feature = "std", feature = "nightly", target_arch = "arm", target_feature = "v7"))]
fn get_imp_inner() -> Option<Adler32Imp> {
    std::arch::is_arm_feature_detected!("neon").then_some(imp::update as Adler32Imp)
}

#[inline]
#[cfg(all(
    not(feature = "std"),
    target_feature = "neon",
    any(
        target_arch = "aarch64",
        all(feature = "nightly", target_arch = "arm", target_feature = "v7")
    )
))]
#[expect(clippy::unnecessary_wraps, reason = "Match API.")]
fn get_imp_inner() -> Option<Adler32Imp> { Some(imp::update) }

#[inline]
#[cfg(not(any(
    all(feature = "std", target_arch = "aarch64"),
    all(feature = "std", feature = "nightly", target_arch = "arm", target_feature = "v7"),
    all(
        not(feature = "std"),
        target_feature = "neon",
        any(
            target_arch = "aarch64",
            all(feature = "nightly", target_arch = "arm", target_feature = "v7")
        )
    )
)))]
fn get_imp_inner() -> Option<Adler32Imp> { None }
