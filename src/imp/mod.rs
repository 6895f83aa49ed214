//! Checksum strategies and the dispatcher that picks one.

use core::fmt;
#[cfg(feature = "std")]
use std::sync::LazyLock;

pub mod combine;
pub mod lanes;
pub mod neon;
pub mod reduce;
pub mod scalar;

/// Signature shared by every strategy: `(seed, data) -> checksum`.
///
/// A `None` buffer yields 1 regardless of the seed.
pub type Adler32Imp = fn(u32, Option<&[u8]>) -> u32;

/// A checksum implementation that can be selected at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// NEON accumulation engine; only available on ARM with NEON.
    Neon,
    /// The NEON lane arithmetic carried out on plain integers.
    Lanes,
    /// Byte-at-a-time reference loop.
    Scalar,
}

impl Strategy {
    /// Every strategy, fastest first.
    pub const ALL: [Self; 3] = [Self::Neon, Self::Lanes, Self::Scalar];

    /// The fastest strategy this CPU can run.
    #[must_use]
    pub fn detect() -> Self {
        if neon::get_imp().is_some() { Self::Neon } else { Self::Scalar }
    }

    /// Resolves the update function, or `None` if the CPU lacks support.
    #[must_use]
    pub fn imp(self) -> Option<Adler32Imp> {
        match self {
            | Self::Neon => neon::get_imp(),
            | Self::Lanes => Some(lanes::update as Adler32Imp),
            | Self::Scalar => Some(scalar::update as Adler32Imp),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            | Self::Neon => "neon",
            | Self::Lanes => "lanes",
            | Self::Scalar => "scalar",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// Strategy detected once at first use.
#[cfg(feature = "std")]
static SELECTED: LazyLock<Strategy> = LazyLock::new(|| {
    let strategy = Strategy::detect();
    log::trace!("adler32: selected {strategy} strategy");
    strategy
});

/// The strategy [`get_imp`] resolves to.
///
/// With `std` detection runs once and is cached; without it detection is
/// compile-time only and cheap to repeat.
#[must_use]
pub fn selected() -> Strategy {
    #[cfg(feature = "std")]
    {
        *SELECTED
    }

    #[cfg(not(feature = "std"))]
    {
        Strategy::detect()
    }
}

/// Resolves the fastest available update function.
#[must_use]
pub fn get_imp() -> Adler32Imp { selected().imp().unwrap_or(scalar::update) }

#[cfg(test)]
mod tests {
    use super::{Strategy, get_imp, selected};

    #[test]
    fn portable_strategies_are_always_available() {
        assert!(Strategy::Lanes.imp().is_some());
        assert!(Strategy::Scalar.imp().is_some());
    }

    #[test]
    fn detected_strategy_is_available() {
        assert!(Strategy::detect().imp().is_some());
    }

    #[test]
    fn selection_is_stable() {
        assert_eq!(selected(), Strategy::detect());
        assert_eq!(selected(), selected());
    }

    #[test]
    fn names() {
        let names: Vec<_> = Strategy::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["neon", "lanes", "scalar"]);
    }

    #[test]
    fn every_strategy_agrees() {
        let data: Vec<u8> = (0..20_000_u32).map(|i| (i * 31 % 251) as u8).collect();
        let expected = adler::adler32_slice(&data);

        assert_eq!(get_imp()(1, Some(&data)), expected);
        for strategy in Strategy::ALL {
            if let Some(update) = strategy.imp() {
                assert_eq!(update(1, Some(&data)), expected, "{strategy}");
                assert_eq!(update(1, None), 1, "{strategy}");
            }
        }
    }
}
