#![no_main]
#[macro_use]
extern crate libfuzzer_sys;

use lane_adler32::imp::{Strategy, scalar};

fuzz_target!(|input: (u32, &[u8])| {
    let (seed, data) = input;
    let expected = scalar::update(seed, Some(data));

    for strategy in Strategy::ALL {
        if let Some(update) = strategy.imp() {
            assert_eq!(update(seed, Some(data)), expected, "{strategy}");
        }
    }
});
