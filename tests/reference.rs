use lane_adler32::{Adler32, Strategy as ChecksumStrategy, update};
use proptest::prelude::*;

const MOD: u32 = 65521;

/// The textbook definition, reducing after every byte.
fn sequential(seed: u32, data: &[u8]) -> u32 {
    let mut a = seed & 0xFFFF;
    let mut b = (seed >> 16) & 0xFFFF;

    for &byte in data {
        a = (a + u32::from(byte)) % MOD;
        b = (b + a) % MOD;
    }

    (b << 16) | a
}

/// Seeds whose halves are already reduced, as any produced checksum is.
fn reduced_seed() -> impl Strategy<Value = u32> {
    (0..MOD, 0..MOD).prop_map(|(a, b)| (b << 16) | a)
}

fn strategies() -> impl Iterator<Item = (ChecksumStrategy, lane_adler32::imp::Adler32Imp)> {
    ChecksumStrategy::ALL
        .into_iter()
        .filter_map(|strategy| strategy.imp().map(|imp| (strategy, imp)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn matches_sequential_definition(
        seed in reduced_seed(),
        data in prop::collection::vec(any::<u8>(), 0..20_000),
    ) {
        let expected = sequential(seed, &data);
        for (strategy, imp) in strategies() {
            prop_assert_eq!(imp(seed, Some(&data)), expected, "{}", strategy);
        }
    }

    #[test]
    fn unreduced_seeds_match_sequential_definition(
        seed in any::<u32>(),
        data in prop::collection::vec(any::<u8>(), 1..12_000),
    ) {
        let expected = sequential(seed, &data);
        for (strategy, imp) in strategies() {
            prop_assert_eq!(imp(seed, Some(&data)), expected, "{}", strategy);
        }
    }

    #[test]
    fn splitting_does_not_change_the_result(
        data in prop::collection::vec(any::<u8>(), 0..20_000),
        split in any::<prop::sample::Index>(),
    ) {
        let k = split.index(data.len() + 1);
        let (head, tail) = data.split_at(k);

        for (strategy, imp) in strategies() {
            let resumed = imp(imp(1, Some(head)), Some(tail));
            prop_assert_eq!(resumed, imp(1, Some(&data)), "{}", strategy);
        }
    }

    #[test]
    fn missing_buffer_is_always_one(seed in any::<u32>()) {
        for (strategy, imp) in strategies() {
            prop_assert_eq!(imp(seed, None), 1, "{}", strategy);
        }
    }

    #[test]
    fn saturated_input(len in 0_usize..(3 * 5552 + 64)) {
        let data = vec![0xFF; len];
        let expected = sequential(0xFFF0_FFF0, &data);
        for (strategy, imp) in strategies() {
            prop_assert_eq!(imp(0xFFF0_FFF0, Some(&data)), expected, "{}", strategy);
        }
    }
}

#[test]
fn wikipedia() {
    for (strategy, imp) in strategies() {
        assert_eq!(imp(1, Some(b"Wikipedia")), 0x11E6_0398, "{strategy}");
    }
}

#[test]
fn identity() {
    assert_eq!(update(1, Some(&[])), 1);
    assert_eq!(update(0x1234_5678, Some(&[])), 0x1234_5678);
    assert_eq!(update(1, None), 1);
}

#[test]
fn boundary_lengths() {
    let data: Vec<u8> = (0..=u8::MAX).cycle().take(5553 + 32).collect();

    for len in [0, 1, 15, 16, 17, 31, 32, 33, 48, 5551, 5552, 5553, 5552 + 16, 5553 + 32] {
        let data = &data[..len];
        for (strategy, imp) in strategies() {
            assert_eq!(imp(1, Some(data)), sequential(1, data), "{strategy} len({len})");
            assert_eq!(imp(1, Some(data)), adler::adler32_slice(data), "{strategy} len({len})");
        }
    }
}

#[test]
fn large_buffers_do_not_drift() {
    let data: Vec<u8> = (0..300_000_u32)
        .map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8)
        .collect();
    let expected = sequential(1, &data);

    for (strategy, imp) in strategies() {
        let first = imp(1, Some(&data));
        assert_eq!(first, expected, "{strategy}");
        assert_eq!(imp(1, Some(&data)), first, "{strategy}");
    }

    let mut adler = Adler32::new();
    for piece in data.chunks(4096 + 7) {
        adler.write(piece);
    }
    assert_eq!(adler.finish(), expected);
}

#[test]
fn readers() {
    use std::io::{BufReader, Cursor};

    let data: Vec<u8> = (0..50_000_u32).map(|i| (i % 253) as u8).collect();
    let expected = adler::adler32_slice(&data);

    assert_eq!(lane_adler32::read::adler32(&mut Cursor::new(&data)).unwrap(), expected);

    let mut reader = BufReader::with_capacity(1000, Cursor::new(&data));
    assert_eq!(lane_adler32::bufread::adler32(&mut reader).unwrap(), expected);

    let (head, tail) = data.split_at(12_345);
    let resumed = lane_adler32::read::update(
        lane_adler32::read::adler32(&mut Cursor::new(head)).unwrap(),
        &mut Cursor::new(tail),
    )
    .unwrap();
    assert_eq!(resumed, expected);
}
