#![no_main]
#[macro_use]
extern crate libfuzzer_sys;

fuzz_target!(|input: (u16, &[u8])| {
    let (at, data) = input;
    let at = usize::from(at).min(data.len());
    let (head, tail) = data.split_at(at);

    let whole = lane_adler32::update(1, Some(data));
    let resumed = lane_adler32::update(lane_adler32::update(1, Some(head)), Some(tail));

    assert_eq!(whole, resumed, "split at {at}");
});
