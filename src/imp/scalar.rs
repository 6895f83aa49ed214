use super::{
    combine::{decode, encode},
    reduce::{MOD, NMAX},
};

/// Byte-at-a-time checksum of `data` continuing from `seed`.
///
/// Reduction is deferred to `NMAX` boundaries. An empty buffer returns the
/// seed untouched, like the lane strategies do.
#[must_use]
pub fn update(seed: u32, data: Option<&[u8]>) -> u32 {
    let Some(data) = data else {
        return 1;
    };

    let [mut a, mut b] = decode(seed);

    let chunks = data.chunks_exact(NMAX);
    let remainder = chunks.remainder();

    for chunk in chunks {
        for byte in chunk {
            a = a.wrapping_add(u32::from(*byte));
            b = b.wrapping_add(a);
        }

        a %= MOD;
        b %= MOD;
    }

    if !remainder.is_empty() {
        for byte in remainder {
            a = a.wrapping_add(u32::from(*byte));
            b = b.wrapping_add(a);
        }

        a %= MOD;
        b %= MOD;
    }

    encode([a, b])
}

#[cfg(test)]
mod tests {
    #[test]
    fn zeroes() {
        assert_eq!(adler32(&[]), 1);
        assert_eq!(adler32(&[0]), 1 | 1 << 16);
        assert_eq!(adler32(&[0, 0]), 1 | 2 << 16);
        assert_eq!(adler32(&[0; 100]), 0x0064_0001);
        assert_eq!(adler32(&[0; 1024]), 0x0400_0001);
        assert_eq!(adler32(&vec![0; 1024 * 1024]), 0x00F0_0001);
    }

    #[test]
    fn ones() {
        assert_eq!(adler32(&[0xFF; 1024]), 0x79A6_FC2E);
        assert_eq!(adler32(&vec![0xFF; 1024 * 1024]), 0x8E88_EF11);
    }

    #[test]
    fn mixed() {
        assert_eq!(adler32(&[1]), 2 | 2 << 16);
        assert_eq!(adler32(&[40]), 41 | 41 << 16);

        assert_eq!(adler32(&vec![0xA5; 1024 * 1024]), 0xD500_9AB1);
    }

    #[test]
    fn missing_buffer() {
        assert_eq!(super::update(1, None), 1);
        assert_eq!(super::update(0xDEAD_BEAF, None), 1);
    }

    #[test]
    fn resumes_from_seed() {
        let data = b"rust is pretty cool man";
        let (head, tail) = data.split_at(7);

        assert_eq!(super::update(adler32(head), Some(tail)), adler32(data));
    }

    /// Example calculation from <https://en.wikipedia.org/wiki/Adler-32>.
    #[test]
    fn wiki() { assert_eq!(adler32(b"Wikipedia"), 0x11E6_0398); }

    fn adler32(data: &[u8]) -> u32 { super::update(1, Some(data)) }
}
