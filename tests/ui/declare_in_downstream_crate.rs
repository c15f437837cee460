use packed_bitfield::{Bitfield, IndexOutOfRange, Word, bitfield, word_count};

const FLAG_COUNT: usize = 20;

static DEFAULTS: bitfield!(u16, FLAG_COUNT) = Bitfield::from_words([0b101, 0]);

struct Device {
    id: u32,
    flags: bitfield!(u16, FLAG_COUNT),
}

fn enabled<W: Word, const WORDS: usize>(flags: &Bitfield<W, WORDS>, idx: usize) -> bool {
    flags.try_get(idx).unwrap_or(false)
}

fn main() {
    assert_eq!(word_count(FLAG_COUNT, 16), 2);

    let mut device = Device {
        id: 7,
        flags: DEFAULTS,
    };
    device.flags.set(19);

    assert_eq!(device.id, 7);
    assert!(enabled(&device.flags, 0));
    assert!(!enabled(&device.flags, 1));
    assert!(enabled(&device.flags, 2));
    assert!(enabled(&device.flags, 19));
    assert!(!enabled(&device.flags, 32));
    assert_eq!(
        device.flags.try_set(32),
        Err(IndexOutOfRange {
            index: 32,
            total_bits: 32,
        })
    );
}
