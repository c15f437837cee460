use packed_bitfield::{Bitfield, bitfield};

const SIGNAL_A: usize = 0;
const SIGNAL_G: usize = 1;
const SIGNAL_H: usize = 2;
const SIGNAL_COUNT: usize = 3;

type Changed = bitfield!(u32, SIGNAL_COUNT);

fn process(changed: &mut Changed, external: bool) -> [bool; SIGNAL_COUNT] {
    let mut evaluated = [false; SIGNAL_COUNT];
    changed.reset();

    if external {
        evaluated[SIGNAL_A] = true;
        changed.set(SIGNAL_A);
    }
    if changed.get(SIGNAL_A) {
        evaluated[SIGNAL_G] = true;
        changed.set(SIGNAL_G);
    }
    if changed.get(SIGNAL_G) {
        evaluated[SIGNAL_H] = true;
        changed.set(SIGNAL_H);
    }
    evaluated
}

fn main() {
    let mut changed = Changed::new();

    assert_eq!(process(&mut changed, true), [true, true, true]);
    assert_eq!(changed.popcount(), 3);

    assert_eq!(process(&mut changed, false), [false, false, false]);
    assert!(!changed.any());
}
