//! Propagates signal changes through layers of functors, re-evaluating a
//! functor only when one of its inputs changed in the current pass.

use packed_bitfield::{Bitfield, bitfield};

struct Functor {
    name: &'static str,
    consumes: &'static [usize],
    provides: &'static [usize],
    external: bool,
}

const A: usize = 0;
const E: usize = 1;
const F: usize = 2;
const G: usize = 3;
const H: usize = 4;
const I: usize = 5;
const SIGNAL_COUNT: usize = 6;

type Changed = bitfield!(u32, SIGNAL_COUNT);

// grouped by topological layer
const LAYERS: &[&[Functor]] = &[
    &[Functor { name: "a", consumes: &[], provides: &[A], external: true }],
    &[
        Functor { name: "ef", consumes: &[A], provides: &[E, F], external: false },
        Functor { name: "g", consumes: &[A], provides: &[G], external: false },
    ],
    &[Functor { name: "h", consumes: &[G], provides: &[H], external: false }],
    &[Functor { name: "i", consumes: &[H, F], provides: &[I], external: false }],
];

fn process(changed: &mut Changed, event: Option<&str>) {
    changed.reset();
    for layer in LAYERS {
        for functor in *layer {
            let triggered = functor.external && event == Some(functor.name);
            if triggered || functor.consumes.iter().any(|&signal| changed.get(signal)) {
                println!("evaluating functor {}", functor.name);
                for &signal in functor.provides {
                    changed.set(signal);
                }
            }
        }
    }
}

fn main() {
    let mut changed = Changed::new();
    println!("{} signals packed into {} bits", SIGNAL_COUNT, changed.total_bits());

    process(&mut changed, Some("a"));
    println!("changed after event a: {changed:?}");

    process(&mut changed, None);
    assert!(!changed.any());
    println!("changed without event: {changed:?}");
}
