//! A fixed-capacity bit array packed into unsigned words, written in pure
//! Rust. `no_std`, no heap / `alloc`, no `unsafe`.
//!
//! [`Bitfield`] stores its bits inline in an array of `u8`, `u16`, `u32`,
//! `u64` or `u128` words. Bit `i` lives in word `i / W::BITS` at offset
//! `i % W::BITS`. The [`bitfield!`] macro picks the word count for a wanted
//! capacity.
//!
//! # Examples
//! ```
//! use packed_bitfield::{Bitfield, bitfield};
//!
//! // 10 / 8 + 1 = 2 words, 16 addressable bits
//! let mut flags: bitfield!(u8, 10) = Bitfield::new();
//! assert_eq!(flags.total_bits(), 16);
//!
//! flags.set(0);
//! flags.set(9);
//! flags.set(15);
//! assert!(flags.get(9));
//! assert!(!flags.get(10));
//! assert!(!flags.protect(16));
//! assert!(flags.try_get(16).is_err());
//! ```
//!
//! # Sizing
//!
//! [`word_count`] always reserves `count / W::BITS + 1` words, one more than
//! needed when `count` is a multiple of the word width. The spare bits are
//! addressable; [`Bitfield::total_bits`] reports the real capacity.
//!
//! # `unset` toggles
//!
//! [`Bitfield::unset`] and `set_value(idx, false)` flip the bit with an
//! exclusive-or, so they only clear a bit that is currently set. Calling them
//! on a clear bit sets it. [`Bitfield::clear`] is the idempotent clear.
//!
//! # Bounds
//!
//! Every accessor checks its index against [`Bitfield::total_bits`]. The
//! plain methods panic on an out-of-range index, the `try_*` methods return
//! [`IndexOutOfRange`].
//!
//! # Features
//!
//! - `tracing`: emits `tracing` events when an index is rejected and when
//!   `unset` sets a bit that was clear.
//!
//! # Threads
//!
//! [`Bitfield`] has no internal synchronization. Wrap it in a lock or keep
//! one copy per thread when it is shared.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod bitfield;
mod error;
mod trace;
mod word;

pub use bitfield::{Bitfield, IterOnes};
pub use error::IndexOutOfRange;
pub use word::{Word, word_count};
