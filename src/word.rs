use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl};

/// An unsigned integer that can back a [`Bitfield`](crate::Bitfield).
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `u128`.
pub trait Word:
    Copy
    + Eq
    + Hash
    + Debug
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
    + Shl<usize, Output = Self>
{
    /// Number of bits packed into one word.
    const BITS: usize;
    /// The word with no bits set.
    const ZERO: Self;
    /// The word with only the least significant bit set.
    const ONE: Self;

    /// Number of set bits in the word.
    fn count_ones(self) -> u32;

    /// Number of unset bits below the least significant set bit.
    fn trailing_zeros(self) -> u32;

    /// The single-bit mask for offset `bit` within the word.
    #[inline]
    fn mask(bit: usize) -> Self {
        Self::ONE << bit
    }
}

macro_rules! impl_word {
    ($($type:ty),+ $(,)?) => {
        $(
            impl Word for $type {
                const BITS: usize = <$type>::BITS as usize;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn count_ones(self) -> u32 {
                    <$type>::count_ones(self)
                }

                #[inline]
                fn trailing_zeros(self) -> u32 {
                    <$type>::trailing_zeros(self)
                }
            }
        )+
    };
}

impl_word!(u8, u16, u32, u64, u128);

/// Computes how many words of `word_bits` bits a bitfield declared for
/// `count` bits occupies.
///
/// The result is always `count / word_bits + 1`, so an exact multiple of the
/// word width still gets one extra word. Arrays shared with C code declared
/// as `t name[count / (sizeof(t) * 8) + 1]` keep the same layout. Use
/// [`Bitfield::total_bits`](crate::Bitfield::total_bits) for the real
/// addressable capacity.
///
/// # Examples
/// ```
/// use packed_bitfield::word_count;
///
/// assert_eq!(word_count(10, 8), 2);
/// assert_eq!(word_count(16, 8), 3);
/// assert_eq!(word_count(0, 32), 1);
/// ```
pub const fn word_count(count: usize, word_bits: usize) -> usize {
    count / word_bits + 1
}

/// Expands to the [`Bitfield`](crate::Bitfield) type able to hold `count`
/// bits in words of type `word`.
///
/// The word count is computed with [`word_count`], so the type always has at
/// least `count` addressable bits and usually a few more.
///
/// # Examples
/// ```
/// use packed_bitfield::{Bitfield, bitfield};
///
/// let mut flags: bitfield!(u8, 10) = Bitfield::new();
/// assert_eq!(flags.total_bits(), 16);
/// flags.set(9);
/// assert!(flags.get(9));
///
/// static EMPTY: bitfield!(u32, 40) = Bitfield::new();
/// assert_eq!(EMPTY.as_words().len(), 2);
/// ```
#[macro_export]
macro_rules! bitfield {
    ($word:ty, $count:expr $(,)?) => {
        $crate::Bitfield<$word, { $crate::word_count($count, <$word as $crate::Word>::BITS) }>
    };
}
