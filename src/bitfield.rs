use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;

use crate::error::IndexOutOfRange;
use crate::trace;
use crate::word::Word;

/// A fixed-capacity bit array packed into `WORDS` words of type `W`.
///
/// Bit `i` lives in word `i / W::BITS` at offset `i % W::BITS`, least
/// significant bit first. Every bit of every word is addressable, so the
/// capacity is [`TOTAL_BITS`] = `WORDS * W::BITS`, which may be larger than
/// the count the field was declared for with [`bitfield!`].
///
/// The type is plain inline memory with no synchronization. Sharing one
/// across threads needs external locking or per-thread copies.
///
/// [`TOTAL_BITS`]: Bitfield::TOTAL_BITS
/// [`bitfield!`]: crate::bitfield!
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct Bitfield<W: Word, const WORDS: usize>(pub(crate) [W; WORDS]);

impl<W: Word, const WORDS: usize> Bitfield<W, WORDS> {
    /// Number of addressable bits, always a multiple of `W::BITS`.
    pub const TOTAL_BITS: usize = WORDS * W::BITS;

    /// Creates a new bitfield with all bits unset.
    ///
    /// Callable in const and static initializers.
    ///
    /// # Panics
    /// Panics if `WORDS == 0`. In a const context this is a compile error.
    ///
    /// # Examples
    /// ```
    /// use packed_bitfield::{Bitfield, bitfield};
    ///
    /// const EMPTY: bitfield!(u16, 20) = Bitfield::new();
    /// assert!(!EMPTY.any());
    /// ```
    pub const fn new() -> Self {
        assert!(WORDS > 0, "WORDS must be greater than zero.");
        Self([W::ZERO; WORDS])
    }

    /// Wraps existing words without changing their layout.
    ///
    /// # Panics
    /// Panics if `WORDS == 0`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitfield::Bitfield;
    ///
    /// let bf = Bitfield::<u8, 2>::from_words([0b0000_0001, 0b1000_0010]);
    /// assert!(bf.get(0));
    /// assert!(bf.get(9));
    /// assert!(bf.get(15));
    /// assert_eq!(bf.popcount(), 3);
    /// ```
    pub const fn from_words(words: [W; WORDS]) -> Self {
        assert!(WORDS > 0, "WORDS must be greater than zero.");
        Self(words)
    }

    /// Constructs a bitfield by setting only the indices provided in the
    /// iterator.
    ///
    /// # Panics
    /// Panics if any index is `>= TOTAL_BITS`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitfield::{Bitfield, bitfield};
    ///
    /// let bf: bitfield!(u8, 10) = Bitfield::from_ones_iter([0, 9, 15]);
    /// assert_eq!(bf.iter_ones().collect::<Vec<_>>(), [0, 9, 15]);
    /// ```
    pub fn from_ones_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut bf = Self::new();
        for idx in iter {
            bf.set(idx);
        }
        bf
    }

    /// The backing words.
    #[inline]
    pub const fn as_words(&self) -> &[W; WORDS] {
        &self.0
    }

    /// Consumes the bitfield and returns the backing words.
    #[inline]
    pub fn into_words(self) -> [W; WORDS] {
        self.0
    }

    /// Returns the number of addressable bits, `WORDS * W::BITS`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitfield::{Bitfield, bitfield};
    ///
    /// // 16 / 8 + 1 = 3 words
    /// let bf: bitfield!(u8, 16) = Bitfield::new();
    /// assert_eq!(bf.total_bits(), 24);
    /// ```
    #[inline]
    pub const fn total_bits(&self) -> usize {
        Self::TOTAL_BITS
    }

    /// Returns `true` iff `idx` addresses a bit inside the array.
    ///
    /// # Examples
    /// ```
    /// use packed_bitfield::Bitfield;
    ///
    /// let bf = Bitfield::<u8, 2>::new();
    /// assert!(bf.protect(15));
    /// assert!(!bf.protect(16));
    /// ```
    #[inline]
    pub const fn protect(&self, idx: usize) -> bool {
        idx < Self::TOTAL_BITS
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// # Panics
    /// Panics if `idx >= TOTAL_BITS`. See [`try_get`] for a non-panicking
    /// variant.
    ///
    /// # Examples
    /// ```
    /// use packed_bitfield::Bitfield;
    ///
    /// let mut bf = Bitfield::<u32, 1>::new();
    /// bf.set(1);
    /// assert!(bf.get(1));
    /// assert!(!bf.get(0));
    /// ```
    ///
    /// [`try_get`]: Bitfield::try_get
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        assert!(self.protect(idx), "Bit index {idx} out of bounds");
        self.bit(idx)
    }

    /// Returns whether the bit at `idx` is set, or an error if `idx` is out
    /// of range.
    ///
    /// # Examples
    /// ```
    /// use packed_bitfield::{Bitfield, IndexOutOfRange};
    ///
    /// let bf = Bitfield::<u8, 1>::new();
    /// assert_eq!(bf.try_get(7), Ok(false));
    /// assert_eq!(bf.try_get(8), Err(IndexOutOfRange { index: 8, total_bits: 8 }));
    /// ```
    pub fn try_get(&self, idx: usize) -> Result<bool, IndexOutOfRange> {
        self.check(idx)?;
        Ok(self.bit(idx))
    }

    /// Sets the bit at the given index.
    ///
    /// # Panics
    /// Panics if `idx >= TOTAL_BITS`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitfield::Bitfield;
    ///
    /// let mut bf = Bitfield::<u8, 1>::new();
    /// bf.set(3);
    /// bf.set(3);
    /// assert!(bf.get(3));
    /// ```
    #[inline]
    pub fn set(&mut self, idx: usize) {
        assert!(self.protect(idx), "Bit index {idx} out of bounds");
        self.set_bit(idx);
    }

    /// Checked [`set`](Bitfield::set).
    pub fn try_set(&mut self, idx: usize) -> Result<(), IndexOutOfRange> {
        self.check(idx)?;
        self.set_bit(idx);
        Ok(())
    }

    /// Flips the bit at the given index with an exclusive-or.
    ///
    /// This is only a clear when the bit is currently set: calling it on a
    /// clear bit sets that bit. Existing callers rely on the exclusive-or, so
    /// it stays. Use [`clear`] to force a bit to zero.
    ///
    /// With the `tracing` feature a warning is emitted whenever a clear bit
    /// gets set this way.
    ///
    /// # Panics
    /// Panics if `idx >= TOTAL_BITS`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitfield::Bitfield;
    ///
    /// let mut bf = Bitfield::<u8, 1>::new();
    /// bf.set(2);
    /// bf.unset(2);
    /// assert!(!bf.get(2));
    /// bf.unset(2); // toggles back on
    /// assert!(bf.get(2));
    /// ```
    ///
    /// [`clear`]: Bitfield::clear
    #[inline]
    pub fn unset(&mut self, idx: usize) {
        assert!(self.protect(idx), "Bit index {idx} out of bounds");
        self.toggle_bit(idx);
    }

    /// Checked [`unset`](Bitfield::unset), with the same toggle semantics.
    pub fn try_unset(&mut self, idx: usize) -> Result<(), IndexOutOfRange> {
        self.check(idx)?;
        self.toggle_bit(idx);
        Ok(())
    }

    /// Calls [`set`] when `value` is `true`, otherwise [`unset`].
    ///
    /// Because [`unset`] toggles, `set_value(idx, false)` on a clear bit sets
    /// it.
    ///
    /// # Panics
    /// Panics if `idx >= TOTAL_BITS`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitfield::Bitfield;
    ///
    /// let mut bf = Bitfield::<u16, 1>::new();
    /// bf.set_value(12, true);
    /// assert!(bf.get(12));
    /// bf.set_value(12, false);
    /// assert!(!bf.get(12));
    /// ```
    ///
    /// [`set`]: Bitfield::set
    /// [`unset`]: Bitfield::unset
    #[inline]
    pub fn set_value(&mut self, idx: usize, value: bool) {
        if value {
            self.set(idx)
        } else {
            self.unset(idx)
        }
    }

    /// Checked [`set_value`](Bitfield::set_value).
    pub fn try_set_value(&mut self, idx: usize, value: bool) -> Result<(), IndexOutOfRange> {
        if value {
            self.try_set(idx)
        } else {
            self.try_unset(idx)
        }
    }

    /// Forces the bit at the given index to zero, whatever its current value.
    ///
    /// Unlike [`unset`](Bitfield::unset) this is idempotent.
    ///
    /// # Panics
    /// Panics if `idx >= TOTAL_BITS`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitfield::Bitfield;
    ///
    /// let mut bf = Bitfield::<u8, 1>::new();
    /// bf.clear(5);
    /// assert!(!bf.get(5));
    /// ```
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        assert!(self.protect(idx), "Bit index {idx} out of bounds");
        self.clear_bit(idx);
    }

    /// Checked [`clear`](Bitfield::clear).
    pub fn try_clear(&mut self, idx: usize) -> Result<(), IndexOutOfRange> {
        self.check(idx)?;
        self.clear_bit(idx);
        Ok(())
    }

    /// Unsets every bit.
    ///
    /// # Examples
    /// ```
    /// use packed_bitfield::Bitfield;
    ///
    /// let mut bf = Bitfield::<u64, 2>::from_ones_iter([1, 64, 127]);
    /// bf.reset();
    /// assert!(!bf.any());
    /// ```
    #[inline]
    pub fn reset(&mut self) {
        self.0.fill(W::ZERO);
    }

    /// Returns `true` if at least one bit is set.
    #[inline]
    pub fn any(&self) -> bool {
        self.0.iter().any(|word| *word != W::ZERO)
    }

    /// Returns the number of set bits.
    ///
    /// # Examples
    /// ```
    /// use packed_bitfield::Bitfield;
    ///
    /// let bf = Bitfield::<u8, 3>::from_ones_iter([0, 8, 23]);
    /// assert_eq!(bf.popcount(), 3);
    /// ```
    #[inline]
    pub fn popcount(&self) -> usize {
        self.0.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Returns an iterator over the indices of all set bits, in ascending
    /// order.
    ///
    /// Runs in O(max(k, w)) where k is the number of set bits and w is
    /// `WORDS`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitfield::Bitfield;
    ///
    /// let bf = Bitfield::<u8, 2>::from_ones_iter([3, 9, 4]);
    /// let mut ones = bf.iter_ones();
    /// assert_eq!(ones.next(), Some(3));
    /// assert_eq!(ones.next(), Some(4));
    /// assert_eq!(ones.next(), Some(9));
    /// assert_eq!(ones.next(), None);
    /// ```
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_, W, WORDS> {
        IterOnes {
            words: &self.0,
            word_idx: 0,
            current: self.0.first().copied().unwrap_or(W::ZERO),
            base_bit_idx: 0,
        }
    }

    #[inline]
    const fn idxs(idx: usize) -> (usize, usize) {
        (idx / W::BITS, idx % W::BITS)
    }

    fn check(&self, idx: usize) -> Result<(), IndexOutOfRange> {
        if self.protect(idx) {
            Ok(())
        } else {
            trace::index_rejected(idx, Self::TOTAL_BITS);
            Err(IndexOutOfRange {
                index: idx,
                total_bits: Self::TOTAL_BITS,
            })
        }
    }

    #[inline]
    fn bit(&self, idx: usize) -> bool {
        let (word_idx, bit_idx) = Self::idxs(idx);
        self.0[word_idx] & W::mask(bit_idx) != W::ZERO
    }

    #[inline]
    fn set_bit(&mut self, idx: usize) {
        let (word_idx, bit_idx) = Self::idxs(idx);
        self.0[word_idx] |= W::mask(bit_idx);
    }

    #[inline]
    fn toggle_bit(&mut self, idx: usize) {
        let (word_idx, bit_idx) = Self::idxs(idx);
        let mask = W::mask(bit_idx);
        if self.0[word_idx] & mask == W::ZERO {
            trace::clear_bit_toggled(idx);
        }
        self.0[word_idx] ^= mask;
    }

    #[inline]
    fn clear_bit(&mut self, idx: usize) {
        let (word_idx, bit_idx) = Self::idxs(idx);
        self.0[word_idx] &= !W::mask(bit_idx);
    }
}

impl<W: Word, const WORDS: usize> Default for Bitfield<W, WORDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'bitfield, W: Word, const WORDS: usize> IntoIterator for &'bitfield Bitfield<W, WORDS> {
    type Item = usize;
    type IntoIter = IterOnes<'bitfield, W, WORDS>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_ones()
    }
}

impl<W: Word, const WORDS: usize> Debug for Bitfield<W, WORDS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "LSB -> ")?;
        for idx in 0..Self::TOTAL_BITS {
            if idx % W::BITS == 0 {
                if idx != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{idx}: ")?;
            }
            write!(f, "{}", if self.bit(idx) { '1' } else { '0' })?;
        }
        write!(f, " <- MSB")
    }
}

/// Constructs a bitfield from an iterator over indices to set.
///
/// # Panics
/// Panics if any index is `>= TOTAL_BITS`.
impl<W: Word, const WORDS: usize> FromIterator<usize> for Bitfield<W, WORDS> {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self::from_ones_iter(iter)
    }
}

/// Iterator over the indices of set bits in the bitfield.
///
/// Yields the positions of all bits that are set, in ascending order.
///
/// Returned by [`Bitfield::iter_ones()`].
#[derive(Clone, Copy)]
pub struct IterOnes<'bitfield, W: Word, const WORDS: usize> {
    words: &'bitfield [W; WORDS],
    word_idx: usize,
    current: W,
    base_bit_idx: usize,
}

impl<W: Word, const WORDS: usize> Iterator for IterOnes<'_, W, WORDS> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < WORDS {
            if self.current != W::ZERO {
                let tz = self.current.trailing_zeros() as usize;
                self.current ^= W::mask(tz);
                return Some(self.base_bit_idx + tz);
            }

            self.word_idx += 1;
            self.base_bit_idx += W::BITS;
            self.current = self.words.get(self.word_idx).copied().unwrap_or(W::ZERO);
        }
        None
    }
}

impl<W: Word, const WORDS: usize> FusedIterator for IterOnes<'_, W, WORDS> {}
