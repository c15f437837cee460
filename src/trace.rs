// Diagnostics emitted through `tracing` when the feature is enabled, and
// compiled to nothing otherwise.

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn index_rejected(index: usize, total_bits: usize) {
    tracing::debug!(index, total_bits, "bit index rejected");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn index_rejected(_index: usize, _total_bits: usize) {}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn clear_bit_toggled(index: usize) {
    tracing::warn!(index, "unset flipped a clear bit to set");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn clear_bit_toggled(_index: usize) {}
