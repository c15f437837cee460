/// A bit index outside `0..total_bits` was passed to a checked accessor.
///
/// Returned by the `try_*` methods of [`Bitfield`](crate::Bitfield). The
/// plain methods panic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("bit index {index} out of range for bitfield of {total_bits} bits")]
pub struct IndexOutOfRange {
    /// The rejected index.
    pub index: usize,
    /// Addressable capacity of the bitfield the index was checked against.
    pub total_bits: usize,
}
