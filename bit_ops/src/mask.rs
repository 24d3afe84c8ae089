//! Mask arithmetic shared by the extraction operations.
//!
//! All shifts are checked against [`WORD_BITS`]; a shift that would be
//! undefined on a fixed-width word produces an empty mask instead.

/// Width of the word every [`BitField`](crate::BitField) holds.
pub const WORD_BITS: u32 = u64::BITS;

/// Returns `length` consecutive one-bits starting at bit `offset`.
///
/// Non-positive lengths and offsets outside `0..64` give `0`. Lengths of 64 or
/// more saturate to a full word before shifting, and bits pushed past bit 63
/// are dropped.
#[inline]
pub(crate) fn make_mask(length: i64, offset: i64) -> u64 {
    if length <= 0 || !(0..WORD_BITS as i64).contains(&offset) {
        return 0;
    }

    let ones = if length >= WORD_BITS as i64 {
        u64::MAX
    } else {
        (1u64 << length) - 1
    };

    ones << offset
}

/// Mask covering the low `bit_size` bits. `bit_size` must be `1..=64`.
#[inline]
pub(crate) fn low_mask(bit_size: u32) -> u64 {
    make_mask(bit_size as i64, 0)
}
