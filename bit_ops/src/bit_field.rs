//! Read-only bit access over a single 64-bit record word.
//!
//! # Examples
//!
//! ```rust
//! use bit_ops::BitField;
//!
//! let word = BitField::new(0b10110);
//!
//! assert_eq!(word.set_at(1), Some(true));
//! assert_eq!(word.set_at(0), Some(false));
//! assert_eq!(word.set_at(-1), None);
//!
//! assert_eq!(word.value_at(0), Some(0));
//! assert_eq!(word.value_at(1..=2), Some(0b11));
//! assert_eq!(word.value_at(3..=4), Some(0b10));
//! assert_eq!(word.value_at(-1), None);
//! ```
//!
//! ## Viewing raw record words
//!
//! ```rust
//! use bit_ops::BitField;
//!
//! let words = [0x0000_0000_0000_0003u64, 0x8000_0000_0000_0000];
//! let fields = BitField::cast_words(&words);
//!
//! assert_eq!(fields[0].value_at(0..2), Some(3));
//! assert_eq!(fields[1].set_at(63), Some(true));
//! ```

use bytemuck_derive::{Pod, Zeroable};
use log::trace;

use crate::BitOpsError;
use crate::flags::FlagsIter;
use crate::mask::{WORD_BITS, low_mask, make_mask};
use crate::selector::Selector;

type Result<T> = core::result::Result<T, BitOpsError>;

#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct BitField {
    bits: u64,
}

enum Rotation {
    Left,
    Right,
}

impl BitField {
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Self { bits }
    }

    #[inline]
    pub const fn bits(&self) -> u64 {
        self.bits
    }

    pub const fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self::new(u64::from_le_bytes(bytes))
    }

    /// Builds a word from 1 to 8 little-endian bytes, zero-extending short input.
    ///
    /// ```rust
    /// use bit_ops::BitField;
    ///
    /// let word = BitField::from_le_slice(&[0x34, 0x12])?;
    /// assert_eq!(word.bits(), 0x1234);
    /// # Ok::<(), bit_ops::BitOpsError>(())
    /// ```
    pub fn from_le_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() || bytes.len() > 8 {
            return Err(BitOpsError::SliceLength(bytes.len()));
        }
        let mut buf = [0u8; 8];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self::from_le_bytes(buf))
    }

    /// Views a slice of raw words as bit fields without copying.
    pub fn cast_words(words: &[u64]) -> &[BitField] {
        bytemuck::cast_slice(words)
    }

    /// Whether bit `index` is set.
    ///
    /// Negative indices have no answer and return `None`. Indices past bit 63
    /// are outside the stored word and read as unset.
    pub fn set_at(&self, index: i64) -> Option<bool> {
        if index < 0 {
            trace!("set_at: negative index {index}");
            return None;
        }
        if index >= WORD_BITS as i64 {
            return Some(false);
        }
        Some(self.bits & (1u64 << index) != 0)
    }

    /// Extracts the selected bits, shifted down so the lowest selected bit
    /// lands at bit 0.
    ///
    /// Returns `None` for an empty range, a length below 1, or a negative
    /// offset. Selected bits beyond bit 63 read as zero.
    pub fn value_at(&self, selector: impl Into<Selector>) -> Option<u64> {
        let selector = selector.into();
        let Some((offset, length)) = selector.offset_length() else {
            trace!("value_at: empty selector");
            return None;
        };
        if length < 1 || offset < 0 {
            trace!("value_at: rejected offset {offset}, length {length}");
            return None;
        }
        if offset >= WORD_BITS as i64 {
            return Some(0);
        }

        let mask = make_mask(length, offset);
        Some((self.bits & mask) >> offset)
    }

    /// Mirrors the significant bits of the word: the highest set bit becomes
    /// bit 0 and bit 0 becomes the highest.
    ///
    /// ```rust
    /// use bit_ops::BitField;
    ///
    /// assert_eq!(BitField::new(0b1100101).reverse(), 0b1010011);
    /// assert_eq!(BitField::new(0).reverse(), 0);
    /// ```
    pub fn reverse(&self) -> u64 {
        if self.bits == 0 {
            return 0;
        }
        self.bits.reverse_bits() >> self.bits.leading_zeros()
    }

    /// Rotates the low `bit_size` bits left by `steps`.
    ///
    /// Bits above `bit_size` are cleared before rotating, so they never wrap
    /// into the result. `steps` is taken modulo `bit_size`.
    ///
    /// ```rust
    /// use bit_ops::BitField;
    ///
    /// assert_eq!(BitField::new(0b11110000).rol(8, 2)?, 0b11000011);
    /// # Ok::<(), bit_ops::BitOpsError>(())
    /// ```
    pub fn rol(&self, bit_size: u32, steps: u32) -> Result<u64> {
        self.rotate(bit_size, steps, Rotation::Left)
    }

    /// Rotates the low `bit_size` bits right by `steps`.
    ///
    /// Bits above `bit_size` are cleared before rotating, so they never wrap
    /// into the result. `steps` is taken modulo `bit_size`.
    ///
    /// ```rust
    /// use bit_ops::BitField;
    ///
    /// assert_eq!(BitField::new(0b11110000).ror(8, 2)?, 0b00111100);
    /// # Ok::<(), bit_ops::BitOpsError>(())
    /// ```
    pub fn ror(&self, bit_size: u32, steps: u32) -> Result<u64> {
        self.rotate(bit_size, steps, Rotation::Right)
    }

    fn rotate(&self, bit_size: u32, steps: u32, direction: Rotation) -> Result<u64> {
        if !(1..=WORD_BITS).contains(&bit_size) {
            return Err(BitOpsError::InvalidBitSize(bit_size));
        }
        let mask = low_mask(bit_size);
        let value = self.bits & mask;
        let steps = steps % bit_size;
        if steps == 0 {
            return Ok(value);
        }

        let rotated = match direction {
            Rotation::Left => (value << steps) | (value >> (bit_size - steps)),
            Rotation::Right => (value >> steps) | (value << (bit_size - steps)),
        };
        Ok(rotated & mask)
    }

    /// Iterates the single-bit masks set in this word, lowest first.
    pub fn iter_set(&self) -> FlagsIter {
        FlagsIter::new(self.bits)
    }
}

impl From<u64> for BitField {
    fn from(bits: u64) -> Self {
        Self::new(bits)
    }
}

impl From<u32> for BitField {
    fn from(bits: u32) -> Self {
        Self::new(bits as u64)
    }
}

impl From<u16> for BitField {
    fn from(bits: u16) -> Self {
        Self::new(bits as u64)
    }
}

impl From<u8> for BitField {
    fn from(bits: u8) -> Self {
        Self::new(bits as u64)
    }
}

impl From<BitField> for u64 {
    fn from(field: BitField) -> Self {
        field.bits
    }
}
