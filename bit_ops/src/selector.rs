//! Selectors name the bits an extraction reads.
//!
//! A selector is either a single bit index or a contiguous run described by
//! its lowest bit and its length. Any interval type can act as a run by
//! implementing [`BitRange`].
//!
//! ```rust
//! use bit_ops::{BitRange, Selector};
//!
//! assert_eq!(Selector::from(3), Selector::Index(3));
//! assert_eq!(Selector::from(2..=4), Selector::Range { offset: 2, length: 3 });
//! assert_eq!((5i64..=4).minimum(), None);
//! assert_eq!(Selector::from(5..=4), Selector::Empty);
//! ```

use core::ops::{Range, RangeInclusive};

/// An interval of bit positions.
pub trait BitRange {
    /// Number of positions in the interval, `0` when it is empty.
    fn cardinality(&self) -> i64;

    /// Lowest position, or `None` when the interval is empty.
    fn minimum(&self) -> Option<i64>;
}

#[inline]
fn clamp_i64(value: i128) -> i64 {
    value.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

macro_rules! impl_bit_range {
    ($($t:ty),*) => {$(
        impl BitRange for RangeInclusive<$t> {
            fn cardinality(&self) -> i64 {
                if self.is_empty() {
                    0
                } else {
                    clamp_i64(*self.end() as i128 - *self.start() as i128 + 1)
                }
            }

            fn minimum(&self) -> Option<i64> {
                (!self.is_empty()).then(|| clamp_i64(*self.start() as i128))
            }
        }

        impl BitRange for Range<$t> {
            fn cardinality(&self) -> i64 {
                if self.is_empty() {
                    0
                } else {
                    clamp_i64(self.end as i128 - self.start as i128)
                }
            }

            fn minimum(&self) -> Option<i64> {
                (!self.is_empty()).then(|| clamp_i64(self.start as i128))
            }
        }

        impl From<RangeInclusive<$t>> for Selector {
            #[inline]
            fn from(range: RangeInclusive<$t>) -> Self {
                Selector::from_range(&range)
            }
        }

        impl From<Range<$t>> for Selector {
            #[inline]
            fn from(range: Range<$t>) -> Self {
                Selector::from_range(&range)
            }
        }

        impl From<$t> for Selector {
            #[inline]
            fn from(index: $t) -> Self {
                Selector::Index(clamp_i64(index as i128))
            }
        }
    )*};
}

/// Which bits of a word to read.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// A single bit.
    Index(i64),
    /// `length` bits whose lowest bit is `offset`.
    Range { offset: i64, length: i64 },
    /// A range with no elements. Extraction through it never yields a value.
    Empty,
}

impl Selector {
    pub fn from_range<R: BitRange + ?Sized>(range: &R) -> Self {
        match range.minimum() {
            Some(offset) => Selector::Range {
                offset,
                length: range.cardinality(),
            },
            None => Selector::Empty,
        }
    }

    /// `(offset, length)` of the selected bits. An index selects one bit.
    pub fn offset_length(&self) -> Option<(i64, i64)> {
        match *self {
            Selector::Index(index) => Some((index, 1)),
            Selector::Range { offset, length } => Some((offset, length)),
            Selector::Empty => None,
        }
    }
}

impl_bit_range!(i32, i64, u8, u32, usize);
