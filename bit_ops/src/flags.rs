//! Named flags and multi-bit fields packed into a record word.
//!
//! # Examples
//!
//! ```rust
//! use bit_ops::{BitField, FieldSpec, FieldValue, RecordLayout};
//!
//! let layout = RecordLayout::new(&[
//!     FieldSpec::flag("has_moniker", 0),
//!     FieldSpec::flag("is_absolute", 1),
//!     FieldSpec::value("kind", 2..=4),
//! ])?;
//!
//! let word = BitField::new(0b10101);
//! let decoded = layout.decode(&word);
//!
//! assert_eq!(decoded[0], ("has_moniker", FieldValue::Flag(true)));
//! assert_eq!(decoded[1], ("is_absolute", FieldValue::Flag(false)));
//! assert_eq!(decoded[2], ("kind", FieldValue::Value(0b101)));
//!
//! let packed = layout.encode(&[("has_moniker", 1), ("kind", 0b101)])?;
//! assert_eq!(packed, 0b10101);
//! # Ok::<(), bit_ops::BitOpsError>(())
//! ```

#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};

use log::debug;

use crate::mask::{WORD_BITS, make_mask};
use crate::{BitField, BitOpsError, Selector};

type Result<T> = core::result::Result<T, BitOpsError>;

/// Yields each set bit of a word as a single-bit mask, lowest first.
pub struct FlagsIter {
    bits: u64,
    next_mask: u64,
}

impl FlagsIter {
    pub fn new(bits: u64) -> Self {
        Self { bits, next_mask: 1 }
    }
}

impl Iterator for FlagsIter {
    type Item = u64;
    fn next(&mut self) -> Option<Self::Item> {
        while self.next_mask != 0 {
            let mask = self.next_mask;
            self.next_mask <<= 1;
            if (self.bits & mask) != 0 {
                return Some(mask);
            }
        }
        None
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Flag,
    Value,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Flag(bool),
    Value(u64),
}

impl FieldValue {
    pub fn as_u64(&self) -> u64 {
        match *self {
            FieldValue::Flag(set) => set as u64,
            FieldValue::Value(value) => value,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub selector: Selector,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// A one-bit field decoded as a boolean.
    pub const fn flag(name: &'static str, index: i64) -> Self {
        Self {
            name,
            selector: Selector::Index(index),
            kind: FieldKind::Flag,
        }
    }

    /// A field decoded as an unsigned integer.
    pub fn value(name: &'static str, selector: impl Into<Selector>) -> Self {
        Self {
            name,
            selector: selector.into(),
            kind: FieldKind::Value,
        }
    }

    fn span(&self) -> Option<(u32, u32)> {
        let (offset, length) = self.selector.offset_length()?;
        let fits = offset >= 0 && length >= 1 && offset.checked_add(length)? <= WORD_BITS as i64;
        fits.then_some((offset as u32, length as u32))
    }

    fn mask(&self) -> u64 {
        self.span()
            .map_or(0, |(offset, length)| make_mask(length as i64, offset as i64))
    }
}

/// An ordered, validated set of non-overlapping fields within one word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordLayout {
    fields: Vec<FieldSpec>,
}

impl RecordLayout {
    pub fn new(fields: &[FieldSpec]) -> Result<Self> {
        for (i, field) in fields.iter().enumerate() {
            let fits = match (field.span(), field.kind) {
                (None, _) => false,
                (Some((_, length)), FieldKind::Flag) => length == 1,
                (Some(_), FieldKind::Value) => true,
            };
            if !fits {
                debug!("layout: field {} has selector {:?}", field.name, field.selector);
                return Err(BitOpsError::FieldOutOfRange(field.name));
            }
            for earlier in &fields[..i] {
                if earlier.name == field.name {
                    debug!("layout: field {} is declared twice", field.name);
                    return Err(BitOpsError::DuplicateField(field.name));
                }
                if earlier.mask() & field.mask() != 0 {
                    debug!("layout: {} overlaps {}", field.name, earlier.name);
                    return Err(BitOpsError::OverlappingFields(earlier.name, field.name));
                }
            }
        }

        Ok(Self {
            fields: fields.to_vec(),
        })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Bits claimed by any field.
    pub fn used_mask(&self) -> u64 {
        self.fields.iter().fold(0, |acc, field| acc | field.mask())
    }

    pub fn decode(&self, word: &BitField) -> Vec<(&'static str, FieldValue)> {
        self.fields
            .iter()
            .map(|field| (field.name, Self::read(field, word)))
            .collect()
    }

    pub fn get(&self, word: &BitField, name: &str) -> Result<FieldValue> {
        let field = self.find(name)?;
        Ok(Self::read(field, word))
    }

    /// Packs `(name, value)` pairs into a word. Fields not listed stay zero.
    /// Naming a field more than once is an error.
    pub fn encode(&self, values: &[(&str, u64)]) -> Result<u64> {
        let mut word = 0u64;
        let mut written = 0u64;
        for &(name, value) in values {
            let field = self.find(name)?;
            let mask = field.mask();
            if written & mask != 0 {
                debug!("encode: field {} given twice", field.name);
                return Err(BitOpsError::DuplicateField(field.name));
            }
            written |= mask;
            let (offset, length) = field.span().ok_or(BitOpsError::FieldOutOfRange(field.name))?;
            if length < WORD_BITS && value >> length != 0 {
                return Err(BitOpsError::ValueOverflow {
                    field: field.name,
                    value,
                    length,
                });
            }
            word |= value << offset;
        }
        Ok(word)
    }

    fn find(&self, name: &str) -> Result<&FieldSpec> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| BitOpsError::UnknownField(name.to_string()))
    }

    // Layout validation guarantees every selector is extractable.
    fn read(field: &FieldSpec, word: &BitField) -> FieldValue {
        let value = word.value_at(field.selector).unwrap_or_default();
        match field.kind {
            FieldKind::Flag => FieldValue::Flag(value != 0),
            FieldKind::Value => FieldValue::Value(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAG0: u64 = 1 << 0;
    const FLAG1: u64 = 1 << 1;
    const FLAG2: u64 = 1 << 2;

    #[test]
    fn iter_flags_works() {
        let flags: Vec<u64> = BitField::new(FLAG0 | FLAG2).iter_set().collect();
        assert_eq!(flags, vec![FLAG0, FLAG2]);

        let flags: Vec<u64> = FlagsIter::new(FLAG1 | (1 << 63)).collect();
        assert_eq!(flags, vec![FLAG1, 1 << 63]);

        assert_eq!(FlagsIter::new(0).count(), 0);
    }

    fn hyperlink_layout() -> Result<RecordLayout> {
        RecordLayout::new(&[
            FieldSpec::flag("has_moniker", 0),
            FieldSpec::flag("is_absolute", 1),
            FieldSpec::flag("site_gave_display_name", 2),
            FieldSpec::flag("has_location_str", 3),
            FieldSpec::value("reserved", 10..32),
        ])
    }

    #[test]
    fn decodes_named_flags() -> Result<()> {
        let layout = hyperlink_layout()?;
        let decoded = layout.decode(&BitField::new(FLAG0 | FLAG2 | (0b11 << 10)));

        assert_eq!(decoded.len(), 5);
        assert_eq!(decoded[0], ("has_moniker", FieldValue::Flag(true)));
        assert_eq!(decoded[1], ("is_absolute", FieldValue::Flag(false)));
        assert_eq!(decoded[2], ("site_gave_display_name", FieldValue::Flag(true)));
        assert_eq!(decoded[4], ("reserved", FieldValue::Value(0b11)));
        Ok(())
    }

    #[test]
    fn get_by_name() -> Result<()> {
        let layout = hyperlink_layout()?;
        let word = BitField::new(1 << 3);
        assert_eq!(layout.get(&word, "has_location_str")?, FieldValue::Flag(true));
        assert_eq!(
            layout.get(&word, "missing"),
            Err(BitOpsError::UnknownField("missing".to_string()))
        );
        Ok(())
    }

    #[test]
    fn encode_then_decode() -> Result<()> {
        let layout = hyperlink_layout()?;
        let word = layout.encode(&[("is_absolute", 1), ("reserved", 0x3F_FFFF)])?;
        assert_eq!(word, FLAG1 | (0x3F_FFFF << 10));
        assert_eq!(layout.used_mask(), 0b1111 | (0x3F_FFFF << 10));

        let decoded = layout.decode(&BitField::new(word));
        assert_eq!(decoded[1].1.as_u64(), 1);
        assert_eq!(decoded[4].1.as_u64(), 0x3F_FFFF);
        Ok(())
    }

    #[test]
    fn encode_rejects_wide_values() -> Result<()> {
        let layout = hyperlink_layout()?;
        assert_eq!(
            layout.encode(&[("has_moniker", 2)]),
            Err(BitOpsError::ValueOverflow {
                field: "has_moniker",
                value: 2,
                length: 1,
            })
        );
        Ok(())
    }

    #[test]
    fn full_word_field() -> Result<()> {
        let layout = RecordLayout::new(&[FieldSpec::value("all", 0..64)])?;
        assert_eq!(layout.encode(&[("all", u64::MAX)])?, u64::MAX);
        assert_eq!(
            layout.get(&BitField::new(u64::MAX), "all")?,
            FieldValue::Value(u64::MAX)
        );
        Ok(())
    }

    #[test]
    fn rejects_invalid_layouts() {
        assert_eq!(
            RecordLayout::new(&[FieldSpec::flag("a", 0), FieldSpec::flag("a", 1)]),
            Err(BitOpsError::DuplicateField("a"))
        );
        assert_eq!(
            RecordLayout::new(&[FieldSpec::value("a", 0..=3), FieldSpec::flag("b", 3)]),
            Err(BitOpsError::OverlappingFields("a", "b"))
        );
        assert_eq!(
            RecordLayout::new(&[FieldSpec::flag("neg", -1)]),
            Err(BitOpsError::FieldOutOfRange("neg"))
        );
        assert_eq!(
            RecordLayout::new(&[FieldSpec::value("wide", 60..=64)]),
            Err(BitOpsError::FieldOutOfRange("wide"))
        );
        assert_eq!(
            RecordLayout::new(&[FieldSpec::value("empty", 4..4)]),
            Err(BitOpsError::FieldOutOfRange("empty"))
        );
    }

    #[test]
    fn flag_must_be_one_bit() {
        let wide_flag = FieldSpec {
            name: "x",
            selector: Selector::Range {
                offset: 0,
                length: 4,
            },
            kind: FieldKind::Flag,
        };
        assert_eq!(
            RecordLayout::new(&[wide_flag]),
            Err(BitOpsError::FieldOutOfRange("x"))
        );

        let one_bit = FieldSpec {
            selector: Selector::Range {
                offset: 3,
                length: 1,
            },
            ..wide_flag
        };
        let layout = RecordLayout::new(&[one_bit]).unwrap();
        assert_eq!(
            layout.get(&BitField::new(0b1010), "x"),
            Ok(FieldValue::Flag(true))
        );
    }

    #[test]
    fn encode_rejects_repeated_names() -> Result<()> {
        let layout = RecordLayout::new(&[FieldSpec::value("k", 0..4)])?;
        assert_eq!(
            layout.encode(&[("k", 0b0101), ("k", 0b1010)]),
            Err(BitOpsError::DuplicateField("k"))
        );
        assert_eq!(layout.encode(&[("k", 0b1010)])?, 0b1010);
        Ok(())
    }
}
