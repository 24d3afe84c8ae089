//! Conversion of loosely typed host values into selectors.
//!
//! A scripting host hands over whatever its caller passed: an integer, an
//! interval, or something else entirely. Integers and bounded intervals become
//! selectors. Any other shape is a programmer error and is reported as
//! [`BitOpsError`], which keeps it apart from the `None` that a well-formed
//! but unanswerable selector produces.
//!
//! ```rust
//! use bit_ops::{BitField, HostValue};
//!
//! let word = BitField::new(0b1110111);
//!
//! assert_eq!(word.value_at_host(&HostValue::inclusive(2, 4))?, Some(0b101));
//! assert_eq!(word.value_at_host(&HostValue::Int(2))?, Some(1));
//! assert_eq!(word.value_at_host(&HostValue::inclusive(-1, -2))?, None);
//! assert!(word.value_at_host(&HostValue::Float(2.0)).is_err());
//! # Ok::<(), bit_ops::BitOpsError>(())
//! ```

#[cfg(not(feature = "std"))]
use alloc::string::String;

use log::debug;

use crate::{BitField, BitOpsError, Selector};

type Result<T> = core::result::Result<T, BitOpsError>;

#[derive(Clone, Debug, PartialEq)]
pub enum HostValue {
    Int(i64),
    /// An interval with optional bounds. `exclusive` leaves out `end`.
    Range {
        start: Option<i64>,
        end: Option<i64>,
        exclusive: bool,
    },
    Float(f64),
    Str(String),
    Nil,
}

impl HostValue {
    pub const fn inclusive(start: i64, end: i64) -> Self {
        HostValue::Range {
            start: Some(start),
            end: Some(end),
            exclusive: false,
        }
    }

    pub const fn exclusive(start: i64, end: i64) -> Self {
        HostValue::Range {
            start: Some(start),
            end: Some(end),
            exclusive: true,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::Int(_) => "Integer",
            HostValue::Range { .. } => "Range",
            HostValue::Float(_) => "Float",
            HostValue::Str(_) => "String",
            HostValue::Nil => "nil",
        }
    }

    /// The value as a bit index. Only integers qualify.
    pub fn try_into_index(&self) -> Result<i64> {
        match *self {
            HostValue::Int(index) => Ok(index),
            _ => {
                debug!("host: {} is not a bit index", self.type_name());
                Err(BitOpsError::UnsupportedSelector(self.type_name()))
            }
        }
    }
}

impl TryFrom<&HostValue> for Selector {
    type Error = BitOpsError;

    fn try_from(value: &HostValue) -> Result<Self> {
        match *value {
            HostValue::Int(index) => Ok(Selector::Index(index)),
            HostValue::Range {
                start: Some(start),
                end: Some(end),
                exclusive,
            } => {
                let length = end as i128 - start as i128 + if exclusive { 0 } else { 1 };
                if length <= 0 {
                    return Ok(Selector::Empty);
                }
                Ok(Selector::Range {
                    offset: start,
                    length: length.min(i64::MAX as i128) as i64,
                })
            }
            HostValue::Range { .. } => {
                debug!("host: range without both bounds");
                Err(BitOpsError::UnboundedRange)
            }
            _ => {
                debug!("host: {} is not a selector", value.type_name());
                Err(BitOpsError::UnsupportedSelector(value.type_name()))
            }
        }
    }
}

impl TryFrom<HostValue> for Selector {
    type Error = BitOpsError;

    fn try_from(value: HostValue) -> Result<Self> {
        Selector::try_from(&value)
    }
}

impl BitField {
    /// [`BitField::set_at`] for a host value. `Err` means the value is not an
    /// integer; `Ok(None)` means the index is negative.
    pub fn set_at_host(&self, index: &HostValue) -> Result<Option<bool>> {
        Ok(self.set_at(index.try_into_index()?))
    }

    /// [`BitField::value_at`] for a host value. `Err` means the value is not
    /// an integer or a bounded range; `Ok(None)` means nothing can be read.
    pub fn value_at_host(&self, selector: &HostValue) -> Result<Option<u64>> {
        Ok(self.value_at(Selector::try_from(selector)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_and_ranges_convert() -> Result<()> {
        assert_eq!(Selector::try_from(&HostValue::Int(5))?, Selector::Index(5));
        assert_eq!(
            Selector::try_from(&HostValue::inclusive(2, 4))?,
            Selector::Range {
                offset: 2,
                length: 3
            }
        );
        assert_eq!(
            Selector::try_from(HostValue::exclusive(2, 4))?,
            Selector::Range {
                offset: 2,
                length: 2
            }
        );
        Ok(())
    }

    #[test]
    fn empty_ranges_have_no_value() -> Result<()> {
        let word = BitField::new(0b0110);
        assert_eq!(Selector::try_from(&HostValue::exclusive(3, 3))?, Selector::Empty);
        assert_eq!(word.value_at_host(&HostValue::inclusive(-1, -2))?, None);
        assert_eq!(word.value_at_host(&HostValue::inclusive(-1, 0))?, None);
        assert_eq!(word.value_at_host(&HostValue::inclusive(0, 1))?, Some(2));
        Ok(())
    }

    #[test]
    fn unsupported_shapes_fail() {
        let word = BitField::new(1);
        assert_eq!(
            word.value_at_host(&HostValue::Str("1".into())),
            Err(BitOpsError::UnsupportedSelector("String"))
        );
        assert_eq!(
            word.value_at_host(&HostValue::Nil),
            Err(BitOpsError::UnsupportedSelector("nil"))
        );
        assert_eq!(
            word.value_at_host(&HostValue::Range {
                start: Some(1),
                end: None,
                exclusive: false
            }),
            Err(BitOpsError::UnboundedRange)
        );
        assert_eq!(
            word.set_at_host(&HostValue::inclusive(0, 1)),
            Err(BitOpsError::UnsupportedSelector("Range"))
        );
    }

    #[test]
    fn set_at_through_host() -> Result<()> {
        let word = BitField::new(0b010);
        assert_eq!(word.set_at_host(&HostValue::Int(1))?, Some(true));
        assert_eq!(word.set_at_host(&HostValue::Int(0))?, Some(false));
        assert_eq!(word.set_at_host(&HostValue::Int(-1))?, None);
        Ok(())
    }
}
