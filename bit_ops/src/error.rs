#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitOpsError {
    #[cfg_attr(
        feature = "std",
        error("unsupported selector: expected an integer or a range, got {0}")
    )]
    UnsupportedSelector(&'static str),

    #[cfg_attr(feature = "std", error("range selector must have both bounds"))]
    UnboundedRange,

    #[cfg_attr(
        feature = "std",
        error("bit size must be in the range 1..=64, got {0}")
    )]
    InvalidBitSize(u32),

    #[cfg_attr(
        feature = "std",
        error("expected 1..=8 bytes for a 64-bit word, got {0}")
    )]
    SliceLength(usize),

    #[cfg_attr(feature = "std", error("field {0} is declared twice"))]
    DuplicateField(&'static str),

    #[cfg_attr(feature = "std", error("field {0} does not fit in a 64-bit word"))]
    FieldOutOfRange(&'static str),

    #[cfg_attr(feature = "std", error("fields {0} and {1} overlap"))]
    OverlappingFields(&'static str, &'static str),

    #[cfg_attr(feature = "std", error("no field named {0}"))]
    UnknownField(String),

    #[cfg_attr(
        feature = "std",
        error("value {value} does not fit in {length} bits of field {field}")
    )]
    ValueOverflow {
        field: &'static str,
        value: u64,
        length: u32,
    },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitOpsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitOpsError::UnsupportedSelector(kind) => write!(
                f,
                "unsupported selector: expected an integer or a range, got {}",
                kind
            ),
            BitOpsError::UnboundedRange => write!(f, "range selector must have both bounds"),
            BitOpsError::InvalidBitSize(n) => {
                write!(f, "bit size must be in the range 1..=64, got {}", n)
            }
            BitOpsError::SliceLength(n) => {
                write!(f, "expected 1..=8 bytes for a 64-bit word, got {}", n)
            }
            BitOpsError::DuplicateField(name) => write!(f, "field {} is declared twice", name),
            BitOpsError::FieldOutOfRange(name) => {
                write!(f, "field {} does not fit in a 64-bit word", name)
            }
            BitOpsError::OverlappingFields(a, b) => write!(f, "fields {} and {} overlap", a, b),
            BitOpsError::UnknownField(name) => write!(f, "no field named {}", name),
            BitOpsError::ValueOverflow {
                field,
                value,
                length,
            } => write!(
                f,
                "value {} does not fit in {} bits of field {}",
                value, length, field
            ),
        }
    }
}
