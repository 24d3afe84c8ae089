//! # bit_ops
//!
//! Bit access over packed binary record words, `no_std` compatible.
//!
//! Binary formats such as BIFF8 spreadsheets pack flags and multi-bit fields
//! into 16, 32 or 64-bit words. [`BitField`] holds one such word (always
//! widened to `u64`) and answers questions about it without ever changing it.
//!
//! ```rust
//! use bit_ops::BitField;
//!
//! let word = BitField::new(0b1110111);
//!
//! // Single bit
//! assert_eq!(word.set_at(3), Some(false));
//!
//! // Bits 2 through 4, shifted down
//! assert_eq!(word.value_at(2..=4), Some(0b101));
//!
//! // Negative positions have no answer
//! assert_eq!(word.value_at(-1), None);
//! ```
//!
//! "No value" is `None`, distinct from `Some(false)` or `Some(0)`. Errors are
//! reserved for inputs of the wrong shape, see [`host`].

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::BitOpsError;

mod mask;
pub use mask::WORD_BITS;

pub mod bit_field;
pub mod flags;
pub mod host;
pub mod selector;

pub use bit_field::BitField;
pub use flags::{FieldKind, FieldSpec, FieldValue, FlagsIter, RecordLayout};
pub use host::HostValue;
pub use selector::{BitRange, Selector};
