//! Identifier normalization
//!
//! Turns raw document keys into Go identifiers.
//!
//! # Rules
//!
//! - Keys are split on `_`; every segment after the first is title-cased
//! - Leading punctuation is dropped from the first segment and its first
//!   remaining rune is upper-cased, or spelled out when it is a digit
//! - Segments matching a common initialism (`id`, `url`, `http`, ...) are
//!   rendered fully upper-case
//!
//! The raw key is never altered; it is carried alongside the derived name as
//! the field's serialization tag.

mod initialisms;
mod normalizer;

pub use initialisms::{is_discarded, is_initialism, spell_digit, WORD_SEPARATOR};
pub use normalizer::{
    clean_segment, is_exported_identifier, is_go_identifier, normalize, title_case,
    to_upper_initialism, type_name, FieldName,
};
