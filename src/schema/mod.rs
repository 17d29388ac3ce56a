//! Type classification module
//!
//! Maps decoded values onto the Go types used for struct fields.
//!
//! # Rules
//!
//! - **Scalars**: `bool`, `string`, and `int` or `float64` depending on
//!   whether the sampled number has a fractional part
//! - **Null**: `interface{}`, since a null sample says nothing about the type
//! - **Lists**: typed from their first element only
//! - **Objects**: become embedded records, scheduled for their own declaration
//!
//! Classification is sample based: the same key can classify differently in
//! two documents.

mod classifier;
mod types;

pub use classifier::{classify, is_integral};
pub use types::{Classified, TypeDescriptor};
