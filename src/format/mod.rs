//! Source alignment
//!
//! Lays out composed source the way gofmt does for the constructs the
//! composer emits: struct fields are split into name, type and tag columns
//! and padded so each column lines up, runs of blank lines are collapsed and
//! the file ends with a single newline.
//!
//! Alignment only ever changes whitespace.

mod aligner;

pub use aligner::{align_source, split_cells};
