//! Document composition
//!
//! Assembles the generated Go source file: package clause, optional
//! `encoding/json` import, the map alias in map mode, and every struct
//! declaration in discovery order.
//!
//! The composed text is valid Go but not column aligned; see
//! [`crate::format`] for gofmt-style alignment.

mod composer;

pub use composer::{representative_sample, DocumentComposer};

#[cfg(test)]
mod tests;
