//! CLI module
//!
//! Command-line interface for generating Go types.
//!
//! # Behaviour
//!
//! - Reads the sample document from a file or stdin
//! - Writes the Go source to a file or stdout
//! - Derives the package name from the output directory when none is given
//! - Optionally echoes the source document next to the output file

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{derive_package, Runner};
