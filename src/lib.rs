// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # json2go
//!
//! Generate Go type declarations from a sample JSON (or YAML) document.
//!
//! Every object in the sample becomes a Go struct; nested objects become
//! their own named structs, emitted after the struct that refers to them.
//! Field names are normalized into exported Go identifiers and each field
//! carries a tag recording its original key.
//!
//! ## Quick Start
//!
//! ```rust
//! use json2go::{generate, GenConfig};
//!
//! let config = GenConfig::new("basic");
//! let source = generate(&config, r#"{"id": 1, "user_name": "x"}"#).unwrap();
//!
//! assert_eq!(
//!     source,
//!     "package main\n\ntype Basic struct {\n\tID       int    `json:\"id\"`\n\tUserName string `json:\"user_name\"`\n}\n"
//! );
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  decode (JSON/YAML) → compose → format (column alignment)     │
//! └───────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴──────────┬────────────────────┐
//! │    naming    │          schema          │        emit        │
//! ├──────────────┼──────────────────────────┼────────────────────┤
//! │ Initialisms  │ Scalars                  │ Record emitter     │
//! │ Digit words  │ Lists                    │ FIFO scheduler     │
//! │ Go idents    │ Embedded records         │ Field tags         │
//! └──────────────┴──────────────────────────┴────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Generation settings
pub mod config;

/// Key to Go identifier normalization
pub mod naming;

/// Value classification into Go types
pub mod schema;

/// Struct emission and definition scheduling
pub mod emit;

/// Whole-document composition
pub mod compose;

/// gofmt-style column alignment
pub mod format;

/// Input document decoders (JSON, YAML)
pub mod decode;

/// End-to-end generation
pub mod generator;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use compose::DocumentComposer;
pub use config::GenConfig;
pub use decode::DocumentFormat;
pub use emit::{DefinitionScheduler, EmittedDefinition, PendingRecord, RecordEmitter};
pub use generator::{generate, Generator};
pub use naming::{normalize, FieldName};
pub use schema::{classify, TypeDescriptor};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
