//! Document decoder module
//!
//! Supports: JSON, YAML
//!
//! # Overview
//!
//! Decoders turn the raw input document into a `serde_json::Value` tree.
//! Everything downstream works on that tree, whatever the source format.

mod decoders;
mod types;

pub use decoders::{decoder_for, JsonDecoder, YamlDecoder};
pub use types::{DocumentDecoder, DocumentFormat};
