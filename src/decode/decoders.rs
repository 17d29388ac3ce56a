//! Decoder implementations
//!
//! Each decoder handles a specific document format.

use super::types::{DocumentDecoder, DocumentFormat};
use crate::error::Result;
use serde_json::Value;
use tracing::debug;

// ============================================================================
// JSON Decoder
// ============================================================================

/// JSON decoder
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self
    }
}

impl DocumentDecoder for JsonDecoder {
    fn decode(&self, input: &str) -> Result<Value> {
        debug!(bytes = input.len(), "Decoding JSON document");
        Ok(serde_json::from_str(input)?)
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Json
    }
}

// ============================================================================
// YAML Decoder
// ============================================================================

/// YAML decoder.
///
/// Mapping keys must be strings; anything else fails to decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDecoder;

impl YamlDecoder {
    /// Create a new YAML decoder
    pub fn new() -> Self {
        Self
    }
}

impl DocumentDecoder for YamlDecoder {
    fn decode(&self, input: &str) -> Result<Value> {
        debug!(bytes = input.len(), "Decoding YAML document");
        Ok(serde_yaml::from_str(input)?)
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Yaml
    }
}

/// Decoder for a document format
pub fn decoder_for(format: DocumentFormat) -> Box<dyn DocumentDecoder> {
    match format {
        DocumentFormat::Json => Box::new(JsonDecoder::new()),
        DocumentFormat::Yaml => Box::new(YamlDecoder::new()),
    }
}
