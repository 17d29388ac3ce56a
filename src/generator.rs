//! End-to-end generation
//!
//! [`Generator`] runs the whole pipeline for one document: decode the input
//! text, compose the Go source and align it.

use crate::compose::DocumentComposer;
use crate::config::GenConfig;
use crate::decode::{decoder_for, DocumentDecoder, DocumentFormat};
use crate::error::{Error, Result};
use crate::format::align_source;
use serde_json::Value;

/// Generates Go type definitions from sample documents
pub struct Generator {
    composer: DocumentComposer,
    decoder: Box<dyn DocumentDecoder>,
    align: bool,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("composer", &self.composer)
            .field("format", &self.decoder.format())
            .field("align", &self.align)
            .finish()
    }
}

impl Generator {
    /// Create a generator for JSON input; fails on an invalid config
    pub fn new(config: &GenConfig) -> Result<Self> {
        Ok(Self {
            composer: DocumentComposer::new(config)?,
            decoder: decoder_for(DocumentFormat::Json),
            align: true,
        })
    }

    /// Read input in the given format
    #[must_use]
    pub fn with_format(mut self, format: DocumentFormat) -> Self {
        self.decoder = decoder_for(format);
        self
    }

    /// Use a custom decoder
    #[must_use]
    pub fn with_decoder(mut self, decoder: Box<dyn DocumentDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    /// Enable/disable gofmt-style alignment of the output
    #[must_use]
    pub fn with_alignment(mut self, enabled: bool) -> Self {
        self.align = enabled;
        self
    }

    /// The validated config in use
    pub fn config(&self) -> &GenConfig {
        self.composer.config()
    }

    /// Input format
    pub fn format(&self) -> DocumentFormat {
        self.decoder.format()
    }

    /// Generate Go source from document text
    pub fn generate(&self, input: &str) -> Result<String> {
        if input.trim().is_empty() {
            return Err(Error::decode(format!("empty {} document", self.format())));
        }
        let document = self.decoder.decode(input)?;
        self.generate_from_value(&document)
    }

    /// Generate Go source from an already decoded document
    pub fn generate_from_value(&self, document: &Value) -> Result<String> {
        let source = self.composer.compose(document)?;
        if self.align {
            Ok(align_source(&source))
        } else {
            Ok(source)
        }
    }
}

/// Generate aligned Go source from JSON text (convenience function)
pub fn generate(config: &GenConfig, json: &str) -> Result<String> {
    Generator::new(config)?.generate(json)
}
