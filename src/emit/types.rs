//! Emission types

use crate::types::JsonObject;

/// A record waiting for its declaration
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRecord<'a> {
    /// Type name of the declaration
    pub name: String,
    /// Sampled record the declaration describes
    pub sample: &'a JsonObject,
}

impl<'a> PendingRecord<'a> {
    /// Create a pending record
    pub fn new(name: impl Into<String>, sample: &'a JsonObject) -> Self {
        Self {
            name: name.into(),
            sample,
        }
    }
}

/// Source text of one struct declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedDefinition {
    /// Type name
    pub name: String,
    /// Declaration text, ending with a newline
    pub source: String,
}

impl EmittedDefinition {
    /// The declaration text
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl std::fmt::Display for EmittedDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
