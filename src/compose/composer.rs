//! Go source composer

use crate::config::GenConfig;
use crate::emit::{DefinitionScheduler, EmittedDefinition, PendingRecord, RecordEmitter};
use crate::error::{Error, Result};
use crate::types::ValueKind;
use serde_json::Value;
use tracing::{debug, info};

/// Import block added when `import_json` is set
const JSON_IMPORT: &str = "import (\n\t\"encoding/json\"\n)\n\n";

/// Composes a Go source file from a decoded document
#[derive(Debug, Clone)]
pub struct DocumentComposer {
    config: GenConfig,
}

impl DocumentComposer {
    /// Create a composer; the config is validated up front
    pub fn new(config: &GenConfig) -> Result<Self> {
        Ok(Self {
            config: config.validated()?,
        })
    }

    /// The validated config in use
    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Compose the Go source for a decoded document.
    ///
    /// Nothing is returned unless every declaration could be generated.
    pub fn compose(&self, root: &Value) -> Result<String> {
        let sample = representative_sample(root)?;
        let (alias, seed) = self.plan_root(sample)?;

        let emitter = RecordEmitter::new().with_tag_keys(self.config.tag_keys.clone());
        let mut scheduler = DefinitionScheduler::new(emitter, seed);
        if alias.is_some() {
            scheduler = scheduler.with_reserved(&self.config.name);
        }
        let definitions = scheduler.collect::<Result<Vec<_>>>()?;

        let mut source = self.preamble();
        if let Some(alias) = alias {
            source.push_str(&alias);
            source.push('\n');
        }
        let body = definitions
            .iter()
            .map(EmittedDefinition::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        source.push_str(&body);

        info!(
            name = %self.config.name,
            definitions = definitions.len(),
            map_type = self.config.map_type,
            "Generated Go type definitions"
        );
        Ok(source)
    }

    /// Package clause and, when configured, the `encoding/json` import
    pub fn preamble(&self) -> String {
        let mut preamble = format!("package {}\n\n", self.config.package);
        if self.config.import_json {
            preamble.push_str(JSON_IMPORT);
        }
        preamble
    }

    /// Work out the optional map alias and the first record to emit
    fn plan_root<'a>(&self, sample: &'a Value) -> Result<(Option<String>, PendingRecord<'a>)> {
        if !self.config.map_type {
            let record = sample
                .as_object()
                .ok_or_else(|| Error::shape("an object", ValueKind::of(sample)))?;
            return Ok((None, PendingRecord::new(&self.config.name, record)));
        }

        let map = sample
            .as_object()
            .ok_or_else(|| Error::shape("an object for map mode", ValueKind::of(sample)))?;
        let (key, entry) = map
            .iter()
            .next()
            .ok_or_else(|| Error::shape("a non-empty object for map mode", "an empty object"))?;
        debug!(key = %key, "Using map entry as the representative record");

        let name = &self.config.name;
        let struct_name = &self.config.struct_name;
        let (alias, element) = match entry {
            Value::Array(items) => {
                let first = items
                    .first()
                    .ok_or_else(|| Error::empty_list(format!("map entry '{key}'")))?;
                (format!("type {name} map[string][]{struct_name}\n"), first)
            }
            other => (format!("type {name} map[string]{struct_name}\n"), other),
        };

        let record = element
            .as_object()
            .ok_or_else(|| Error::shape("an object as map value", ValueKind::of(element)))?;
        Ok((Some(alias), PendingRecord::new(struct_name, record)))
    }
}

/// The value generation works from: the first element of a top-level list,
/// or the document itself.
pub fn representative_sample(root: &Value) -> Result<&Value> {
    match root {
        Value::Array(items) => items
            .first()
            .ok_or_else(|| Error::empty_list("top-level document")),
        other => Ok(other),
    }
}
