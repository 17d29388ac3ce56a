//! Struct declaration emitter

use super::types::{EmittedDefinition, PendingRecord};
use crate::error::{Error, Result};
use crate::naming::normalize;
use crate::schema::{classify, TypeDescriptor};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Tag key every field carries
const PRIMARY_TAG_KEY: &str = "json";

/// Writes one struct declaration per pending record
#[derive(Debug, Clone, Default)]
pub struct RecordEmitter {
    /// Extra tag keys repeating the serialization key, in order
    tag_keys: Vec<String>,
}

impl RecordEmitter {
    /// Create an emitter that only writes `json` tags
    pub fn new() -> Self {
        Self::default()
    }

    /// Also write the given tag keys on every field
    #[must_use]
    pub fn with_tag_keys(mut self, keys: Vec<String>) -> Self {
        self.tag_keys = keys;
        self
    }

    /// Emit the declaration for `task`.
    ///
    /// Returns the declaration together with the nested records found among
    /// its fields, in field order. Two keys that produce the same Go field
    /// name (`foo_bar` and `fooBar`) are an error.
    pub fn emit<'a>(
        &self,
        task: &PendingRecord<'a>,
    ) -> Result<(EmittedDefinition, Vec<PendingRecord<'a>>)> {
        let mut fields: Vec<(&String, &'a Value)> = task.sample.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));

        let mut source = format!("type {} struct {{\n", task.name);
        let mut discovered = Vec::new();
        let mut field_names = HashSet::new();

        for &(key, value) in &fields {
            let name = normalize(key)?;
            let classified = classify(value, &name)?;
            let tags = field_tags(key, &self.tag_keys);

            // an embedded record's field name is its type name
            let (field, line) = match &classified.descriptor {
                TypeDescriptor::EmbeddedRecord(record) => {
                    (record.clone(), format!("\t{record} {tags}\n"))
                }
                TypeDescriptor::EmbeddedRecordList(record) => {
                    let plural = name.plural();
                    let line = format!("\t{plural} []{record} {tags}\n");
                    (plural, line)
                }
                descriptor => (name.to_string(), format!("\t{name} {descriptor} {tags}\n")),
            };
            if !field_names.insert(field.clone()) {
                return Err(Error::DuplicateField {
                    record: task.name.clone(),
                    key: key.clone(),
                    name: field,
                });
            }
            source.push_str(&line);

            if let (Some(record), Some(sample)) =
                (classified.descriptor.record_name(), classified.nested)
            {
                discovered.push(PendingRecord::new(record, sample));
            }
        }
        source.push_str("}\n");

        debug!(
            record = %task.name,
            fields = fields.len(),
            nested = discovered.len(),
            "Emitted struct definition"
        );

        let definition = EmittedDefinition {
            name: task.name.clone(),
            source,
        };
        Ok((definition, discovered))
    }
}

/// Build a field's struct tag: the `json` key followed by each extra key,
/// all carrying the raw document key.
///
/// Keys that reach this point normalized to an exported Go identifier, so
/// they hold only letters, digits, `_` and leading discarded punctuation.
/// None of those need escaping inside a quoted tag value.
pub fn field_tags(key: &str, extra_keys: &[String]) -> String {
    let mut tag = format!("`{PRIMARY_TAG_KEY}:\"{key}\"");
    for extra in extra_keys {
        tag.push_str(&format!(" {extra}:\"{key}\""));
    }
    tag.push('`');
    tag
}
