//! Type descriptor types

use crate::types::JsonObject;

/// Semantic type of a sampled value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Bool,
    String,
    Integer,
    Float,
    /// Null sample; rendered as the empty interface
    Untyped,
    /// List of scalars
    List(Box<TypeDescriptor>),
    /// Nested record, referenced by type name
    EmbeddedRecord(String),
    /// List whose first element is a record
    EmbeddedRecordList(String),
}

impl TypeDescriptor {
    /// Wrap a descriptor in a list
    pub fn list(inner: TypeDescriptor) -> Self {
        TypeDescriptor::List(Box::new(inner))
    }

    /// Name of the nested record, if this descriptor refers to one
    pub fn record_name(&self) -> Option<&str> {
        match self {
            TypeDescriptor::EmbeddedRecord(name) | TypeDescriptor::EmbeddedRecordList(name) => {
                Some(name)
            }
            _ => None,
        }
    }

    /// Check if this is a scalar, or a list of scalars
    pub fn is_scalar(&self) -> bool {
        self.record_name().is_none()
    }
}

impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeDescriptor::Bool => write!(f, "bool"),
            TypeDescriptor::String => write!(f, "string"),
            TypeDescriptor::Integer => write!(f, "int"),
            TypeDescriptor::Float => write!(f, "float64"),
            TypeDescriptor::Untyped => write!(f, "interface{{}}"),
            TypeDescriptor::List(inner) => write!(f, "[]{inner}"),
            TypeDescriptor::EmbeddedRecord(name) => write!(f, "{name}"),
            TypeDescriptor::EmbeddedRecordList(name) => write!(f, "[]{name}"),
        }
    }
}

/// Result of classifying one field value
#[derive(Debug, Clone, PartialEq)]
pub struct Classified<'a> {
    /// Type of the field
    pub descriptor: TypeDescriptor,
    /// Record sample to schedule, for record and record-list fields
    pub nested: Option<&'a JsonObject>,
}

impl<'a> Classified<'a> {
    /// A field with no nested record
    pub fn scalar(descriptor: TypeDescriptor) -> Self {
        Self {
            descriptor,
            nested: None,
        }
    }

    /// A field that refers to a nested record sample
    pub fn record(descriptor: TypeDescriptor, sample: &'a JsonObject) -> Self {
        Self {
            descriptor,
            nested: Some(sample),
        }
    }
}
