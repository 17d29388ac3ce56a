//! Type classification of decoded values

use super::types::{Classified, TypeDescriptor};
use crate::error::{Error, Result};
use crate::naming::FieldName;
use serde_json::{Number, Value};

/// Classify a field value.
///
/// `name` is the field's derived name; nested records are named after it.
/// Only the first element of a list is inspected.
pub fn classify<'a>(value: &'a Value, name: &FieldName) -> Result<Classified<'a>> {
    match value {
        Value::Null => Ok(Classified::scalar(TypeDescriptor::Untyped)),
        Value::Bool(_) => Ok(Classified::scalar(TypeDescriptor::Bool)),
        Value::String(_) => Ok(Classified::scalar(TypeDescriptor::String)),
        Value::Number(n) => Ok(Classified::scalar(classify_number(n))),
        Value::Object(map) => Ok(Classified::record(
            TypeDescriptor::EmbeddedRecord(name.to_string()),
            map,
        )),
        Value::Array(items) => classify_list(items, name),
    }
}

/// Classify a list by its first element
fn classify_list<'a>(items: &'a [Value], name: &FieldName) -> Result<Classified<'a>> {
    let first = items
        .first()
        .ok_or_else(|| Error::empty_list(format!("field {name}")))?;

    let element = match first {
        Value::Object(map) => {
            return Ok(Classified::record(
                TypeDescriptor::EmbeddedRecordList(name.to_string()),
                map,
            ));
        }
        Value::Array(_) => {
            return Err(Error::NestedList {
                key: name.to_string(),
            });
        }
        Value::Null => TypeDescriptor::Untyped,
        Value::Bool(_) => TypeDescriptor::Bool,
        Value::String(_) => TypeDescriptor::String,
        Value::Number(n) => classify_number(n),
    };

    Ok(Classified::scalar(TypeDescriptor::list(element)))
}

fn classify_number(n: &Number) -> TypeDescriptor {
    if n.is_i64() {
        return TypeDescriptor::Integer;
    }
    match n.as_f64() {
        Some(v) if is_integral(v) => TypeDescriptor::Integer,
        _ => TypeDescriptor::Float,
    }
}

/// Smallest `f64` above the `int64` range (2^63)
const INT64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Whether a number decodes into a Go `int`: no fractional part (`42.0`
/// does, `42.1` does not) and within the 64-bit signed range.
pub fn is_integral(v: f64) -> bool {
    v.is_finite() && v == v.trunc() && (-INT64_BOUND..INT64_BOUND).contains(&v)
}
