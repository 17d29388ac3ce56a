//! Raw key to identifier conversion

use super::initialisms::{is_discarded, is_initialism, spell_digit, WORD_SEPARATOR};
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Go identifier: a letter or underscore followed by letters, digits or underscores
static GO_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}_][\p{L}\p{Nd}_]*$").unwrap());

/// Identifier derived from a raw document key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldName(String);

impl FieldName {
    /// The identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Field name used for a list of records: the record name plus `s`
    pub fn plural(&self) -> String {
        format!("{}s", self.0)
    }

}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive a field name from a raw key.
///
/// `biz_id` becomes `BizID`, `6dsaf` becomes `Sixdsaf`, `<>field` becomes
/// `Field`. Fails when nothing usable is left, or when the result is not an
/// exported Go identifier. A key starting with an uncased letter such as
/// `日本語a` is rejected: the field would be unexported and skipped by
/// `encoding/json`.
pub fn normalize(key: &str) -> Result<FieldName> {
    let mut segments = key.split(WORD_SEPARATOR);

    let mut name = segments
        .next()
        .map(|first| to_upper_initialism(&clean_segment(first)))
        .unwrap_or_default();
    for segment in segments {
        name.push_str(&to_upper_initialism(&title_case(segment)));
    }

    if name.is_empty() {
        return Err(Error::EmptyIdentifier {
            key: key.to_string(),
        });
    }
    if !is_exported_identifier(&name) {
        return Err(Error::InvalidIdentifier {
            key: key.to_string(),
            name,
        });
    }

    Ok(FieldName(name))
}

/// Clean the leading segment of a key.
///
/// Discarded runes before the first retained rune are dropped. The first
/// retained rune is spelled out if it is a digit and upper-cased otherwise;
/// the remainder of the segment is kept as is.
pub fn clean_segment(segment: &str) -> String {
    for (i, c) in segment.char_indices() {
        if is_discarded(c) {
            continue;
        }
        let rest = &segment[i + c.len_utf8()..];
        return match spell_digit(c) {
            Some(word) => format!("{word}{rest}"),
            None => format!("{}{rest}", c.to_uppercase()),
        };
    }
    String::new()
}

/// Upper-case the first rune, leaving the rest unchanged
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

/// Render a word fully upper-case if it is a known initialism
pub fn to_upper_initialism(s: &str) -> String {
    let upper = s.to_uppercase();
    if is_initialism(&upper) {
        upper
    } else {
        s.to_string()
    }
}

/// Capitalize a caller-supplied type name (`zone` becomes `Zone`)
pub fn type_name(name: &str) -> String {
    title_case(name.trim())
}

/// Whether `s` is a Go identifier starting with an upper-case letter
pub fn is_exported_identifier(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase) && is_go_identifier(s)
}

/// Whether `s` is a syntactically valid Go identifier
pub fn is_go_identifier(s: &str) -> bool {
    GO_IDENTIFIER.is_match(s)
}
