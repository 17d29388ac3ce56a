//! Lookup tables used by the normalizer

use std::collections::HashSet;
use std::sync::LazyLock;

/// Character separating words inside a raw key
pub const WORD_SEPARATOR: char = '_';

/// Runes dropped from the front of a key
const DISCARDED_RUNES: &[char] = &[
    '~', '!', '@', '#', '$', '%', '^', '&', '*', '-', '_', '=', '+', ':', '.', '<', '>',
];

/// Common initialisms, after golint's list.
///
/// Only entries that are highly unlikely to be ordinary words belong here:
/// "ID" is fine, "AND" is not.
static INITIALISMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
        "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SNI", "SSH", "TLS", "TTL",
        "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML",
    ]
    .into_iter()
    .collect()
});

/// Whether a rune is skipped when cleaning the leading segment of a key
pub fn is_discarded(c: char) -> bool {
    DISCARDED_RUNES.contains(&c)
}

/// Whether an upper-cased word is a known initialism
pub fn is_initialism(upper: &str) -> bool {
    INITIALISMS.contains(upper)
}

/// Spell out an ASCII digit as a capitalized English word
pub fn spell_digit(c: char) -> Option<&'static str> {
    let word = match c {
        '0' => "Zero",
        '1' => "One",
        '2' => "Two",
        '3' => "Three",
        '4' => "Four",
        '5' => "Five",
        '6' => "Six",
        '7' => "Seven",
        '8' => "Eight",
        '9' => "Nine",
        _ => return None,
    };
    Some(word)
}
