//! JSON dictionaries
//!
//! Any tree of objects and arrays. A member whose key is an outline and
//! whose value is a string becomes an entry, wherever it sits; every other
//! member is walked for nested entries or ignored.
//!
//! ```text
//! {
//!     "KAT": "cat",            // comments are allowed
//!     "meta": { "TKOG": "dog", },
//! }
//! ```
//!
//! `//` and `/* */` comments and trailing commas are blanked out before
//! the text reaches `serde_json`. Blanking keeps byte offsets intact, so
//! error positions point into the original file.

use serde_json::Value;

use super::{as_text, insert, outline};
use crate::error::{Result, StenoError};
use crate::steno::Dictionary;

pub const FORMAT: &str = "JSON";

/// Parse a JSON object or array of outline/text members
pub fn parse_json(input: &[u8]) -> Result<Dictionary> {
    let text = as_text(input, FORMAT)?;
    let cleaned = strip_relaxed_syntax(text)?;

    let root: Value = serde_json::from_str(&cleaned)
        .map_err(|err| StenoError::malformed(FORMAT, offset_of(&cleaned, err.line(), err.column()), err.to_string()))?;
    if !(root.is_object() || root.is_array()) {
        return Err(StenoError::malformed(FORMAT, 0, "top level must be an object or array"));
    }

    let mut dict = Dictionary::new();
    collect(&root, &mut dict);
    Ok(dict)
}

fn collect(value: &Value, dict: &mut Dictionary) {
    match value {
        Value::Object(members) => {
            for (key, member) in members {
                if let Value::String(text) = member {
                    if let Ok(strokes) = outline(key, FORMAT, 0) {
                        insert(dict, strokes, text);
                    }
                } else {
                    collect(member, dict);
                }
            }
        }
        Value::Array(items) => items.iter().for_each(|item| collect(item, dict)),
        _ => {}
    }
}

/// Byte offset of a 1-based line and column
fn offset_of(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(text.len())
}

// ═══════════════════════════════════════════════════════════════════════════════
// RELAXED SYNTAX
// ═══════════════════════════════════════════════════════════════════════════════

/// Blank out comments and trailing commas outside of strings
fn strip_relaxed_syntax(text: &str) -> Result<String> {
    let bytes = text.as_bytes();
    let mut out = bytes.to_vec();
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            i += 1;
            continue;
        }

        match (b, bytes.get(i + 1)) {
            (b'"', _) => {
                in_string = true;
                i += 1;
            }
            (b'/', Some(b'/')) => {
                let end = bytes[i..]
                    .iter()
                    .position(|&c| c == b'\n')
                    .map_or(bytes.len(), |n| i + n);
                blank(&mut out[i..end]);
                i = end;
            }
            (b'/', Some(b'*')) => {
                let Some(n) = text[i + 2..].find("*/") else {
                    return Err(StenoError::malformed(FORMAT, i, "unterminated comment"));
                };
                let end = i + 2 + n + 2;
                blank(&mut out[i..end]);
                i = end;
            }
            _ => i += 1,
        }
    }

    // Comments are gone, so a comma followed only by whitespace and a
    // closing bracket is trailing.
    in_string = false;
    escaped = false;
    for i in 0..out.len() {
        let b = out[i];
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b',' => {
                let next = out[i + 1..].iter().find(|c| !c.is_ascii_whitespace());
                if matches!(next, Some(b']' | b'}')) {
                    out[i] = b' ';
                }
            }
            _ => {}
        }
    }

    // Only ASCII bytes outside strings were replaced, so the text stays UTF-8.
    String::from_utf8(out).map_err(|_| StenoError::NotUtf8 { format: FORMAT })
}

/// Replace with spaces, keeping line breaks so positions survive
fn blank(bytes: &mut [u8]) {
    for b in bytes.iter_mut().filter(|b| **b != b'\n') {
        *b = b' ';
    }
}
