//! Dictionary Files - Plain, JSON and RTF/CRE ingestion
//!
//! Each format is a grammar layered over the outline grammar: wherever a
//! file names an outline, the text goes through [`Strokes::parse`]. In
//! plain and RTF files a bad outline rejects the whole file; JSON members
//! whose key is not an outline are skipped.
//!
//! ```text
//! bytes ─▶ parse_rtf ──✗──▶ parse_json ──✗──▶ parse_plain ──✗──▶ error
//!              │ ✓              │ ✓               │ ✓
//!              └────────────────┴─────────────────┴──▶ Dictionary
//! ```
//!
//! Outlines repeated inside one file keep their first translation.
//!
//! [`Strokes::parse`]: crate::steno::Strokes::parse

use tracing::debug;

use crate::error::{Result, StenoError};
use crate::steno::{AddMode, Brief, Dictionary, Strokes};

pub mod json;
pub mod plain;
pub mod rtf;

pub use json::parse_json;
pub use plain::parse_plain;
pub use rtf::parse_rtf;

/// A dictionary file parser
pub type ParseFn = fn(&[u8]) -> Result<Dictionary>;

/// Parsers tried by [`parse_guess`], in order
pub const PARSERS: [(&str, ParseFn); 3] = [
    (rtf::FORMAT, parse_rtf),
    (json::FORMAT, parse_json),
    (plain::FORMAT, parse_plain),
];

/// Try every known format, first success wins
///
/// When nothing accepts the input, the last parser's error is returned.
pub fn parse_guess(input: &[u8]) -> Result<Dictionary> {
    let mut last = StenoError::NoEntries { format: "any" };
    for (format, parse) in PARSERS {
        match parse(input) {
            Ok(dict) => {
                debug!(format, entries = dict.len(), "dictionary format recognized");
                return Ok(dict);
            }
            Err(err) => {
                debug!(format, error = %err, "dictionary format rejected");
                last = err;
            }
        }
    }
    Err(last)
}

/// Input as text, or the error naming the format that wanted it
pub(crate) fn as_text<'a>(input: &'a [u8], format: &'static str) -> Result<&'a str> {
    std::str::from_utf8(input).map_err(|_| StenoError::NotUtf8 { format })
}

/// Strictly parse an outline named by a file; empty outlines are rejected
pub(crate) fn outline(text: &str, format: &'static str, offset: usize) -> Result<Strokes> {
    let strokes = Strokes::parse(text)
        .map_err(|err| StenoError::malformed(format, offset, err.to_string()))?;
    if strokes.is_empty() {
        return Err(StenoError::malformed(format, offset, "empty outline"));
    }
    Ok(strokes)
}

/// Insert a file entry; the first translation of an outline is kept
pub(crate) fn insert(dict: &mut Dictionary, strokes: Strokes, text: &str) {
    dict.add_with(Brief::new(strokes, text), None, AddMode::Behind);
}
