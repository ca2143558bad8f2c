//! Plain text dictionaries
//!
//! ```text
//! KAT = cat
//! KAT/-S = cats
//! ```
//!
//! One entry per line, blank lines ignored, at least one entry required.

use super::{as_text, insert, outline};
use crate::error::{Result, StenoError};
use crate::steno::Dictionary;

pub const FORMAT: &str = "plain";

/// Parse `OUTLINE = text` lines
pub fn parse_plain(input: &[u8]) -> Result<Dictionary> {
    let text = as_text(input, FORMAT)?;
    let mut dict = Dictionary::new();
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        if line.trim().is_empty() {
            continue;
        }

        let Some((steno, translation)) = line.split_once('=') else {
            return Err(StenoError::malformed(FORMAT, start, "expected `OUTLINE = text`"));
        };
        let strokes = outline(steno, FORMAT, start)?;
        insert(&mut dict, strokes, translation.trim());
    }

    if dict.is_empty() {
        return Err(StenoError::NoEntries { format: FORMAT });
    }
    Ok(dict)
}
