//! RTF/CRE dictionaries
//!
//! ```text
//! {\rtf1\ansi{\*\cxrev100}\cxdict{\*\cxsystem Plover}
//! {\*\cxs KAT}cat
//! {\*\cxs KAT/-S}cats{\cxp. }
//! }
//! ```
//!
//! The file is one group of elements: nested groups, control words,
//! control symbols and plain text. An entry is the group `{\*\cxs OUTLINE}`
//! and its translation is the raw text after it, up to the next entry or
//! the end of the enclosing group, with surrounding whitespace trimmed.

use super::{as_text, insert, outline};
use crate::error::{Result, StenoError};
use crate::steno::{Dictionary, Strokes};

pub const FORMAT: &str = "RTF";

const HEADER: &str = "{\\rtf";
const ENTRY: &str = "{\\*\\cxs ";

/// Parse an RTF/CRE document
pub fn parse_rtf(input: &[u8]) -> Result<Dictionary> {
    let text = as_text(input, FORMAT)?;
    if !text.starts_with(HEADER) {
        return Err(StenoError::malformed(FORMAT, 0, "missing `{\\rtf` header"));
    }

    let mut reader = Reader::new(text);
    reader.group()?;
    reader.skip_whitespace();
    if !reader.at_end() {
        return Err(reader.error("data after the closing brace"));
    }

    let mut dict = Dictionary::new();
    for (strokes, translation) in reader.entries {
        insert(&mut dict, strokes, translation);
    }
    Ok(dict)
}

// ═══════════════════════════════════════════════════════════════════════════════
// READER
// ═══════════════════════════════════════════════════════════════════════════════

struct Reader<'a> {
    src: &'a str,
    pos: usize,
    entries: Vec<(Strokes, &'a str)>,
}

impl<'a> Reader<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            entries: Vec::new(),
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn error(&self, detail: &str) -> StenoError {
        StenoError::malformed(FORMAT, self.pos, detail)
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// `{ element* }`
    fn group(&mut self) -> Result<()> {
        if self.peek() != Some(b'{') {
            return Err(self.error("expected `{`"));
        }
        self.pos += 1;
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.error("unterminated group")),
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(_) => self.element()?,
            }
        }
    }

    fn element(&mut self) -> Result<()> {
        if self.rest().starts_with(ENTRY) {
            return self.entry();
        }
        match self.peek() {
            Some(b'{') => self.group(),
            Some(b'\\') => self.control(),
            _ => {
                self.text();
                Ok(())
            }
        }
    }

    /// `\word`, `\word-12` or a control symbol like `\*`
    fn control(&mut self) -> Result<()> {
        self.pos += 1;
        let Some(next) = self.rest().chars().next() else {
            return Err(self.error("dangling backslash"));
        };
        if !next.is_ascii_lowercase() {
            self.pos += next.len_utf8();
            return Ok(());
        }

        let rest = self.rest();
        let word = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_lowercase()).len();
        self.pos += word;
        let rest = self.rest();
        let sign = usize::from(rest.starts_with('-'));
        let digits = rest[sign..].len() - rest[sign..].trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits > 0 {
            self.pos += sign + digits;
        }
        Ok(())
    }

    /// Unformatted text up to the next special character or line end
    fn text(&mut self) {
        let rest = self.rest();
        let len = rest
            .find(|c: char| matches!(c, '\\' | '{' | '}' | '\n' | '\r'))
            .unwrap_or(rest.len());
        self.pos += len.max(1);
    }

    /// `{\*\cxs OUTLINE}translation`
    fn entry(&mut self) -> Result<()> {
        self.pos += ENTRY.len();
        let start = self.pos;
        let Some(close) = self.rest().find('}') else {
            return Err(self.error("unterminated outline"));
        };
        let strokes = outline(&self.src[start..start + close], FORMAT, start)?;
        self.pos = start + close + 1;

        let text_start = self.pos;
        loop {
            self.skip_whitespace();
            if self.at_end() || self.peek() == Some(b'}') || self.rest().starts_with(ENTRY) {
                break;
            }
            self.element()?;
        }

        let translation = self.src[text_start..self.pos].trim();
        if translation.is_empty() {
            return Err(StenoError::malformed(FORMAT, text_start, "entry without translation"));
        }
        self.entries.push((strokes, translation));
        Ok(())
    }
}
