//! Error types shared across the crate.
//!
//! Value constructors (`Stroke::new`, `Strokes::new`) never return these:
//! they mark the value with the sticky failed flag instead. The strict
//! parsers, the dictionary file formats and the atlas projection report
//! the reason through [`StenoError`].

use std::fmt;

use thiserror::Error;

/// The three key zones of a stroke, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    Left,
    Middle,
    Right,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Zone::Left => "left-hand",
            Zone::Middle => "vowel",
            Zone::Right => "right-hand",
        };
        f.write_str(name)
    }
}

/// Primary error type for stroke parsing, dictionary ingestion and atlas lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StenoError {
    // === Stroke Grammar ===
    /// Character outside the steno alphabet.
    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    /// Key repeated or written out of steno order inside its zone.
    #[error("key '{ch}' out of order in the {zone} zone")]
    OutOfOrder { ch: char, zone: Zone },

    /// Letter from the alphabet but not from this zone.
    #[error("key '{ch}' does not belong to the {zone} zone")]
    NotInZone { ch: char, zone: Zone },

    /// `#` anywhere but the start of the stroke.
    #[error("number bar '#' must lead the stroke")]
    MisplacedNumberBar,

    /// One stroke of a slash-delimited outline failed.
    #[error("stroke {index} of outline is invalid: {source}")]
    InvalidSegment {
        index: usize,
        #[source]
        source: Box<StenoError>,
    },

    // === Dictionary Files ===
    /// Input bytes are not UTF-8.
    #[error("{format} dictionary is not valid UTF-8")]
    NotUtf8 { format: &'static str },

    /// Input contains no entries where at least one is required.
    #[error("{format} dictionary contains no entries")]
    NoEntries { format: &'static str },

    /// Input does not follow the file grammar.
    #[error("malformed {format} dictionary at offset {offset}: {detail}")]
    Malformed {
        format: &'static str,
        offset: usize,
        detail: String,
    },

    // === Atlas ===
    /// Outline cannot be placed on the Hilbert grid.
    #[error("outline '{outline}' is not displayable")]
    NotDisplayable { outline: String },

    /// Coordinate outside the grid.
    #[error("position ({x}, {y}) lies outside the {size}x{size} grid")]
    OutOfGrid { x: u32, y: u32, size: u32 },
}

impl StenoError {
    pub(crate) fn malformed(format: &'static str, offset: usize, detail: impl Into<String>) -> Self {
        StenoError::Malformed {
            format,
            offset,
            detail: detail.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, StenoError>;
