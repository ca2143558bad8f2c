//! Brief - An outline together with the text it writes
//!
//! Briefs are the building blocks for generated dictionaries. Two
//! combinators put them together:
//!
//! ```text
//! a + b   last stroke of a and first stroke of b pressed together
//! a | b   b's strokes written after a's strokes
//! ```
//!
//! Both join the texts with a space, unless the boundary carries the glue
//! marker `~`, which is then consumed. Empty strokes are dropped after
//! every change so outlines stay minimal.

use core::fmt;
use core::ops::{Add, AddAssign, BitOr, BitOrAssign};

use super::stroke::{Stroke, GLUE};
use super::strokes::Strokes;

/// A function from brief to brief, applied with [`Brief::apply`]
pub type Modifier = fn(Brief) -> Brief;

/// Outline plus output text
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Brief {
    pub strokes: Strokes,
    pub text: String,
}

impl Brief {
    /// Create a brief; the outline is normalized
    pub fn new(strokes: impl Into<Strokes>, text: impl Into<String>) -> Self {
        let mut brief = Self {
            strokes: strokes.into(),
            text: text.into(),
        };
        brief.normalize();
        brief
    }

    /// Text without strokes
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            strokes: Strokes::empty(),
            text: text.into(),
        }
    }

    /// A bare glue marker
    ///
    /// Joined onto a fragment, the marker moves to that fragment's edge so the
    /// next join happens without a space.
    pub fn glue() -> Self {
        Self::text_only(GLUE)
    }

    /// True if any stroke of the outline failed to parse
    pub fn failed(&self) -> bool {
        self.strokes.failed()
    }

    /// Check if the brief has neither strokes nor text
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.text.is_empty()
    }

    /// Same outline, different text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Fuse the boundary strokes and join the texts
    pub fn fuse(mut self, other: impl Into<Brief>) -> Brief {
        let other = other.into();
        self.strokes = self.strokes.fuse(other.strokes);
        self.append_text(&other.text);
        self.normalize();
        self
    }

    /// Append the other outline and join the texts
    pub fn concat(mut self, other: impl Into<Brief>) -> Brief {
        let other = other.into();
        self.strokes = self.strokes.concat(other.strokes);
        self.append_text(&other.text);
        self.normalize();
        self
    }

    /// Run a modifier over this brief
    pub fn apply<F>(self, modifier: F) -> Brief
    where
        F: FnOnce(Brief) -> Brief,
    {
        let mut brief = modifier(self);
        brief.normalize();
        brief
    }

    /// Join text onto the end, honoring glue markers at the boundary
    pub fn append_text(&mut self, text: &str) {
        if self.text.is_empty() {
            self.text = text.to_owned();
            return;
        }
        if text.is_empty() {
            return;
        }

        let end_glue = self.text.ends_with(GLUE);
        let start_glue = text.starts_with(GLUE);
        let left = if end_glue {
            &self.text[..self.text.len() - GLUE.len_utf8()]
        } else {
            self.text.as_str()
        };
        let right = if start_glue { &text[GLUE.len_utf8()..] } else { text };

        let joined = if end_glue && left.is_empty() {
            format!("{GLUE}{right}")
        } else if start_glue && right.is_empty() {
            format!("{left}{GLUE}")
        } else if end_glue || start_glue {
            format!("{left}{right}")
        } else {
            format!("{left} {right}")
        };
        self.text = joined;
    }

    /// Drop empty strokes from the outline
    pub fn normalize(&mut self) {
        self.strokes.remove_empty();
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// MODIFIERS
// ═══════════════════════════════════════════════════════════════════════════════

/// Left-pad the text with zeros to at least `width` characters
pub fn pad(width: usize) -> impl Fn(Brief) -> Brief {
    move |mut brief| {
        let missing = width.saturating_sub(brief.text.chars().count());
        if missing > 0 {
            brief.text.insert_str(0, &"0".repeat(missing));
        }
        brief
    }
}

/// Insert a decimal point before the last `places` digits
pub fn insert_decimal(places: usize) -> impl Fn(Brief) -> Brief {
    move |brief| {
        let mut brief = pad(places + 1)(brief);
        let at = match places {
            0 => brief.text.len(),
            _ => brief
                .text
                .char_indices()
                .rev()
                .nth(places - 1)
                .map_or(0, |(at, _)| at),
        };
        brief.text.insert(at, '.');
        brief
    }
}

/// Put a text fragment in front, following the usual glue rules
pub fn prefix(text: &'static str) -> impl Fn(Brief) -> Brief {
    move |brief| Brief::text_only(text).concat(brief)
}

/// Append a plural `s` to the text
pub fn pluralize(mut brief: Brief) -> Brief {
    if !brief.text.is_empty() && !brief.text.ends_with('s') {
        brief.text.push('s');
    }
    brief
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONVERSIONS & OPERATORS
// ═══════════════════════════════════════════════════════════════════════════════

impl From<Stroke> for Brief {
    fn from(stroke: Stroke) -> Self {
        Brief::new(stroke, String::new())
    }
}

impl From<Strokes> for Brief {
    fn from(strokes: Strokes) -> Self {
        Brief::new(strokes, String::new())
    }
}

impl From<&str> for Brief {
    fn from(text: &str) -> Self {
        Brief::text_only(text)
    }
}

impl From<String> for Brief {
    fn from(text: String) -> Self {
        Brief::text_only(text)
    }
}

impl<T: Into<Brief>> Add<T> for Brief {
    type Output = Brief;
    fn add(self, other: T) -> Brief {
        self.fuse(other)
    }
}

impl<T: Into<Brief>> AddAssign<T> for Brief {
    fn add_assign(&mut self, other: T) {
        *self = core::mem::take(self).fuse(other);
    }
}

impl<T: Into<Brief>> BitOr<T> for Brief {
    type Output = Brief;
    fn bitor(self, other: T) -> Brief {
        self.concat(other)
    }
}

impl<T: Into<Brief>> BitOrAssign<T> for Brief {
    fn bitor_assign(&mut self, other: T) {
        *self = core::mem::take(self).concat(other);
    }
}

impl fmt::Debug for Brief {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Brief({} = {:?})", self.strokes.to_rtfcre(), self.text)
    }
}

impl fmt::Display for Brief {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.strokes.to_rtfcre(), self.text)
    }
}
