//! Strokes - An outline of strokes written one after another
//!
//! Text form separates strokes with `/` ("EBGS/APL/P-L"). Outlines compare
//! lexicographically stroke by stroke, which makes them usable as ordered
//! map keys. The empty outline means "no strokes" and is distinct from an
//! outline holding one empty stroke.

use core::fmt;
use core::ops::{Add, AddAssign, BitOr, BitOrAssign, Index, IndexMut, Sub};
use core::str::FromStr;

use super::stroke::Stroke;
use crate::error::{Result, StenoError};

/// Stroke separator in text form
pub const SEPARATOR: char = '/';

/// An ordered sequence of strokes
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Strokes {
    list: Vec<Stroke>,
}

impl Strokes {
    /// The empty outline
    pub const fn empty() -> Self {
        Self { list: Vec::new() }
    }

    /// Parse a slash-delimited outline
    ///
    /// Every segment is parsed even after one fails; [`Strokes::failed`]
    /// reports whether any did.
    pub fn new(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::empty();
        }
        text.split(SEPARATOR).map(Stroke::new).collect()
    }

    /// Parse a slash-delimited outline, rejecting it on the first bad stroke
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::empty());
        }
        text.split(SEPARATOR)
            .enumerate()
            .map(|(index, segment)| {
                Stroke::parse(segment).map_err(|source| StenoError::InvalidSegment {
                    index,
                    source: Box::new(source),
                })
            })
            .collect()
    }

    /// True if any stroke failed to parse
    pub fn failed(&self) -> bool {
        self.list.iter().any(Stroke::failed)
    }

    /// Number of strokes
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Check if there are no strokes
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn first(&self) -> Option<Stroke> {
        self.list.first().copied()
    }

    pub fn last(&self) -> Option<Stroke> {
        self.list.last().copied()
    }

    pub fn get(&self, index: usize) -> Option<Stroke> {
        self.list.get(index).copied()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Stroke> {
        self.list.iter()
    }

    pub fn as_slice(&self) -> &[Stroke] {
        &self.list
    }

    /// The single stroke of a one-stroke outline
    pub fn single(&self) -> Option<Stroke> {
        match self.list.as_slice() {
            [stroke] => Some(*stroke),
            _ => None,
        }
    }

    // ───────────────────────────────────────────────────────────────────────────
    // Building
    // ───────────────────────────────────────────────────────────────────────────

    /// Add a stroke at the end
    pub fn append(&mut self, stroke: Stroke) -> &mut Self {
        self.list.push(stroke);
        self
    }

    /// Add a stroke at the front
    pub fn prepend(&mut self, stroke: Stroke) -> &mut Self {
        self.list.insert(0, stroke);
        self
    }

    /// Add another outline at the end
    pub fn append_all(&mut self, other: &Strokes) -> &mut Self {
        self.list.extend_from_slice(&other.list);
        self
    }

    /// Add another outline at the front
    pub fn prepend_all(&mut self, other: &Strokes) -> &mut Self {
        self.list.splice(0..0, other.list.iter().copied());
        self
    }

    /// Strokes of `other` follow the strokes of `self`
    pub fn concat(mut self, other: Strokes) -> Strokes {
        self.list.extend(other.list);
        self
    }

    /// The last stroke of `self` and the first of `other` become one stroke
    ///
    /// If either outline is empty there is nothing to fuse and the outlines
    /// are concatenated.
    pub fn fuse(mut self, other: Strokes) -> Strokes {
        let mut rest = other.list.into_iter();
        match (self.list.last_mut(), rest.next()) {
            (Some(last), Some(first)) => *last += first,
            (None, Some(first)) => self.list.push(first),
            (_, None) => {}
        }
        self.list.extend(rest);
        self
    }

    /// Drop empty strokes
    pub fn remove_empty(&mut self) {
        self.list.retain(|stroke| !stroke.is_empty());
    }

    // ───────────────────────────────────────────────────────────────────────────
    // Searching
    // ───────────────────────────────────────────────────────────────────────────

    /// Check if the outline begins with `prefix`
    pub fn starts_with(&self, prefix: &Strokes) -> bool {
        self.list.starts_with(&prefix.list)
    }

    /// Every index where `needle` occurs as a contiguous run, overlaps included
    ///
    /// An empty needle never matches.
    pub fn find_all(&self, needle: &Strokes) -> Vec<usize> {
        if needle.is_empty() {
            return Vec::new();
        }
        self.list
            .windows(needle.len())
            .enumerate()
            .filter(|(_, window)| *window == needle.as_slice())
            .map(|(at, _)| at)
            .collect()
    }

    /// Check if `needle` occurs as a contiguous run
    pub fn contains(&self, needle: &Strokes) -> bool {
        !needle.is_empty() && self.list.windows(needle.len()).any(|w| w == needle.as_slice())
    }

    /// Copy of the outline with `len` strokes at `at` replaced by `replacement`
    pub fn splice(&self, at: usize, len: usize, replacement: &Strokes) -> Strokes {
        let end = (at + len).min(self.list.len());
        let at = at.min(end);
        let mut list = Vec::with_capacity(self.list.len() - (end - at) + replacement.len());
        list.extend_from_slice(&self.list[..at]);
        list.extend_from_slice(&replacement.list);
        list.extend_from_slice(&self.list[end..]);
        Strokes { list }
    }

    // ───────────────────────────────────────────────────────────────────────────
    // Rendering
    // ───────────────────────────────────────────────────────────────────────────

    /// Fixed-width strokes joined by `/`
    pub fn to_canonical(&self) -> String {
        self.join(|stroke| stroke.to_canonical())
    }

    /// Compact strokes joined by `/`
    pub fn to_rtfcre(&self) -> String {
        self.join(|stroke| stroke.to_rtfcre())
    }

    fn join<S: AsRef<str>>(&self, render: impl Fn(&Stroke) -> S) -> String {
        let mut text = String::new();
        for (i, stroke) in self.list.iter().enumerate() {
            if i > 0 {
                text.push(SEPARATOR);
            }
            text.push_str(render(stroke).as_ref());
        }
        text
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONVERSIONS
// ═══════════════════════════════════════════════════════════════════════════════

impl From<Stroke> for Strokes {
    fn from(stroke: Stroke) -> Self {
        Self { list: vec![stroke] }
    }
}

impl From<Vec<Stroke>> for Strokes {
    fn from(list: Vec<Stroke>) -> Self {
        Self { list }
    }
}

impl From<&[Stroke]> for Strokes {
    fn from(list: &[Stroke]) -> Self {
        Self { list: list.to_vec() }
    }
}

impl<const N: usize> From<[Stroke; N]> for Strokes {
    fn from(list: [Stroke; N]) -> Self {
        Self { list: list.to_vec() }
    }
}

impl From<&str> for Strokes {
    fn from(text: &str) -> Self {
        Strokes::new(text)
    }
}

impl FromStr for Strokes {
    type Err = StenoError;

    fn from_str(text: &str) -> Result<Self> {
        Strokes::parse(text)
    }
}

impl FromIterator<Stroke> for Strokes {
    fn from_iter<I: IntoIterator<Item = Stroke>>(iter: I) -> Self {
        Self { list: iter.into_iter().collect() }
    }
}

impl Extend<Stroke> for Strokes {
    fn extend<I: IntoIterator<Item = Stroke>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl IntoIterator for Strokes {
    type Item = Stroke;
    type IntoIter = std::vec::IntoIter<Stroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a> IntoIterator for &'a Strokes {
    type Item = &'a Stroke;
    type IntoIter = core::slice::Iter<'a, Stroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

impl Index<usize> for Strokes {
    type Output = Stroke;

    fn index(&self, index: usize) -> &Stroke {
        &self.list[index]
    }
}

impl IndexMut<usize> for Strokes {
    fn index_mut(&mut self, index: usize) -> &mut Stroke {
        &mut self.list[index]
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// OPERATORS
// ═══════════════════════════════════════════════════════════════════════════════
//
//   a | b   a's strokes, then b's strokes
//   a + b   a's last stroke and b's first stroke pressed together

impl BitOr for Stroke {
    type Output = Strokes;
    fn bitor(self, other: Stroke) -> Strokes {
        Strokes::from([self, other])
    }
}

impl BitOr<Stroke> for Strokes {
    type Output = Strokes;
    fn bitor(mut self, other: Stroke) -> Strokes {
        self.append(other);
        self
    }
}

impl BitOr<Strokes> for Stroke {
    type Output = Strokes;
    fn bitor(self, mut other: Strokes) -> Strokes {
        other.prepend(self);
        other
    }
}

impl BitOr for Strokes {
    type Output = Strokes;
    fn bitor(self, other: Strokes) -> Strokes {
        self.concat(other)
    }
}

impl BitOrAssign for Strokes {
    fn bitor_assign(&mut self, other: Strokes) {
        self.list.extend(other.list);
    }
}

impl Add for Strokes {
    type Output = Strokes;
    fn add(self, other: Strokes) -> Strokes {
        self.fuse(other)
    }
}

impl Add<Stroke> for Strokes {
    type Output = Strokes;
    fn add(self, other: Stroke) -> Strokes {
        self.fuse(Strokes::from(other))
    }
}

impl Add<Strokes> for Stroke {
    type Output = Strokes;
    fn add(self, other: Strokes) -> Strokes {
        Strokes::from(self).fuse(other)
    }
}

impl AddAssign for Strokes {
    fn add_assign(&mut self, other: Strokes) {
        *self = core::mem::take(self).fuse(other);
    }
}

/// Release keys from the last stroke
impl Sub<Stroke> for Strokes {
    type Output = Strokes;
    fn sub(mut self, other: Stroke) -> Strokes {
        if let Some(last) = self.list.last_mut() {
            *last -= other;
        }
        self
    }
}

impl fmt::Debug for Strokes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Strokes({})", self.to_rtfcre())
    }
}

impl fmt::Display for Strokes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical())
    }
}
