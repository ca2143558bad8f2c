//! Steno Dictionary - Outline to Text Mapping
//!
//! Keys are whole outlines, so multi-stroke briefs live next to single
//! strokes. Each entry holds its translation and an optional opaque payload
//! the caller can attach.
//!
//! # Building
//! ```text
//! add(brief)                 insert, or join with the existing text as "old/new"
//! merge(other)               bulk insert, existing entries win
//! gen_contraction(long, short)
//!                            copy every entry containing `long`, with `long`
//!                            replaced by `short`
//! ```

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::brief::Brief;
use super::strokes::Strokes;

// ═══════════════════════════════════════════════════════════════════════════════
// ENTRY
// ═══════════════════════════════════════════════════════════════════════════════

/// What to do when an outline is already taken
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddMode {
    /// Keep both texts as "existing/new"
    #[default]
    Conflict,
    /// The new entry replaces the existing one
    Top,
    /// The existing entry stays, the new one is dropped
    Behind,
}

/// Separator between conflicting translations
pub const CONFLICT_SEPARATOR: char = '/';

/// A dictionary entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<P = ()> {
    /// Translation text
    pub text: String,
    /// Caller data
    pub payload: Option<P>,
}

impl<P> Entry<P> {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            payload: None,
        }
    }

    pub fn with_payload(text: impl Into<String>, payload: P) -> Self {
        Self {
            text: text.into(),
            payload: Some(payload),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// STENO DICTIONARY
// ═══════════════════════════════════════════════════════════════════════════════

/// The steno dictionary
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dictionary<P = ()> {
    entries: BTreeMap<Strokes, Entry<P>>,
}

impl<P> Default for Dictionary<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Dictionary<P> {
    /// Create an empty dictionary
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add a brief, joining texts on collision
    pub fn add(&mut self, brief: Brief) -> &mut Self {
        self.add_with(brief, None, AddMode::Conflict)
    }

    /// Add a brief with a payload and an explicit collision mode
    pub fn add_with(&mut self, brief: Brief, payload: Option<P>, mode: AddMode) -> &mut Self {
        let entry = Entry {
            text: brief.text,
            payload,
        };
        self.insert_entry(brief.strokes, entry, mode);
        self
    }

    fn insert_entry(&mut self, strokes: Strokes, entry: Entry<P>, mode: AddMode) -> bool {
        let slot = match self.entries.entry(strokes) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                return true;
            }
            btree_map::Entry::Occupied(slot) => slot,
        };

        match mode {
            AddMode::Behind => false,
            AddMode::Top => {
                debug!(outline = %slot.key().to_rtfcre(), old = %slot.get().text, new = %entry.text, "overwriting entry");
                *slot.into_mut() = entry;
                true
            }
            AddMode::Conflict => {
                let outline = slot.key().to_rtfcre();
                let existing = slot.into_mut();
                debug!(%outline, old = %existing.text, new = %entry.text, "conflicting translations");
                existing.text = format!("{}{}{}", existing.text, CONFLICT_SEPARATOR, entry.text);
                if existing.payload.is_none() {
                    existing.payload = entry.payload;
                }
                true
            }
        }
    }

    /// Look up an outline
    pub fn lookup(&self, strokes: &Strokes) -> Option<&Entry<P>> {
        self.entries.get(strokes)
    }

    /// Look up by steno notation ("KAT", "WUPB/HUPB")
    pub fn lookup_steno(&self, steno: &str) -> Option<&Entry<P>> {
        let strokes = Strokes::parse(steno).ok()?;
        self.lookup(&strokes)
    }

    /// Check if an outline has an entry
    pub fn contains(&self, strokes: &Strokes) -> bool {
        self.entries.contains_key(strokes)
    }

    /// Remove an outline's entry
    pub fn remove(&mut self, strokes: &Strokes) -> Option<Entry<P>> {
        self.entries.remove(strokes)
    }

    /// Translation text, or the outline itself when it has no entry
    pub fn translate(&self, strokes: &Strokes) -> String {
        match self.entries.get(strokes) {
            Some(entry) => entry.text.clone(),
            None => strokes.to_canonical(),
        }
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in outline order
    pub fn iter(&self) -> btree_map::Iter<'_, Strokes, Entry<P>> {
        self.entries.iter()
    }
}

impl<P: Clone> Dictionary<P> {
    /// Insert every entry of `other`; entries already present are kept
    pub fn merge(&mut self, other: &Dictionary<P>) -> &mut Self {
        self.merge_with(other, AddMode::Behind)
    }

    /// Insert every entry of `other` with an explicit collision mode
    pub fn merge_with(&mut self, other: &Dictionary<P>, mode: AddMode) -> &mut Self {
        for (strokes, entry) in &other.entries {
            self.insert_entry(strokes.clone(), entry.clone(), mode);
        }
        self
    }

    /// Derive short-hand entries; existing entries are kept on collision
    ///
    /// Returns the number of entries added or changed.
    pub fn gen_contraction(&mut self, long_hand: &Strokes, short_hand: &Strokes) -> usize {
        self.gen_contraction_with(long_hand, short_hand, AddMode::Behind)
    }

    /// Derive short-hand entries with an explicit collision mode
    ///
    /// Every occurrence of `long_hand` inside an outline yields its own
    /// derived outline, with only that occurrence replaced. Originals are
    /// left untouched.
    pub fn gen_contraction_with(
        &mut self,
        long_hand: &Strokes,
        short_hand: &Strokes,
        mode: AddMode,
    ) -> usize {
        if long_hand.is_empty() || long_hand == short_hand {
            return 0;
        }

        let derived: Vec<(Strokes, Entry<P>)> = self
            .entries
            .iter()
            .flat_map(|(outline, entry)| {
                outline
                    .find_all(long_hand)
                    .into_iter()
                    .map(move |at| (outline.splice(at, long_hand.len(), short_hand), entry.clone()))
            })
            .collect();

        let found = derived.len();
        let mut changed = 0;
        for (outline, entry) in derived {
            if self.insert_entry(outline, entry, mode) {
                changed += 1;
            }
        }
        info!(
            long_hand = %long_hand.to_rtfcre(),
            short_hand = %short_hand.to_rtfcre(),
            found,
            changed,
            "generated contractions"
        );
        changed
    }
}

impl<P> FromIterator<Brief> for Dictionary<P> {
    fn from_iter<I: IntoIterator<Item = Brief>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<P> Extend<Brief> for Dictionary<P> {
    fn extend<I: IntoIterator<Item = Brief>>(&mut self, iter: I) {
        for brief in iter {
            self.add(brief);
        }
    }
}

impl<'a, P> IntoIterator for &'a Dictionary<P> {
    type Item = (&'a Strokes, &'a Entry<P>);
    type IntoIter = btree_map::Iter<'a, Strokes, Entry<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
