//! Stroke - One chord on the steno keyboard
//!
//! Each stroke is a 32-bit pattern: 23 key bits in steno order followed by
//! out-of-band flags. Parsing never panics; a stroke that cannot be read
//! carries the sticky `FailedConstruction` flag instead.
//!
//! Key Order:
//! ```text
//! Bit: 0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15 16 17 18 19 20 21 22
//! Key: #  S- T- K- P- W- H- R- A- O- *  -E -U -F -R -P -B -L -G -T -S -D -Z
//!
//! Bit: 23   24        25         31
//! Key: Mark OpenLeft  OpenRight  FailedConstruction
//! ```

use core::fmt;
use core::ops::{Add, AddAssign, BitAnd, BitAndAssign, Sub, SubAssign};
use core::str::FromStr;

use crate::error::{Result, StenoError, Zone};

// ═══════════════════════════════════════════════════════════════════════════════
// KEY ORDER (Canonical)
// ═══════════════════════════════════════════════════════════════════════════════

/// One letter per key, in bit order. This is also the canonical rendering.
pub const KEY_ORDER: &str = "#STKPWHRAO*EUFRPBLGTSDZ";

/// Total number of keys in standard steno layout
pub const NUM_KEYS: usize = 23;

/// Left-hand consonants, in the order they must be written
pub const LEFT: &str = "STKPWHR";

/// Vowels and asterisk, in the order they must be written
pub const MIDDLE: &str = "AO*EU";

/// Right-hand consonants, in the order they must be written
pub const RIGHT: &str = "FRPBLGTSDZ";

/// Explicit separator between the left and right hand
pub const DASH: char = '-';

/// Glue marker, see `OpenLeft`/`OpenRight`
pub const GLUE: char = '~';

const LEFT_BASE: u32 = 1;
const MIDDLE_BASE: u32 = 8;
const RIGHT_BASE: u32 = 13;

/// All 23 key bits
pub const KEY_MASK: u32 = 0x007F_FFFF;

const VOWEL_MASK: u32 = 0x1F << MIDDLE_BASE;

/// Keys that double as digits under the number bar
pub const NUMBERS: &[(char, Key)] = &[
    ('1', Key::LeftS),
    ('2', Key::LeftT),
    ('3', Key::LeftP),
    ('4', Key::LeftH),
    ('5', Key::A),
    ('0', Key::O),
    ('6', Key::RightF),
    ('7', Key::RightP),
    ('8', Key::RightL),
    ('9', Key::RightT),
];

// ═══════════════════════════════════════════════════════════════════════════════
// KEY
// ═══════════════════════════════════════════════════════════════════════════════

/// Bit position of a steno key or stroke flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Key {
    Number = 0,
    LeftS,
    LeftT,
    LeftK,
    LeftP,
    LeftW,
    LeftH,
    LeftR,
    A,
    O,
    Star,
    E,
    U,
    RightF,
    RightR,
    RightP,
    RightB,
    RightL,
    RightG,
    RightT,
    RightS,
    RightD,
    RightZ,
    /// Free for callers to tag a stroke
    Mark,
    /// Glued to whatever precedes it (rendered as a leading `~`)
    OpenLeft,
    /// Glued to whatever follows it (rendered as a trailing `~`)
    OpenRight,
    /// Sticky parse failure
    FailedConstruction = 31,
}

impl Key {
    /// The 23 physical keys in bit order
    pub const STENO: [Key; NUM_KEYS] = [
        Key::Number,
        Key::LeftS, Key::LeftT, Key::LeftK, Key::LeftP, Key::LeftW, Key::LeftH, Key::LeftR,
        Key::A, Key::O, Key::Star, Key::E, Key::U,
        Key::RightF, Key::RightR, Key::RightP, Key::RightB, Key::RightL,
        Key::RightG, Key::RightT, Key::RightS, Key::RightD, Key::RightZ,
    ];

    /// Bit index inside a stroke
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-bit mask
    #[inline]
    pub const fn bit(self) -> u32 {
        1 << (self as u32)
    }

    /// Physical key at a bit index (flags are not keys)
    pub fn from_index(index: usize) -> Option<Key> {
        Key::STENO.get(index).copied()
    }

    /// Letter used for this key in steno notation
    pub fn letter(self) -> Option<char> {
        KEY_ORDER.chars().nth(self.index())
    }

    /// Digit this key writes under the number bar
    pub fn digit(self) -> Option<char> {
        NUMBERS.iter().find(|&&(_, key)| key == self).map(|&(digit, _)| digit)
    }

    /// Zone of a physical key (the number bar and flags have none)
    pub fn zone(self) -> Option<Zone> {
        match self.index() {
            1..=7 => Some(Zone::Left),
            8..=12 => Some(Zone::Middle),
            13..=22 => Some(Zone::Right),
            _ => None,
        }
    }
}

/// Key written by a digit under the number bar
fn digit_key(ch: char) -> Option<Key> {
    NUMBERS.iter().find(|&&(digit, _)| digit == ch).map(|&(_, key)| key)
}

// ═══════════════════════════════════════════════════════════════════════════════
// STROKE STRUCT
// ═══════════════════════════════════════════════════════════════════════════════

/// Capacity of a rendered stroke: 23 slots plus two glue markers, rounded up
pub const STROKE_TEXT_CAPACITY: usize = 32;

/// Fixed-size rendering of a single stroke
pub type StrokeText = heapless::String<STROKE_TEXT_CAPACITY>;

/// A steno stroke - 23 key bits plus flags
///
/// Equality and ordering compare the raw bit pattern, so strokes (and
/// outlines built from them) can key ordered maps. The default value is the
/// empty stroke, which is valid.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stroke(u32);

impl Stroke {
    /// Empty stroke (no keys pressed)
    pub const EMPTY: Stroke = Stroke(0);

    /// Asterisk
    pub const STAR: Stroke = Stroke(Key::Star.bit());

    /// Number key
    pub const NUM: Stroke = Stroke(Key::Number.bit());

    /// Result of a failed construction
    pub const FAILED: Stroke = Stroke(Key::FailedConstruction.bit());

    /// Parse steno notation, marking the stroke failed on bad input
    ///
    /// Examples: "STPH", "KAT", "-S", "#0", "12-9", "~TK-"
    pub fn new(text: &str) -> Self {
        Self::parse(text).unwrap_or(Stroke::FAILED)
    }

    /// Parse steno notation, reporting why bad input was rejected
    pub fn parse(text: &str) -> Result<Self> {
        let stroke = parse_stroke(text)?;
        #[cfg(feature = "debug")]
        tracing::trace!(text, bits = stroke.0, "parsed stroke");
        Ok(stroke)
    }

    /// Create a stroke from raw key bits (flags are masked off)
    #[inline]
    pub const fn from_raw(bits: u32) -> Self {
        Stroke(bits & KEY_MASK)
    }

    /// Create a stroke from raw bits, flags included
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Stroke(bits)
    }

    /// Create a stroke from a set of keys
    pub fn from_keys(keys: &[Key]) -> Self {
        Stroke(keys.iter().fold(0, |bits, key| bits | key.bit()))
    }

    /// Create a stroke from a literal written in steno order
    ///
    /// `0b00011000100001110100000` reads `#STKPWHRAO*EUFRPBLGTSDZ` from
    /// the most significant of the 23 bits down to the least.
    #[inline]
    pub const fn from_steno_order(bits: u32) -> Self {
        Stroke((bits & KEY_MASK).reverse_bits() >> 9)
    }

    /// Create a stroke from a literal written in reversed steno order
    ///
    /// `0b00000101110000100011000` reads `ZDSTGLBPRFUE*OARHWPKTS#`; this is
    /// the in-memory layout, so it is the same as [`Stroke::from_raw`].
    #[inline]
    pub const fn from_reversed_order(bits: u32) -> Self {
        Stroke::from_raw(bits)
    }

    /// Key bits in steno order, the inverse of [`Stroke::from_steno_order`]
    #[inline]
    pub const fn to_steno_order(&self) -> u32 {
        (self.0 & KEY_MASK).reverse_bits() >> 9
    }

    /// Get the raw bits, flags included
    #[inline]
    pub const fn raw(&self) -> u32 {
        self.0
    }

    /// Key bits only
    #[inline]
    pub const fn keys(&self) -> u32 {
        self.0 & KEY_MASK
    }

    /// Check if a key or flag is set
    #[inline]
    pub const fn get(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    /// Set a key or flag
    #[inline]
    pub fn set(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    /// Clear a key or flag
    #[inline]
    pub fn unset(&mut self, key: Key) {
        self.0 &= !key.bit();
    }

    /// Builder form of [`Stroke::set`]
    #[inline]
    pub const fn with(self, key: Key) -> Self {
        Stroke(self.0 | key.bit())
    }

    /// Check if a specific key is pressed
    #[inline]
    pub const fn has_key(&self, key_index: usize) -> bool {
        if key_index < NUM_KEYS {
            (self.0 & (1 << key_index)) != 0
        } else {
            false
        }
    }

    /// Did parsing (or any operand this stroke was combined from) fail?
    #[inline]
    pub const fn failed(&self) -> bool {
        self.get(Key::FailedConstruction)
    }

    /// Check if this is the empty stroke (no keys, no flags)
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Check if this stroke uses the number key
    #[inline]
    pub const fn is_number(&self) -> bool {
        self.get(Key::Number)
    }

    /// Check if any vowel or the asterisk is pressed
    #[inline]
    pub const fn has_vowel(&self) -> bool {
        self.0 & VOWEL_MASK != 0
    }

    /// Count the number of keys pressed
    #[inline]
    pub const fn key_count(&self) -> u32 {
        self.keys().count_ones()
    }

    // ───────────────────────────────────────────────────────────────────────────
    // Algebra
    // ───────────────────────────────────────────────────────────────────────────

    /// Press both strokes' keys together (bitwise OR)
    #[inline]
    pub const fn fuse(self, other: Stroke) -> Stroke {
        Stroke(self.0 | other.0)
    }

    /// Release the other stroke's keys; the failed flag stays as it was on `self`
    #[inline]
    pub const fn subtract(self, other: Stroke) -> Stroke {
        let other = other.0 & !Key::FailedConstruction.bit();
        Stroke(self.0 & !other)
    }

    /// Keep only the keys both strokes share; failure of either operand carries over
    #[inline]
    pub const fn intersect(self, other: Stroke) -> Stroke {
        let failed = (self.0 | other.0) & Key::FailedConstruction.bit();
        Stroke((self.0 & other.0) | failed)
    }

    // ───────────────────────────────────────────────────────────────────────────
    // Rendering
    // ───────────────────────────────────────────────────────────────────────────

    /// Fixed-width rendering: one slot per key, space where unset
    ///
    /// The asterisk slot shows `-` when no vowel is pressed. Open flags add a
    /// `~` at that edge, replacing the edge slot when it is blank.
    pub fn to_canonical(&self) -> StrokeText {
        let mut slots = [b' '; NUM_KEYS];
        for (i, letter) in KEY_ORDER.bytes().enumerate() {
            if self.has_key(i) {
                slots[i] = letter;
            }
        }
        if !self.has_vowel() {
            slots[Key::Star.index()] = DASH as u8;
        }

        let mut start = 0;
        let mut end = NUM_KEYS;
        if self.get(Key::OpenLeft) && slots[0] == b' ' {
            start = 1;
        }
        if self.get(Key::OpenRight) && slots[NUM_KEYS - 1] == b' ' {
            end -= 1;
        }

        let mut text = StrokeText::new();
        if self.get(Key::OpenLeft) {
            push(&mut text, GLUE);
        }
        for &slot in &slots[start..end] {
            push(&mut text, slot as char);
        }
        if self.get(Key::OpenRight) {
            push(&mut text, GLUE);
        }
        text
    }

    /// Compact RTF/CRE notation ("KAT", "-T", "1-9", "#*")
    ///
    /// Keys with a digit alias are written as digits when the number bar is
    /// pressed; `#` is only written if no digit was.
    pub fn to_rtfcre(&self) -> StrokeText {
        let number = self.is_number();
        let mut digits = false;
        let mut zone_text = |range: core::ops::Range<usize>| {
            let mut text = StrokeText::new();
            for key in &Key::STENO[range] {
                if !self.get(*key) {
                    continue;
                }
                let ch = match key.digit() {
                    Some(digit) if number => {
                        digits = true;
                        digit
                    }
                    _ => key.letter().unwrap_or(DASH),
                };
                push(&mut text, ch);
            }
            text
        };
        let left = zone_text(1..8);
        let middle = zone_text(8..13);
        let right = zone_text(13..NUM_KEYS);

        let mut text = StrokeText::new();
        if self.get(Key::OpenLeft) {
            push(&mut text, GLUE);
        }
        if number && !digits {
            push(&mut text, '#');
        }
        push_str(&mut text, &left);
        push_str(&mut text, &middle);
        if middle.is_empty() && (!right.is_empty() || left.is_empty()) {
            push(&mut text, DASH);
        }
        push_str(&mut text, &right);
        if self.get(Key::OpenRight) {
            push(&mut text, GLUE);
        }
        text
    }
}

// Renderings are bounded by STROKE_TEXT_CAPACITY, so pushes cannot overflow.
fn push(text: &mut StrokeText, ch: char) {
    let _ = text.push(ch);
}

fn push_str(text: &mut StrokeText, s: &str) {
    let _ = text.push_str(s);
}

// ═══════════════════════════════════════════════════════════════════════════════
// OPERATORS
// ═══════════════════════════════════════════════════════════════════════════════

impl Add for Stroke {
    type Output = Stroke;
    fn add(self, other: Stroke) -> Stroke {
        self.fuse(other)
    }
}

impl AddAssign for Stroke {
    fn add_assign(&mut self, other: Stroke) {
        *self = self.fuse(other);
    }
}

impl Sub for Stroke {
    type Output = Stroke;
    fn sub(self, other: Stroke) -> Stroke {
        self.subtract(other)
    }
}

impl SubAssign for Stroke {
    fn sub_assign(&mut self, other: Stroke) {
        *self = self.subtract(other);
    }
}

impl BitAnd for Stroke {
    type Output = Stroke;
    fn bitand(self, other: Stroke) -> Stroke {
        self.intersect(other)
    }
}

impl BitAndAssign for Stroke {
    fn bitand_assign(&mut self, other: Stroke) {
        *self = self.intersect(other);
    }
}

impl From<Key> for Stroke {
    fn from(key: Key) -> Self {
        Stroke(key.bit())
    }
}

impl From<&str> for Stroke {
    fn from(text: &str) -> Self {
        Stroke::new(text)
    }
}

impl FromStr for Stroke {
    type Err = StenoError;

    fn from_str(text: &str) -> Result<Self> {
        Stroke::parse(text)
    }
}

impl fmt::Debug for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failed() {
            write!(f, "Stroke(failed {})", self.to_rtfcre())
        } else {
            write!(f, "Stroke({})", self.to_rtfcre())
        }
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PARSER
// ═══════════════════════════════════════════════════════════════════════════════

/// Read one stroke.
///
/// Whitespace is ignored everywhere. After the optional `~` markers and a
/// leading `#`, digits are swapped for the keys they alias (which presses
/// the number bar). The body is then split around its middle section: an
/// explicit `-`, or the first run of vowels. Without either, the whole body
/// is left hand, unless a right-hand digit (6-9) marks where the right hand
/// starts. Each zone must list its keys in steno order, and a digit is only
/// accepted in the zone of the key it stands for.
fn parse_stroke(text: &str) -> Result<Stroke> {
    let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    let mut body: &[char] = &chars;
    let mut offset = 0;
    let mut bits = 0u32;

    if let Some((&GLUE, rest)) = body.split_first() {
        bits |= Key::OpenLeft.bit();
        body = rest;
        offset += 1;
    }
    if let Some((&GLUE, rest)) = body.split_last() {
        bits |= Key::OpenRight.bit();
        body = rest;
    }
    if let Some((&'#', rest)) = body.split_first() {
        bits |= Key::Number.bit();
        body = rest;
        offset += 1;
    }

    let mut letters = Vec::with_capacity(body.len());
    let mut digits = Vec::with_capacity(body.len());
    let mut right_digit = None;
    for (i, &ch) in body.iter().enumerate() {
        let digit = digit_key(ch);
        let letter = match digit {
            Some(key) => {
                bits |= Key::Number.bit();
                if key.zone() == Some(Zone::Right) && right_digit.is_none() {
                    right_digit = Some(i);
                }
                key.letter().unwrap_or(ch)
            }
            None if ch == '#' => return Err(StenoError::MisplacedNumberBar),
            None => ch,
        };
        let known = letter == DASH
            || LEFT.contains(letter)
            || MIDDLE.contains(letter)
            || RIGHT.contains(letter);
        if !known {
            return Err(StenoError::UnexpectedChar { ch, offset: offset + i });
        }
        letters.push(letter);
        digits.push(digit.map(|key| (key, ch)));
    }

    let (v0, v1) = find_middle(&letters).unwrap_or_else(|| {
        let at = right_digit.unwrap_or(letters.len());
        (at, at)
    });
    check_digit_zones(&digits, v0, v1)?;

    let middle: &[char] = match &letters[v0..v1] {
        [DASH] => &[],
        middle => middle,
    };

    bits |= read_zone(&letters[..v0], LEFT, LEFT_BASE, Zone::Left)?;
    bits |= read_zone(middle, MIDDLE, MIDDLE_BASE, Zone::Middle)?;
    bits |= read_zone(&letters[v1..], RIGHT, RIGHT_BASE, Zone::Right)?;
    Ok(Stroke(bits))
}

/// Every digit must sit in the zone of the key it aliases (`9` is `-T`, never `T-`)
fn check_digit_zones(digits: &[Option<(Key, char)>], v0: usize, v1: usize) -> Result<()> {
    for (i, digit) in digits.iter().enumerate() {
        let Some((key, ch)) = *digit else {
            continue;
        };
        let zone = match i {
            _ if i < v0 => Zone::Left,
            _ if i < v1 => Zone::Middle,
            _ => Zone::Right,
        };
        if key.zone() != Some(zone) {
            return Err(StenoError::NotInZone { ch, zone });
        }
    }
    Ok(())
}

/// Bounds of the middle section: the first dash, else the first vowel run
fn find_middle(letters: &[char]) -> Option<(usize, usize)> {
    if let Some(d) = letters.iter().position(|&c| c == DASH) {
        return Some((d, d + 1));
    }
    let start = letters.iter().position(|&c| MIDDLE.contains(c))?;
    let end = letters[start..]
        .iter()
        .position(|&c| !MIDDLE.contains(c))
        .map_or(letters.len(), |n| start + n);
    Some((start, end))
}

/// Set the bits of one zone, enforcing the zone's key order
fn read_zone(letters: &[char], alphabet: &str, base: u32, zone: Zone) -> Result<u32> {
    let mut bits = 0;
    let mut next = 0;
    for &ch in letters {
        match alphabet[next..].find(ch) {
            Some(pos) => {
                let index = next + pos;
                bits |= 1 << (base + index as u32);
                next = index + 1;
            }
            None if alphabet.contains(ch) => return Err(StenoError::OutOfOrder { ch, zone }),
            None => return Err(StenoError::NotInZone { ch, zone }),
        }
    }
    Ok(bits)
}
