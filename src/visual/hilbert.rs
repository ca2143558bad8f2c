//! Hilbert Mapping - Stroke space onto a 2D grid
//!
//! A single stroke without the number bar has 22 significant keys. Packing
//! them into a 22-bit index and walking an order-11 Hilbert curve places
//! every such stroke on its own cell of a 2048 × 2048 grid, with strokes
//! sharing the high bits clustered together.
//!
//! ```text
//! Stroke ──pack──▶ index ∈ [0, 2^22) ──curve──▶ (x, y) ∈ [0, 2048)²
//!        ◀─unpack─                   ◀─curve⁻¹─
//! ```
//!
//! The curve splits the square into quadrants, numbered in curve order
//!
//! ```text
//!  1 2
//!  0 3      (y grows upward)
//! ```
//!
//! and recurses, transposing quadrant 0 and anti-transposing quadrant 3 so
//! consecutive indices always land on neighbouring cells.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StenoError};
use crate::steno::{Key, Stroke, Strokes, KEY_MASK};

/// Curve order (recursion depth)
pub const ORDER: u32 = 11;

/// Cells per side
pub const GRID_SIZE: u32 = 1 << ORDER;

/// Significant bits of a curve index
pub const INDEX_BITS: u32 = 2 * ORDER;

/// Number of cells, one per displayable stroke
pub const INDEX_COUNT: u32 = 1 << INDEX_BITS;

/// Keys that may appear on the grid: every key but the number bar, no flags
pub const DISPLAYABLE_MASK: u32 = KEY_MASK & !Key::Number.bit();

/// Prefix-weighted packing order, most significant first
const PACK_ORDER: [Key; INDEX_BITS as usize] = [
    Key::LeftS, Key::LeftT, Key::LeftK, Key::LeftP, Key::LeftW, Key::LeftH, Key::LeftR,
    Key::A, Key::O, Key::E, Key::U, Key::Star,
    Key::RightF, Key::RightR, Key::RightP, Key::RightB, Key::RightL,
    Key::RightG, Key::RightT, Key::RightS, Key::RightD, Key::RightZ,
];

// ═══════════════════════════════════════════════════════════════════════════════
// TYPES
// ═══════════════════════════════════════════════════════════════════════════════

/// Grid cell, origin bottom-left
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Check if the cell lies on the grid
    pub const fn on_grid(&self) -> bool {
        self.x < GRID_SIZE && self.y < GRID_SIZE
    }
}

/// Which end of the key order lands in the most significant index bits
///
/// High bits pick the quadrant at the top of the recursion, so they decide
/// which strokes cluster: `ByPrefix` groups strokes sharing their left-hand
/// keys, `BySuffix` groups strokes sharing their right-hand keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BitOrdering {
    #[default]
    ByPrefix,
    BySuffix,
}

impl BitOrdering {
    #[inline]
    const fn shift(self, rank: usize) -> u32 {
        match self {
            BitOrdering::ByPrefix => INDEX_BITS - 1 - rank as u32,
            BitOrdering::BySuffix => rank as u32,
        }
    }

    /// Pack a stroke's displayable keys into a curve index
    pub fn pack(self, stroke: Stroke) -> u32 {
        PACK_ORDER
            .iter()
            .enumerate()
            .filter(|(_, key)| stroke.get(**key))
            .fold(0, |index, (rank, _)| index | 1 << self.shift(rank))
    }

    /// Rebuild the stroke behind a curve index (bits above 22 are ignored)
    pub fn unpack(self, index: u32) -> Stroke {
        let mut stroke = Stroke::EMPTY;
        for (rank, key) in PACK_ORDER.iter().enumerate() {
            if index & (1 << self.shift(rank)) != 0 {
                stroke.set(*key);
            }
        }
        stroke
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CURVE
// ═══════════════════════════════════════════════════════════════════════════════

/// Curve index of a cell on an order-`order` grid
pub fn xy_to_index(order: u32, x: u32, y: u32) -> u32 {
    let (mut x, mut y) = (x, y);
    let mut index = 0;
    for level in (1..=order).rev() {
        let s = 1 << (level - 1);
        let quadrant = match (x >= s, y >= s) {
            (false, false) => 0,
            (false, true) => 1,
            (true, true) => 2,
            (true, false) => 3,
        };
        (x, y) = match quadrant {
            0 => (y, x),
            1 => (x, y - s),
            2 => (x - s, y - s),
            _ => (s - 1 - y, 2 * s - 1 - x),
        };
        index |= quadrant << (2 * (level - 1));
    }
    index
}

/// Cell of a curve index on an order-`order` grid
pub fn index_to_xy(order: u32, index: u32) -> (u32, u32) {
    let (mut x, mut y) = (0, 0);
    for level in 1..=order {
        let s = 1 << (level - 1);
        let quadrant = (index >> (2 * (level - 1))) & 3;
        (x, y) = match quadrant {
            0 => (y, x),
            1 => (x, y + s),
            2 => (x + s, y + s),
            _ => (2 * s - 1 - y, s - 1 - x),
        };
    }
    (x, y)
}

// ═══════════════════════════════════════════════════════════════════════════════
// STROKE MAPPING
// ═══════════════════════════════════════════════════════════════════════════════

/// Single stroke, displayable keys only
pub fn displayable(strokes: &Strokes) -> bool {
    strokes
        .single()
        .is_some_and(|stroke| stroke.raw() & !DISPLAYABLE_MASK == 0)
}

/// Grid cell of a displayable outline
///
/// # Panics
/// If the outline is not [`displayable`].
pub fn to_position(strokes: &Strokes, ordering: BitOrdering) -> Position {
    assert!(
        displayable(strokes),
        "outline {strokes:?} cannot be placed on the atlas"
    );
    let index = strokes.first().map_or(0, |stroke| ordering.pack(stroke));
    let (x, y) = index_to_xy(ORDER, index);
    Position { x, y }
}

/// Grid cell of an outline, or why it has none
pub fn try_to_position(strokes: &Strokes, ordering: BitOrdering) -> Result<Position> {
    if !displayable(strokes) {
        return Err(StenoError::NotDisplayable {
            outline: strokes.to_rtfcre(),
        });
    }
    Ok(to_position(strokes, ordering))
}

/// The one-stroke outline living on a grid cell
///
/// # Panics
/// If the position is off the grid.
pub fn to_strokes(position: Position, ordering: BitOrdering) -> Strokes {
    assert!(position.on_grid(), "{position:?} lies outside the grid");
    let index = xy_to_index(ORDER, position.x, position.y);
    Strokes::from(ordering.unpack(index))
}

/// The one-stroke outline living on a grid cell, or why there is none
pub fn try_to_strokes(position: Position, ordering: BitOrdering) -> Result<Strokes> {
    if !position.on_grid() {
        return Err(StenoError::OutOfGrid {
            x: position.x,
            y: position.y,
            size: GRID_SIZE,
        });
    }
    Ok(to_strokes(position, ordering))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_one_walk() {
        let cells: Vec<_> = (0..4).map(|i| index_to_xy(1, i)).collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 1), (1, 0)]);
    }

    #[test]
    fn test_pack_extremes() {
        let s = Stroke::from(Key::LeftS);
        let z = Stroke::from(Key::RightZ);
        assert_eq!(BitOrdering::ByPrefix.pack(s), 1 << 21);
        assert_eq!(BitOrdering::ByPrefix.pack(z), 1);
        assert_eq!(BitOrdering::BySuffix.pack(s), 1);
        assert_eq!(BitOrdering::BySuffix.pack(z), 1 << 21);
    }

    #[test]
    fn test_star_packs_after_vowels() {
        let star = BitOrdering::ByPrefix.pack(Stroke::STAR);
        let u = BitOrdering::ByPrefix.pack(Stroke::from(Key::U));
        assert_eq!(u, star << 1);
    }
}
