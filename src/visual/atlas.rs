//! Atlas - A dictionary painted onto the stroke grid
//!
//! Every displayable entry lights the cell its stroke maps to, colored by
//! the first letter of its translation. Coarser mip levels follow, each
//! the per-channel average of the level below, so a viewer can zoom out
//! over the whole 2048 × 2048 stroke space.
//!
//! Pixel rows run top to bottom while grid `y` grows upward, so a cell at
//! `(x, y)` lands in pixel row `2047 - y`.

#[cfg(feature = "multicore")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, info, info_span};

use super::hilbert::{self, BitOrdering, Position, GRID_SIZE};
use crate::error::{Result, StenoError};
use crate::steno::{Dictionary, Strokes};

// ═══════════════════════════════════════════════════════════════════════════════
// COLOR
// ═══════════════════════════════════════════════════════════════════════════════

/// 32-bit ARGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF000000);
    pub const WHITE: Color = Color(0xFFFFFFFF);
    pub const TRANSPARENT: Color = Color(0x00000000);

    /// Create from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(0xFF000000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Create from ARGB components
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    pub const fn r(self) -> u8 { ((self.0 >> 16) & 0xFF) as u8 }

    pub const fn g(self) -> u8 { ((self.0 >> 8) & 0xFF) as u8 }

    pub const fn b(self) -> u8 { (self.0 & 0xFF) as u8 }

    pub const fn a(self) -> u8 { ((self.0 >> 24) & 0xFF) as u8 }

    /// Bytes in R, G, B, A order
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }

    /// Per-channel rounded mean of four colors
    pub fn average(colors: [Color; 4]) -> Color {
        let channel = |shift: u32| {
            let sum: u32 = colors.iter().map(|c| (c.0 >> shift) & 0xFF).sum();
            ((sum + 2) / 4) << shift
        };
        Color(channel(24) | channel(16) | channel(8) | channel(0))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Hue per initial letter, `a` through `z`
pub const HUES: [Color; 26] = [
    Color::rgb(229, 25, 25),
    Color::rgb(229, 72, 25),
    Color::rgb(229, 119, 25),
    Color::rgb(229, 166, 25),
    Color::rgb(229, 213, 25),
    Color::rgb(198, 229, 25),
    Color::rgb(151, 229, 25),
    Color::rgb(103, 229, 25),
    Color::rgb(56, 229, 25),
    Color::rgb(25, 229, 41),
    Color::rgb(25, 229, 88),
    Color::rgb(25, 229, 135),
    Color::rgb(25, 229, 182),
    Color::rgb(25, 229, 229),
    Color::rgb(25, 182, 229),
    Color::rgb(25, 135, 229),
    Color::rgb(25, 88, 229),
    Color::rgb(25, 41, 229),
    Color::rgb(56, 25, 229),
    Color::rgb(103, 25, 229),
    Color::rgb(151, 25, 229),
    Color::rgb(198, 25, 229),
    Color::rgb(229, 25, 213),
    Color::rgb(229, 25, 166),
    Color::rgb(229, 25, 119),
    Color::rgb(229, 25, 72),
];

/// Color of a translation: hue of its first letter, white otherwise
pub fn color_for(text: &str) -> Color {
    match text.chars().next() {
        Some(ch) if ch.is_ascii_alphabetic() => {
            HUES[(ch.to_ascii_lowercase() as u8 - b'a') as usize]
        }
        _ => Color::WHITE,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════════════

/// How an atlas is laid out and rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Which strokes cluster together
    pub ordering: BitOrdering,
    /// Build the chain of coarser levels down to 1×1
    pub mip_levels: bool,
    /// Color of cells without an entry
    pub background: Color,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            ordering: BitOrdering::ByPrefix,
            mip_levels: true,
            background: Color::BLACK,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// MIP LEVEL
// ═══════════════════════════════════════════════════════════════════════════════

/// One square image, row-major, top row first
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MipLevel {
    size: u32,
    pixels: Vec<Color>,
}

impl MipLevel {
    /// A `size × size` image filled with one color
    pub fn filled(size: u32, color: Color) -> Self {
        Self {
            size,
            pixels: vec![color; (size as usize) * (size as usize)],
        }
    }

    /// Pixels per side
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixel at column `px`, row `py`
    pub fn pixel(&self, px: u32, py: u32) -> Option<Color> {
        if px >= self.size || py >= self.size {
            return None;
        }
        self.pixels.get(self.offset(px, py)).copied()
    }

    fn set(&mut self, px: u32, py: u32, color: Color) {
        let at = self.offset(px, py);
        self.pixels[at] = color;
    }

    #[inline]
    fn offset(&self, px: u32, py: u32) -> usize {
        py as usize * self.size as usize + px as usize
    }

    /// Half-size level, each pixel the average of a 2×2 block
    ///
    /// Channels are averaged with rounding, not summed: a fully lit block
    /// keeps its color.
    ///
    /// Every output pixel is written once, by whichever worker owns its row.
    pub fn downsample(&self) -> MipLevel {
        let size = (self.size / 2).max(1);
        let width = size as usize;
        let mut pixels = vec![Color::TRANSPARENT; width * width];

        let fill_row = |(row, out): (usize, &mut [Color])| {
            let (y0, y1) = self.span(row);
            for (col, pixel) in out.iter_mut().enumerate() {
                let (x0, x1) = self.span(col);
                *pixel = Color::average([
                    self.pixels[y0 * self.size as usize + x0],
                    self.pixels[y0 * self.size as usize + x1],
                    self.pixels[y1 * self.size as usize + x0],
                    self.pixels[y1 * self.size as usize + x1],
                ]);
            }
        };

        #[cfg(feature = "multicore")]
        pixels.par_chunks_mut(width).enumerate().for_each(fill_row);
        #[cfg(not(feature = "multicore"))]
        pixels.chunks_mut(width).enumerate().for_each(fill_row);

        MipLevel { size, pixels }
    }

    /// Source rows or columns behind one output index (a 1×1 level repeats itself)
    #[inline]
    fn span(&self, index: usize) -> (usize, usize) {
        let first = 2 * index;
        let second = (first + 1).min(self.size as usize - 1);
        (first.min(self.size as usize - 1), second)
    }

    /// Bytes in R, G, B, A order, row-major
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba()).collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ATLAS
// ═══════════════════════════════════════════════════════════════════════════════

/// The painted stroke grid and its mip chain, finest first
#[derive(Clone, Debug)]
pub struct Atlas {
    config: AtlasConfig,
    levels: Vec<MipLevel>,
    placed: usize,
}

impl Atlas {
    /// Paint every displayable entry of `dict`
    pub fn build<P>(dict: &Dictionary<P>, config: &AtlasConfig) -> Atlas {
        let span = info_span!("atlas_build", entries = dict.len(), ordering = ?config.ordering);
        let _enter = span.enter();

        let mut base = MipLevel::filled(GRID_SIZE, config.background);
        let mut placed = 0;
        for (strokes, entry) in dict {
            let Ok(position) = hilbert::try_to_position(strokes, config.ordering) else {
                continue;
            };
            base.set(position.x, GRID_SIZE - 1 - position.y, color_for(&entry.text));
            placed += 1;
        }
        info!(placed, skipped = dict.len() - placed, "painted atlas");

        let mut levels = vec![base];
        if config.mip_levels {
            let _mips = debug_span!("mip_chain").entered();
            while let Some(finer) = levels.last().filter(|level| level.size() > 1) {
                let coarser = finer.downsample();
                debug!(size = coarser.size(), "built mip level");
                levels.push(coarser);
            }
        }

        Atlas {
            config: *config,
            levels,
            placed,
        }
    }

    pub fn config(&self) -> &AtlasConfig {
        &self.config
    }

    /// Pixels per side of the finest level
    pub fn size(&self) -> u32 {
        GRID_SIZE
    }

    /// Number of entries painted onto the grid
    pub fn placed(&self) -> usize {
        self.placed
    }

    pub fn levels(&self) -> &[MipLevel] {
        &self.levels
    }

    /// Level `index`, 0 being the full-size grid
    pub fn level(&self, index: usize) -> Option<&MipLevel> {
        self.levels.get(index)
    }

    /// Finest-level pixel at column `px`, row `py`
    pub fn pixel(&self, px: u32, py: u32) -> Option<Color> {
        self.levels.first().and_then(|level| level.pixel(px, py))
    }

    /// Grid cell behind a finest-level pixel
    pub fn position_at(&self, px: u32, py: u32) -> Result<Position> {
        if px >= GRID_SIZE || py >= GRID_SIZE {
            return Err(StenoError::OutOfGrid {
                x: px,
                y: py,
                size: GRID_SIZE,
            });
        }
        Ok(Position::new(px, GRID_SIZE - 1 - py))
    }

    /// The one-stroke outline a clicked pixel stands for
    pub fn stroke_at(&self, px: u32, py: u32) -> Result<Strokes> {
        let position = self.position_at(px, py)?;
        hilbert::try_to_strokes(position, self.config.ordering)
    }

    /// Finest-level pixel showing an outline, if it is displayable
    pub fn pixel_of(&self, strokes: &Strokes) -> Result<(u32, u32)> {
        let position = hilbert::try_to_position(strokes, self.config.ordering)?;
        Ok((position.x, GRID_SIZE - 1 - position.y))
    }

    /// Bytes of one level in R, G, B, A order
    pub fn to_rgba(&self, level: usize) -> Option<Vec<u8>> {
        self.level(level).map(MipLevel::to_rgba)
    }
}
