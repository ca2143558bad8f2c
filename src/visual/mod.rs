//! Visual Projection Layer - The stroke space as an image
//!
//! Single strokes are laid out on a 2048 × 2048 grid along a Hilbert curve,
//! and a dictionary is projected onto that grid as a colored atlas.
//!
//! # Architecture
//! ```text
//! Dictionary ─▶ displayable? ─▶ Hilbert position ─▶ Atlas pixel ─▶ mip chain
//!                                      ▲                 │
//!                                      └── stroke_at ◀───┘
//! ```

pub mod atlas;
pub mod hilbert;

pub use atlas::{color_for, Atlas, AtlasConfig, Color, MipLevel, HUES};
pub use hilbert::{
    displayable, index_to_xy, to_position, to_strokes, try_to_position, try_to_strokes,
    xy_to_index, BitOrdering, Position, GRID_SIZE, INDEX_BITS, INDEX_COUNT, ORDER,
};
