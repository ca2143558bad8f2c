//! ╔═══════════════════════════════════════════════════════════════════════════╗
//! ║                      STENO ATLAS - LIBRARY ROOT                           ║
//! ║              Stroke Algebra, Dictionaries and the Stroke Map              ║
//! ╚═══════════════════════════════════════════════════════════════════════════╝
//!
//! Steno strokes as 32-bit values with an algebra for building outlines,
//! briefs and dictionaries, plus a Hilbert-curve projection of the whole
//! single-stroke space onto a 2048 × 2048 atlas.
//!
//! ```text
//! text ─▶ Stroke ─▶ Strokes ─▶ Brief ─▶ Dictionary ─▶ Atlas
//!                                           ▲
//!                     plain / JSON / RTF ───┘
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// PUBLIC MODULES
// ═══════════════════════════════════════════════════════════════════════════════

pub mod error;
pub mod formats;    // Dictionary file ingestion
pub mod logging;
pub mod numbers;    // Generated number and currency briefs
pub mod steno;      // Stroke encoding and algebra
pub mod visual;     // Hilbert mapping and atlas

pub use error::{Result, StenoError, Zone};
pub use steno::{AddMode, Brief, Dictionary, Entry, Key, Stroke, Strokes};
pub use visual::{Atlas, AtlasConfig, BitOrdering, Position};
