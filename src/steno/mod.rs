//! Steno Algebra - Strokes, Outlines, Briefs and Dictionaries
//!
//! A stroke is one chord on the steno keyboard. Chords written one after
//! another form an outline, an outline plus its text forms a brief, and a
//! dictionary maps outlines to text.
//!
//! # Architecture
//! ```text
//! "KAT" ──parse──▶ Stroke (23 key bits + flags)
//!                    │ |
//!                    ▼
//!                  Strokes ("KAT/-S") ──▶ Brief (+ "cats") ──▶ Dictionary
//! ```
//!
//! # Key Order
//! ```text
//!   #  #  #  #  #  #  #  #  #  #
//!   S  T  P  H  *  F  P  L  T  D
//!   S  K  W  R  *  R  B  G  S  Z
//!         A  O     E  U
//!
//! Bit: 0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15 16 17 18 19 20 21 22
//! Key: #  S- T- K- P- W- H- R- A- O- *  -E -U -F -R -P -B -L -G -T -S -D -Z
//! ```
//!
//! Bits 23..=25 are free for stroke flags (mark and the two glue edges),
//! bit 31 marks a stroke that failed to parse.

pub mod brief;
pub mod dictionary;
pub mod stroke;
pub mod strokes;

pub use brief::{insert_decimal, pad, pluralize, prefix, Brief, Modifier};
pub use dictionary::{AddMode, Dictionary, Entry, CONFLICT_SEPARATOR};
pub use stroke::{Key, Stroke, StrokeText, GLUE, KEY_MASK, KEY_ORDER, NUMBERS, NUM_KEYS};
pub use strokes::{Strokes, SEPARATOR};
