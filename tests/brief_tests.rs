//! Brief Tests
//!
//! Tests for text joining, glue markers and modifiers.

use steno_atlas::steno::brief::*;
use steno_atlas::steno::{Stroke, Strokes};

// ═══════════════════════════════════════════════════════════════════════════════
// CONSTRUCTION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_new_normalizes_outline() {
    let brief = Brief::new("-/KAT/-", "cat");
    assert_eq!(brief.strokes, Strokes::new("KAT"));
    assert_eq!(brief.text, "cat");
}

#[test]
fn test_text_only_and_glue() {
    let brief = Brief::text_only("and");
    assert!(brief.strokes.is_empty());
    assert!(!brief.is_empty());
    assert_eq!(Brief::glue().text, "~");
    assert!(Brief::default().is_empty());
}

#[test]
fn test_failed_outline_is_reported() {
    assert!(Brief::new("KAT/XYZ", "cat").failed());
    assert!(!Brief::new("STAOPB/TKPWRAEF", "stenography").failed());
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEXT JOINING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_concat_joins_with_space() {
    let brief = Brief::new("TKOG", "dog") | Brief::new("-S", "house");
    assert_eq!(brief.text, "dog house");
    assert_eq!(brief.strokes, Strokes::new("TKOG/-S"));
}

#[test]
fn test_glue_consumed_at_boundary() {
    assert_eq!((Brief::text_only("1") | Brief::text_only("~00")).text, "100");
    assert_eq!((Brief::text_only("2~") | Brief::text_only("5")).text, "25");
    assert_eq!((Brief::text_only("2~") | Brief::text_only("~5")).text, "25");
}

#[test]
fn test_glue_away_from_boundary_stays() {
    let brief = Brief::text_only("~,~") | Brief::text_only("005");
    assert_eq!(brief.text, "~,005");
}

#[test]
fn test_bare_glue_moves_to_edge() {
    let leading = Brief::glue() + Brief::text_only("05");
    assert_eq!(leading.text, "~05");
    let trailing = Brief::text_only("18") + Brief::glue();
    assert_eq!(trailing.text, "18~");
    assert_eq!((Brief::text_only("1") | leading).text, "105");
}

#[test]
fn test_empty_side_takes_other_text() {
    assert_eq!((Brief::from(Stroke::new("AEU")) | Brief::text_only("$1")).text, "$1");
    assert_eq!((Brief::text_only("$1") | Brief::from(Stroke::new("AEU"))).text, "$1");
}

// ═══════════════════════════════════════════════════════════════════════════════
// STROKE COMBINATION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_fuse_presses_boundary_strokes() {
    let twenty = Brief::new("TPW-", "2~") + Brief::new("AOEU", "~0");
    assert_eq!(twenty.strokes, Strokes::new("TPWAOEU"));
    assert_eq!(twenty.text, "20");
}

#[test]
fn test_fuse_stroke_keeps_text() {
    let starred = Brief::new("TPEUF", "5") + Stroke::STAR;
    assert_eq!(starred.strokes, Strokes::new("TP*EUF"));
    assert_eq!(starred.text, "5");
}

#[test]
fn test_assign_operators() {
    let mut brief = Brief::new("WUPB", "1");
    brief |= Brief::new("HUPB", "~00");
    brief += Stroke::new("-DZ");
    assert_eq!(brief.strokes, Strokes::new("WUPB/HUPBDZ"));
    assert_eq!(brief.text, "100");
}

#[test]
fn test_combination_drops_empty_strokes() {
    let brief = Brief::new("KAT", "cat") | Brief::from(Strokes::from(vec![Stroke::EMPTY]));
    assert_eq!(brief.strokes, Strokes::new("KAT"));
}

// ═══════════════════════════════════════════════════════════════════════════════
// MODIFIERS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_pad() {
    assert_eq!(Brief::text_only("5").apply(pad(3)).text, "005");
    assert_eq!(Brief::text_only("1234").apply(pad(3)).text, "1234");
}

#[test]
fn test_insert_decimal() {
    assert_eq!(Brief::text_only("123").apply(insert_decimal(2)).text, "1.23");
    assert_eq!(Brief::text_only("5").apply(insert_decimal(2)).text, "0.05");
    assert_eq!(Brief::text_only("7").apply(insert_decimal(0)).text, "7.");
}

#[test]
fn test_insert_decimal_counts_characters() {
    assert_eq!(Brief::text_only("€5").apply(insert_decimal(2)).text, "0.€5");
    assert_eq!(Brief::text_only("€125").apply(insert_decimal(2)).text, "€1.25");
    assert_eq!(Brief::text_only("5").apply(insert_decimal(2)).text, "0.05");
}

#[test]
fn test_prefix() {
    let brief = Brief::new("TPEUF", "5").apply(prefix("$~"));
    assert_eq!(brief.text, "$5");
    assert_eq!(brief.strokes, Strokes::new("TPEUF"));
}

#[test]
fn test_pluralize() {
    assert_eq!(Brief::new("KAT", "cat").apply(pluralize).text, "cats");
    assert_eq!(Brief::new("KAT", "cats").apply(pluralize).text, "cats");
}

#[test]
fn test_custom_modifier() {
    let shout: Modifier = |mut brief| {
        brief.text = brief.text.to_uppercase();
        brief
    };
    assert_eq!(Brief::new("KAT", "cat").apply(shout).text, "CAT");
}

#[test]
fn test_display() {
    assert_eq!(Brief::new("KAT", "cat").to_string(), "KAT = cat");
}
