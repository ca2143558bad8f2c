//! Outline Tests
//!
//! Tests for slash-delimited outlines and the fuse/concat combinators.

use steno_atlas::error::StenoError;
use steno_atlas::steno::{Stroke, Strokes};

// ═══════════════════════════════════════════════════════════════════════════════
// PARSING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_parse_three_strokes_in_order() {
    let outline = Strokes::new("EBGS/APL/P-L");
    assert!(!outline.failed());
    assert_eq!(outline.len(), 3);
    assert_eq!(outline[0], Stroke::new("EBGS"));
    assert_eq!(outline[1], Stroke::new("APL"));
    assert_eq!(outline[2], Stroke::new("P-L"));
}

#[test]
fn test_empty_text_is_empty_outline() {
    assert!(Strokes::new("").is_empty());
    assert!(Strokes::new("  ").is_empty());
    assert_eq!(Strokes::parse(""), Ok(Strokes::empty()));
}

#[test]
fn test_bad_segment_marks_outline_failed() {
    let outline = Strokes::new("KAT/XYZ/-S");
    assert!(outline.failed());
    assert_eq!(outline.len(), 3);
    assert!(!outline[0].failed());
    assert!(outline[1].failed());
    assert!(!outline[2].failed());
}

#[test]
fn test_strict_parse_reports_segment() {
    let err = Strokes::parse("KAT/XYZ/-S").unwrap_err();
    match err {
        StenoError::InvalidSegment { index, source } => {
            assert_eq!(index, 1);
            assert!(matches!(*source, StenoError::UnexpectedChar { ch: 'X', .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_from_str() {
    let outline: Strokes = "KAT/-S".parse().unwrap();
    assert_eq!(outline, Strokes::new("KAT/-S"));
}

// ═══════════════════════════════════════════════════════════════════════════════
// BUILDING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_append_and_prepend() {
    let mut outline = Strokes::new("APL");
    outline.append(Stroke::new("P-L")).prepend(Stroke::new("EBGS"));
    assert_eq!(outline, Strokes::new("EBGS/APL/P-L"));

    outline.append_all(&Strokes::new("-S/-D"));
    outline.prepend_all(&Strokes::new("KWRE"));
    assert_eq!(outline.to_rtfcre(), "KWRE/EBGS/APL/P-L/-S/-D");
}

#[test]
fn test_concat_operator() {
    let outline = Strokes::new("WUPB") | Strokes::new("HUPB");
    assert_eq!(outline, Strokes::new("WUPB/HUPB"));
    assert_eq!(Stroke::new("WUPB") | Stroke::new("HUPB"), outline);
    assert_eq!(Stroke::new("KAT") | Strokes::new("-S"), Strokes::new("KAT/-S"));
    assert_eq!(Strokes::new("KAT") | Stroke::new("-S"), Strokes::new("KAT/-S"));

    let mut built = Strokes::empty();
    built |= Strokes::new("KAT");
    built |= Strokes::new("-S");
    assert_eq!(built, Strokes::new("KAT/-S"));
}

#[test]
fn test_fuse_operator() {
    let fused = Strokes::new("TPW-") + Strokes::new("AOEU/-S");
    assert_eq!(fused, Strokes::new("TPWAOEU/-S"));
    assert_eq!(Strokes::new("TPEUF") + Stroke::STAR, Strokes::new("TP*EUF"));
    assert_eq!(Stroke::new("TPW-") + Strokes::new("AOEU"), Strokes::new("TPWAOEU"));

    let mut outline = Strokes::new("WUPB/HUPB");
    outline += Strokes::new("-DZ");
    assert_eq!(outline, Strokes::new("WUPB/HUPBDZ"));
}

#[test]
fn test_subtract_from_last_stroke() {
    let outline = Strokes::new("KAT/-SZ") - Stroke::new("-Z");
    assert_eq!(outline, Strokes::new("KAT/-S"));
    assert!((Strokes::empty() - Stroke::new("-Z")).is_empty());
}

#[test]
fn test_remove_empty() {
    let mut outline = Strokes::from(vec![Stroke::EMPTY, Stroke::new("KAT"), Stroke::EMPTY]);
    outline.remove_empty();
    assert_eq!(outline, Strokes::new("KAT"));
}

// ═══════════════════════════════════════════════════════════════════════════════
// SEARCHING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_find_all_overlapping() {
    let outline = Strokes::new("KA/KA/KA");
    assert_eq!(outline.find_all(&Strokes::new("KA/KA")), vec![0, 1]);
    assert_eq!(outline.find_all(&Strokes::new("KA")), vec![0, 1, 2]);
    assert!(outline.find_all(&Strokes::new("KO")).is_empty());
    assert!(outline.find_all(&Strokes::empty()).is_empty());
}

#[test]
fn test_contains_and_starts_with() {
    let outline = Strokes::new("WUPB/HUPB/-DZ");
    assert!(outline.contains(&Strokes::new("HUPB/-DZ")));
    assert!(!outline.contains(&Strokes::new("WUPB/-DZ")));
    assert!(outline.starts_with(&Strokes::new("WUPB/HUPB")));
    assert!(!outline.starts_with(&Strokes::new("HUPB")));
}

#[test]
fn test_splice_replaces_run() {
    let outline = Strokes::new("WUPB/HUPB/-DZ");
    assert_eq!(outline.splice(0, 2, &Strokes::new("WHUPB")), Strokes::new("WHUPB/-DZ"));
    assert_eq!(outline, Strokes::new("WUPB/HUPB/-DZ"));
}

// ═══════════════════════════════════════════════════════════════════════════════
// ORDERING & RENDERING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_lexicographic_order() {
    let short = Strokes::new("KAT");
    let long = Strokes::new("KAT/-S");
    assert!(Strokes::empty() < short);
    assert!(short < long);
    assert!(Strokes::new("S") < Strokes::new("T"));
}

#[test]
fn test_rtfcre_and_canonical() {
    let outline = Strokes::new("EBGS/APL/P-L");
    assert_eq!(outline.to_rtfcre(), "EBGS/APL/P-L");
    let canonical = outline.to_canonical();
    assert_eq!(canonical.split('/').count(), 3);
    assert_eq!(Strokes::new(&canonical), outline);
    assert_eq!(format!("{outline:?}"), "Strokes(EBGS/APL/P-L)");
}

#[test]
fn test_iteration() {
    let outline = Strokes::new("KAT/-S");
    let keys: u32 = outline.iter().map(|stroke| stroke.key_count()).sum();
    assert_eq!(keys, 4);
    let collected: Strokes = outline.clone().into_iter().collect();
    assert_eq!(collected, outline);
    assert_eq!(outline.single(), None);
    assert_eq!(Strokes::new("KAT").single(), Some(Stroke::new("KAT")));
}
