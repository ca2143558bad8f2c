//! Stroke Parsing Tests
//!
//! Tests for single-stroke parsing, the key algebra and both renderings.

use steno_atlas::error::{StenoError, Zone};
use steno_atlas::steno::stroke::*;

// ═══════════════════════════════════════════════════════════════════════════════
// BASIC STROKE CONSTRUCTION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_stroke_empty() {
    let stroke = Stroke::EMPTY;
    assert!(stroke.is_empty());
    assert!(!stroke.failed());
    assert_eq!(stroke.raw(), 0);
    assert_eq!(stroke.key_count(), 0);
}

#[test]
fn test_stroke_mask_23_bits() {
    let stroke = Stroke::from_raw(0xFFFF_FFFF);
    assert_eq!(stroke.raw(), 0x7F_FFFF);
    assert!(!stroke.failed());
}

#[test]
fn test_stroke_from_keys() {
    let stroke = Stroke::from_keys(&[Key::LeftS, Key::LeftT, Key::LeftP, Key::LeftH]);
    assert_eq!(stroke, Stroke::new("STPH"));
    assert_eq!(stroke.key_count(), 4);
}

#[test]
fn test_set_and_unset() {
    let mut stroke = Stroke::new("KAT");
    stroke.set(Key::RightS);
    assert_eq!(stroke, Stroke::new("KATS"));
    stroke.unset(Key::LeftK);
    assert_eq!(stroke, Stroke::new("ATS"));
    assert!(stroke.with(Key::Mark).get(Key::Mark));
}

// ═══════════════════════════════════════════════════════════════════════════════
// STENO NOTATION PARSING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_parse_example() {
    let stroke = Stroke::new("KPAFRPL");
    assert!(!stroke.failed());
    for key in [Key::LeftK, Key::LeftP, Key::A, Key::RightF, Key::RightR, Key::RightP, Key::RightL] {
        assert!(stroke.get(key), "{key:?} should be pressed");
    }
    assert_eq!(stroke.key_count(), 7);
}

#[test]
fn test_parse_bare_dash_is_empty_stroke() {
    let stroke = Stroke::new("-");
    assert!(!stroke.failed());
    assert!(stroke.is_empty());
}

#[test]
fn test_parse_empty_text() {
    assert_eq!(Stroke::parse(""), Ok(Stroke::EMPTY));
    assert_eq!(Stroke::parse("   "), Ok(Stroke::EMPTY));
}

#[test]
fn test_parse_number_bar_digit_alias() {
    let digit = Stroke::new("#0");
    let letter = Stroke::new("#O");
    assert!(!digit.failed());
    assert!(!letter.failed());
    assert_eq!(digit, letter);
    assert_eq!(digit.raw(), Key::Number.bit() | Key::O.bit());
}

#[test]
fn test_parse_digit_implies_number_bar() {
    assert_eq!(Stroke::new(" 0"), Stroke::new("#O"));
    assert!(!Stroke::new(" O").is_number());
    assert!(Stroke::new("12").is_number());
}

#[test]
fn test_parse_whitespace_ignored() {
    assert_eq!(Stroke::new("  K A T "), Stroke::new("KAT"));
    assert_eq!(Stroke::new("   KP   A    FRP L     "), Stroke::new("KPAFRPL"));
}

#[test]
fn test_parse_left_only_chord() {
    let stroke = Stroke::new("STK");
    assert!(!stroke.failed());
    assert!(stroke.get(Key::LeftS) && stroke.get(Key::LeftT) && stroke.get(Key::LeftK));
    assert_eq!(stroke, Stroke::new("STK-"));
}

#[test]
fn test_parse_right_hand_needs_dash() {
    assert!(Stroke::new("-T").get(Key::RightT));
    assert!(Stroke::new("T").get(Key::LeftT));
    assert!(Stroke::new("-TS").get(Key::RightS));
}

#[test]
fn test_parse_implicit_dash_before_right_digit() {
    let stroke = Stroke::new("19");
    assert!(stroke.get(Key::LeftS));
    assert!(stroke.get(Key::RightT));
    assert_eq!(stroke, Stroke::new("1-9"));
    assert_eq!(Stroke::new("9"), Stroke::new("#-T"));
    assert_eq!(Stroke::new("1234"), Stroke::new("#STPH"));
}

#[test]
fn test_parse_middle_run() {
    let stroke = Stroke::new("SKWRAOEUT");
    assert!(stroke.get(Key::A) && stroke.get(Key::O) && stroke.get(Key::E) && stroke.get(Key::U));
    assert!(stroke.get(Key::RightT));
    assert!(Stroke::new("TP*EUL").get(Key::Star));
}

#[test]
fn test_parse_open_flags() {
    let stroke = Stroke::new("~TK-");
    assert!(stroke.get(Key::OpenLeft));
    assert!(!stroke.get(Key::OpenRight));
    assert!(stroke.get(Key::LeftT) && stroke.get(Key::LeftK));

    let both = Stroke::new("~-Z~");
    assert!(both.get(Key::OpenLeft) && both.get(Key::OpenRight));
    assert!(both.get(Key::RightZ));
}

// ═══════════════════════════════════════════════════════════════════════════════
// REJECTED INPUT
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_reject_out_of_order() {
    assert!(Stroke::new("TSAT").failed());
    assert_eq!(
        Stroke::parse("TSAT"),
        Err(StenoError::OutOfOrder { ch: 'S', zone: Zone::Left })
    );
    assert!(Stroke::new("KAOAT").failed());
    assert!(Stroke::new("-TF").failed());
}

#[test]
fn test_reject_wrong_zone() {
    assert_eq!(
        Stroke::parse("B"),
        Err(StenoError::NotInZone { ch: 'B', zone: Zone::Left })
    );
    assert_eq!(
        Stroke::parse("KA-T"),
        Err(StenoError::NotInZone { ch: 'A', zone: Zone::Left })
    );
}

#[test]
fn test_reject_digit_outside_its_zone() {
    assert_eq!(
        Stroke::parse("9-"),
        Err(StenoError::NotInZone { ch: '9', zone: Zone::Left })
    );
    assert_eq!(
        Stroke::parse("-1"),
        Err(StenoError::NotInZone { ch: '1', zone: Zone::Right })
    );
    assert_eq!(
        Stroke::parse("-2"),
        Err(StenoError::NotInZone { ch: '2', zone: Zone::Right })
    );
    assert_eq!(
        Stroke::parse("A2"),
        Err(StenoError::NotInZone { ch: '2', zone: Zone::Right })
    );
    assert_ne!(Stroke::new("-2"), Stroke::new("-9"));

    assert_eq!(Stroke::parse("-9"), Ok(Stroke::new("#-T")));
    assert_eq!(Stroke::parse("50"), Ok(Stroke::new("#AO")));
}

#[test]
fn test_reject_unknown_character() {
    assert_eq!(
        Stroke::parse("KAX"),
        Err(StenoError::UnexpectedChar { ch: 'X', offset: 2 })
    );
    assert!(Stroke::new("kat").failed());
}

#[test]
fn test_reject_misplaced_number_bar() {
    assert_eq!(Stroke::parse("S#T"), Err(StenoError::MisplacedNumberBar));
}

#[test]
fn test_failed_stroke_is_sticky_value() {
    let stroke = Stroke::new("XYZ");
    assert!(stroke.failed());
    assert_eq!(stroke, Stroke::FAILED);
    assert!(!stroke.is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════════
// ALGEBRA
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_fuse_presses_together() {
    assert_eq!(Stroke::new("KA") + Stroke::new("-T"), Stroke::new("KAT"));
    assert_eq!(Stroke::new("TPEUF") + Stroke::STAR, Stroke::new("TP*EUF"));

    let mut stroke = Stroke::new("SKP-");
    stroke += Stroke::new("EUF");
    assert_eq!(stroke, Stroke::new("SKPEUF"));
}

#[test]
fn test_subtract_releases_keys() {
    assert_eq!(Stroke::new("KAT") - Stroke::new("-T"), Stroke::new("KA"));
    assert_eq!(Stroke::new("KAT").subtract(Stroke::new("S")), Stroke::new("KAT"));
}

#[test]
fn test_subtract_keeps_left_fail_flag() {
    assert!((Stroke::FAILED - Stroke::new("KAT")).failed());
    assert!(!(Stroke::new("KAT") - Stroke::FAILED).failed());
}

#[test]
fn test_intersect_shared_keys() {
    assert_eq!(Stroke::new("KAT") & Stroke::new("KOT"), Stroke::new("K-T"));
    let mut stroke = Stroke::new("STAR");
    stroke &= Stroke::new("SAT");
    assert_eq!(stroke, Stroke::new("SA"));
}

#[test]
fn test_intersect_propagates_failure() {
    assert!((Stroke::new("KAT") & Stroke::FAILED).failed());
    assert!((Stroke::FAILED & Stroke::new("KAT")).failed());
}

// ═══════════════════════════════════════════════════════════════════════════════
// RENDERING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_canonical_example() {
    let text = Stroke::new("KPAFRPL").to_canonical();
    assert_eq!(text.as_str(), "   KP   A    FRP L     ");
    assert_eq!(text.len(), NUM_KEYS);
}

#[test]
fn test_canonical_dash_without_vowel() {
    assert_eq!(Stroke::EMPTY.to_canonical().as_str(), "          -            ");
    assert_eq!(Stroke::new("-T").to_canonical().as_str(), "          -        T   ");
    assert_eq!(Stroke::STAR.to_canonical().as_str(), "          *            ");
}

#[test]
fn test_canonical_open_edges() {
    let left = Stroke::new("~TK-").to_canonical();
    assert_eq!(left.as_str(), "~ TK      -            ");

    let right = Stroke::new("-Z~").to_canonical();
    assert!(right.ends_with("Z~"));
    assert_eq!(right.len(), NUM_KEYS + 1);
}

#[test]
fn test_canonical_reparses() {
    for text in ["KAT", "#STPH", "-", "~-Z~", "1-9", "TP*EUL", "SKWRAOEUT"] {
        let stroke = Stroke::new(text);
        assert_eq!(Stroke::new(&stroke.to_canonical()), stroke, "{text}");
    }
}

#[test]
fn test_rtfcre_compact() {
    assert_eq!(Stroke::new("KAT").to_rtfcre().as_str(), "KAT");
    assert_eq!(Stroke::new("-T").to_rtfcre().as_str(), "-T");
    assert_eq!(Stroke::new("STK").to_rtfcre().as_str(), "STK");
    assert_eq!(Stroke::EMPTY.to_rtfcre().as_str(), "-");
}

#[test]
fn test_rtfcre_number_bar() {
    assert_eq!(Stroke::new("#S-T").to_rtfcre().as_str(), "1-9");
    assert_eq!(Stroke::new("#O").to_rtfcre().as_str(), "0");
    assert_eq!(Stroke::new("#*").to_rtfcre().as_str(), "#*");
    assert_eq!(Stroke::new("#-R").to_rtfcre().as_str(), "#-R");
    assert_eq!(Stroke::new("12K").to_rtfcre().as_str(), "12K");
}

#[test]
fn test_display_and_debug() {
    let stroke = Stroke::new("KAT");
    assert_eq!(format!("{stroke}"), stroke.to_canonical().as_str());
    assert_eq!(format!("{stroke:?}"), "Stroke(KAT)");
}

#[test]
fn test_from_str() {
    let stroke: Stroke = "KAT".parse().unwrap();
    assert_eq!(stroke, Stroke::new("KAT"));
    assert!("KAX".parse::<Stroke>().is_err());
}

// ═══════════════════════════════════════════════════════════════════════════════
// BIT ORDER LITERALS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_steno_order_round_trip() {
    let stroke = Stroke::new("STKPWHRAO*EUFRPBLGTSDZ");
    assert_eq!(stroke.key_count(), 22);
    assert_eq!(Stroke::from_steno_order(stroke.to_steno_order()), stroke);
    assert_eq!(Stroke::from_steno_order(1 << 22), Stroke::NUM);
    assert_eq!(Stroke::from_steno_order(1), Stroke::new("-Z"));
}

#[test]
fn test_digit_table() {
    for &(digit, key) in NUMBERS {
        assert_eq!(key.digit(), Some(digit));
        let stroke = Stroke::new(&digit.to_string());
        assert!(stroke.is_number());
        assert!(stroke.get(key), "{digit} should press {key:?}");
    }
}
