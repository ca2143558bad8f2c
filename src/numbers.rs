//! Number Briefs - Digits, amounts, times and years
//!
//! Numbers are written phonetically: tens and ones are fused into a single
//! stroke (`TPW-` + `AOEU` = `TPWAOEU` for "20"), hundreds add a stroke per
//! group (`WUPB/HUPB` for "100"). The fragments carry glue markers so the
//! text joins without spaces ("1" | "~00" = "100").
//!
//! ```text
//! 0..=19     one brief each
//! 20..=99    tens + ones       (fused)
//! 100..=999  hundreds | rest   (concatenated)
//! ```
//!
//! [`build_numbers_dictionary`] expands these into amounts ("$1.05",
//! "$5 million"), clock times ("1:23 p.m.") and years ("1812"), then folds
//! the common stroke pairs into single strokes.

use tracing::{info, warn};

use crate::steno::{insert_decimal, pad, Brief, Dictionary, Stroke, Strokes};

// ═══════════════════════════════════════════════════════════════════════════════
// TABLES
// ═══════════════════════════════════════════════════════════════════════════════

/// 0 through 19; zero has no brief of its own
const START: [(&str, &str); 20] = [
    ("", ""),
    ("1", "WUPB"),
    ("2", "TWO"),
    ("3", "THRE"),
    ("4", "TPOER"),
    ("5", "TPEUF"),
    ("6", "SEUBGS"),
    ("7", "SEF"),
    ("8", "AET"),
    ("9", "TPHEUPB"),
    ("10", "TEPB"),
    ("11", "HREF"),
    ("12", "TWEFL"),
    ("13", "THEURT"),
    ("14", "TPOERT"),
    ("15", "TPEUFT"),
    ("16", "SEUBGT"),
    ("17", "SEFT"),
    ("18", "KWRAET"),
    ("19", "TPHAET"),
];

/// Tens digit, left hand; the teens live in `START`
const TENS: [(&str, &str); 10] = [
    ("0~", AND.1),
    ("", ""),
    ("2~", "TPW-"),
    ("3~", "THR-"),
    ("4~", "TPR-"),
    ("5~", "TKW-"),
    ("6~", "SK-"),
    ("7~", "SR-"),
    ("8~", "KWR-"),
    ("9~", "TPH*"),
];

/// Ones digit, vowels and right hand
const ONES: [(&str, &str); 10] = [
    ("~0", "AOEU"),
    ("~1", "UPB"),
    ("~2", "AO"),
    ("~3", "AE"),
    ("~4", "OER"),
    ("~5", "EUF"),
    ("~6", "EUBG"),
    ("~7", "EFP"),
    ("~8", "AEU"),
    ("~9", "AOEUPB"),
];

const WORDS: [&str; 11] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

const AND: (&str, &str) = ("and", "SKP-");
const OH: (&str, &str) = ("0", "OE");
const ZERO: (&str, &str) = ("zero", "STKPWHRAOER");
const COLON: (&str, &str) = ("~:~", "HR-FR");
const AM: (&str, &str) = ("a.m.", "A*PL");
const PM: (&str, &str) = ("p.m.", "P*PL");

fn entry((text, steno): (&str, &str)) -> Brief {
    if text.is_empty() {
        return Brief::default();
    }
    Brief::new(Strokes::new(steno), text)
}

/// Words that scale a number
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Magnitude {
    Hundred,
    Thousand,
    Million,
    Billion,
    Trillion,
}

impl Magnitude {
    pub const ALL: [Magnitude; 5] = [
        Magnitude::Hundred,
        Magnitude::Thousand,
        Magnitude::Million,
        Magnitude::Billion,
        Magnitude::Trillion,
    ];

    /// Hundreds and thousands are glued on as digits ("~,000"), the rest
    /// are written as words
    pub fn brief(self) -> Brief {
        entry(match self {
            Magnitude::Hundred => ("~00", "HUPB"),
            Magnitude::Thousand => ("~,000", "THOU"),
            Magnitude::Million => ("million", "PHEUL"),
            Magnitude::Billion => ("billion", "PWHROPB"),
            Magnitude::Trillion => ("trillion", "TREUL"),
        })
    }
}

/// Stroke pairs folded into one stroke, applied in order
pub const CONTRACTIONS: [(&str, &str); 7] = [
    ("WUPB/HUPB", "WHUPB"),
    ("HUPB/-DZ", "HUPBDZ"),
    ("THOU/-DZ", "THOUDZ"),
    ("PHEUL/-DZ", "PHEULDZ"),
    // The O is dropped so the outline does not collide with "blonds".
    ("PWHROPB/-DZ", "PWHR-PBDZ"),
    ("TREUL/-DZ", "TREULDZ"),
    ("WUPB/HUPB/-DZ", "WHUPBDZ"),
];

// ═══════════════════════════════════════════════════════════════════════════════
// NUMBERS
// ═══════════════════════════════════════════════════════════════════════════════

/// Brief for `x`; empty for 0 and anything from 1000 up
pub fn num(x: u32) -> Brief {
    build(x, false)
}

/// Brief for `x` written as the tail of a larger number: 0..=9 get a
/// leading zero ("05")
pub fn num_tail(x: u32) -> Brief {
    build(x, true)
}

fn build(x: u32, tail: bool) -> Brief {
    let x = x as usize;
    if x < 20 && !(x < 10 && tail) {
        return entry(START[x]);
    }
    if x < 100 {
        return entry(TENS[x / 10]) + entry(ONES[x % 10]);
    }
    if x < 1000 {
        let hundreds = build((x / 100) as u32, false);
        if x % 100 == 0 {
            return hundreds | Magnitude::Hundred.brief();
        }
        return hundreds | (Brief::glue() + build((x % 100) as u32, true));
    }
    Brief::default()
}

// ═══════════════════════════════════════════════════════════════════════════════
// MODIFIERS
// ═══════════════════════════════════════════════════════════════════════════════

/// "7" becomes "seven"; anything outside 0..=10 is left alone
pub fn written_out(brief: Brief) -> Brief {
    match brief.text.parse::<usize>() {
        Ok(n) if n < WORDS.len() => brief.with_text(WORDS[n]),
        _ => brief,
    }
}

/// "$5", "$5,000", "$5 million" with a trailing `-DZ` stroke
pub fn dollars(brief: Brief) -> Brief {
    (Brief::from("$~") + brief) | Stroke::new("-DZ")
}

/// "$0.05", "$1.23" with a trailing `-S` stroke
pub fn cents(brief: Brief) -> Brief {
    (Brief::from("$~") + brief.apply(insert_decimal(2))) | Stroke::new("-S")
}

/// "$1.05" led by `TKHRAR`
pub fn one_dollar_cents(brief: Brief) -> Brief {
    entry(("$1.~", "TKHRAR")) | brief.apply(pad(2))
}

/// "$1.05" led by `AEU/TKHRAR`
pub fn a_dollar_cents(brief: Brief) -> Brief {
    Brief::from(Stroke::new("AEU")) | one_dollar_cents(brief)
}

/// ",005" led by `THOU`
pub fn thousand_suffix(brief: Brief) -> Brief {
    entry(("~,~", "THOU")) | brief.apply(pad(3))
}

/// ".05" with a trailing `*S` stroke
pub fn cents_suffix(brief: Brief) -> Brief {
    (Brief::from("~.~") + brief.apply(pad(2))) | Stroke::new("*S")
}

// ═══════════════════════════════════════════════════════════════════════════════
// DICTIONARY
// ═══════════════════════════════════════════════════════════════════════════════

fn add(dict: &mut Dictionary, brief: Brief) {
    if brief.failed() {
        warn!(brief = %brief, "skipping brief with an unparsable outline");
        return;
    }
    if brief.strokes.is_empty() || brief.text.is_empty() {
        return;
    }
    dict.add(brief);
}

/// Every generated number brief, followed by the [`CONTRACTIONS`]
pub fn build_numbers_dictionary() -> Dictionary {
    let mut dict = Dictionary::new();

    add(&mut dict, entry(OH));
    add(&mut dict, entry(ZERO));

    for i in 0..=2099 {
        // 1 2 3, one two three
        if (1..=10).contains(&i) {
            add(&mut dict, num(i) + Stroke::STAR);
            add(&mut dict, num(i).apply(written_out));
        }
        // 123
        if (11..=999).contains(&i) {
            add(&mut dict, num(i));
        }
        // 123,000 and $123,000 through $123 trillion
        if (1..=100).contains(&i) {
            add(&mut dict, num(i) | Magnitude::Thousand.brief());
            for magnitude in &Magnitude::ALL[1..] {
                add(&mut dict, (num(i) | magnitude.brief()).apply(dollars));
            }
        }
        // $1200
        if (10..=99).contains(&i) && i % 10 != 0 {
            add(&mut dict, (num(i) | Magnitude::Hundred.brief()).apply(dollars));
        }
        // ,123 and .12
        if (1..=999).contains(&i) {
            add(&mut dict, num(i).apply(thousand_suffix));
        }
        if i <= 99 {
            add(&mut dict, num_tail(i).apply(cents_suffix));
        }
        if (10..=99).contains(&i) {
            add(&mut dict, (Brief::from(entry(AND).strokes) | num_tail(i)).apply(cents_suffix));
        }
        // $123 and $1.23
        if (1..=999).contains(&i) {
            add(&mut dict, num(i).apply(dollars));
            if i % 100 != 0 {
                add(&mut dict, num(i).apply(cents));
            }
        }
        if (1..=9).contains(&i) {
            add(&mut dict, num_tail(i).apply(one_dollar_cents));
            add(&mut dict, num_tail(i).apply(a_dollar_cents));
        }
        if (1..=99).contains(&i) {
            add(&mut dict, num(i).apply(one_dollar_cents));
            add(&mut dict, num(i).apply(a_dollar_cents));
        }

        // 1:23, 1:23 a.m., 1:23 p.m.
        let (hour, minute) = (i / 100, i % 100);
        if (1..=12).contains(&hour) && minute <= 59 {
            let minutes = || num(minute).apply(pad(2));
            add(&mut dict, num(hour) | entry(COLON) | minutes());
            add(&mut dict, (num(hour) + "~:~") | minutes() | entry(AM));
            add(&mut dict, (num(hour) + "~:~") | minutes() | entry(PM));
        }

        // 1812
        let (century, year) = (i / 100, i % 100);
        if (18..=20).contains(&century) {
            if century < 20 && year == 0 {
                add(&mut dict, num(century) | Magnitude::Hundred.brief());
            }
            if century < 20 && (1..=9).contains(&year) {
                let oh = Brief::glue() + entry(OH) + Brief::glue();
                add(&mut dict, num(century) | oh | num(year));
            }
            if (10..=99).contains(&year) {
                add(&mut dict, (num(century) + Brief::glue()) | num(year));
            }
        }
        // 2000 through 2009
        if i == 2000 {
            add(&mut dict, entry(("2000", "TWO/THOU")));
        }
        if (2001..=2009).contains(&i) {
            add(&mut dict, entry(("200~", "TWO/THOU")) | num(i % 10));
        }
    }

    let mut contracted = 0;
    for (long_hand, short_hand) in CONTRACTIONS {
        contracted += dict.gen_contraction(&Strokes::new(long_hand), &Strokes::new(short_hand));
    }
    info!(entries = dict.len(), contracted, "built numbers dictionary");
    dict
}
