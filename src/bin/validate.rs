//! Stroke validator
//!
//! Reads one stroke per line from stdin and reports whether it parses:
//!
//! ```text
//! KPAFRPL\tACCEPT!\t|   KP   A    FRP L     |\t188696
//! KPAFRPLX\tREJECT!\tunexpected character 'X' at offset 7
//! ```
//!
//! `-v` turns on debug logging; `RUST_LOG` overrides it.

use std::io::{self, BufRead, Write};

use steno_atlas::{logging, Stroke};

fn main() -> io::Result<()> {
    let verbose = std::env::args().skip(1).any(|arg| arg == "-v" || arg == "--verbose");
    logging::init(verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let (mut accepted, mut rejected) = (0usize, 0usize);

    for line in stdin.lock().lines() {
        let line = line?;
        match Stroke::parse(&line) {
            Ok(stroke) => {
                accepted += 1;
                writeln!(out, "{line}\tACCEPT!\t|{}|\t{}", stroke.to_canonical(), stroke.raw())?;
            }
            Err(err) => {
                rejected += 1;
                writeln!(out, "{line}\tREJECT!\t{err}")?;
            }
        }
    }

    tracing::info!(accepted, rejected, "validation finished");
    Ok(())
}
