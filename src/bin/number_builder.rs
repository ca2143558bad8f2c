//! Numbers dictionary generator
//!
//! Prints every generated number brief as `|CANONICAL| == text`, or as a
//! JSON dictionary with `--json`.

use std::io::{self, Write};

use serde_json::{Map, Value};
use steno_atlas::{logging, numbers};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    let verbose = args.iter().any(|arg| arg == "-v" || arg == "--verbose");
    logging::init(verbose);

    let dict = numbers::build_numbers_dictionary();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        let members: Map<String, Value> = dict
            .iter()
            .map(|(strokes, entry)| (strokes.to_rtfcre(), Value::String(entry.text.clone())))
            .collect();
        serde_json::to_writer_pretty(&mut out, &Value::Object(members))?;
        writeln!(out)?;
    } else {
        for (strokes, entry) in &dict {
            writeln!(out, "|{}| == {}", strokes.to_canonical(), entry.text)?;
        }
    }
    Ok(())
}
