//! Line-by-line chat over standard input

use std::io::{BufRead, Write};

use anyhow::Result;
use sathi_core::Responder;
use tracing::debug;

/// Answers each non-blank input line until `quit`/`exit` or end of input.
/// Returns the number of answered lines.
pub fn run<R: BufRead, W: Write>(
    responder: &dyn Responder,
    input: R,
    out: &mut W,
) -> Result<usize> {
    let mut answered = 0;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            debug!("Chat ended by user");
            break;
        }

        let response = responder.respond(&line);
        writeln!(out, "Bot: {}", response)?;
        writeln!(out)?;
        out.flush()?;
        answered += 1;
    }

    Ok(answered)
}
