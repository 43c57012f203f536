//! Prompted line input
//!
//! One prompt, one line. The outcome is enumerated: a completed line
//! (possibly empty) or end-of-input, which is the session's only shutdown
//! signal.

use std::io::{BufRead, Write};

use crate::Result;

/// Display `prompt` on `output`, then read one line from `input`.
///
/// Returns `Ok(Some(line))` with the trailing newline (and any `\r` before
/// it) stripped. An empty line is a valid zero-length result. Returns
/// `Ok(None)` when the input ends before a newline is seen; a partial line
/// truncated by end-of-input is discarded rather than returned.
pub fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    output.write_all(prompt.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if !line.ends_with('\n') {
        // End-of-input interrupted the line
        return Ok(None);
    }

    line.pop();
    if line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
