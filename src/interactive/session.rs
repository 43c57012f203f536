//! Interactive session controller
//!
//! Drives the prompt / dispatch loop over the target file. End-of-input at
//! any prompt is the shutdown signal; there is no explicit quit command.
//! A failed command never ends the session, it just returns to the option
//! prompt.

use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::target::{TargetFile, Whence};
use crate::Result;

use super::commands::{parse_int, Command};
use super::prompt::prompt_line;

const OPTION_PROMPT: &str = "Option (r for read, w for write, s for seek): ";
const READ_PROMPT: &str = "Enter the number of bytes you want to read: ";
const WRITE_PROMPT: &str = "Enter the data you want to write: ";
const OFFSET_PROMPT: &str = "Enter an offset value: ";
const WHENCE_PROMPT: &str = "Enter a value for whence: ";

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting at the option prompt
    Prompting,
    /// Running a dispatched command
    Dispatching,
    /// Session over; the loop will not run again
    Terminated,
}

/// Interactive session controller
pub struct Session<R, W> {
    /// The file under exercise
    file: TargetFile,
    /// Protocol input (stdin in production)
    input: R,
    /// Protocol output (stdout in production)
    output: W,
    /// Current state
    state: SessionState,
    /// Shutdown flag (set by the signal handler)
    shutdown_flag: Arc<AtomicBool>,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Create a new session over an opened file
    pub fn new(file: TargetFile, input: R, output: W) -> Self {
        Self {
            file,
            input,
            output,
            state: SessionState::Prompting,
            shutdown_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the shutdown flag (for the signal handler)
    pub fn shutdown_flag(&self) -> Arc<AtomicBool> {
        self.shutdown_flag.clone()
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run the session until end-of-input, then shut down.
    ///
    /// The file handle is dropped with the session; shutdown itself only
    /// settles the protocol stream.
    pub fn run(&mut self) -> Result<()> {
        while self.state != SessionState::Terminated {
            if self.shutdown_flag.load(Ordering::SeqCst) {
                debug!("shutdown requested");
                self.state = SessionState::Terminated;
                continue;
            }

            let Some(line) = self.prompt(OPTION_PROMPT)? else {
                continue;
            };

            self.state = SessionState::Dispatching;
            match Command::parse(&line) {
                Command::Read => self.handle_read()?,
                Command::Write => self.handle_write()?,
                Command::Seek => self.handle_seek()?,
                Command::Unknown => debug!(line = %line, "unrecognized command"),
            }

            if self.state != SessionState::Terminated {
                self.state = SessionState::Prompting;
            }
        }

        self.shutdown()
    }

    /// Prompt for one line; end-of-input moves the session to `Terminated`.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        match prompt_line(&mut self.input, &mut self.output, text)? {
            Some(line) => Ok(Some(line)),
            None => {
                debug!("end of input");
                self.state = SessionState::Terminated;
                Ok(None)
            }
        }
    }

    fn handle_read(&mut self) -> Result<()> {
        let Some(reply) = self.prompt(READ_PROMPT)? else {
            return Ok(());
        };

        // A zero count and an unparseable reply both land here and abandon
        // the command without output.
        let count = parse_int(&reply);
        if count <= 0 {
            debug!(count, "nothing to read");
            return Ok(());
        }

        match self.file.read_at_cursor(count as usize) {
            Ok(data) => {
                self.output.write_all(String::from_utf8_lossy(&data).as_bytes())?;
                self.output.write_all(b"\n")?;
            }
            Err(err) => warn!(%err, "read failed"),
        }
        Ok(())
    }

    fn handle_write(&mut self) -> Result<()> {
        let Some(data) = self.prompt(WRITE_PROMPT)? else {
            return Ok(());
        };

        // The line's bytes go out verbatim, no trailing newline.
        if let Err(err) = self.file.write_at_cursor(data.as_bytes()) {
            error!(%err, "error writing to file");
        }
        Ok(())
    }

    fn handle_seek(&mut self) -> Result<()> {
        let Some(reply) = self.prompt(OFFSET_PROMPT)? else {
            return Ok(());
        };
        let offset = parse_int(&reply);

        let Some(reply) = self.prompt(WHENCE_PROMPT)? else {
            return Ok(());
        };
        let code = parse_int(&reply);

        let Some(whence) = Whence::from_code(code) else {
            debug!(code, "unrecognized whence code, seek skipped");
            return Ok(());
        };

        // A failed seek leaves the cursor where it was; the loop continues.
        if let Err(err) = self.file.seek(offset, whence) {
            debug!(%err, "seek failed");
        }
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        debug!("session over");
        self.output.write_all(b"\n")?;
        self.output.flush()?;
        Ok(())
    }
}
