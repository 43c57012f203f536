//! Filepoke: poke at a file's read/write/seek primitives by hand
//!
//! A small interactive harness for observing what raw file I/O calls
//! actually do. One file is opened for reading and writing, then a
//! line-oriented loop lets you drive the cursor manually:
//!
//! ```text
//! Option (r for read, w for write, s for seek): w
//! Enter the data you want to write: hello
//! Option (r for read, w for write, s for seek): s
//! Enter an offset value: 0
//! Enter a value for whence: 0
//! Option (r for read, w for write, s for seek): r
//! Enter the number of bytes you want to read: 5
//! hello
//! ```
//!
//! Reads and writes happen at the current cursor and advance it; seeks
//! reposition it (whence 0 = start, 1 = current, 2 = end). End-of-input at
//! any prompt ends the session; there is no quit command.

pub mod interactive;
pub mod target;

// Re-exports for convenience
pub use interactive::{Session, SessionState, SignalHandler};
pub use target::{TargetFile, Whence};

/// Crate-level error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open {path}: {source}")]
    Open {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Signal handler error: {0}")]
    Signal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
