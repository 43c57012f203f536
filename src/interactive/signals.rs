//! Signal handling for the interactive session
//!
//! Ctrl+C requests the same graceful shutdown as end-of-input instead of
//! tearing the process down mid-write. The flag is observed once per loop
//! iteration, at the option prompt.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::info;

use crate::{Error, Result};

/// Signal handler for the interactive session
pub struct SignalHandler {
    /// Shutdown flag shared with the session loop
    shutdown_flag: Arc<AtomicBool>,
}

impl SignalHandler {
    /// Create a new signal handler around the session's shutdown flag
    pub fn new(shutdown_flag: Arc<AtomicBool>) -> Self {
        Self { shutdown_flag }
    }

    /// Install the Ctrl+C handler
    pub fn install(&self) -> Result<()> {
        let shutdown_flag = self.shutdown_flag.clone();

        ctrlc::set_handler(move || {
            info!("interrupt received, shutting down at the next prompt");
            shutdown_flag.store(true, Ordering::SeqCst);
        })
        .map_err(|e| Error::Signal(e.to_string()))
    }

    /// Check if shutdown was requested
    pub fn is_shutdown(&self) -> bool {
        self.shutdown_flag.load(Ordering::SeqCst)
    }
}

/// Install a panic handler that reports the crash location before exit
pub fn install_panic_handler() {
    std::panic::set_hook(Box::new(|info| {
        let msg = if let Some(s) = info.payload().downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let location = if let Some(loc) = info.location() {
            format!(" at {}:{}", loc.file(), loc.line())
        } else {
            String::new()
        };

        eprintln!("\nfilepoke crashed unexpectedly: {}{}", msg, location);
    }));
}
