//! Filepoke CLI
//!
//! Interactive harness for exercising raw file read, write, and seek
//! primitives against a single file.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use filepoke::interactive::signals;
use filepoke::{Session, SignalHandler, TargetFile};

#[derive(Parser)]
#[command(name = "filepoke")]
#[command(author, version, about = "Interactive file read/write/seek exerciser")]
struct Cli {
    /// File to open for reading and writing (must already exist)
    file: std::path::PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing on stderr; stdout carries only the prompt protocol
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    signals::install_panic_handler();

    let file = match TargetFile::open(&cli.file) {
        Ok(file) => file,
        Err(err) => {
            debug!(%err, "open failed");
            println!("filepoke error: invalid filename");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut session = Session::new(file, stdin.lock(), io::stdout());

    let signal_handler = SignalHandler::new(session.shutdown_flag());
    if let Err(err) = signal_handler.install() {
        // The session still works, it just can't turn Ctrl+C into a
        // graceful shutdown.
        warn!(%err, "could not install signal handler");
    }

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("filepoke: {err}");
            ExitCode::FAILURE
        }
    }
}
