//! file2c library crate
//!
//! This crate provides the core functionality for the `file2c` CLI, which
//! reads a byte stream from stdin and writes it to stdout as a C array
//! declaration so resources can be compiled straight into firmware or other
//! C sources. It is organized into small modules: `emit` (the byte-array
//! emitter), `error` (I/O error type), and `logging` (stderr diagnostics).
//! The binary `src/main.rs` calls `file2c_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `emit::emit()` / `emit::Emitter` — the transcoder itself.

pub mod emit;
pub mod error;
pub mod logging;

use std::io::{self, BufWriter, Write};

use clap::Parser;
use tracing::debug;

pub use crate::emit::{Emitter, emit, emit_to_string};
pub use crate::error::Error;

/// Top-level CLI arguments. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the generated array, used verbatim
    name: String,
}

/// Run the file2c CLI.
///
/// Reads stdin to end-of-stream and writes the declaration for it to stdout.
/// Errors are printed to stderr and cause the process to exit with status 1;
/// whatever was already written to stdout stays there.
///
/// Example:
///
/// ```no_run
/// file2c_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    logging::init();
    let cli = Cli::parse();

    let count = transcribe(&cli.name).unwrap_or_else(|e| {
        eprintln!("file2c: {}", e);
        std::process::exit(1);
    });
    debug!(name = %cli.name, bytes = count, "done");
}

/// Emit stdin as a declaration named `name` on stdout.
fn transcribe(name: &str) -> Result<u64, Error> {
    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());
    let count = emit(stdin, &mut stdout, name)?;
    stdout.flush().map_err(Error::Write)?;
    Ok(count)
}
