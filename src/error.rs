//! Error type for the emitter.
//!
//! The only failures are I/O failures. They are split by direction so the
//! CLI can tell the user whether stdin or stdout was at fault.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

impl Error {
    /// The underlying I/O error.
    pub fn io(&self) -> &io::Error {
        match self {
            Error::Read(e) | Error::Write(e) => e,
        }
    }
}
