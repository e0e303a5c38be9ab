// crates/fixture_file/src/error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while producing a fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The target could not be opened (missing directory, permission denied).
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing the target failed (e.g. disk full).
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Standard input could not be read.
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    /// A prompt could not be written to standard output.
    #[error("failed to write prompt: {0}")]
    Prompt(#[source] io::Error),

    /// Input ended before the keyword line was supplied.
    #[error("end of input reached before a keyword was entered")]
    PrematureEndOfInput,
}
