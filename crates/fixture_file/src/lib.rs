// crates/fixture_file/src/lib.rs

//! The fixture file: a keyword line followed by body lines, written once per
//! run and shared by the `populate_*` tools.

mod error;
mod logging;

pub use error::FixtureError;
pub use logging::init_logging;

use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// An open fixture file.
///
/// The handle is released when the value is dropped, on success and error
/// paths alike. Whatever was already written stays on disk; there is no
/// rollback.
pub struct FixtureFile {
    path: PathBuf,
    writer: BufWriter<File>,
    lines_written: usize,
}

impl FixtureFile {
    /// Opens `directory/filename` for writing, creating it or truncating any
    /// previous content. `filename` need not be valid UTF-8.
    pub fn create(directory: &Path, filename: impl AsRef<OsStr>) -> Result<Self, FixtureError> {
        let path = directory.join(filename.as_ref());
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| FixtureError::Open {
                path: path.clone(),
                source,
            })?;
        log::debug!("Opened fixture file {}", path.display());
        Ok(FixtureFile {
            path,
            writer: BufWriter::new(file),
            lines_written: 0,
        })
    }

    /// Writes `line` followed by a newline. The line is written verbatim.
    pub fn write_line(&mut self, line: &str) -> Result<(), FixtureError> {
        writeln!(self.writer, "{}", line).map_err(|source| FixtureError::Write {
            path: self.path.clone(),
            source,
        })?;
        self.lines_written += 1;
        Ok(())
    }

    /// Flushes buffered content, syncs it to disk and closes the handle.
    pub fn finish(mut self) -> Result<PathBuf, FixtureError> {
        let path = self.path.clone();
        let to_write_error = |source: std::io::Error| FixtureError::Write {
            path: path.clone(),
            source,
        };
        self.writer.flush().map_err(to_write_error)?;
        self.writer.get_ref().sync_all().map_err(to_write_error)?;
        log::info!(
            "Wrote {} line(s) to {}",
            self.lines_written,
            self.path.display()
        );
        Ok(self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }
}
