// crates/populate_batch/src/lib.rs

use fixture_file::{FixtureError, FixtureFile};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// The generated body line for a fixture: `text for {filename}:{keyword}`.
pub fn placeholder_text(filename: &str, keyword: &str) -> String {
    format!("text for {}:{}", filename, keyword)
}

/// Writes `directory/filename` with exactly two lines: the keyword and its
/// placeholder text. Any previous content is replaced.
///
/// A filename that is not valid UTF-8 is still used as-is for the path, but
/// appears lossily converted in the placeholder text.
pub fn run(
    directory: &Path,
    filename: impl AsRef<OsStr>,
    keyword: &str,
) -> Result<PathBuf, FixtureError> {
    let filename = filename.as_ref();
    let mut fixture = FixtureFile::create(directory, filename)?;
    fixture.write_line(keyword)?;
    fixture.write_line(&placeholder_text(&filename.to_string_lossy(), keyword))?;
    fixture.finish()
}
