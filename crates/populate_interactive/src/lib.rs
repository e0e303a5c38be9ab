// crates/populate_interactive/src/lib.rs

use fixture_file::{FixtureError, FixtureFile};
use std::ffi::OsStr;
use std::io::{self, BufRead, ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const KEYWORD_PROMPT: &str = "Enter keyword:";
pub const TEXT_PROMPT: &str = "Enter text:";
/// Printed before every read from the input stream.
pub const INPUT_MARKER: &str = "> ";

/// Prompts on stdout for a keyword and body lines read from stdin, and writes
/// them to `directory/filename`.
pub fn run(directory: &Path, filename: impl AsRef<OsStr>) -> Result<PathBuf, FixtureError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with_io(directory, filename, stdin.lock(), stdout.lock())
}

/// Writes a fixture file from `input`, echoing prompts to `prompts`.
///
/// The first line read is the keyword; every following line up to
/// end-of-input is body. End-of-input while collecting the body ends the run
/// normally, but end-of-input before the keyword is reported as
/// [`FixtureError::PrematureEndOfInput`]. In that case the file has already
/// been created and is left empty.
pub fn run_with_io<R, W>(
    directory: &Path,
    filename: impl AsRef<OsStr>,
    mut input: R,
    mut prompts: W,
) -> Result<PathBuf, FixtureError>
where
    R: BufRead,
    W: Write,
{
    let mut fixture = FixtureFile::create(directory, filename)?;

    writeln!(prompts, "{}", KEYWORD_PROMPT).map_err(FixtureError::Prompt)?;
    let keyword = prompt_line(&mut input, &mut prompts)?
        .ok_or(FixtureError::PrematureEndOfInput)?;
    fixture.write_line(&keyword)?;
    log::debug!("Keyword: {}", keyword);

    writeln!(prompts).map_err(FixtureError::Prompt)?;
    writeln!(prompts, "{}", TEXT_PROMPT).map_err(FixtureError::Prompt)?;
    while let Some(line) = prompt_line(&mut input, &mut prompts)? {
        fixture.write_line(&line)?;
    }
    log::debug!(
        "End of input after {} body line(s)",
        fixture.lines_written() - 1
    );

    fixture.finish()
}

/// Prints the input marker and reads one line, without its line terminator.
/// Returns `None` at end-of-input.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    prompts: &mut W,
) -> Result<Option<String>, FixtureError> {
    write!(prompts, "{}", INPUT_MARKER).map_err(FixtureError::Prompt)?;
    prompts.flush().map_err(FixtureError::Prompt)?;

    read_line(input).map_err(FixtureError::Read)
}

/// Reads one line ended by `\n`, `\r\n` or a lone `\r`. The terminator is
/// dropped; a final line with no terminator is still returned.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    loop {
        let available = match input.fill_buf() {
            Ok(available) => available,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if available.is_empty() {
            break;
        }
        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                let terminator = available[end];
                bytes.extend_from_slice(&available[..end]);
                input.consume(end + 1);
                if terminator == b'\r' && input.fill_buf()?.first() == Some(&b'\n') {
                    input.consume(1);
                }
                return decode_line(bytes).map(Some);
            }
            None => {
                let len = available.len();
                bytes.extend_from_slice(available);
                input.consume(len);
            }
        }
    }

    if bytes.is_empty() {
        Ok(None)
    } else {
        decode_line(bytes).map(Some)
    }
}

fn decode_line(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|err| io::Error::new(ErrorKind::InvalidData, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run_in_memory(dir: &Path, filename: &str, input: &str) -> (Result<PathBuf, FixtureError>, String) {
        let mut prompts = Vec::new();
        let result = run_with_io(dir, filename, Cursor::new(input.as_bytes()), &mut prompts);
        (result, String::from_utf8(prompts).unwrap())
    }

    #[test]
    fn test_keyword_and_body_lines() {
        let dir = tempdir().unwrap();
        let (result, prompts) = run_in_memory(dir.path(), "out.txt", "hello\nworld\n");

        let path = result.unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "hello\nworld\n");
        assert_eq!(prompts, "Enter keyword:\n> \nEnter text:\n> > ");
    }

    #[test]
    fn test_lines_written_in_order() {
        let dir = tempdir().unwrap();
        let input = "kw\nfirst\nsecond\n\nfourth after blank\n";
        let (result, _) = run_in_memory(dir.path(), "ordered.txt", input);

        let content = fs::read_to_string(result.unwrap()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["kw", "first", "second", "", "fourth after blank"]);
    }

    #[test]
    fn test_keyword_only() {
        let dir = tempdir().unwrap();
        let (result, prompts) = run_in_memory(dir.path(), "kw.txt", "lonely\n");

        assert_eq!(fs::read_to_string(result.unwrap()).unwrap(), "lonely\n");
        assert_eq!(prompts, "Enter keyword:\n> \nEnter text:\n> ");
    }

    #[test]
    fn test_last_line_without_terminator() {
        let dir = tempdir().unwrap();
        let (result, _) = run_in_memory(dir.path(), "unterminated.txt", "kw\nbody");

        assert_eq!(fs::read_to_string(result.unwrap()).unwrap(), "kw\nbody\n");
    }

    #[test]
    fn test_crlf_terminators_are_stripped() {
        let dir = tempdir().unwrap();
        let (result, _) = run_in_memory(dir.path(), "crlf.txt", "kw\r\nbody\r\n");

        assert_eq!(fs::read_to_string(result.unwrap()).unwrap(), "kw\nbody\n");
    }

    #[test]
    fn test_lone_carriage_return_ends_a_line() {
        let dir = tempdir().unwrap();
        let (result, prompts) = run_in_memory(dir.path(), "cr.txt", "kw\rfirst\rsecond");

        assert_eq!(fs::read_to_string(result.unwrap()).unwrap(), "kw\nfirst\nsecond\n");
        assert_eq!(prompts, "Enter keyword:\n> \nEnter text:\n> > > ");
    }

    #[test]
    fn test_mixed_terminators() {
        let dir = tempdir().unwrap();
        let (result, _) = run_in_memory(dir.path(), "mixed.txt", "kw\r\n\rx\ny\r");

        assert_eq!(fs::read_to_string(result.unwrap()).unwrap(), "kw\n\nx\ny\n");
    }

    #[test]
    fn test_read_line_across_buffer_refills() {
        let mut input = io::BufReader::with_capacity(2, "keyword\r\nbody".as_bytes());
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("keyword"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("body"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_end_of_input_before_keyword() {
        let dir = tempdir().unwrap();
        let (result, prompts) = run_in_memory(dir.path(), "empty.txt", "");

        assert!(matches!(result, Err(FixtureError::PrematureEndOfInput)));
        assert_eq!(prompts, "Enter keyword:\n> ");
        // The file was opened before prompting, so it exists but is empty.
        assert_eq!(fs::read_to_string(dir.path().join("empty.txt")).unwrap(), "");
    }

    #[test]
    fn test_rerun_overwrites() {
        let dir = tempdir().unwrap();
        let (first, _) = run_in_memory(dir.path(), "again.txt", "kw\na\nb\nc\n");
        let first = fs::read(first.unwrap()).unwrap();
        let (second, _) = run_in_memory(dir.path(), "again.txt", "kw\na\nb\nc\n");
        let second = fs::read(second.unwrap()).unwrap();
        assert_eq!(first, second);

        let (shorter, _) = run_in_memory(dir.path(), "again.txt", "other\n");
        assert_eq!(fs::read_to_string(shorter.unwrap()).unwrap(), "other\n");
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let (result, prompts) = run_in_memory(&missing, "out.txt", "kw\n");

        assert!(matches!(result, Err(FixtureError::Open { .. })));
        // Nothing is prompted when the file cannot be opened.
        assert!(prompts.is_empty());
    }

    #[test]
    fn test_invalid_utf8_input_is_a_read_error() {
        let dir = tempdir().unwrap();
        let mut prompts = Vec::new();
        let input: &[u8] = b"kw\n\xff\xfe\n";
        let result = run_with_io(dir.path(), "bad.txt", Cursor::new(input), &mut prompts);

        assert!(matches!(result, Err(FixtureError::Read(_))));
        assert_eq!(fs::read_to_string(dir.path().join("bad.txt")).unwrap(), "kw\n");
    }
}
