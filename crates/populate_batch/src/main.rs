use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::ffi::OsString;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Positionals are taken verbatim, so no flags are defined and values may
    // start with a hyphen. Logging is configured through RUST_LOG.
    let matches = Command::new("populate_batch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Writes a keyword and a generated placeholder line to a fixture file")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("directory")
                .required(true)
                .allow_hyphen_values(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Existing, writable directory to write into"),
        )
        .arg(
            Arg::new("filename")
                .required(true)
                .allow_hyphen_values(true)
                .value_parser(clap::value_parser!(OsString))
                .help("Name of the file to create or overwrite"),
        )
        .arg(
            Arg::new("keyword")
                .required(true)
                .allow_hyphen_values(true)
                .help("Keyword written as the first line"),
        )
        .arg(
            Arg::new("ignored")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .value_parser(clap::value_parser!(OsString))
                .hide(true),
        )
        .get_matches();

    fixture_file::init_logging();

    let directory = matches
        .get_one::<PathBuf>("directory")
        .context("Missing <directory> argument")?;
    let filename = matches
        .get_one::<OsString>("filename")
        .context("Missing <filename> argument")?;
    let keyword = matches
        .get_one::<String>("keyword")
        .context("Missing <keyword> argument")?;
    if let Some(ignored) = matches.get_many::<OsString>("ignored") {
        log::debug!("Ignoring {} extra argument(s)", ignored.len());
    }

    let path = populate_batch::run(directory, filename, keyword)
        .with_context(|| format!("Failed to populate {}", directory.join(filename).display()))?;
    log::debug!("Done: {}", path.display());
    Ok(())
}
