use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::ffi::OsString;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Positionals are taken verbatim, so no flags are defined and values may
    // start with a hyphen. Logging is configured through RUST_LOG.
    let matches = Command::new("populate_interactive")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prompts for a keyword and free-form text and writes them to a fixture file")
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
    if let Some(ignored) = matches.get_many::<OsString>("ignored") {
        log::debug!("Ignoring {} extra argument(s)", ignored.len());
    }

    populate_interactive::run(directory, filename)
        .with_context(|| format!("Failed to populate {}", directory.join(filename).display()))?;
    Ok(())
}
