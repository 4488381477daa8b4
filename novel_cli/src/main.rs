//! # noveltree CLI
//!
//! Reads a `.novx` novel file and prints the title of every location, one
//! per line, in the order the file lists them.
//!
//! ```text
//! novel_cli mynovel.novx
//! ```
//!
//! Diagnostics go to stderr (`RUST_LOG` controls the level); stdout only
//! carries the titles.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use novel_core::errors::{NovelError, NovelResult};
use novel_core::file_io::read_locations;

/// Print the location titles of a noveltree data file
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the .novx file
    file: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let stdout = io::stdout();
    match print_locations(&args.file, &mut stdout.lock()) {
        Ok(count) => {
            tracing::debug!(count, "locations printed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Write one location title per line. Returns the number of lines written.
fn print_locations(path: &Path, out: &mut impl Write) -> NovelResult<usize> {
    let locations = read_locations(path)?;
    for location in &locations {
        writeln!(out, "{}", location.title)
            .map_err(|e| NovelError::file_error("write", "<stdout>", e.to_string()))?;
    }
    Ok(locations.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;

    #[test]
    fn test_prints_one_line_per_location() {
        let path = temp_dir().join("noveltree_cli_test_locations.novx");
        fs::write(
            &path,
            r#"<novx version="1.4"><LOCATIONS>
<LOCATION id="lc2"><Title>Old Mill</Title></LOCATION>
<LOCATION id="lc1"><Title>River Bank</Title></LOCATION>
<LOCATION id="lc5"><Title>Chapel</Title></LOCATION>
</LOCATIONS></novx>"#,
        )
        .unwrap();

        let mut out = Vec::new();
        let count = print_locations(&path, &mut out).unwrap();
        assert_eq!(count, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "Old Mill\nRiver Bank\nChapel\n");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_no_locations_prints_nothing() {
        let path = temp_dir().join("noveltree_cli_test_empty.novx");
        fs::write(&path, r#"<novx version="1.4"/>"#).unwrap();

        let mut out = Vec::new();
        assert_eq!(print_locations(&path, &mut out).unwrap(), 0);
        assert!(out.is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_error() {
        let mut out = Vec::new();
        let err = print_locations(Path::new("/nonexistent/noveltree.novx"), &mut out).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_args_take_one_positional_path() {
        let args = Args::try_parse_from(["novel_cli", "story.novx"]).unwrap();
        assert_eq!(args.file, PathBuf::from("story.novx"));
        assert!(Args::try_parse_from(["novel_cli"]).is_err());
    }
}
