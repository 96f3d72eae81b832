//! CI output file handling: locating the file through the environment and
//! appending `key=value` lines to it.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::{render_lines, OutputLine};
use crate::error::{ReleaseOutputError, Result};

/// Environment variable GitHub Actions uses to name the step output file
pub const DEFAULT_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Resolve the output file path from the environment variable `var`.
///
/// An empty value is treated the same as an unset one.
pub fn resolve_output_path(var: &str) -> Result<PathBuf> {
    match env::var_os(var) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        Some(_) => Err(ReleaseOutputError::environment(format!(
            "{} is set but empty",
            var
        ))),
        None => Err(ReleaseOutputError::environment(format!(
            "{} is not set",
            var
        ))),
    }
}

/// Append `lines` to the file at `path`, creating it if missing.
///
/// Existing content is never truncated. All lines are rendered into one
/// buffer and written with a single call.
pub fn append_lines<'a>(
    path: impl AsRef<Path>,
    lines: impl IntoIterator<Item = &'a OutputLine>,
) -> Result<()> {
    let buf = render_lines(lines);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;
    file.write_all(buf.as_bytes())?;
    file.flush()?;

    Ok(())
}
