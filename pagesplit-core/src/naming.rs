//! Output file naming

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Path of the output file for chunk `number` of `input`
///
/// Produces `<dir>/<stem>_part<number>.<ext>` next to the input, keeping the
/// input's extension as written.
pub fn output_path(input: &Path, number: usize) -> PathBuf {
    let mut name = OsString::from(input.file_stem().unwrap_or_default());
    name.push(format!("_part{number}"));
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }

    match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}
