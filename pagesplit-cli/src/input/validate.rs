//! Input path validation

use crate::error::CliError;
use pagesplit_core::EXPECTED_EXTENSION;
use std::path::Path;

/// Check that `path` exists and carries the expected extension
///
/// The extension check is case-insensitive and only looks at the file name,
/// never at the content.
pub fn validate_input(path: &Path) -> Result<(), CliError> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    if !has_expected_extension(path) {
        return Err(CliError::UnsupportedExtension(path.display().to_string()));
    }

    Ok(())
}

/// Returns true if the file name ends in `.pdf` in any letter case
pub fn has_expected_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(EXPECTED_EXTENSION))
}
