//! Error types for the build pipeline
//!
//! Uses `thiserror` for library errors; the binary surfaces them through
//! `anyhow`. Every variant is fatal to the run - there are no retries and
//! no partial-success mode.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for build operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Main error type for the build pipeline
#[derive(Error, Debug)]
pub enum BuildError {
    /// Manifest file could not be read
    #[error("cannot read {file}: {message}")]
    ManifestMissing { file: PathBuf, message: String },

    /// Manifest is not valid JSON
    #[error("invalid JSON in {file}: {message}")]
    ManifestMalformed { file: PathBuf, message: String },

    /// Manifest parsed but a required field is absent or empty
    #[error("invalid {file}: missing or empty '{field}'")]
    ManifestIncomplete { file: PathBuf, field: &'static str },

    /// A file from the required list does not exist
    #[error("missing file: {0}")]
    RequiredFileMissing(PathBuf),

    /// The filesystem rejected a write while building the archive
    #[error("error creating {file}: {message}")]
    ArchiveWrite { file: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_manifest_incomplete() {
        let err = BuildError::ManifestIncomplete {
            file: PathBuf::from("package.json"),
            field: "version",
        };
        assert_eq!(
            err.to_string(),
            "invalid package.json: missing or empty 'version'"
        );
    }

    #[test]
    fn test_error_display_required_file_missing() {
        let err =
            BuildError::RequiredFileMissing(PathBuf::from("syntaxes/supercode.tmLanguage.json"));
        assert_eq!(
            err.to_string(),
            "missing file: syntaxes/supercode.tmLanguage.json"
        );
    }

    #[test]
    fn test_error_display_archive_write() {
        let err = BuildError::ArchiveWrite {
            file: PathBuf::from("dist/supercode-1.0.0.vsix"),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "error creating dist/supercode-1.0.0.vsix: permission denied"
        );
    }
}
