//! Package layout configuration
//!
//! What ships in the `.vsix` is expressed as an explicit, ordered layout
//! structure rather than literals inside the archive builder, so the
//! builder stays decoupled from the extension's specific tree.

use std::path::Path;

use crate::error::{BuildError, BuildResult};
use crate::manifest::MANIFEST_FILE;

/// A single file to ship, with its path inside the archive
///
/// The archive path is independent of the source path: the consuming
/// host only recognizes the bundle when entries sit under the internal
/// root prefix, regardless of where they came from on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileEntry {
    /// Source path relative to the project root
    pub source: &'static str,
    /// Destination path relative to the archive's internal root
    pub archive_path: &'static str,
}

impl FileEntry {
    const fn same(path: &'static str) -> Self {
        Self {
            source: path,
            archive_path: path,
        }
    }
}

/// Declarative description of everything the package ships
#[derive(Debug, Clone)]
pub struct PackageLayout {
    /// Files that must exist before a build is attempted
    pub required: Vec<&'static str>,
    /// Top-level files copied into the archive
    pub files: Vec<FileEntry>,
    /// Directories copied recursively into the archive,
    /// preserving structure relative to the project root
    pub directories: Vec<&'static str>,
}

impl PackageLayout {
    /// The fixed layout of the SuperCode extension.
    pub fn supercode() -> Self {
        Self {
            required: vec![
                MANIFEST_FILE,
                "extension.js",
                "formatter.js",
                "runner.js",
                "language-configuration.json",
                "syntaxes/supercode.tmLanguage.json",
                "snippets/supercode.json",
            ],
            files: vec![
                FileEntry::same(MANIFEST_FILE),
                FileEntry::same("extension.js"),
                FileEntry::same("formatter.js"),
                FileEntry::same("runner.js"),
                FileEntry::same("language-configuration.json"),
            ],
            directories: vec!["syntaxes", "snippets"],
        }
    }

    /// Check that every required file exists under `root`.
    ///
    /// Fail-fast: stops at the first missing path. `on_present` is
    /// invoked once per file that passes, in declaration order, so the
    /// caller can report progress.
    pub fn check_required<F>(&self, root: &Path, mut on_present: F) -> BuildResult<()>
    where
        F: FnMut(&str),
    {
        for path in &self.required {
            if !root.join(path).exists() {
                return Err(BuildError::RequiredFileMissing(path.into()));
            }
            on_present(path);
        }
        Ok(())
    }
}
