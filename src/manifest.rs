//! Extension manifest loading and validation
//!
//! The manifest is the standard VS Code `package.json`. Only `name` and
//! `version` are load-bearing for packaging - they name the output
//! archive. Everything else in the file is carried verbatim into the
//! package without inspection.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{BuildError, BuildResult};

/// Manifest filename, relative to the project root
pub const MANIFEST_FILE: &str = "package.json";

/// The subset of the manifest the build reads
///
/// Both fields are optional at the serde level so that a missing field
/// surfaces as `ManifestIncomplete` (naming the field) rather than a
/// generic parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl Manifest {
    /// Validate that `name` and `version` are present and non-empty.
    ///
    /// `file` is the manifest path, used only for error reporting.
    pub fn validate(self, file: &Path) -> BuildResult<PackageId> {
        let name = require_field(self.name, "name", file)?;
        let version = require_field(self.version, "version", file)?;
        Ok(PackageId { name, version })
    }
}

/// Validated package identity, derived from the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageId {
    pub name: String,
    pub version: String,
}

impl PackageId {
    /// Output archive filename, e.g. `supercode-1.0.0.vsix`
    pub fn vsix_filename(&self) -> String {
        format!("{}-{}.vsix", self.name, self.version)
    }
}

/// Load and validate the manifest at `<root>/package.json`.
pub fn load_manifest(root: &Path) -> BuildResult<PackageId> {
    let file = root.join(MANIFEST_FILE);

    let content = fs::read_to_string(&file).map_err(|e| BuildError::ManifestMissing {
        file: file.clone(),
        message: e.to_string(),
    })?;

    let manifest: Manifest =
        serde_json::from_str(&content).map_err(|e| BuildError::ManifestMalformed {
            file: file.clone(),
            message: e.to_string(),
        })?;

    manifest.validate(&file)
}

fn require_field(
    value: Option<String>,
    field: &'static str,
    file: &Path,
) -> BuildResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(BuildError::ManifestIncomplete {
            file: file.to_path_buf(),
            field,
        }),
    }
}
