//! supercode-build - build & package pipeline for the SuperCode VS Code
//! extension
//!
//! Validates the extension manifest, checks the required file set, and
//! bundles everything into `dist/<name>-<version>.vsix` - a ZIP archive
//! whose entries are all rooted under `extension/`.

pub mod archive;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod report;

// Re-exports for convenience
pub use archive::{build_vsix, output_path, ArchiveSummary};
pub use error::{BuildError, BuildResult};
pub use layout::{FileEntry, PackageLayout};
pub use manifest::{load_manifest, Manifest, PackageId};
