//! Common test utilities for supercode-build integration tests.
//!
//! Provides fixture scaffolding for a complete extension tree in a temp
//! directory, plus helpers to run the build binary and inspect the
//! resulting archive.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Default manifest used by the fixture tree
pub const VALID_MANIFEST: &str = r#"{"name": "supercode", "version": "1.0.0"}"#;

/// Every file the build requires, in check order
pub const REQUIRED_FILES: &[&str] = &[
    "package.json",
    "extension.js",
    "formatter.js",
    "runner.js",
    "language-configuration.json",
    "syntaxes/supercode.tmLanguage.json",
    "snippets/supercode.json",
];

/// Create a temp project with all required files and a valid manifest.
pub fn scaffold_extension() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for path in REQUIRED_FILES {
        write_file(dir.path(), path, "// fixture\n");
    }
    write_file(dir.path(), "package.json", VALID_MANIFEST);
    dir
}

/// Write `contents` at `relative` under `root`, creating parent dirs.
pub fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Run the build binary with `root` as both cwd and --root.
pub fn run_build(root: &Path) -> Output {
    let bin = env!("CARGO_BIN_EXE_supercode-build");
    Command::new(bin)
        .current_dir(root)
        .output()
        .expect("failed to run supercode-build")
}

/// Path to the archive a default fixture build produces.
pub fn default_vsix_path(root: &Path) -> PathBuf {
    root.join("dist").join("supercode-1.0.0.vsix")
}

/// Entry names of a ZIP archive, in archive order.
pub fn entry_names(archive: &Path) -> Vec<String> {
    let file = fs::File::open(archive).unwrap();
    let zip = zip::ZipArchive::new(file).unwrap();
    zip.file_names().map(String::from).collect()
}

/// Read a single entry out of a ZIP archive as a string.
pub fn read_entry(archive: &Path, name: &str) -> String {
    use std::io::Read;

    let file = fs::File::open(archive).unwrap();
    let mut zip = zip::ZipArchive::new(file).unwrap();
    let mut contents = String::new();
    zip.by_name(name)
        .unwrap_or_else(|_| panic!("entry '{}' not found in {}", name, archive.display()))
        .read_to_string(&mut contents)
        .unwrap();
    contents
}

/// Combined stdout + stderr of a run, for assertion messages.
pub fn combined_output(output: &Output) -> String {
    format!(
        "{}\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}
