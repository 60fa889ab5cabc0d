//! Console reporting for the build pipeline
//!
//! All human-facing output lives here: banners, per-step progress, and
//! the post-build install instructions. Nothing in this module is
//! load-bearing - the pipeline's only machine-readable surface is the
//! process exit code.

use std::path::Path;

use crate::archive::ArchiveSummary;
use crate::manifest::MANIFEST_FILE;

pub fn banner() {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║ SuperCode! VS Code Extension - Build & Package              ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
}

pub fn manifest_ok() {
    println!("✓ {} valid", MANIFEST_FILE);
    println!();
}

pub fn checking_files() {
    println!("📂 Validating files...");
}

pub fn file_ok(path: &str) {
    println!("✓ {}", path);
}

pub fn creating_package(path: &Path) {
    println!();
    println!("📦 Creating .vsix package...");
    println!("   Output: {}", path.display());
}

pub fn entry_added(name: &str) {
    println!("   + {}", name);
}

pub fn failure(err: &anyhow::Error) {
    println!("❌ {:#}", err);
}

pub fn success(summary: &ArchiveSummary) {
    println!();
    println!("✅ Build successful!");
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║ PACKAGE READY FOR DISTRIBUTION                              ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!("📍 Location: {}", summary.path.display());
    println!("📊 Size: {}", human_size(summary.size_bytes));
    println!();
    println!("📥 Installation:");
    println!("   Option 1 - Via VS Code UI:");
    println!("     Extensions (Ctrl+Shift+X) → ... → Install from VSIX");
    println!();
    println!("   Option 2 - Via Command Line:");
    let absolute = summary
        .path
        .canonicalize()
        .unwrap_or_else(|_| summary.path.clone());
    println!("     code --install-extension {}", absolute.display());
    println!();
    println!("   Option 3 - Run install script:");
    println!("     bash install.sh    # Linux/Mac");
    println!("     install.bat        # Windows");
    println!();
    println!("✨ Once installed, create any .su file to test!");
    println!();
}

/// Human-readable size: KB below one megabyte, MB above.
fn human_size(bytes: u64) -> String {
    let kb = bytes as f64 / 1024.0;
    if kb < 1024.0 {
        format!("{:.1} KB", kb)
    } else {
        format!("{:.1} MB", kb / 1024.0)
    }
}
