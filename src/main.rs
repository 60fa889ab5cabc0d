//! supercode-build CLI - packages the SuperCode VS Code extension
//!
//! Usage: supercode-build [--root <DIR>]
//!
//! Runs a fixed three-step pipeline: validate package.json, check the
//! required file set, then write dist/<name>-<version>.vsix. Exits 0 on
//! a successful build, 1 on any failure.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use supercode_build::archive::{self, ArchiveSummary};
use supercode_build::layout::PackageLayout;
use supercode_build::manifest;
use supercode_build::report;

/// SuperCode extension build & package tool
#[derive(Parser, Debug)]
#[command(name = "supercode-build")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root containing package.json
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    report::banner();

    match run(&cli.root) {
        Ok(summary) => {
            report::success(&summary);
        }
        Err(err) => {
            report::failure(&err);
            std::process::exit(1);
        }
    }
}

fn run(root: &Path) -> Result<ArchiveSummary> {
    // Validating
    let pkg = manifest::load_manifest(root)?;
    report::manifest_ok();

    // Checking
    let layout = PackageLayout::supercode();
    report::checking_files();
    layout.check_required(root, report::file_ok)?;

    // Building
    report::creating_package(&archive::output_path(root, &pkg));
    let summary = archive::build_vsix(root, &layout, &pkg, report::entry_added)?;

    Ok(summary)
}
