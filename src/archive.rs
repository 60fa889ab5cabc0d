//! VSIX archive construction
//!
//! A `.vsix` is a plain ZIP whose entries all live under an `extension/`
//! prefix; VS Code only recognizes the bundle with that internal root.
//! The archive is written once, append-only, and a stale output from a
//! prior run is deleted before writing begins.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{BuildError, BuildResult};
use crate::layout::PackageLayout;
use crate::manifest::PackageId;

/// Internal root prefix required by the VSIX format
pub const ARCHIVE_PREFIX: &str = "extension";

/// Output directory for built packages, relative to the project root
pub const OUTPUT_DIR: &str = "dist";

/// Result of a successful build
#[derive(Debug)]
pub struct ArchiveSummary {
    /// Where the archive was written
    pub path: PathBuf,
    /// Number of file entries in the archive
    pub entries: usize,
    /// Final size of the archive on disk
    pub size_bytes: u64,
}

/// Output path for a package, e.g. `<root>/dist/supercode-1.0.0.vsix`
pub fn output_path(root: &Path, pkg: &PackageId) -> PathBuf {
    root.join(OUTPUT_DIR).join(pkg.vsix_filename())
}

/// Build the `.vsix` archive for `pkg` from the files `layout` declares.
///
/// `on_entry` is invoked with each archive-internal path as it is added,
/// in write order. Any filesystem or ZIP failure surfaces as
/// [`BuildError::ArchiveWrite`] naming the output path; a partially
/// written archive is not cleaned up.
pub fn build_vsix<F>(
    root: &Path,
    layout: &PackageLayout,
    pkg: &PackageId,
    mut on_entry: F,
) -> BuildResult<ArchiveSummary>
where
    F: FnMut(&str),
{
    let vsix_path = output_path(root, pkg);
    let fail = |e: io::Error| BuildError::ArchiveWrite {
        file: vsix_path.clone(),
        message: e.to_string(),
    };

    fs::create_dir_all(root.join(OUTPUT_DIR)).map_err(fail)?;

    // Delete any stale archive so the output is a clean rewrite,
    // never an update of a prior run.
    if vsix_path.exists() {
        fs::remove_file(&vsix_path).map_err(fail)?;
    }

    let file = fs::File::create(&vsix_path).map_err(fail)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = 0usize;

    for entry in &layout.files {
        let archive_name = format!("{}/{}", ARCHIVE_PREFIX, entry.archive_path);
        append_file(&mut writer, &root.join(entry.source), &archive_name, options)
            .map_err(fail)?;
        on_entry(&archive_name);
        entries += 1;
    }

    for dir in &layout.directories {
        append_dir_recursive(
            &mut writer,
            root,
            &root.join(dir),
            options,
            &mut entries,
            &mut on_entry,
        )
        .map_err(fail)?;
    }

    writer.finish().map_err(|e| fail(io::Error::other(e)))?;

    let size_bytes = fs::metadata(&vsix_path).map_err(fail)?.len();

    Ok(ArchiveSummary {
        path: vsix_path,
        entries,
        size_bytes,
    })
}

/// Add a single file to the archive under `archive_name`.
fn append_file(
    writer: &mut ZipWriter<fs::File>,
    source: &Path,
    archive_name: &str,
    options: SimpleFileOptions,
) -> io::Result<()> {
    let mut contents = Vec::new();
    fs::File::open(source)?.read_to_end(&mut contents)?;

    writer
        .start_file(archive_name, options)
        .map_err(io::Error::other)?;
    writer.write_all(&contents)?;
    Ok(())
}

/// Recursively add every file under `current`, preserving its path
/// relative to `root` behind the archive prefix.
fn append_dir_recursive<F>(
    writer: &mut ZipWriter<fs::File>,
    root: &Path,
    current: &Path,
    options: SimpleFileOptions,
    entries: &mut usize,
    on_entry: &mut F,
) -> io::Result<()>
where
    F: FnMut(&str),
{
    // Sort for deterministic archive order across platforms.
    let mut children: Vec<_> = fs::read_dir(current)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|e| e.path())
        .collect();
    children.sort();

    for path in children {
        if path.is_dir() {
            append_dir_recursive(writer, root, &path, options, entries, on_entry)?;
        } else {
            let relative = path
                .strip_prefix(root)
                .map_err(io::Error::other)?;
            let archive_name = archive_name_for(relative);
            append_file(writer, &path, &archive_name, options)?;
            on_entry(&archive_name);
            *entries += 1;
        }
    }

    Ok(())
}

/// Archive-internal name for a path relative to the project root.
///
/// ZIP entry names always use forward slashes, whatever the host
/// platform's separator is.
fn archive_name_for(relative: &Path) -> String {
    let mut name = String::from(ARCHIVE_PREFIX);
    for component in relative.components() {
        name.push('/');
        name.push_str(&component.as_os_str().to_string_lossy());
    }
    name
}
