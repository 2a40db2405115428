use anyhow::{bail, Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::models::SUBTITLE_EXT;

/// Supported archive container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
}

impl ArchiveFormat {
    pub fn from_path(path: &Path) -> Option<ArchiveFormat> {
        match path
            .extension()
            .and_then(|s| s.to_str())?
            .to_lowercase()
            .as_str()
        {
            "zip" => Some(ArchiveFormat::Zip),
            _ => None,
        }
    }
}

/// Enumerate the supported archives in `dir`, sorted by filename so that
/// cross-archive overwrites of identically named entries land in a stable
/// order.
pub fn collect_archives(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read archive directory {}", dir.display()))?;

    let mut archives = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && ArchiveFormat::from_path(&path).is_some() {
            archives.push(path);
        }
    }
    archives.sort();
    Ok(archives)
}

/// Extract every subtitle entry of `archive_path` into `temp_dir`,
/// preserving entry names, and return those names in listing order.
///
/// Non-subtitle entries are left untouched. An unreadable or corrupt
/// archive is an error for the whole batch.
pub fn extract_subtitles(archive_path: &Path, temp_dir: &Path) -> Result<Vec<String>> {
    match ArchiveFormat::from_path(archive_path) {
        Some(ArchiveFormat::Zip) => extract_zip(archive_path, temp_dir),
        None => bail!("Unsupported archive format: {}", archive_path.display()),
    }
}

fn extract_zip(archive_path: &Path, temp_dir: &Path) -> Result<Vec<String>> {
    let file = File::open(archive_path)
        .with_context(|| format!("Failed to open archive {}", archive_path.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("Invalid or corrupt archive {}", archive_path.display()))?;

    let subtitle_suffix = format!(".{SUBTITLE_EXT}");
    let mut extracted = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).with_context(|| {
            format!("Failed to read entry {i} of {}", archive_path.display())
        })?;
        let name = entry.name().to_string();
        if entry.is_dir() || !name.ends_with(&subtitle_suffix) {
            continue;
        }
        // Entry names that would escape the staging directory are skipped.
        let Some(entry_path) = entry.enclosed_name() else {
            continue;
        };

        let output_path = temp_dir.join(entry_path);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let mut output = File::create(&output_path)
            .with_context(|| format!("Failed to create {}", output_path.display()))?;
        io::copy(&mut entry, &mut output)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;

        extracted.push(name);
    }

    Ok(extracted)
}
