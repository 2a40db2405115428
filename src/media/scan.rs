use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Recognized media container suffixes, in scan order.
pub const MEDIA_EXTENSIONS: [&str; 5] = ["3gp", "avi", "mkv", "mp4", "webm"];

/// List the media filenames in `target_dir` that can receive a subtitle.
///
/// Suffix-major order: all `.3gp` files first, then `.avi`, and so on, each
/// group in directory-enumeration order. The order only shapes the output
/// log, never the match outcome.
pub fn scan_targets(target_dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(target_dir)
        .with_context(|| format!("Failed to read target directory {}", target_dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
    }

    let mut targets = Vec::new();
    for ext in MEDIA_EXTENSIONS {
        let suffix = format!(".{ext}");
        targets.extend(names.iter().filter(|n| n.ends_with(&suffix)).cloned());
    }

    Ok(targets)
}
