use anyhow::{bail, Context, Result};
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Move `source` to `dest`, refusing to clobber an existing destination.
///
/// A plain rename is tried first; when the staging directory sits on a
/// different filesystem than the target directory the rename fails and the
/// move degrades to copy-then-remove.
pub fn move_file(source: &Path, dest: &Path) -> Result<()> {
    if dest.exists() {
        bail!("Destination already exists: {}", dest.display());
    }

    match fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            if !source.exists() {
                return Err(rename_err)
                    .with_context(|| format!("Failed to move {}", source.display()));
            }
            fs::copy(source, dest).with_context(|| {
                format!("Failed to copy {} to {}", source.display(), dest.display())
            })?;
            fs::remove_file(source)
                .with_context(|| format!("Failed to remove {}", source.display()))?;
            Ok(())
        }
    }
}

/// Best-effort removal of staged files under `temp_dir`.
///
/// A file that is already gone (moved next to its target, or overwritten
/// under a colliding entry name) is skipped silently; any other failure is
/// logged and never propagated.
pub fn remove_staged_files(temp_dir: &Path, filenames: &[String]) {
    for filename in filenames {
        let path = temp_dir.join(filename);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove staged file {}: {e}", path.display()),
        }
    }
}
