//! Local saving of the captured temp file.

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PyazoError;

/// Move the captured temp file into the local screenshot directory.
///
/// The target is the configured output directory, or `<pictures>/screenshots`
/// when a platform Pictures directory is known. With neither available the
/// temp file is deleted and nothing is saved.
///
/// Returns the saved path, or `None` when no target directory could be
/// resolved.
pub fn save_local(
    tmp_file: &Path,
    output_dir: Option<&str>,
    pictures_dir: Option<PathBuf>,
) -> Result<Option<PathBuf>, PyazoError> {
    let target_dir = match output_dir {
        Some(dir) => PathBuf::from(dir),
        None => match pictures_dir {
            Some(pictures) => pictures.join("screenshots"),
            None => {
                log::info!("No output directory available, discarding temp file");
                fs::remove_file(tmp_file)?;
                return Ok(None);
            }
        },
    };

    fs::create_dir_all(&target_dir)?;

    let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S");
    let destination = target_dir.join(format!("pyazo_{}.png", timestamp));

    move_file(tmp_file, &destination)?;
    log::info!("Saved screenshot to {}", destination.display());

    Ok(Some(destination))
}

/// Atomic rename, with a copy-and-remove fallback for cross-device moves.
fn move_file(from: &Path, to: &Path) -> std::io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(err) => {
            log::debug!("rename failed ({}), falling back to copy", err);
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
    }
}
