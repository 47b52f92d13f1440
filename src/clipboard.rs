//! System clipboard access for URLs and clipboard-sourced captures.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard backend error: {0}")]
    Backend(#[from] arboard::Error),

    #[error("clipboard image has invalid dimensions")]
    InvalidImage,

    #[error("failed to encode clipboard image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Copy `text` to the system clipboard.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_owned())?;
    Ok(())
}

/// Read an image from the clipboard and write it to `path` as PNG.
///
/// Used for utilities that place the capture on the clipboard instead of
/// writing a file (Windows snipping behavior).
pub fn save_image(path: &Path) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new()?;
    let data = clipboard.get_image()?;

    let image = image::RgbaImage::from_raw(
        data.width as u32,
        data.height as u32,
        data.bytes.into_owned(),
    )
    .ok_or(ClipboardError::InvalidImage)?;

    image.save(path)?;
    log::debug!("Wrote clipboard image to {}", path.display());
    Ok(())
}
