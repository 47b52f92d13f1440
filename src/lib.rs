//! Library exports for the pyazo CLI.
//!
//! The binary is a thin wrapper around [`run`], which performs one capture →
//! upload → post-process cycle and reports failures as values so the flow can
//! be exercised in tests without terminating a process.

pub mod api;
pub mod capture;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod notification;
pub mod save;

use std::path::{Path, PathBuf};

pub use capture::{CommandRunner, SystemRunner};
pub use config::Config;
pub use error::PyazoError;

use api::ApiClient;

/// Per-run behavior flags, mirroring the CLI surface.
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    pub private: bool,
    pub image: Option<PathBuf>,
    pub clear_metadata: bool,
    pub delete: bool,
    pub no_copy: bool,
    pub no_output: bool,
    pub no_save: bool,
}

/// Execute one full invocation.
///
/// `--delete` short-circuits everything else; `--image` uploads an existing
/// file; otherwise a screenshot is captured, uploaded, and saved locally
/// unless `--no-save` is set. Every successful upload path ends with an
/// "uploaded" notification carrying the URL.
pub fn run(
    config: &Config,
    options: &RunOptions,
    runner: &dyn CommandRunner,
) -> Result<(), PyazoError> {
    let api = ApiClient::new(config);

    if options.delete {
        api.delete_last_image()?;
        return Ok(());
    }

    let url = if let Some(image) = &options.image {
        upload_and_publish(&api, image, options)?
    } else {
        let tmp_file = std::env::temp_dir().join("screenshot.png");
        capture::capture(config.util(), runner, &tmp_file)?;

        let url = upload_and_publish(&api, &tmp_file, options)?;

        if !options.no_save {
            save::save_local(&tmp_file, config.output_dir(), dirs::picture_dir())?;
        }
        url
    };

    notification::notify(&format!("Screenshot uploaded {}", url), 1500);
    Ok(())
}

/// Upload one file, then apply the flag-gated side effects (clipboard copy,
/// stdout print).
fn upload_and_publish(
    api: &ApiClient,
    file: &Path,
    options: &RunOptions,
) -> Result<String, PyazoError> {
    let url = api.upload(file, options.private, options.clear_metadata)?;

    if !options.no_copy {
        if let Err(err) = clipboard::copy_text(&url) {
            log::warn!("Failed to copy URL to clipboard: {}", err);
        }
    }

    if !options.no_output {
        println!("{}", url);
    }

    Ok(url)
}
