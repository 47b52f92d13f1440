//! Screenshot capture via external platform utilities.
//!
//! Selection and invocation are kept separate: the static backend table lives
//! in [`backends`], and all process interaction goes through the
//! [`CommandRunner`] trait so tests can inject a fake runner.

pub mod backends;
#[cfg(test)]
mod tests;

use std::path::Path;
use std::process::Command;

use crate::clipboard;
use crate::error::PyazoError;
use backends::{Backend, BackendOutput};

/// Seam between selection logic and process spawning.
pub trait CommandRunner {
    /// Whether `program` can be found on PATH.
    fn is_available(&self, program: &str) -> bool;

    /// Run `program` to completion. `Ok(true)` means it exited zero.
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<bool>;
}

/// Runner that spawns real processes.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn is_available(&self, program: &str) -> bool {
        let Some(paths) = std::env::var_os("PATH") else {
            return false;
        };

        std::env::split_paths(&paths).any(|dir| {
            let candidate = dir.join(program);
            if candidate.is_file() {
                return true;
            }
            // Windows resolves executables through PATHEXT; checking .exe
            // covers the utilities in the backend table.
            cfg!(windows) && dir.join(format!("{program}.exe")).is_file()
        })
    }

    fn run(&self, program: &str, args: &[String]) -> std::io::Result<bool> {
        log::debug!("Running {} {:?}", program, args);
        let status = Command::new(program).args(args).status()?;
        Ok(status.success())
    }
}

/// Capture a screenshot into `tmp_file`.
///
/// With an explicitly configured utility the name must exist in the platform
/// table; an unknown name fails before any process is spawned. Without one,
/// candidates are probed in table order and the first that is present on PATH
/// and exits zero is accepted.
///
/// Postcondition: `tmp_file` exists on success.
pub fn capture(
    configured_util: Option<&str>,
    runner: &dyn CommandRunner,
    tmp_file: &Path,
) -> Result<(), PyazoError> {
    capture_with_table(configured_util, runner, tmp_file, backends::BACKENDS)
}

fn capture_with_table(
    configured_util: Option<&str>,
    runner: &dyn CommandRunner,
    tmp_file: &Path,
    table: &[Backend],
) -> Result<(), PyazoError> {
    if let Some(name) = configured_util {
        let backend = backends::find(table, name)
            .ok_or_else(|| PyazoError::UnknownUtility(name.to_string()))?;

        if !invoke(backend, runner, tmp_file) {
            return Err(PyazoError::CaptureFailed);
        }
    } else {
        for backend in table {
            if !runner.is_available(backend.utility) {
                log::debug!("{} not found on PATH, skipping", backend.utility);
                continue;
            }
            if invoke(backend, runner, tmp_file) {
                log::info!("Captured screenshot with {}", backend.utility);
                break;
            }
        }
    }

    if !tmp_file.is_file() {
        return Err(PyazoError::CaptureFailed);
    }

    Ok(())
}

/// Run one backend, reading the image back from the clipboard when the
/// utility delivers it there instead of writing the file itself.
fn invoke(backend: &Backend, runner: &dyn CommandRunner, tmp_file: &Path) -> bool {
    let ok = match runner.run(backend.utility, &backend.argv(tmp_file)) {
        Ok(ok) => ok,
        Err(err) => {
            log::debug!("Failed to run {}: {}", backend.utility, err);
            false
        }
    };

    if ok && backend.output == BackendOutput::Clipboard {
        if let Err(err) = clipboard::save_image(tmp_file) {
            log::warn!("Failed to read screenshot from clipboard: {}", err);
            return false;
        }
    }

    ok
}
