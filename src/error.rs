//! Error kinds and their reserved process exit codes.

use thiserror::Error;

/// Exit code used when screenshot capture fails (utility missing, non-zero
/// exit, or no output file).
pub const CAPTURE_EXIT_CODE: i32 = 1;

/// Exit code used when the remote API rejects an upload, fetch, or delete.
pub const REMOTE_EXIT_CODE: i32 = 2;

/// Exit code used when the configuration file cannot be read or parsed.
/// Kept distinct from the two run-failure codes so callers can tell a
/// startup problem from a failed capture or upload.
pub const CONFIG_EXIT_CODE: i32 = 3;

/// Errors that can terminate a run.
///
/// Every variant maps to one of the two reserved exit codes; the top-level
/// handler in `main` performs the mapping so the rest of the crate never calls
/// `process::exit` itself.
#[derive(Debug, Error)]
pub enum PyazoError {
    #[error("Error: Failed to take screenshot.")]
    CaptureFailed,

    #[error("Error: Unknown screenshot utility '{0}' for this platform.")]
    UnknownUtility(String),

    #[error("Error: Failed to upload screenshot. [{0}]")]
    UploadFailed(u16),

    #[error("Error: Failed to delete image. [{0}]")]
    DeleteFailed(u16),

    #[error("Error: Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error: Unexpected response from server: {0}")]
    InvalidResponse(String),

    #[error("Error: {0}")]
    Io(#[from] std::io::Error),
}

impl PyazoError {
    /// Map the error kind to its reserved exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            PyazoError::CaptureFailed | PyazoError::UnknownUtility(_) | PyazoError::Io(_) => {
                CAPTURE_EXIT_CODE
            }
            PyazoError::UploadFailed(_)
            | PyazoError::DeleteFailed(_)
            | PyazoError::Http { .. }
            | PyazoError::InvalidResponse(_) => REMOTE_EXIT_CODE,
        }
    }
}
