//! Static table of platform screenshot utilities.
//!
//! Each entry is a utility name plus the fixed argument list it is invoked
//! with. Table order matters: when no utility is configured, candidates are
//! probed in declaration order and the first one that is present on PATH and
//! exits zero wins.

use std::path::Path;

/// Placeholder in argument lists that is replaced with the temp file path.
const FILE: &str = "{file}";

/// Where a utility delivers the captured image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendOutput {
    /// The utility writes the image to the requested file path.
    File,
    /// The utility places the image on the system clipboard; it must be read
    /// back and written to the temp path afterwards.
    Clipboard,
}

/// A single screenshot utility and its fixed invocation.
#[derive(Debug, Clone, Copy)]
pub struct Backend {
    pub utility: &'static str,
    pub args: &'static [&'static str],
    pub output: BackendOutput,
}

impl Backend {
    /// Argument list with the temp file path substituted in.
    pub fn argv(&self, file: &Path) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| {
                if *arg == FILE {
                    file.display().to_string()
                } else {
                    (*arg).to_string()
                }
            })
            .collect()
    }
}

#[cfg(target_os = "linux")]
pub const BACKENDS: &[Backend] = &[
    Backend {
        utility: "maim",
        args: &["-s", "-n", "0", FILE],
        output: BackendOutput::File,
    },
    Backend {
        utility: "scrot",
        args: &["-s", FILE],
        output: BackendOutput::File,
    },
    // ImageMagick
    Backend {
        utility: "import",
        args: &[FILE],
        output: BackendOutput::File,
    },
    Backend {
        utility: "grimshot",
        args: &["save", "area", FILE],
        output: BackendOutput::File,
    },
    Backend {
        utility: "spectacle",
        args: &["-b", "-r", "-n", "-o", FILE],
        output: BackendOutput::File,
    },
    Backend {
        utility: "hyprshot",
        args: &["-m", "region", "-s", "-z", "-o", "/", "-f", FILE],
        output: BackendOutput::File,
    },
];

#[cfg(target_os = "macos")]
pub const BACKENDS: &[Backend] = &[Backend {
    utility: "screencapture",
    args: &["-i", FILE],
    output: BackendOutput::File,
}];

// '/clip' requires at least Win10 1703.
#[cfg(target_os = "windows")]
pub const BACKENDS: &[Backend] = &[Backend {
    utility: "snippingtool",
    args: &["/clip"],
    output: BackendOutput::Clipboard,
}];

/// Look up a utility by name in the given table.
pub fn find<'a>(table: &'a [Backend], utility: &str) -> Option<&'a Backend> {
    table.iter().find(|backend| backend.utility == utility)
}
