//! Desktop notifications, best effort.
//!
//! The notifier process is spawned without waiting so it never blocks or
//! fails the run; errors are only logged.

use std::process::Command;

/// Show a transient notification for `timeout_ms` milliseconds.
pub fn notify(message: &str, timeout_ms: u32) {
    let result = if cfg!(target_os = "macos") {
        Command::new("osascript")
            .arg("-e")
            .arg(format!(
                "display notification \"{}\" with title \"pyazo\"",
                message
            ))
            .spawn()
    } else {
        Command::new("notify-send")
            .arg("-t")
            .arg(timeout_ms.to_string())
            .arg(message)
            .spawn()
    };

    if let Err(err) = result {
        log::warn!("Failed to send notification: {}", err);
    }
}
