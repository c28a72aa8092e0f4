// ChromaLog - platform/fs.rs
//
// Filesystem helpers for the save flow.

use std::path::{Path, PathBuf};

/// Directory suggested as the Save Log dialog's starting location: the
/// directory containing the running executable, falling back to the current
/// working directory, then ".".
pub fn default_save_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
