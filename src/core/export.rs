// ChromaLog - core/export.rs
//
// Plain-text export of the buffer content.
// Core layer: writes to any Write trait object; the dialog flow that picks
// the destination lives with the GUI.

use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Write the buffer's plain-text rendering to `writer`.
///
/// Only plain text is ever written, regardless of the extension the user
/// chose for the destination. Returns the number of bytes written.
pub fn write_plain_text<W: Write>(
    text: &str,
    mut writer: W,
    export_path: &Path,
) -> Result<u64, ExportError> {
    writer
        .write_all(text.as_bytes())
        .map_err(|e| ExportError::Write {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    writer.flush().map_err(|e| ExportError::Write {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(text.len() as u64)
}
