// ChromaLog - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every error carries the path it
// concerns and the underlying cause for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised by the Save Log export path.
///
/// Export failures are caught at the GUI boundary and shown to the user as
/// a blocking warning; they never unwind the application.
#[derive(Debug)]
pub enum ExportError {
    /// The destination file could not be created.
    Create { path: PathBuf, source: io::Error },

    /// Writing or flushing the destination failed.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create { path, source } => {
                write!(f, "Cannot create '{}': {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Cannot write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Create { source, .. } | Self::Write { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_includes_path_and_cause() {
        let err = ExportError::Create {
            path: PathBuf::from("/tmp/out.rtf"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = err.to_string();
        assert!(text.contains("/tmp/out.rtf"), "missing path: {text}");
        assert!(text.contains("denied"), "missing cause: {text}");
    }

    #[test]
    fn source_chain_is_preserved() {
        let err = ExportError::Write {
            path: PathBuf::from("out.log"),
            source: io::Error::other("disk full"),
        };
        assert!(err.source().is_some());
    }
}
