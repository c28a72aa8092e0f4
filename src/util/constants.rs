// ChromaLog - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ChromaLog";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ChromaLog";

/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Console limits
// =============================================================================

/// Maximum queued log entries applied to the buffer per UI frame. Remaining
/// entries stay queued and are applied on subsequent frames, so a burst of
/// appends cannot stall the render loop.
pub const MAX_ENTRIES_PER_FRAME: usize = 500;

// =============================================================================
// Save dialog
// =============================================================================

/// Default file name suggested by the Save Log dialog. Whatever extension
/// the user picks, only the plain-text rendering is written.
pub const DEFAULT_SAVE_FILE_NAME: &str = "RichTextLog.rtf";

// =============================================================================
// UI defaults
// =============================================================================

/// Default console font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 13.0;

/// Minimum user-configurable console font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable console font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default diagnostic log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name, looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
