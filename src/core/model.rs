// ChromaLog - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies (Core depends on std and chrono only).
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Local};

// =============================================================================
// Category
// =============================================================================

/// Closed set of log entry categories.
///
/// Each category maps to a fixed display glyph (see [`Category::glyph`]) and
/// a colour pair, one colour per palette (see `ui::theme::category_colour`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Debug,
    #[default]
    Information,
    Warning,
    Error,
    FromTerminal,
    ToTerminal,
}

impl Category {
    /// Returns all variants in display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Debug,
            Category::Information,
            Category::Warning,
            Category::Error,
            Category::FromTerminal,
            Category::ToTerminal,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Debug => "Debug",
            Category::Information => "Information",
            Category::Warning => "Warning",
            Category::Error => "Error",
            Category::FromTerminal => "FromTerminal",
            Category::ToTerminal => "ToTerminal",
        }
    }

    /// Display glyph prefixed to every rendered entry.
    ///
    /// Warning and Error share the warning sign; Debug takes the magnifier,
    /// the fallback glyph for anything without a dedicated symbol.
    pub fn glyph(&self) -> &'static str {
        match self {
            Category::FromTerminal => "\u{21e8}",
            Category::ToTerminal => "\u{21e6}",
            Category::Information => "\u{270f}\u{fe0f}",
            Category::Warning | Category::Error => "\u{26a0}\u{fe0f}",
            Category::Debug => "\u{1f50e}",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Log Entry
// =============================================================================

/// A single log entry as it travels from a producer to the visual buffer.
///
/// The timestamp is stamped at append time on the producer side, so each
/// thread's embedded timestamps are ordered like its entries. Parameters are
/// folded into `body` before construction (see `core::format`).
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Wall-clock time of the append call, millisecond precision.
    pub timestamp: DateTime<Local>,

    /// Semantic class selecting glyph and colour.
    pub category: Category,

    /// Message text, without timestamp or glyph.
    pub body: String,
}

impl LogEntry {
    /// Create an entry stamped with the current wall-clock time.
    pub fn new(body: impl Into<String>, category: Category) -> Self {
        Self {
            timestamp: Local::now(),
            category,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_mapping_is_fixed() {
        assert_eq!(Category::FromTerminal.glyph(), "\u{21e8}");
        assert_eq!(Category::ToTerminal.glyph(), "\u{21e6}");
        assert_eq!(Category::Information.glyph(), "\u{270f}\u{fe0f}");
        // Warning and Error share a glyph.
        assert_eq!(Category::Warning.glyph(), Category::Error.glyph());
        assert_eq!(Category::Debug.glyph(), "\u{1f50e}");
    }

    #[test]
    fn all_lists_every_variant_once() {
        let all = Category::all();
        assert_eq!(all.len(), 6);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_category_is_information() {
        assert_eq!(Category::default(), Category::Information);
    }

    #[test]
    fn entry_carries_body_and_category() {
        let entry = LogEntry::new("hello", Category::Warning);
        assert_eq!(entry.body, "hello");
        assert_eq!(entry.category, Category::Warning);
    }
}
