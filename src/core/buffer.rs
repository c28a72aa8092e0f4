// ChromaLog - core/buffer.rs
//
// The visual buffer: an ordered, append-only sequence of rendered,
// category-tagged spans. Only the thread that owns the buffer mutates it;
// producers reach it through the sink's dispatch queue. Spans are never
// reordered or rewritten after append.

use crate::core::format;
use crate::core::model::{Category, LogEntry};

/// One styled run of text. `category` selects the foreground colour at
/// paint time; `None` marks a plain insertion drawn in the default colour,
/// so colouring one entry never bleeds into its neighbours.
#[derive(Debug, Clone)]
pub struct StyledSpan {
    pub category: Option<Category>,
    pub text: String,
}

/// Append-only styled text buffer backing the console.
#[derive(Debug, Default)]
pub struct LogBuffer {
    spans: Vec<StyledSpan>,
    entry_count: usize,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `entry` and append it as a category-tagged span.
    ///
    /// A separating newline is injected at the front when the buffer is
    /// non-empty and does not already end in one, so an entry never
    /// continues the previous line.
    pub fn apply(&mut self, entry: &LogEntry) {
        let mut text = format::render(entry);
        if !self.is_empty() && !self.ends_with_newline() {
            text.insert(0, '\n');
        }
        self.spans.push(StyledSpan {
            category: Some(entry.category),
            text,
        });
        self.entry_count += 1;
    }

    /// Append plain text with no category colour. Host-side insertions only;
    /// does not count as a log entry.
    pub fn append_plain(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.spans.push(StyledSpan {
            category: None,
            text,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Number of log entries applied (plain insertions excluded).
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// All spans in append order, for rendering.
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Plain-text rendering of the whole buffer in span order. This is the
    /// content written by export, whatever file extension is chosen.
    pub fn plain_text(&self) -> String {
        let total: usize = self.spans.iter().map(|s| s.text.len()).sum();
        let mut out = String::with_capacity(total);
        for span in &self.spans {
            out.push_str(&span.text);
        }
        out
    }

    /// Empty the buffer. Host operation; the sink never clears.
    pub fn clear(&mut self) {
        self.spans.clear();
        self.entry_count = 0;
    }

    fn ends_with_newline(&self) -> bool {
        self.spans
            .last()
            .is_some_and(|span| span.text.ends_with('\n'))
    }
}
