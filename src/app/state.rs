// ChromaLog - app/state.rs
//
// Application state. Owns the producer handle, the dispatch queue, and the
// visual buffer. Owned by the eframe::App implementation; the buffer is
// mutated only on the UI thread via `pump_queue`.

use crate::core::buffer::LogBuffer;
use crate::core::sink::{LogQueue, LogSink};
use crate::platform::config::AppConfig;
use crate::util::constants;
use std::path::PathBuf;

/// Top-level application state.
pub struct AppState {
    /// Producer handle; clone freely into worker threads.
    pub sink: LogSink,

    /// Consumer end of the dispatch channel, drained once per frame.
    pub queue: LogQueue,

    /// The visual buffer. UI-thread only.
    pub buffer: LogBuffer,

    /// Active palette: dark (true) or light (false).
    pub dark_mode: bool,

    /// Console font size in points.
    pub font_size: f32,

    /// Status bar message.
    pub status_message: String,

    /// Scroll the console to the newest entry on the next render.
    pub scroll_to_bottom: bool,

    /// Whether the About dialog is open.
    pub show_about: bool,

    /// Pointer currently held down on the banner (press/release detection).
    pub banner_held: bool,

    /// Directory suggested by the Save Log dialog.
    pub save_dir: PathBuf,
}

impl AppState {
    /// Create initial state: a sink with its dispatch target attached and an
    /// empty buffer.
    pub fn new(config: &AppConfig, save_dir: PathBuf) -> Self {
        let sink = LogSink::new();
        let queue = sink.attach();
        Self {
            sink,
            queue,
            buffer: LogBuffer::new(),
            dark_mode: config.dark_mode,
            font_size: config.font_size,
            status_message: "Ready.".to_string(),
            scroll_to_bottom: false,
            show_about: false,
            banner_held: false,
            save_dir,
        }
    }

    /// Apply pending queue entries to the buffer, up to the per-frame
    /// budget. Returns the number applied; a full budget means more entries
    /// are still queued and another frame should be requested.
    pub fn pump_queue(&mut self) -> usize {
        let entries = self.queue.drain(constants::MAX_ENTRIES_PER_FRAME);
        for entry in &entries {
            self.buffer.apply(entry);
        }
        if !entries.is_empty() {
            self.scroll_to_bottom = true;
        }
        entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Category;

    fn state() -> AppState {
        AppState::new(&AppConfig::default(), PathBuf::from("."))
    }

    #[test]
    fn new_state_starts_attached_and_empty() {
        let state = state();
        assert!(state.sink.is_attached());
        assert!(state.buffer.is_empty());
        assert!(state.dark_mode);
    }

    #[test]
    fn pump_moves_entries_from_queue_to_buffer() {
        let mut state = state();
        state.sink.append("one", Category::Information);
        state.sink.append("two", Category::Warning);

        let applied = state.pump_queue();
        assert_eq!(applied, 2);
        assert_eq!(state.buffer.entry_count(), 2);
        assert!(state.scroll_to_bottom);

        // Nothing left on the second pump.
        assert_eq!(state.pump_queue(), 0);
    }

    #[test]
    fn pump_respects_the_per_frame_budget() {
        let mut state = state();
        for i in 0..(constants::MAX_ENTRIES_PER_FRAME + 3) {
            state.sink.append(format!("{i}"), Category::Debug);
        }
        assert_eq!(state.pump_queue(), constants::MAX_ENTRIES_PER_FRAME);
        assert_eq!(state.pump_queue(), 3);
    }
}
