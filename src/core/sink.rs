// ChromaLog - core/sink.rs
//
// The log sink: accepts entries from arbitrary threads and marshals them to
// the single consumer that owns the visual buffer.
//
// Architecture:
//   - `LogSink` is a cheap, cloneable producer handle. `append` stamps an
//     entry and enqueues it without blocking and without observing
//     completion (fire-and-forget).
//   - `LogQueue` is the consumer end, owned by the UI thread and drained
//     once per frame, the same way a progress channel is polled by the
//     frame loop.
//   - The dispatch target is the channel sender slot inside the sink. While
//     detached, appends are dropped with a diagnostic note rather than
//     failing the caller.
//
// Ordering: per producer thread, entries arrive in call order. Entries from
// concurrent producers interleave in channel enqueue order, which need not
// match wall-clock order under contention. The only lock here guards the
// dispatch-target slot and is held just long enough to clone the sender,
// never across the send itself or any UI work.

use crate::core::format;
use crate::core::model::{Category, LogEntry};
use std::fmt::Display;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};

// =============================================================================
// LogSink (producer side)
// =============================================================================

/// Many-producer handle onto the dispatch queue. Clone freely into worker
/// threads; all clones share the same dispatch target.
#[derive(Clone)]
pub struct LogSink {
    target: Arc<RwLock<Option<Sender<LogEntry>>>>,
}

impl LogSink {
    /// Create a detached sink. Appends are dropped (with a diagnostic note)
    /// until [`LogSink::attach`] installs a dispatch target.
    pub fn new() -> Self {
        Self {
            target: Arc::new(RwLock::new(None)),
        }
    }

    /// Create the dispatch channel, install its sender as the dispatch
    /// target, and return the consumer end.
    ///
    /// Re-attaching replaces the previous target; entries still queued on
    /// the old channel are discarded along with it.
    pub fn attach(&self) -> LogQueue {
        let (tx, rx) = mpsc::channel();
        *self.write_target() = Some(tx);
        LogQueue { rx }
    }

    /// Clear the dispatch target. Subsequent appends are dropped.
    pub fn detach(&self) {
        *self.write_target() = None;
    }

    /// Whether a dispatch target is currently installed.
    pub fn is_attached(&self) -> bool {
        self.read_target().is_some()
    }

    /// Append one entry, stamped with the current wall-clock time.
    ///
    /// Returns immediately; the caller never blocks on buffer work and never
    /// observes the queued entry's application. With no dispatch target the
    /// entry is dropped and noted on the diagnostic channel only.
    pub fn append(&self, body: impl Into<String>, category: Category) {
        let entry = LogEntry::new(body, category);

        let sender = match self.read_target().as_ref() {
            Some(tx) => tx.clone(),
            None => {
                tracing::warn!(
                    category = %entry.category,
                    "No dispatch target attached; log entry dropped"
                );
                return;
            }
        };

        if sender.send(entry).is_err() {
            // Consumer end gone (queue dropped). Detach so later appends
            // skip the dead channel instead of re-failing the send.
            tracing::warn!("Dispatch queue closed; detaching sink");
            *self.write_target() = None;
        }
    }

    /// Append with a parameter list folded into the body.
    ///
    /// Absent parameters render as the literal "null"; present parameters
    /// have newlines and carriage returns stripped and double-space runs
    /// removed, each item followed by one newline (see `core::format`).
    pub fn append_with_params<T: Display>(
        &self,
        body: &str,
        params: &[Option<T>],
        category: Category,
    ) {
        self.append(format::body_with_params(body, params), category);
    }

    // A poisoned lock only means another thread panicked mid-update of the
    // target slot; the slot itself is always a valid Option, so recover it.
    fn read_target(&self) -> std::sync::RwLockReadGuard<'_, Option<Sender<LogEntry>>> {
        self.target.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_target(&self) -> std::sync::RwLockWriteGuard<'_, Option<Sender<LogEntry>>> {
        self.target.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// LogQueue (consumer side)
// =============================================================================

/// Consumer end of the dispatch channel. Owned by the thread that owns the
/// visual buffer and drained once per frame.
pub struct LogQueue {
    rx: Receiver<LogEntry>,
}

impl LogQueue {
    /// Drain up to `max` pending entries without blocking, in enqueue order.
    pub fn drain(&self, max: usize) -> Vec<LogEntry> {
        let mut entries = Vec::new();
        while entries.len() < max {
            match self.rx.try_recv() {
                Ok(entry) => entries.push(entry),
                Err(_) => break,
            }
        }
        entries
    }
}
