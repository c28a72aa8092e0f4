// ChromaLog - tests/e2e_console.rs
//
// End-to-end tests for the sink -> queue -> buffer pipeline and plain-text
// export. These exercise the real mpsc channel, real producer threads, and
// the real filesystem, no mocks and no stubs: the same path an entry takes
// from an `append` call on a worker thread to the bytes in a saved file.

use chromalog::core::buffer::LogBuffer;
use chromalog::core::export;
use chromalog::core::model::Category;
use chromalog::core::sink::LogSink;
use std::fs;
use std::thread;

/// Drain everything currently queued into a fresh buffer.
fn drain_into(buffer: &mut LogBuffer, queue: &chromalog::core::sink::LogQueue) -> usize {
    let entries = queue.drain(usize::MAX);
    let n = entries.len();
    for entry in &entries {
        buffer.apply(entry);
    }
    n
}

// =============================================================================
// Ordering
// =============================================================================

/// Entries appended from a single thread appear in the buffer in call order.
#[test]
fn e2e_single_caller_order_is_preserved() {
    let sink = LogSink::new();
    let queue = sink.attach();
    let mut buffer = LogBuffer::new();

    for i in 0..50 {
        sink.append(format!("entry-{i:02}"), Category::Information);
    }
    assert_eq!(drain_into(&mut buffer, &queue), 50);

    let text = buffer.plain_text();
    let positions: Vec<usize> = (0..50)
        .map(|i| {
            text.find(&format!("entry-{i:02}"))
                .unwrap_or_else(|| panic!("entry-{i:02} missing from buffer"))
        })
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "entries out of order: {positions:?}"
    );
}

/// Concurrent producers: every entry arrives, and each thread's subsequence
/// keeps its own call order. Interleaving across threads is unconstrained.
#[test]
fn e2e_concurrent_producers_keep_per_thread_order() {
    let sink = LogSink::new();
    let queue = sink.attach();

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let sink = sink.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    sink.append(format!("t{t}-{i:02}"), Category::FromTerminal);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("producer thread panicked");
    }

    let mut buffer = LogBuffer::new();
    assert_eq!(drain_into(&mut buffer, &queue), 8 * 50);

    let text = buffer.plain_text();
    for t in 0..8 {
        let positions: Vec<usize> = (0..50)
            .map(|i| {
                text.find(&format!("t{t}-{i:02}"))
                    .unwrap_or_else(|| panic!("t{t}-{i:02} missing from buffer"))
            })
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "thread {t} entries out of order"
        );
    }
}

// =============================================================================
// Dispatch-target semantics
// =============================================================================

/// With no dispatch target, append returns without panicking and nothing
/// ever reaches a buffer.
#[test]
fn e2e_detached_sink_drops_appends() {
    let sink = LogSink::new();
    sink.append("lost", Category::Error);
    sink.append_with_params("also lost", &[Some("x")], Category::Warning);

    let queue = sink.attach();
    let mut buffer = LogBuffer::new();
    assert_eq!(drain_into(&mut buffer, &queue), 0);
    assert!(buffer.is_empty());

    // Once attached, appends flow normally.
    sink.append("found", Category::Information);
    assert_eq!(drain_into(&mut buffer, &queue), 1);
    assert!(buffer.plain_text().contains("found"));
}

/// Dropping the queue (the consumer side) must not make producers panic.
#[test]
fn e2e_dropped_queue_is_survivable() {
    let sink = LogSink::new();
    let queue = sink.attach();
    drop(queue);

    let producer = {
        let sink = sink.clone();
        thread::spawn(move || {
            for _ in 0..10 {
                sink.append("into the void", Category::Debug);
            }
        })
    };
    producer.join().expect("producer must not panic");
    assert!(!sink.is_attached());
}

// =============================================================================
// Rendering
// =============================================================================

/// Rendered entries carry a 12-hour millisecond timestamp, the category
/// glyph, the body, and one terminating newline each.
#[test]
fn e2e_rendered_entries_have_timestamp_glyph_and_newline() {
    let sink = LogSink::new();
    let queue = sink.attach();
    let mut buffer = LogBuffer::new();

    sink.append("first", Category::Warning);
    sink.append("second", Category::ToTerminal);
    drain_into(&mut buffer, &queue);

    let text = buffer.plain_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(text.ends_with('\n'));
    assert!(!text.contains("\n\n"), "blank line between entries");

    for (line, glyph, body) in [
        (lines[0], Category::Warning.glyph(), "first"),
        (lines[1], Category::ToTerminal.glyph(), "second"),
    ] {
        // "HH:MM:SS.mmm AM glyph body"
        assert_eq!(&line[2..3], ":", "timestamp shape: {line}");
        assert_eq!(&line[5..6], ":", "timestamp shape: {line}");
        assert_eq!(&line[8..9], ".", "timestamp shape: {line}");
        let meridiem = &line[13..15];
        assert!(
            meridiem == "AM" || meridiem == "PM",
            "missing meridiem: {line}"
        );
        assert!(line.contains(glyph), "missing glyph in: {line}");
        assert!(line.ends_with(body), "missing body in: {line}");
    }
}

/// Parameterised appends fold the parameter list into the body end to end.
#[test]
fn e2e_append_with_params_renders_null_and_sanitised_values() {
    let sink = LogSink::new();
    let queue = sink.attach();
    let mut buffer = LogBuffer::new();

    sink.append_with_params(
        "msg",
        &[None, Some("a  b\nc".to_string())],
        Category::Information,
    );
    drain_into(&mut buffer, &queue);

    let text = buffer.plain_text();
    assert!(
        text.contains("msg With parameters: null\nabc\n"),
        "unexpected rendering: {text:?}"
    );
}

// =============================================================================
// Export
// =============================================================================

/// A successful export writes exactly the buffer's plain-text rendering,
/// whatever extension the destination carries.
#[test]
fn e2e_export_round_trip_matches_buffer() {
    let sink = LogSink::new();
    let queue = sink.attach();
    let mut buffer = LogBuffer::new();

    sink.append("saved line one", Category::Information);
    sink.append("saved line two", Category::Error);
    drain_into(&mut buffer, &queue);

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("RichTextLog.rtf");
    let text = buffer.plain_text();

    let file = fs::File::create(&dest).unwrap();
    let bytes = export::write_plain_text(&text, file, &dest).unwrap();
    assert_eq!(bytes, text.len() as u64);

    let on_disk = fs::read_to_string(&dest).unwrap();
    assert_eq!(on_disk, text);
    assert_eq!(on_disk, buffer.plain_text(), "buffer changed by export");
}

/// A failed export reports an error and leaves the in-memory buffer intact.
#[test]
fn e2e_export_failure_leaves_buffer_unchanged() {
    let sink = LogSink::new();
    let queue = sink.attach();
    let mut buffer = LogBuffer::new();

    sink.append("precious", Category::Information);
    drain_into(&mut buffer, &queue);
    let before = buffer.plain_text();

    // A read-only handle rejects the write.
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("readonly.log");
    fs::write(&dest, b"").unwrap();
    let readonly = fs::File::open(&dest).unwrap();

    let result = export::write_plain_text(&before, readonly, &dest);
    assert!(result.is_err(), "write through a read-only handle succeeded");

    assert_eq!(buffer.plain_text(), before);
    assert_eq!(buffer.entry_count(), 1);
}
