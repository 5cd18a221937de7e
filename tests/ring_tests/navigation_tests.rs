//! Tests for undo/redo navigation
//!
//! These tests verify:
//! - Behaviour of an empty ring
//! - Cursor moves and their no-op ends
//! - current_payload_length follows the cursor
//! - History iteration includes redo-only records
//! - Reset semantics

use llring::{Tag, UndoRing, HEADER_SIZE};

// =============================================================================
// Helper Functions
// =============================================================================

fn ring_with(payloads: &[&str]) -> UndoRing {
    let mut ring = UndoRing::with_capacity(512).unwrap();
    for (tag, payload) in payloads.iter().enumerate() {
        ring.push(payload.as_bytes(), tag as Tag).unwrap();
    }
    ring
}

// =============================================================================
// Empty Ring Tests
// =============================================================================

#[test]
fn test_empty_ring() {
    let mut ring = UndoRing::with_capacity(64).unwrap();

    assert!(ring.is_empty());
    assert_eq!(ring.len(), 0);
    assert!(ring.current().is_none());
    assert!(ring.undo().is_none());
    assert!(ring.redo().is_none());
    assert!(!ring.can_undo());
    assert!(!ring.can_redo());
    assert_eq!(ring.current_payload_length(), 0);
    assert_eq!(ring.history().count(), 0);
}

#[test]
fn test_single_record_has_nowhere_to_go() {
    let mut ring = ring_with(&["only"]);

    assert!(ring.undo().is_none());
    assert!(ring.redo().is_none());
    assert_eq!(ring.current().unwrap().payload(), b"only");
}

// =============================================================================
// Cursor Movement Tests
// =============================================================================

#[test]
fn test_undo_then_redo_returns_to_start() {
    let mut ring = ring_with(&["one", "two", "three"]);

    assert_eq!(ring.undo().unwrap().payload(), b"two");
    assert_eq!(ring.undo().unwrap().payload(), b"one");
    assert!(ring.undo().is_none());

    assert_eq!(ring.redo().unwrap().payload(), b"two");
    assert_eq!(ring.redo().unwrap().payload(), b"three");
    assert!(ring.redo().is_none());
}

#[test]
fn test_failed_undo_keeps_cursor() {
    let mut ring = ring_with(&["one", "two"]);
    ring.undo().unwrap();

    assert!(ring.undo().is_none());
    assert_eq!(ring.current().unwrap().tag(), 0);
    assert!(ring.can_redo());
}

#[test]
fn test_failed_redo_keeps_cursor() {
    let mut ring = ring_with(&["one", "two"]);

    assert!(ring.redo().is_none());
    assert_eq!(ring.current().unwrap().tag(), 1);
    assert!(ring.can_undo());
}

#[test]
fn test_navigation_does_not_change_occupancy() {
    let mut ring = ring_with(&["one", "two", "three"]);
    let bytes = ring.bytes_used();
    let stats = ring.stats();

    ring.undo();
    ring.undo();
    ring.redo();

    assert_eq!(ring.bytes_used(), bytes);
    assert_eq!(ring.len(), 3);
    assert_eq!(ring.stats(), stats);
}

#[test]
fn test_current_payload_length_follows_cursor() {
    let mut ring = ring_with(&["", "12345", "12"]);

    assert_eq!(ring.current_payload_length(), 2);
    ring.undo();
    assert_eq!(ring.current_payload_length(), 5);
    ring.undo();
    assert_eq!(ring.current_payload_length(), 0);
    ring.redo();
    assert_eq!(ring.current_payload_length(), 5);
}

#[test]
fn test_verify_reports_cursor_position() {
    let mut ring = ring_with(&["a", "b", "c", "d"]);
    ring.undo();
    ring.undo();

    let report = ring.verify().unwrap();

    assert_eq!(report.records, 4);
    assert_eq!(report.cursor_index, Some(1));
    assert_eq!(report.redo_depth, 2);
    assert!(!report.wrapped);
}

// =============================================================================
// History Iterator Tests
// =============================================================================

#[test]
fn test_history_walks_oldest_to_newest() {
    let ring = ring_with(&["a", "bb", "ccc"]);

    let payloads: Vec<&[u8]> = ring.history().map(|r| r.payload()).collect();

    assert_eq!(payloads, vec![&b"a"[..], &b"bb"[..], &b"ccc"[..]]);
}

#[test]
fn test_history_includes_redo_records() {
    let mut ring = ring_with(&["a", "b", "c"]);
    ring.undo();
    ring.undo();

    let history = ring.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history.map(|r| r.tag()).collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn test_history_handles_match_navigation() {
    let mut ring = ring_with(&["a", "b"]);
    let handles: Vec<_> = ring.history().map(|r| r.handle()).collect();

    let undone = ring.undo().unwrap().handle();

    assert_eq!(undone, handles[0]);
    assert_eq!(ring.redo().unwrap().handle(), handles[1]);
}

// =============================================================================
// Reset Tests
// =============================================================================

#[test]
fn test_reset_empties_history() {
    let mut ring = ring_with(&["a", "b"]);

    ring.reset();

    assert!(ring.is_empty());
    assert_eq!(ring.len(), 0);
    assert_eq!(ring.bytes_used(), 0);
    assert!(ring.undo().is_none());
    assert!(ring.redo().is_none());
    assert_eq!(ring.verify().unwrap().records, 0);
    assert_eq!(ring.stats().resets, 1);
}

#[test]
fn test_reset_keeps_cumulative_counters() {
    let mut ring = ring_with(&["a", "b"]);

    ring.reset();

    let stats = ring.stats();
    assert_eq!(stats.pushes, 2);
    assert_eq!(stats.live_records, 0);
}

#[test]
fn test_reset_leaves_bytes_untouched() {
    let mut ring = ring_with(&["keep-me"]);

    ring.reset();

    let storage = ring.into_storage();
    assert_eq!(&storage[HEADER_SIZE..HEADER_SIZE + 7], b"keep-me");
}

#[test]
fn test_push_after_reset_starts_at_offset_zero() {
    let mut ring = ring_with(&["a", "b", "c"]);
    ring.undo();

    ring.reset();
    let handle = ring.push(b"new", 9).unwrap().handle();

    assert_eq!(handle.offset, 0);
    assert_eq!(ring.len(), 1);
    assert_eq!(ring.stats().truncated, 0);
    ring.verify().unwrap();
}
