//! Tests for arena construction and storage ownership
//!
//! These tests verify:
//! - Owned vs caller-supplied storage
//! - Capacity validation
//! - Storage is handed back on teardown
//! - Raw layout of records inside the arena

use bytes::BytesMut;
use llring::arena::Arena;
use llring::record::RecordHeader;
use llring::{Config, RingError, UndoRing, HEADER_SIZE};

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_with_capacity() {
    let ring = UndoRing::with_capacity(1024).unwrap();

    assert_eq!(ring.capacity(), 1024);
    assert!(ring.is_empty());
}

#[test]
fn test_new_uses_config_capacity() {
    let config = Config::builder().capacity(4096).build();
    let ring = UndoRing::new(config).unwrap();

    assert_eq!(ring.capacity(), 4096);
}

#[test]
fn test_default_config_capacity() {
    let ring = UndoRing::new(Config::default()).unwrap();

    assert_eq!(ring.capacity(), 64 * 1024);
}

#[test]
fn test_capacity_too_small() {
    for capacity in [0, 1, HEADER_SIZE] {
        let result = UndoRing::with_capacity(capacity);
        assert!(
            matches!(result, Err(RingError::Config(_))),
            "capacity {} should be rejected",
            capacity
        );
    }
}

#[test]
fn test_smallest_ring_holds_zero_length_records() {
    let mut ring = UndoRing::with_capacity(HEADER_SIZE + 1).unwrap();

    ring.push(b"", 1).unwrap();
    ring.push(b"", 2).unwrap();

    assert_eq!(ring.len(), 1);
    assert!(ring.push(b"x", 3).is_err());
}

// =============================================================================
// Caller Storage Tests
// =============================================================================

#[test]
fn test_from_storage_uses_buffer_length() {
    let storage = BytesMut::zeroed(300);
    let ring = UndoRing::from_storage(storage).unwrap();

    assert_eq!(ring.capacity(), 300);
}

#[test]
fn test_from_storage_too_small() {
    let storage = BytesMut::zeroed(HEADER_SIZE);

    assert!(matches!(
        UndoRing::from_storage(storage),
        Err(RingError::Config(_))
    ));
}

#[test]
fn test_from_storage_ignores_existing_bytes() {
    let storage = BytesMut::from(&[0xFFu8; 128][..]);
    let mut ring = UndoRing::from_storage(storage).unwrap();

    assert!(ring.is_empty());
    assert!(ring.undo().is_none());

    ring.push(b"a", 1).unwrap();
    ring.push(b"b", 2).unwrap();

    assert_eq!(ring.undo().unwrap().payload(), b"a");
    ring.verify().unwrap();
}

#[test]
fn test_from_storage_honors_config_settings() {
    let mut storage = BytesMut::zeroed(100);
    storage.fill(0xAB);
    let config = Config::builder().capacity(4096).zero_reserved(false).build();

    let mut ring = UndoRing::from_storage_with_config(storage, config).unwrap();
    assert_eq!(ring.capacity(), 100);

    // Reserved span keeps the caller's bytes
    let record = ring.reserve(10, 1).unwrap();
    assert!(record.payload().iter().all(|&b| b == 0xAB));
}

#[test]
fn test_from_storage_zeroes_reserved_by_default() {
    let mut storage = BytesMut::zeroed(100);
    storage.fill(0xAB);

    let mut ring = UndoRing::from_storage(storage).unwrap();

    let record = ring.reserve(10, 1).unwrap();
    assert!(record.payload().iter().all(|&b| b == 0));
}

#[test]
fn test_from_storage_with_config_checks_storage_length() {
    let config = Config::builder().capacity(4096).build();

    assert!(matches!(
        UndoRing::from_storage_with_config(BytesMut::zeroed(HEADER_SIZE), config),
        Err(RingError::Config(_))
    ));
}

#[test]
fn test_into_storage_returns_caller_buffer() {
    let mut ring = UndoRing::from_storage(BytesMut::zeroed(128)).unwrap();
    ring.push(b"kept", 42).unwrap();

    let storage = ring.into_storage();

    assert_eq!(storage.len(), 128);
    let header = RecordHeader::decode(&storage).unwrap();
    assert_eq!(header.tag, 42);
    assert_eq!(header.length, 4);
    assert_eq!(&storage[HEADER_SIZE..HEADER_SIZE + 4], b"kept");
}

#[test]
fn test_storage_can_be_reused_for_new_ring() {
    let mut ring = UndoRing::from_storage(BytesMut::zeroed(128)).unwrap();
    ring.push(b"first life", 1).unwrap();

    let mut ring = UndoRing::from_storage(ring.into_storage()).unwrap();

    assert!(ring.is_empty());
    ring.push(b"second life", 2).unwrap();
    assert_eq!(ring.current().unwrap().payload(), b"second life");
}

// =============================================================================
// Raw Layout Tests
// =============================================================================

#[test]
fn test_chain_links_in_arena() {
    let mut ring = UndoRing::with_capacity(128).unwrap();
    let first = ring.push(b"AAAA", 1).unwrap().handle();
    let second = ring.push(b"BB", 2).unwrap().handle();

    let arena = Arena::from_storage(ring.into_storage());
    let first_header = arena.header(first.offset);
    let second_header = arena.header(second.offset);

    assert_eq!(first_header.prev(), None);
    assert_eq!(first_header.next(), Some(second.offset));
    assert_eq!(second_header.prev(), Some(first.offset));
    assert_eq!(second_header.next(), None);
    assert_eq!(second_header.generation, second.generation);
}

#[test]
fn test_truncated_record_is_marked_dead_in_arena() {
    let mut ring = UndoRing::with_capacity(128).unwrap();
    ring.push(b"A", 1).unwrap();
    ring.push(b"B", 2).unwrap();
    let undone = ring.push(b"C", 3).unwrap().handle();
    ring.undo().unwrap();
    ring.undo().unwrap();

    // "D" takes the place of "B" and ends exactly where "C" begins
    let replacement = ring.push(b"D", 4).unwrap().handle();
    assert_eq!(
        replacement.offset as usize + HEADER_SIZE + 1,
        undone.offset as usize
    );

    let arena = Arena::from_storage(ring.into_storage());
    let dead = arena.header(undone.offset);
    assert_eq!(dead.generation, 0);
    assert_eq!(dead.tag, 3);
}
