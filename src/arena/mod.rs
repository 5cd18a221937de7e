//! Arena Module
//!
//! Fixed-size byte store holding every record of the ring.
//!
//! ## Responsibilities
//! - Own exactly `capacity` bytes, never reallocate
//! - Read and write record headers at arena offsets
//! - Hand out payload slices that sit right after a header
//!
//! ## Ownership
//! The store is either allocated here (`Arena::owned`) or moved in by the
//! caller (`Arena::from_storage`). Either way it can be taken back out
//! with `into_inner`, which is how caller-supplied memory is returned.
//!
//! The arena knows nothing about chains or eviction; callers pass offsets
//! that the ring has already checked against `capacity`.

use bytes::BytesMut;

use crate::record::{RecordHeader, HEADER_SIZE};

/// Fixed-capacity contiguous byte region
#[derive(Debug)]
pub struct Arena {
    /// Backing bytes; `len()` is the capacity and never changes
    data: BytesMut,
}

impl Arena {
    /// Allocate a zeroed arena of `capacity` bytes
    pub fn owned(capacity: usize) -> Self {
        Self {
            data: BytesMut::zeroed(capacity),
        }
    }

    /// Adopt caller storage; its current length becomes the capacity
    pub fn from_storage(storage: BytesMut) -> Self {
        Self { data: storage }
    }

    /// Give the backing store back (teardown for caller-supplied memory)
    pub fn into_inner(self) -> BytesMut {
        self.data
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    // =========================================================================
    // Headers
    // =========================================================================

    /// Read the header at a known-good record offset
    pub fn header(&self, offset: u32) -> RecordHeader {
        let start = offset as usize;
        let mut raw = [0u8; HEADER_SIZE];
        raw.copy_from_slice(&self.data[start..start + HEADER_SIZE]);
        RecordHeader::from_bytes(&raw)
    }

    /// Read the header at an untrusted offset
    ///
    /// Returns None when the offset cannot hold a whole header.
    pub fn try_header(&self, offset: u32) -> Option<RecordHeader> {
        self.data.get(offset as usize..).and_then(RecordHeader::decode)
    }

    pub fn write_header(&mut self, offset: u32, header: &RecordHeader) {
        let start = offset as usize;
        header.encode(&mut self.data[start..start + HEADER_SIZE]);
    }

    /// Read-modify-write a header in place
    pub fn update_header(&mut self, offset: u32, update: impl FnOnce(&mut RecordHeader)) {
        let mut header = self.header(offset);
        update(&mut header);
        self.write_header(offset, &header);
    }

    // =========================================================================
    // Payloads
    // =========================================================================

    pub fn payload(&self, offset: u32, length: u32) -> &[u8] {
        let (start, end) = payload_bounds(offset, length);
        &self.data[start..end]
    }

    pub fn payload_mut(&mut self, offset: u32, length: u32) -> &mut [u8] {
        let (start, end) = payload_bounds(offset, length);
        &mut self.data[start..end]
    }

    /// Whether a record of `length` payload bytes at `offset` lies entirely
    /// inside the arena
    pub fn contains_record(&self, offset: u32, length: u32) -> bool {
        let (_, end) = payload_bounds(offset, length);
        end <= self.capacity()
    }
}

fn payload_bounds(offset: u32, length: u32) -> (usize, usize) {
    let start = offset as usize + HEADER_SIZE;
    (start, start + length as usize)
}
