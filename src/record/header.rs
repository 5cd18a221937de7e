//! Record header codec
//!
//! Fixed-size header written in front of every payload in the arena.

use super::Tag;

/// Header size: Tag (4) + Length (4) + Prev (4) + Next (4) + Generation (8) = 24 bytes
pub const HEADER_SIZE: usize = 24;

/// Sentinel link value meaning "no record"
pub(crate) const NIL: u32 = u32::MAX;

/// Generation written over truncated records so their handles go stale
pub(crate) const DEAD_GENERATION: u64 = 0;

/// Decoded record header
///
/// Links are arena offsets, not references: a record is found again by
/// reading the header stored at its offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    /// Caller annotation, stored verbatim
    pub tag: Tag,
    /// Payload length in bytes
    pub length: u32,
    /// Offset of the record pushed just before this one (NIL if evicted)
    pub prev: u32,
    /// Offset of the record pushed just after this one (NIL at newest)
    pub next: u32,
    /// Push sequence number, DEAD_GENERATION once truncated
    pub generation: u64,
}

impl RecordHeader {
    /// Header for a freshly pushed record (no successor yet)
    pub fn new(tag: Tag, length: u32, prev: Option<u32>, generation: u64) -> Self {
        Self {
            tag,
            length,
            prev: prev.unwrap_or(NIL),
            next: NIL,
            generation,
        }
    }

    pub fn prev(&self) -> Option<u32> {
        link(self.prev)
    }

    pub fn next(&self) -> Option<u32> {
        link(self.next)
    }

    /// Header plus payload
    pub fn record_size(&self) -> usize {
        HEADER_SIZE + self.length as usize
    }

    pub fn is_dead(&self) -> bool {
        self.generation == DEAD_GENERATION
    }

    /// Encode into the on-arena layout:
    /// [tag(4)][length(4)][prev(4)][next(4)][generation(8)], little-endian
    pub fn encode(&self, out: &mut [u8]) {
        debug_assert!(out.len() >= HEADER_SIZE);
        out[0..4].copy_from_slice(&self.tag.to_le_bytes());
        out[4..8].copy_from_slice(&self.length.to_le_bytes());
        out[8..12].copy_from_slice(&self.prev.to_le_bytes());
        out[12..16].copy_from_slice(&self.next.to_le_bytes());
        out[16..24].copy_from_slice(&self.generation.to_le_bytes());
    }

    /// Decode from the on-arena layout
    ///
    /// Returns None if fewer than HEADER_SIZE bytes are available.
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        let bytes: &[u8; HEADER_SIZE] = bytes.get(..HEADER_SIZE)?.try_into().ok()?;
        Some(Self::from_bytes(bytes))
    }

    /// Decode a complete header
    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Self {
        Self {
            tag: Tag::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            length: le_u32(bytes, 4),
            prev: le_u32(bytes, 8),
            next: le_u32(bytes, 12),
            generation: le_u64(bytes, 16),
        }
    }
}

fn le_u32(bytes: &[u8; HEADER_SIZE], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn le_u64(bytes: &[u8; HEADER_SIZE], at: usize) -> u64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&bytes[at..at + 8]);
    u64::from_le_bytes(raw)
}

fn link(raw: u32) -> Option<u32> {
    (raw != NIL).then_some(raw)
}
