//! Ring Module
//!
//! The undo/redo history: a chain of variable-size records living in one
//! fixed arena.
//!
//! ## Responsibilities
//! - Place new records, wrapping to the arena start when the tail is short
//! - Evict the oldest records (FIFO by push order) to make room
//! - Drop the redo chain when a push happens after undo
//! - Move the cursor backward/forward along the chain
//!
//! ## Cursors
//! ```text
//!   physical:  ┌─────┬─────┬────────┬─────┬─────┬─────┬─────┐
//!              │ R4  │ R5  │  free  │ R1  │ R2  │ R3  │ gap │
//!              └─────┴─────┴────────┴─────┴─────┴─────┴─────┘
//!                          ▲         ▲
//!                      next push   oldest (evicted first)
//!
//!   chain:     R1 ⇄ R2 ⇄ R3 ⇄ R4 ⇄ R5
//!              ▲                   ▲
//!            oldest         current, newest
//! ```
//!
//! Undo/redo move `current` along the chain. A push lands right after
//! `current`; if undo has moved `current` back from `newest`, the records
//! after it are dropped first.
//!
//! Physical order follows push order except at the single wrap point;
//! a record never straddles the arena end.
//!
//! ## Span Lifetimes
//! `Record` and `RecordMut` borrow the ring, so the compiler rejects any
//! use of a span after a later push (which may overwrite it). Use a
//! `RecordHandle` to remember a record across pushes; `resolve` checks the
//! handle's generation before giving the bytes back.

mod navigation;
mod push;
mod resolve;
mod stats;
mod verify;

use bytes::BytesMut;
use tracing::debug;

use crate::arena::Arena;
use crate::config::Config;
use crate::error::Result;

pub use navigation::History;
pub use stats::RingStats;
pub use verify::ChainReport;

/// Fixed-capacity undo/redo history
///
/// ## Concurrency Model
/// None. Every mutating call takes `&mut self`; share it across threads by
/// wrapping it in your own `Mutex`.
#[derive(Debug)]
pub struct UndoRing {
    /// Backing bytes for every record
    arena: Arena,

    /// Zero-fill spans handed out by `reserve`
    zero_reserved: bool,

    /// Cursor: the record representing "now" (None when empty)
    current: Option<u32>,

    /// Tail of the chain, next candidate for eviction
    oldest: Option<u32>,

    /// Head of the chain, last record reachable by redo
    newest: Option<u32>,

    /// Generation for the next pushed record (0 is reserved for dead records)
    next_generation: u64,

    /// Live record count and bytes (headers + payloads)
    live_records: usize,
    bytes_used: usize,

    /// Cumulative counters
    stats: RingStats,
}

impl UndoRing {
    /// Create a ring that allocates and owns its arena
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_arena(Arena::owned(config.capacity), config.zero_reserved))
    }

    /// Create an owned ring of `capacity` bytes with default settings
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::new(Config::builder().capacity(capacity).build())
    }

    /// Create a ring on caller-supplied storage with default settings
    ///
    /// The storage length is the capacity. Existing contents are ignored
    /// and overwritten by pushes. Get the storage back with `into_storage`.
    pub fn from_storage(storage: BytesMut) -> Result<Self> {
        Self::from_storage_with_config(storage, Config::default())
    }

    /// Create a ring on caller-supplied storage
    ///
    /// `config.capacity` is replaced by the storage length; every other
    /// setting is honored.
    pub fn from_storage_with_config(storage: BytesMut, config: Config) -> Result<Self> {
        let config = Config {
            capacity: storage.len(),
            ..config
        };
        config.validate()?;
        Ok(Self::with_arena(Arena::from_storage(storage), config.zero_reserved))
    }

    fn with_arena(arena: Arena, zero_reserved: bool) -> Self {
        Self {
            arena,
            zero_reserved,
            current: None,
            oldest: None,
            newest: None,
            next_generation: 1,
            live_records: 0,
            bytes_used: 0,
            stats: RingStats::default(),
        }
    }

    /// Tear down the ring and return its backing store
    pub fn into_storage(self) -> BytesMut {
        self.arena.into_inner()
    }

    /// Forget all history in O(1)
    ///
    /// Stored bytes are left untouched; every outstanding handle goes stale.
    pub fn reset(&mut self) {
        debug!(dropped_records = self.live_records, "resetting history");

        self.current = None;
        self.oldest = None;
        self.newest = None;
        self.live_records = 0;
        self.bytes_used = 0;
        self.stats.resets += 1;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Total arena size in bytes
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Number of live records (including those only reachable by redo)
    pub fn len(&self) -> usize {
        self.live_records
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Bytes occupied by live records, headers included
    pub fn bytes_used(&self) -> usize {
        self.bytes_used
    }

    /// Payload length of the current record, 0 when empty
    pub fn current_payload_length(&self) -> usize {
        self.current
            .map(|offset| self.arena.header(offset).length as usize)
            .unwrap_or(0)
    }

    pub fn can_undo(&self) -> bool {
        self.current
            .and_then(|offset| self.arena.header(offset).prev())
            .is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.current
            .and_then(|offset| self.arena.header(offset).next())
            .is_some()
    }

    /// Snapshot of counters plus current occupancy
    pub fn stats(&self) -> RingStats {
        RingStats {
            live_records: self.live_records,
            bytes_used: self.bytes_used,
            capacity: self.capacity(),
            ..self.stats.clone()
        }
    }
}
