//! Chain integrity verification.
//!
//! Walks the chain without modifying anything and checks the invariants the
//! push path is supposed to maintain.

use crate::error::{Result, RingError};

use super::UndoRing;

/// Result of a successful verification walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainReport {
    /// Records on the chain, oldest to newest
    pub records: usize,

    /// Bytes held by those records (headers + payloads)
    pub bytes_used: usize,

    /// Position of the cursor counted from the oldest record (None if empty)
    pub cursor_index: Option<usize>,

    /// Records reachable by redo from the cursor
    pub redo_depth: usize,

    /// Whether the chain crosses the arena end (newest sits physically
    /// before oldest)
    pub wrapped: bool,
}

impl UndoRing {
    /// Verify chain integrity
    ///
    /// Checks:
    /// 1. Empty history has no cursors and no bookkeeping
    /// 2. Oldest record has no back-link
    /// 3. Every record lies inside the arena with a live generation
    /// 4. prev/next links are symmetric and generations increase
    /// 5. The chain ends at `newest` and passes through the cursor
    /// 6. Records never overlap physically
    /// 7. Counts agree with the ring's bookkeeping
    pub fn verify(&self) -> Result<ChainReport> {
        // Step 1: Empty history
        let Some(oldest) = self.oldest else {
            if self.current.is_some() || self.newest.is_some() || self.live_records != 0 {
                return Err(corrupted(format!(
                    "no oldest record but current={:?} newest={:?} live={}",
                    self.current, self.newest, self.live_records
                )));
            }
            return Ok(ChainReport {
                records: 0,
                bytes_used: 0,
                cursor_index: None,
                redo_depth: 0,
                wrapped: false,
            });
        };

        // Step 2: Truncation point
        if let Some(prev) = self.arena.try_header(oldest).and_then(|h| h.prev()) {
            return Err(corrupted(format!(
                "oldest record at {} still links back to {}",
                oldest, prev
            )));
        }

        // Steps 3-5: Walk the chain
        let mut extents: Vec<(usize, usize)> = Vec::with_capacity(self.live_records);
        let mut bytes_used = 0usize;
        let mut cursor_index = None;
        let mut last_generation = 0u64;
        let mut prev_offset: Option<u32> = None;
        let mut next = Some(oldest);

        while let Some(offset) = next {
            if extents.len() > self.live_records {
                return Err(corrupted(format!(
                    "chain longer than {} live records (cycle?)",
                    self.live_records
                )));
            }

            let header = self
                .arena
                .try_header(offset)
                .filter(|h| self.arena.contains_record(offset, h.length))
                .ok_or_else(|| corrupted(format!("record at {} exceeds the arena", offset)))?;

            if header.is_dead() || header.generation <= last_generation {
                return Err(corrupted(format!(
                    "record at {} has generation {} after {}",
                    offset, header.generation, last_generation
                )));
            }

            if header.prev() != prev_offset {
                return Err(corrupted(format!(
                    "record at {} links back to {:?}, expected {:?}",
                    offset,
                    header.prev(),
                    prev_offset
                )));
            }

            if Some(offset) == self.current {
                cursor_index = Some(extents.len());
            }

            let start = offset as usize;
            extents.push((start, start + header.record_size()));
            bytes_used += header.record_size();
            last_generation = header.generation;
            prev_offset = Some(offset);
            next = header.next();
        }

        if prev_offset != self.newest {
            return Err(corrupted(format!(
                "chain ends at {:?} but newest is {:?}",
                prev_offset, self.newest
            )));
        }

        let cursor_index = cursor_index.ok_or_else(|| {
            corrupted(format!("cursor {:?} is not on the chain", self.current))
        })?;

        let records = extents.len();
        let wrapped = extents.windows(2).any(|pair| pair[1].0 < pair[0].0);

        // Step 6: Physical overlap
        extents.sort_unstable();
        if let Some(pair) = extents.windows(2).find(|pair| pair[1].0 < pair[0].1) {
            return Err(corrupted(format!(
                "records at {} and {} overlap",
                pair[0].0, pair[1].0
            )));
        }

        // Step 7: Bookkeeping
        if records != self.live_records || bytes_used != self.bytes_used {
            return Err(corrupted(format!(
                "walked {} records / {} bytes, bookkeeping says {} / {}",
                records, bytes_used, self.live_records, self.bytes_used
            )));
        }

        Ok(ChainReport {
            records,
            bytes_used,
            cursor_index: Some(cursor_index),
            redo_depth: records - cursor_index - 1,
            wrapped,
        })
    }
}

fn corrupted(detail: String) -> RingError {
    RingError::Corrupted(detail)
}
