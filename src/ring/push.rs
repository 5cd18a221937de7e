//! Push path: truncate, place, evict, link.

use tracing::{debug, trace, warn};

use crate::error::{Result, RingError};
use crate::record::{RecordHandle, RecordHeader, RecordMut, Tag, DEAD_GENERATION, HEADER_SIZE, NIL};

use super::UndoRing;

impl UndoRing {
    /// Push a copy of `payload` as the newest history entry
    ///
    /// Evicts the oldest records if needed and discards any redo chain.
    /// Fails only with `RecordTooLarge`, in which case nothing changes.
    pub fn push(&mut self, payload: &[u8], tag: Tag) -> Result<RecordMut<'_>> {
        let handle = self.allocate(payload.len(), tag)?;
        let mut record = self.record_mut_at(handle);
        record.payload_mut().copy_from_slice(payload);
        Ok(record)
    }

    /// Push an entry of `length` bytes and return the span to fill in place
    ///
    /// The span is zeroed unless `Config::zero_reserved` is off, in which
    /// case it holds whatever bytes were there before.
    pub fn reserve(&mut self, length: usize, tag: Tag) -> Result<RecordMut<'_>> {
        let handle = self.allocate(length, tag)?;
        let zero = self.zero_reserved;
        let mut record = self.record_mut_at(handle);
        if zero {
            record.payload_mut().fill(0);
        }
        Ok(record)
    }

    /// Find room for a record, write its header and make it current
    ///
    /// Steps:
    /// 1. Reject records that can never fit
    /// 2. Drop the redo chain after the cursor
    /// 3. Start right after the cursor's payload
    /// 4. Evict oldest records / wrap to offset 0 until the range is free
    /// 5. Write the header and link it behind the old cursor
    fn allocate(&mut self, length: usize, tag: Tag) -> Result<RecordHandle> {
        let capacity = self.capacity();
        let size = length.saturating_add(HEADER_SIZE);

        // Step 1: The record plus its header must be strictly smaller than the arena
        if size >= capacity {
            warn!(requested = size, capacity, "rejecting oversize record");
            self.stats.rejected += 1;
            return Err(RingError::RecordTooLarge {
                requested: size,
                capacity,
            });
        }

        // Step 2: Pushing after undo cancels pending redo
        let prev = self.current;
        if let Some(current) = prev {
            self.truncate_after(current);
        }

        // Step 3: Candidate offset sits right after the cursor's payload
        let mut candidate = match prev {
            Some(offset) => offset as usize + self.arena.header(offset).record_size(),
            None => 0,
        };

        // Step 4: Live records occupy [oldest, candidate) circularly; the
        // free range is either [candidate, oldest) or [candidate, capacity)
        loop {
            match self.oldest {
                None => {
                    if candidate + size > capacity {
                        candidate = self.wrap(candidate);
                    }
                    break;
                }
                Some(oldest) if oldest as usize >= candidate => {
                    if candidate + size <= oldest as usize {
                        break;
                    }
                    self.evict_oldest();
                }
                Some(_) => {
                    if candidate + size <= capacity {
                        break;
                    }
                    candidate = self.wrap(candidate);
                }
            }
        }

        // Step 5: Link behind the old cursor if eviction did not consume it
        let offset = candidate as u32;
        let prev = prev.filter(|_| self.oldest.is_some());
        let generation = self.next_generation;
        self.next_generation += 1;

        let header = RecordHeader::new(tag, length as u32, prev, generation);
        self.arena.write_header(offset, &header);

        if let Some(prev) = prev {
            self.arena.update_header(prev, |h| h.next = offset);
        } else {
            self.oldest = Some(offset);
        }

        self.current = Some(offset);
        self.newest = Some(offset);
        self.live_records += 1;
        self.bytes_used += size;
        self.stats.pushes += 1;

        trace!(offset, length, tag, generation, "pushed record");

        Ok(RecordHandle { offset, generation })
    }

    fn wrap(&mut self, from: usize) -> usize {
        debug!(from, "wrapping to arena start");
        self.stats.wraps += 1;
        0
    }

    /// Evict the oldest record and sever the new oldest's back-link
    fn evict_oldest(&mut self) {
        let Some(oldest) = self.oldest else {
            return;
        };

        let header = self.arena.header(oldest);
        self.live_records -= 1;
        self.bytes_used -= header.record_size();
        self.stats.evictions += 1;

        debug!(
            offset = oldest,
            tag = header.tag,
            generation = header.generation,
            "evicting oldest record"
        );

        match header.next() {
            Some(next) => {
                self.arena.update_header(next, |h| h.prev = NIL);
                self.oldest = Some(next);
            }
            None => {
                // Evicted the newest record too; history is empty
                self.oldest = None;
                self.newest = None;
                self.current = None;
            }
        }
    }

    /// Drop every record reachable forward from `offset`
    ///
    /// Dropped records get DEAD_GENERATION so their handles stop resolving.
    fn truncate_after(&mut self, offset: u32) {
        let Some(mut cursor) = self.arena.header(offset).next() else {
            return;
        };
        self.arena.update_header(offset, |h| h.next = NIL);

        let mut dropped = 0usize;
        loop {
            let header = self.arena.header(cursor);
            self.arena.update_header(cursor, |h| h.generation = DEAD_GENERATION);
            self.live_records -= 1;
            self.bytes_used -= header.record_size();
            dropped += 1;

            match header.next() {
                Some(next) => cursor = next,
                None => break,
            }
        }

        self.newest = Some(offset);
        self.stats.truncated += dropped as u64;

        debug!(offset, dropped, "discarded redo chain");
    }

    fn record_mut_at(&mut self, handle: RecordHandle) -> RecordMut<'_> {
        let header = self.arena.header(handle.offset);
        let payload = self.arena.payload_mut(handle.offset, header.length);
        RecordMut::new(handle, header.tag, payload)
    }
}
