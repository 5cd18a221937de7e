//! Handle re-validation.
//!
//! A handle is live when its generation lies in the live window
//! [oldest, newest] and the chain holds a record with that generation at
//! the handle's offset.
//!
//! The chain is walked backward from the newest record using real headers
//! only. Generations strictly decrease along that walk, so it stops at the
//! first record not newer than the handle. Bytes at the handle's offset
//! are never trusted on their own: after a redo truncation that space may
//! hold another record's payload.
//!
//! Evicted records fall below the window. Records dropped from the redo
//! chain and overwritten records are no longer on the chain. Both come
//! back as `StaleRecord`.

use crate::error::{Result, RingError};
use crate::record::{Record, RecordHandle, RecordHeader, RecordMut, DEAD_GENERATION};

use super::navigation::record_at;
use super::UndoRing;

impl UndoRing {
    /// Read the record behind a handle obtained from an earlier call
    pub fn resolve(&self, handle: RecordHandle) -> Result<Record<'_>> {
        self.validate(handle)?;
        Ok(record_at(&self.arena, handle.offset))
    }

    /// Patch the payload of the record behind a handle in place
    ///
    /// Does not move the cursor or change the chain.
    pub fn resolve_mut(&mut self, handle: RecordHandle) -> Result<RecordMut<'_>> {
        let header = self.validate(handle)?;
        let payload = self.arena.payload_mut(handle.offset, header.length);
        Ok(RecordMut::new(handle, header.tag, payload))
    }

    /// Whether a handle still names a live record
    pub fn is_live(&self, handle: RecordHandle) -> bool {
        self.validate(handle).is_ok()
    }

    fn validate(&self, handle: RecordHandle) -> Result<RecordHeader> {
        let stale = || RingError::StaleRecord {
            offset: handle.offset,
            generation: handle.generation,
        };

        let (Some(oldest), Some(newest)) = (self.oldest, self.newest) else {
            return Err(stale());
        };

        let window = self.arena.header(oldest).generation..=self.arena.header(newest).generation;
        if handle.generation == DEAD_GENERATION || !window.contains(&handle.generation) {
            return Err(stale());
        }

        // Walk back from the newest record until generations drop to the handle's
        let mut cursor = Some(newest);
        while let Some(offset) = cursor {
            let header = self.arena.header(offset);
            if header.generation < handle.generation {
                break;
            }
            if header.generation == handle.generation {
                return if offset == handle.offset {
                    Ok(header)
                } else {
                    Err(stale())
                };
            }
            cursor = header.prev();
        }

        Err(stale())
    }
}
