//! Cursor navigation over the chronological chain.
//!
//! Undo and redo are pure cursor moves: they never touch arena bytes.

use std::iter::FusedIterator;

use tracing::trace;

use crate::arena::Arena;
use crate::record::{Record, RecordHandle};

use super::UndoRing;

impl UndoRing {
    /// Step back to the previous record
    ///
    /// Returns None (and stays put) when already at the oldest surviving
    /// record or when the history is empty.
    pub fn undo(&mut self) -> Option<Record<'_>> {
        let current = self.current?;
        let prev = self.arena.header(current).prev()?;
        self.current = Some(prev);

        trace!(from = current, to = prev, "undo");
        Some(record_at(&self.arena, prev))
    }

    /// Step forward to the next record
    ///
    /// Returns None (and stays put) when already at the newest record or
    /// when the history is empty.
    pub fn redo(&mut self) -> Option<Record<'_>> {
        let current = self.current?;
        let next = self.arena.header(current).next()?;
        self.current = Some(next);

        trace!(from = current, to = next, "redo");
        Some(record_at(&self.arena, next))
    }

    /// The record under the cursor
    pub fn current(&self) -> Option<Record<'_>> {
        self.current.map(|offset| record_at(&self.arena, offset))
    }

    /// Walk the live chain from the oldest record to the newest
    ///
    /// Includes records only reachable by redo.
    pub fn history(&self) -> History<'_> {
        History {
            arena: &self.arena,
            next: self.oldest,
            remaining: self.live_records,
        }
    }
}

pub(super) fn record_at(arena: &Arena, offset: u32) -> Record<'_> {
    let header = arena.header(offset);
    let handle = RecordHandle {
        offset,
        generation: header.generation,
    };
    Record::new(handle, header.tag, arena.payload(offset, header.length))
}

/// Iterator over live records in push order
pub struct History<'a> {
    arena: &'a Arena,
    next: Option<u32>,
    remaining: usize,
}

impl<'a> Iterator for History<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let offset = self.next?;

        self.next = self.arena.header(offset).next();
        self.remaining -= 1;
        Some(record_at(self.arena, offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for History<'_> {}

impl FusedIterator for History<'_> {}
