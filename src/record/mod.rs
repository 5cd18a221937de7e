//! Record Module
//!
//! Layout of a single history entry inside the arena and the views handed
//! back to callers.
//!
//! ## Arena Layout
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ Record                                                     │
//! │ ┌─────────┬─────────┬──────────┬──────────┬──────────────┐ │
//! │ │ Tag (4) │ Len (4) │ Prev (4) │ Next (4) │ Generation(8)│ │
//! │ └─────────┴─────────┴──────────┴──────────┴──────────────┘ │
//! │ ┌────────────────────────────────────────────────────────┐ │
//! │ │ Payload (Len bytes)                                    │ │
//! │ └────────────────────────────────────────────────────────┘ │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prev/Next are arena offsets of the chronological neighbours, which need
//! not be physical neighbours once the ring has wrapped.

mod header;

pub use header::{RecordHeader, HEADER_SIZE};
pub(crate) use header::{DEAD_GENERATION, NIL};

/// Opaque caller annotation stored with every record
pub type Tag = i32;

/// Detached reference to a record
///
/// Unlike [`Record`], a handle does not borrow the ring, so it can be kept
/// across pushes. It must be re-validated with `UndoRing::resolve` before
/// the record behind it can be read again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordHandle {
    /// Arena offset of the record header
    pub offset: u32,
    /// Generation the record was written with
    pub generation: u64,
}

/// Read-only view of a live record
///
/// Borrows the ring: it cannot outlive the next push, undo or redo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    handle: RecordHandle,
    tag: Tag,
    payload: &'a [u8],
}

impl<'a> Record<'a> {
    pub(crate) fn new(handle: RecordHandle, tag: Tag, payload: &'a [u8]) -> Self {
        Self { handle, tag, payload }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    pub fn handle(&self) -> RecordHandle {
        self.handle
    }
}

/// Writable view of a freshly pushed record
///
/// Returned by `push` and `reserve`; lets the caller fill or patch the
/// payload in place.
#[derive(Debug, PartialEq, Eq)]
pub struct RecordMut<'a> {
    handle: RecordHandle,
    tag: Tag,
    payload: &'a mut [u8],
}

impl<'a> RecordMut<'a> {
    pub(crate) fn new(handle: RecordHandle, tag: Tag, payload: &'a mut [u8]) -> Self {
        Self { handle, tag, payload }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn payload(&self) -> &[u8] {
        self.payload
    }

    pub fn payload_mut(&mut self) -> &mut [u8] {
        self.payload
    }

    /// Consume the view, keeping the mutable payload borrow
    pub fn into_payload(self) -> &'a mut [u8] {
        self.payload
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    pub fn handle(&self) -> RecordHandle {
        self.handle
    }
}
