//! # llring
//!
//! A linked-list ring buffer: a fixed-capacity undo/redo history for
//! variable-size snapshots.
//! - One byte arena, allocated once, never grown
//! - Records placed back to back, wrapping to the start when the tail is short
//! - Oldest records evicted first when space runs out
//! - Doubly linked chronological chain for O(1) undo/redo
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        UndoRing                              │
//! │        push / reserve        undo / redo / current           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │  Placement  │          │    Cursor    │
//!   │ + Eviction  │          │ (prev/next)  │
//!   └──────┬──────┘          └──────┬───────┘
//!          │                        │
//!          └───────────┬────────────┘
//!                      ▼
//!              ┌───────────────┐
//!              │     Arena     │
//!              │ [hdr|payload] │
//!              └───────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use llring::UndoRing;
//!
//! let mut ring = UndoRing::with_capacity(64)?;
//! ring.push(b"AAAA", 1)?;
//! ring.push(b"BB", 2)?;
//!
//! let prev = ring.undo().expect("one step back");
//! assert_eq!((prev.payload(), prev.tag()), (&b"AAAA"[..], 1));
//!
//! let next = ring.redo().expect("one step forward");
//! assert_eq!((next.payload(), next.tag()), (&b"BB"[..], 2));
//! # Ok::<(), llring::RingError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod arena;
pub mod record;
pub mod ring;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RingError, Result};
pub use config::Config;
pub use record::{Record, RecordHandle, RecordMut, Tag, HEADER_SIZE};
pub use ring::{ChainReport, History, RingStats, UndoRing};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of llring
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
