//! Error types for llring
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RingError
pub type Result<T> = std::result::Result<T, RingError>;

/// Unified error type for llring operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RingError {
    // -------------------------------------------------------------------------
    // Push Errors
    // -------------------------------------------------------------------------
    /// Record (header + payload) can never fit in the arena
    #[error("Record too large: {requested} bytes including header (capacity {capacity})")]
    RecordTooLarge { requested: usize, capacity: usize },

    // -------------------------------------------------------------------------
    // Handle Errors
    // -------------------------------------------------------------------------
    /// Handle names a record that was evicted, truncated or overwritten
    #[error("Stale record handle: offset {offset}, generation {generation}")]
    StaleRecord { offset: u32, generation: u64 },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Integrity Errors
    // -------------------------------------------------------------------------
    #[error("Record chain corrupted: {0}")]
    Corrupted(String),
}
