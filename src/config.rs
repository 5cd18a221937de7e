//! Configuration for llring
//!
//! Centralized configuration with sensible defaults.

use crate::error::{Result, RingError};
use crate::record::HEADER_SIZE;

/// Largest arena the ring can address (links are `u32` offsets)
pub const MAX_CAPACITY: usize = u32::MAX as usize;

/// Main configuration for an UndoRing instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Arena Configuration
    // -------------------------------------------------------------------------
    /// Total arena size in bytes (headers + payloads), fixed for the
    /// lifetime of the ring
    pub capacity: usize,

    // -------------------------------------------------------------------------
    // Push Configuration
    // -------------------------------------------------------------------------
    /// Zero-fill spans handed out by `reserve` instead of exposing the
    /// bytes of whatever record used that space before
    pub zero_reserved: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 64 * 1024, // 64 KB
            zero_reserved: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the arena can hold at least one header plus a byte and
    /// that every offset fits in a link
    pub fn validate(&self) -> Result<()> {
        if self.capacity <= HEADER_SIZE {
            return Err(RingError::Config(format!(
                "capacity {} must exceed the {}-byte record header",
                self.capacity, HEADER_SIZE
            )));
        }

        if self.capacity > MAX_CAPACITY {
            return Err(RingError::Config(format!(
                "capacity {} exceeds maximum {}",
                self.capacity, MAX_CAPACITY
            )));
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the arena capacity (in bytes)
    pub fn capacity(mut self, bytes: usize) -> Self {
        self.config.capacity = bytes;
        self
    }

    /// Set whether reserved spans are zero-filled
    pub fn zero_reserved(mut self, enabled: bool) -> Self {
        self.config.zero_reserved = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
