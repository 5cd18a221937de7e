//! Ring statistics

/// Counters since construction, plus occupancy at the time of the snapshot
///
/// `reset()` clears occupancy but keeps the cumulative counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RingStats {
    /// Successful pushes (including `reserve`)
    pub pushes: u64,

    /// Records evicted from the oldest end to make room
    pub evictions: u64,

    /// Records dropped from the redo chain by a push after undo
    pub truncated: u64,

    /// Times a placement wrapped back to offset 0
    pub wraps: u64,

    /// Pushes rejected with `RecordTooLarge`
    pub rejected: u64,

    /// Calls to `reset`
    pub resets: u64,

    /// Live records at snapshot time
    pub live_records: usize,

    /// Bytes held by live records (headers + payloads)
    pub bytes_used: usize,

    /// Arena capacity
    pub capacity: usize,
}

impl RingStats {
    /// Fraction of the arena held by live records
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.bytes_used as f64 / self.capacity as f64
    }
}
