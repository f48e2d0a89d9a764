//! Pagination utilities for service layer
//!
//! Offset/limit window over the store's ordering; no cursors.

pub const DEFAULT_LIMIT: u64 = 100;
pub const MAX_LIMIT: u64 = 1000;
/// SQLite binds OFFSET as a signed 64-bit integer.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// rows to skip
    pub offset: u64,
    /// rows to return
    pub limit: u64,
}

impl Pagination {
    pub fn new(offset: Option<u64>, limit: Option<u64>) -> Self {
        Self { offset: offset.unwrap_or(0), limit: limit.unwrap_or(DEFAULT_LIMIT) }
    }

    /// Clamp the limit to `1..=MAX_LIMIT` and the offset to `MAX_OFFSET`
    pub fn normalize(self) -> (u64, u64) {
        (self.offset.min(MAX_OFFSET), self.limit.clamp(1, MAX_LIMIT))
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { offset: 0, limit: DEFAULT_LIMIT } }
}
