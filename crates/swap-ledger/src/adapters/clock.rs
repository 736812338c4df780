//! Manually driven chain clock.

use crate::ports::outbound::ChainClock;
use parking_lot::RwLock;

/// Clock whose timestamp and height are set by the caller.
///
/// Stands in for the host chain in tests and simulations.
pub struct ManualClock {
    timestamp: RwLock<u64>,
    height: RwLock<u64>,
}

impl ManualClock {
    /// Start at the given block timestamp and height.
    pub fn new(timestamp: u64, height: u64) -> Self {
        Self {
            timestamp: RwLock::new(timestamp),
            height: RwLock::new(height),
        }
    }

    /// Set current time (for testing).
    pub fn set_time(&self, timestamp: u64) {
        *self.timestamp.write() = timestamp;
    }

    /// Move time forward by `secs`.
    pub fn advance_time(&self, secs: u64) {
        let mut ts = self.timestamp.write();
        *ts = ts.saturating_add(secs);
    }

    /// Set current block height.
    pub fn set_height(&self, height: u64) {
        *self.height.write() = height;
    }

    /// Produce `blocks` empty blocks, each `block_time` seconds apart.
    pub fn advance_blocks(&self, blocks: u64, block_time: u64) {
        let mut height = self.height.write();
        *height = height.saturating_add(blocks);
        drop(height);
        self.advance_time(blocks.saturating_mul(block_time));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(1_700_000_000, 0)
    }
}

impl ChainClock for ManualClock {
    fn block_timestamp(&self) -> u64 {
        *self.timestamp.read()
    }

    fn block_height(&self) -> u64 {
        *self.height.read()
    }
}
