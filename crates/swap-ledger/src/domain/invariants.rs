//! # Domain Invariants
//!
//! Business rules every swap record must satisfy.

use super::entities::SwapRecord;
use super::errors::SwapError;
use super::value_objects::SwapStatus;
use crate::algorithms::derivation::calc_hash_lock;

/// Default timelock floor (seconds or blocks).
pub const DEFAULT_MIN_TIMELOCK: u64 = 100;

/// Default timelock ceiling (seconds or blocks).
pub const DEFAULT_MAX_TIMELOCK: u64 = 518_400;

/// Invariant: timelock inside the configured window.
///
/// Zero is always rejected, even with a zero floor.
pub fn invariant_timelock_window(timelock: u64, min: u64, max: u64) -> Result<(), SwapError> {
    if timelock == 0 || timelock < min || timelock > max {
        return Err(SwapError::InvalidTimelock { timelock, min, max });
    }
    Ok(())
}

/// Invariant: secret is present iff Completed, and then opens the hash-lock.
pub fn invariant_secret_matches(record: &SwapRecord) -> bool {
    match (record.status, record.secret) {
        (SwapStatus::Completed, Some(secret)) => {
            calc_hash_lock(&secret, record.timestamp) == record.hash_lock
        }
        (SwapStatus::Completed, None) => false,
        (_, Some(_)) => false,
        (_, None) => true,
    }
}

/// Invariant: claim and refund windows never overlap.
pub fn invariant_windows_disjoint(record: &SwapRecord, now: u64) -> bool {
    !(record.is_claimable(now) && record.is_refundable(now))
}

/// Invariant: expiry lies strictly after the open point.
pub fn invariant_expiry_after_open(record: &SwapRecord) -> bool {
    record.expiry > record.open_point
}
