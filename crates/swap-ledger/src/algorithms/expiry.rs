//! # Time/Height Policy
//!
//! Expiry computation for both clock flavours. The claim window is
//! `[open_point, expiry)` and the refund window is `[expiry, ∞)`.

use crate::domain::{invariant_timelock_window, ExpiryPolicy, SwapError};
use crate::ports::outbound::ChainClock;

/// Read "now" from the clock according to the policy.
pub fn current_point(policy: ExpiryPolicy, clock: &dyn ChainClock) -> u64 {
    match policy {
        ExpiryPolicy::Timestamp => clock.block_timestamp(),
        ExpiryPolicy::BlockHeight => clock.block_height(),
    }
}

/// Validate a timelock and compute the expiry it implies.
///
/// Rejects timelocks outside `[min, max]` and any expiry that would overflow.
pub fn compute_expiry(open_point: u64, timelock: u64, min: u64, max: u64) -> Result<u64, SwapError> {
    invariant_timelock_window(timelock, min, max)?;
    open_point
        .checked_add(timelock)
        .ok_or(SwapError::InvalidTimelock { timelock, min, max })
}

/// True once `now` has reached `expiry`.
pub fn is_expired(now: u64, expiry: u64) -> bool {
    now >= expiry
}
