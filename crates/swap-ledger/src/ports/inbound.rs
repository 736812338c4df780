//! # Inbound Ports
//!
//! API trait defining what the swap ledger can do.

use crate::domain::{
    Address, CallContext, HashLock, InitiateParams, Secret, SwapError, SwapId, SwapRecord,
    SwapStatus, U256,
};

/// Swap ledger API - inbound port.
///
/// Mutating calls are permissionless: `claim` and `refund` never check who
/// the caller is.
pub trait SwapLedgerApi: Send + Sync {
    /// Lock `amount_out` under a hash-lock and open a new swap.
    fn initiate(&self, ctx: CallContext, params: InitiateParams) -> Result<SwapId, SwapError>;

    /// Reveal the secret and pay the recipient.
    fn claim(&self, ctx: CallContext, swap_id: SwapId, secret: Secret) -> Result<(), SwapError>;

    /// Return an expired swap's funds to its sender.
    fn refund(&self, ctx: CallContext, swap_id: SwapId) -> Result<(), SwapError>;

    /// Whether a record exists.
    fn exists(&self, swap_id: &SwapId) -> bool;

    /// Whether `initiate` may still create this identifier.
    fn initializable(&self, swap_id: &SwapId) -> bool {
        !self.exists(swap_id)
    }

    /// Open and before expiry.
    fn claimable(&self, swap_id: &SwapId) -> bool;

    /// Open and at or after expiry.
    fn refundable(&self, swap_id: &SwapId) -> bool;

    /// Stored status, or None if no record exists.
    fn status(&self, swap_id: &SwapId) -> Option<SwapStatus>;

    /// Full record lookup.
    fn query_swap(&self, swap_id: &SwapId) -> Option<SwapRecord>;

    /// Record at creation position `index`.
    fn swap_by_index(&self, index: u64) -> Option<SwapRecord>;

    /// Number of swaps ever created.
    fn swap_count(&self) -> u64;

    /// Amount currently held by the escrow.
    fn custody_balance(&self) -> U256;

    /// Hash-lock for `(secret, timestamp)`.
    fn calc_hash_lock(&self, secret: &Secret, timestamp: u64) -> HashLock;

    /// Identifier this deployment assigns to the given inputs.
    fn calc_swap_id(
        &self,
        hash_lock: &HashLock,
        sender: &Address,
        recipient: &Address,
        counterpart_sender: &Address,
    ) -> SwapId;
}
