//! # Domain Entities
//!
//! The swap record and the inputs that create and drive it.

use super::errors::SwapError;
use crate::algorithms::expiry;
use super::value_objects::{Address, HashLock, Secret, SwapId, SwapStatus, U256};
use serde::{Deserialize, Serialize};

/// Who is calling and what value rides along with the call.
///
/// `value` is the native coin attached to the transaction; it is only
/// meaningful for `initiate` against a native escrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallContext {
    /// Transaction sender.
    pub caller: Address,
    /// Native value attached to the call.
    pub value: U256,
}

impl CallContext {
    /// A call carrying no value.
    pub fn new(caller: Address) -> Self {
        Self {
            caller,
            value: U256::zero(),
        }
    }

    /// A call carrying `value` native units.
    pub fn with_value(caller: Address, value: U256) -> Self {
        Self { caller, value }
    }
}

/// Arguments to `initiate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiateParams {
    /// `SHA256(secret ‖ timestamp)`, computed off-chain by the initiator.
    pub hash_lock: HashLock,
    /// Unix seconds bound into the hash-lock.
    pub timestamp: u64,
    /// Seconds or blocks, depending on the ledger's expiry policy.
    pub timelock: u64,
    /// Receives the funds on claim.
    pub recipient: Address,
    /// Sender of the other leg on the counterpart ledger.
    pub counterpart_sender: Address,
    /// Recipient of the other leg on the counterpart ledger.
    pub counterpart_recipient: Address,
    /// Amount escrowed here.
    pub amount_out: U256,
    /// Amount expected on the counterpart ledger. Not enforced.
    pub amount_in: U256,
}

/// One swap, keyed by its identifier. Never deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRecord {
    /// Registry key.
    pub swap_id: SwapId,
    /// Commitment the secret must open.
    pub hash_lock: HashLock,
    /// Revealed preimage (only set after claim).
    pub secret: Option<Secret>,
    /// Initiating caller; receives refunds.
    pub sender: Address,
    /// Receives the funds on claim.
    pub recipient: Address,
    /// Counterpart-ledger sender, for off-chain correlation.
    pub counterpart_sender: Address,
    /// Counterpart-ledger recipient, for off-chain correlation.
    pub counterpart_recipient: Address,
    /// Amount held in escrow.
    pub amount_out: U256,
    /// Amount expected on the counterpart ledger.
    pub amount_in: U256,
    /// Caller-supplied timestamp bound into the hash-lock.
    pub timestamp: u64,
    /// Ledger clock reading (seconds or height) at creation.
    pub open_point: u64,
    /// `open_point + timelock`.
    pub expiry: u64,
    /// Current status.
    pub status: SwapStatus,
    /// Creation order, starting at zero.
    pub index: u64,
}

impl SwapRecord {
    /// Build an Open record from validated inputs.
    pub fn open(
        swap_id: SwapId,
        sender: Address,
        params: &InitiateParams,
        open_point: u64,
        expiry: u64,
        index: u64,
    ) -> Self {
        Self {
            swap_id,
            hash_lock: params.hash_lock,
            secret: None,
            sender,
            recipient: params.recipient,
            counterpart_sender: params.counterpart_sender,
            counterpart_recipient: params.counterpart_recipient,
            amount_out: params.amount_out,
            amount_in: params.amount_in,
            timestamp: params.timestamp,
            open_point,
            expiry,
            status: SwapStatus::Open,
            index,
        }
    }

    /// Expiry is reached at `now == expiry`.
    pub fn is_expired(&self, now: u64) -> bool {
        expiry::is_expired(now, self.expiry)
    }

    /// Open and strictly before expiry.
    pub fn is_claimable(&self, now: u64) -> bool {
        self.status == SwapStatus::Open && !self.is_expired(now)
    }

    /// Open and at or after expiry.
    pub fn is_refundable(&self, now: u64) -> bool {
        self.status == SwapStatus::Open && self.is_expired(now)
    }

    /// Guard for the claim path.
    pub fn ensure_claimable(&self, now: u64) -> Result<(), SwapError> {
        if !self.is_claimable(now) {
            return Err(SwapError::NotClaimable {
                status: self.status,
                expired: self.is_expired(now),
            });
        }
        Ok(())
    }

    /// Guard for the refund path.
    pub fn ensure_refundable(&self, now: u64) -> Result<(), SwapError> {
        if !self.is_refundable(now) {
            return Err(SwapError::NotRefundable {
                status: self.status,
                expired: self.is_expired(now),
            });
        }
        Ok(())
    }

    /// Record the secret and move to Completed.
    ///
    /// The caller must have verified the secret against the hash-lock.
    pub fn complete(&mut self, secret: Secret, now: u64) -> Result<(), SwapError> {
        self.ensure_claimable(now)?;
        debug_assert!(self.status.can_transition_to(SwapStatus::Completed));
        self.secret = Some(secret);
        self.status = SwapStatus::Completed;
        Ok(())
    }

    /// Move to Expired.
    pub fn expire(&mut self, now: u64) -> Result<(), SwapError> {
        self.ensure_refundable(now)?;
        debug_assert!(self.status.can_transition_to(SwapStatus::Expired));
        self.status = SwapStatus::Expired;
        Ok(())
    }
}
