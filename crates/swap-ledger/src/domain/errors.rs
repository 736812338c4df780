//! # Domain Errors
//!
//! Error types for the swap ledger and the collaborators it calls.

use super::value_objects::{Address, SwapId, SwapStatus, U256};
use thiserror::Error;

/// Swap ledger error types.
///
/// Every variant aborts the call with no state change and no fund movement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    /// A record already exists for the derived identifier.
    #[error("Swap already exists: {0}")]
    AlreadyExists(SwapId),

    /// Timelock outside the configured window, or expiry would overflow.
    #[error("Invalid timelock {timelock}: must be within [{min}, {max}]")]
    InvalidTimelock {
        /// Requested timelock
        timelock: u64,
        /// Configured floor
        min: u64,
        /// Configured ceiling
        max: u64,
    },

    /// Escrowed amount must be positive.
    #[error("Invalid amount: amount_out must be greater than zero")]
    InvalidAmount,

    /// Value attached to the call does not match what the escrow expects.
    #[error("Amount mismatch: expected {expected}, attached {attached}")]
    AmountMismatch {
        /// Value the escrow requires
        expected: U256,
        /// Value actually attached
        attached: U256,
    },

    /// The escrow could not take custody of the funds.
    #[error("Escrow intake failed: {0}")]
    EscrowIntakeFailed(EscrowError),

    /// No record for this identifier.
    #[error("Swap not found: {0}")]
    NotFound(SwapId),

    /// Swap is not Open, or its claim window has closed.
    #[error("Swap not claimable: status={status}, expired={expired}")]
    NotClaimable {
        /// Stored status
        status: SwapStatus,
        /// Whether now has reached expiry
        expired: bool,
    },

    /// Secret does not hash to the stored hash-lock.
    #[error("Bad secret: does not match hash lock")]
    BadSecret,

    /// Swap is not Open, or its refund window has not opened.
    #[error("Swap not refundable: status={status}, expired={expired}")]
    NotRefundable {
        /// Stored status
        status: SwapStatus,
        /// Whether now has reached expiry
        expired: bool,
    },

    /// The escrow could not pay out; the record is left untouched.
    #[error("Escrow release failed: {0}")]
    EscrowReleaseFailed(EscrowError),
}

/// Escrow custody errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscrowError {
    /// External token ledger refused the movement.
    #[error("token ledger: {0}")]
    Token(#[from] TokenError),

    /// Host native-value bank refused the movement.
    #[error("native bank: {0}")]
    Native(#[from] NativeError),

    /// Escrow holds less than it was asked to release.
    #[error("insufficient custody: held {held}, requested {requested}")]
    InsufficientCustody {
        /// Amount in custody
        held: U256,
        /// Amount requested
        requested: U256,
    },

    /// The escrow account cannot fund a swap out of its own custody.
    #[error("escrow account {0} cannot deposit into itself")]
    SelfDeposit(Address),
}

/// Failures reported by a fungible token ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Owner balance too low.
    #[error("insufficient balance for {owner}: have {available}, need {required}")]
    InsufficientBalance {
        /// Account being debited
        owner: Address,
        /// Current balance
        available: U256,
        /// Amount requested
        required: U256,
    },

    /// Spender allowance too low.
    #[error("insufficient allowance for {spender} on {owner}: have {available}, need {required}")]
    InsufficientAllowance {
        /// Account whose tokens are spent
        owner: Address,
        /// Account spending them
        spender: Address,
        /// Current allowance
        available: U256,
        /// Amount requested
        required: U256,
    },

    /// Credit would overflow 256 bits.
    #[error("balance overflow")]
    Overflow,

    /// Ledger returned `false` without a reason.
    #[error("transfer rejected by token ledger")]
    Rejected,
}

/// Failures reported by the host ledger's native-value bank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NativeError {
    /// Payer balance too low.
    #[error("insufficient funds for {account}: have {available}, need {required}")]
    InsufficientFunds {
        /// Account being debited
        account: Address,
        /// Current balance
        available: U256,
        /// Amount requested
        required: U256,
    },

    /// Credit would overflow 256 bits.
    #[error("balance overflow")]
    Overflow,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable or field could not be parsed.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Variable or field name
        key: String,
        /// Parser message
        reason: String,
    },

    /// The timelock window is empty or starts at zero.
    #[error("Invalid timelock window: min={min}, max={max}")]
    InvalidTimelockWindow {
        /// Configured floor
        min: u64,
        /// Configured ceiling
        max: u64,
    },

    /// JSON document could not be decoded.
    #[error("Malformed config: {0}")]
    Malformed(String),
}
