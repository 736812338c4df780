//! # Outbound Ports
//!
//! Traits for the collaborators the ledger calls: the host chain's clock and
//! native-value bank, an external token ledger, the escrow strategy and the
//! event sink.

use crate::domain::{Address, AssetKind, EscrowError, NativeError, SwapError, TokenError, U256};
use crate::events::SwapEvent;

/// Host chain clock - outbound port.
pub trait ChainClock: Send + Sync {
    /// Timestamp of the block being executed (Unix seconds).
    fn block_timestamp(&self) -> u64;

    /// Height of the block being executed.
    fn block_height(&self) -> u64;
}

/// Fungible token ledger - outbound port.
///
/// `caller` plays the role of the transaction sender on the token ledger.
pub trait TokenLedger: Send + Sync {
    /// Token balance of `owner`.
    fn balance_of(&self, owner: &Address) -> U256;

    /// Amount `spender` may still pull from `owner`.
    fn allowance(&self, owner: &Address, spender: &Address) -> U256;

    /// Move `amount` from `caller` to `to`.
    fn transfer(&self, caller: &Address, to: &Address, amount: U256) -> Result<bool, TokenError>;

    /// Let `spender` pull up to `amount` from `caller`.
    fn approve(&self, caller: &Address, spender: &Address, amount: U256)
        -> Result<bool, TokenError>;

    /// Move `amount` from `from` to `to`, spending `caller`'s allowance.
    fn transfer_from(
        &self,
        caller: &Address,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<bool, TokenError>;
}

/// Native-value bank of the host chain - outbound port.
pub trait NativeBank: Send + Sync {
    /// Native balance of `account`.
    fn balance_of(&self, account: &Address) -> U256;

    /// Direct value transfer.
    fn transfer(&self, from: &Address, to: &Address, amount: U256) -> Result<(), NativeError>;
}

/// Asset custody strategy - outbound port.
///
/// The ledger calls `intake` once per `initiate` and `release` once per
/// terminal transition. Implementations must be all-or-nothing.
pub trait Escrow: Send + Sync {
    /// Asset this escrow holds.
    fn asset(&self) -> AssetKind;

    /// Account the escrow holds funds under.
    fn account(&self) -> Address;

    /// Take custody of `amount` from `from`.
    ///
    /// `attached` is the native value that accompanied the call.
    fn intake(&self, from: &Address, amount: U256, attached: U256) -> Result<(), SwapError>;

    /// Pay `amount` out of custody to `to`.
    fn release(&self, to: &Address, amount: U256) -> Result<(), EscrowError>;

    /// Total amount currently in custody.
    fn custody(&self) -> U256;
}

/// Destination for swap lifecycle events - outbound port.
pub trait EventSink: Send + Sync {
    /// Publish one event. Must not fail.
    fn emit(&self, event: &SwapEvent);
}
