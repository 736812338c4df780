//! Escrow strategies.
//!
//! [`NativeEscrow`] holds the host's native coin: the value must ride along
//! with `initiate`. [`TokenEscrow`] pulls an external token through the
//! sender's allowance. Both keep a running custody total so the ledger can
//! report what it holds without trusting the backing ledger's balance.

use crate::domain::{Address, AssetKind, EscrowError, NativeError, SwapError, TokenError, U256};
use crate::ports::outbound::{Escrow, NativeBank, TokenLedger};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Escrow over the host ledger's native coin.
pub struct NativeEscrow<B: NativeBank> {
    bank: Arc<B>,
    account: Address,
    custody: RwLock<U256>,
}

impl<B: NativeBank> NativeEscrow<B> {
    /// Hold funds under `account` on `bank`.
    pub fn new(bank: Arc<B>, account: Address) -> Self {
        Self {
            bank,
            account,
            custody: RwLock::new(U256::zero()),
        }
    }

    /// Backing bank.
    pub fn bank(&self) -> &Arc<B> {
        &self.bank
    }
}

impl<B: NativeBank> Escrow for NativeEscrow<B> {
    fn asset(&self) -> AssetKind {
        AssetKind::Native
    }

    fn account(&self) -> Address {
        self.account
    }

    fn intake(&self, from: &Address, amount: U256, attached: U256) -> Result<(), SwapError> {
        if attached != amount {
            return Err(SwapError::AmountMismatch {
                expected: amount,
                attached,
            });
        }
        if *from == self.account {
            return Err(SwapError::EscrowIntakeFailed(EscrowError::SelfDeposit(
                self.account,
            )));
        }

        let mut custody = self.custody.write();
        let held = custody
            .checked_add(amount)
            .ok_or(SwapError::EscrowIntakeFailed(NativeError::Overflow.into()))?;
        self.bank
            .transfer(from, &self.account, amount)
            .map_err(|e| SwapError::EscrowIntakeFailed(e.into()))?;
        *custody = held;

        debug!(from = %from, amount = %amount, "native escrow intake");
        Ok(())
    }

    fn release(&self, to: &Address, amount: U256) -> Result<(), EscrowError> {
        let mut custody = self.custody.write();
        if *custody < amount {
            return Err(EscrowError::InsufficientCustody {
                held: *custody,
                requested: amount,
            });
        }
        self.bank.transfer(&self.account, to, amount)?;
        *custody -= amount;

        debug!(to = %to, amount = %amount, "native escrow release");
        Ok(())
    }

    fn custody(&self) -> U256 {
        *self.custody.read()
    }
}

/// Escrow over a fungible token on an external ledger.
///
/// The escrow account is the spender: senders approve it before `initiate`.
pub struct TokenEscrow<T: TokenLedger> {
    token: Arc<T>,
    token_address: Address,
    account: Address,
    custody: RwLock<U256>,
}

impl<T: TokenLedger> TokenEscrow<T> {
    /// Hold tokens of the ledger at `token_address` under `account`.
    pub fn new(token: Arc<T>, token_address: Address, account: Address) -> Self {
        Self {
            token,
            token_address,
            account,
            custody: RwLock::new(U256::zero()),
        }
    }

    /// Backing token ledger.
    pub fn token(&self) -> &Arc<T> {
        &self.token
    }
}

fn accepted(ok: Result<bool, TokenError>) -> Result<(), TokenError> {
    match ok {
        Ok(true) => Ok(()),
        Ok(false) => Err(TokenError::Rejected),
        Err(e) => Err(e),
    }
}

impl<T: TokenLedger> Escrow for TokenEscrow<T> {
    fn asset(&self) -> AssetKind {
        AssetKind::Token(self.token_address)
    }

    fn account(&self) -> Address {
        self.account
    }

    fn intake(&self, from: &Address, amount: U256, attached: U256) -> Result<(), SwapError> {
        if !attached.is_zero() {
            return Err(SwapError::AmountMismatch {
                expected: U256::zero(),
                attached,
            });
        }
        if *from == self.account {
            return Err(SwapError::EscrowIntakeFailed(EscrowError::SelfDeposit(
                self.account,
            )));
        }

        let mut custody = self.custody.write();
        let held = custody
            .checked_add(amount)
            .ok_or(SwapError::EscrowIntakeFailed(TokenError::Overflow.into()))?;
        accepted(
            self.token
                .transfer_from(&self.account, from, &self.account, amount),
        )
        .map_err(|e| SwapError::EscrowIntakeFailed(e.into()))?;
        *custody = held;

        debug!(token = %self.token_address, from = %from, amount = %amount, "token escrow intake");
        Ok(())
    }

    fn release(&self, to: &Address, amount: U256) -> Result<(), EscrowError> {
        let mut custody = self.custody.write();
        if *custody < amount {
            return Err(EscrowError::InsufficientCustody {
                held: *custody,
                requested: amount,
            });
        }
        accepted(self.token.transfer(&self.account, to, amount))?;
        *custody -= amount;

        debug!(token = %self.token_address, to = %to, amount = %amount, "token escrow release");
        Ok(())
    }

    fn custody(&self) -> U256 {
        *self.custody.read()
    }
}
