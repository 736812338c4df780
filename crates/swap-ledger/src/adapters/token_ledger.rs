//! In-memory fungible token ledger with allowance semantics.

use crate::domain::{Address, TokenError, U256};
use crate::ports::outbound::TokenLedger;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

#[derive(Default)]
struct TokenState {
    balances: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
    total_supply: U256,
}

/// Standard approve / transfer-from token, held in memory.
///
/// A transfer whose source and destination coincide moves nothing, yet
/// `transfer_from` still spends the allowance, as ERC20 tokens do.
pub struct InMemoryTokenLedger {
    address: Address,
    state: RwLock<TokenState>,
}

impl InMemoryTokenLedger {
    /// Create an empty token living at `address`.
    pub fn new(address: Address) -> Self {
        Self {
            address,
            state: RwLock::new(TokenState::default()),
        }
    }

    /// Contract address of this token.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Total minted supply.
    pub fn total_supply(&self) -> U256 {
        self.state.read().total_supply
    }

    /// Create `amount` new tokens owned by `to`.
    pub fn mint(&self, to: &Address, amount: U256) -> Result<(), TokenError> {
        let mut state = self.state.write();
        let supply = state
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        let balance = state.balances.entry(*to).or_insert_with(U256::zero);
        *balance = balance.checked_add(amount).ok_or(TokenError::Overflow)?;
        state.total_supply = supply;
        Ok(())
    }
}

impl TokenState {
    fn balance(&self, owner: &Address) -> U256 {
        self.balances.get(owner).copied().unwrap_or_default()
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// Debit and credit together, or neither.
    fn move_tokens(&mut self, from: &Address, to: &Address, amount: U256) -> Result<(), TokenError> {
        let available = self.balance(from);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                owner: *from,
                available,
                required: amount,
            });
        }
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance(to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        self.balances.insert(*from, available - amount);
        self.balances.insert(*to, credited);
        Ok(())
    }
}

impl TokenLedger for InMemoryTokenLedger {
    fn balance_of(&self, owner: &Address) -> U256 {
        self.state.read().balance(owner)
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.state.read().allowance(owner, spender)
    }

    fn transfer(&self, caller: &Address, to: &Address, amount: U256) -> Result<bool, TokenError> {
        self.state.write().move_tokens(caller, to, amount)?;
        debug!(token = %self.address, from = %caller, to = %to, amount = %amount, "token transfer");
        Ok(true)
    }

    fn approve(
        &self,
        caller: &Address,
        spender: &Address,
        amount: U256,
    ) -> Result<bool, TokenError> {
        self.state
            .write()
            .allowances
            .insert((*caller, *spender), amount);
        debug!(token = %self.address, owner = %caller, spender = %spender, amount = %amount, "token approve");
        Ok(true)
    }

    fn transfer_from(
        &self,
        caller: &Address,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<bool, TokenError> {
        let mut state = self.state.write();
        let allowed = state.allowance(from, caller);
        if allowed < amount {
            return Err(TokenError::InsufficientAllowance {
                owner: *from,
                spender: *caller,
                available: allowed,
                required: amount,
            });
        }
        state.move_tokens(from, to, amount)?;
        state.allowances.insert((*from, *caller), allowed - amount);
        debug!(token = %self.address, spender = %caller, from = %from, to = %to, amount = %amount, "token transfer_from");
        Ok(true)
    }
}
