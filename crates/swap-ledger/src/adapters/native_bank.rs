//! In-memory native-value bank.

use crate::domain::{Address, NativeError, U256};
use crate::ports::outbound::NativeBank;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// Account balances of the host ledger's native coin.
pub struct InMemoryNativeBank {
    balances: RwLock<HashMap<Address, U256>>,
}

impl InMemoryNativeBank {
    /// Create an empty bank.
    pub fn new() -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
        }
    }

    /// Seed balances for testing.
    pub fn with_balances(balances: &[(Address, U256)]) -> Self {
        let bank = Self::new();
        bank.balances.write().extend(balances.iter().copied());
        bank
    }

    /// Credit `amount` out of thin air.
    pub fn fund(&self, account: &Address, amount: U256) -> Result<(), NativeError> {
        let mut balances = self.balances.write();
        let entry = balances.entry(*account).or_insert_with(U256::zero);
        *entry = entry.checked_add(amount).ok_or(NativeError::Overflow)?;
        Ok(())
    }
}

impl Default for InMemoryNativeBank {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeBank for InMemoryNativeBank {
    fn balance_of(&self, account: &Address) -> U256 {
        self.balances
            .read()
            .get(account)
            .copied()
            .unwrap_or_default()
    }

    fn transfer(&self, from: &Address, to: &Address, amount: U256) -> Result<(), NativeError> {
        let mut balances = self.balances.write();
        let available = balances.get(from).copied().unwrap_or_default();
        if available < amount {
            return Err(NativeError::InsufficientFunds {
                account: *from,
                available,
                required: amount,
            });
        }
        if from == to {
            return Ok(());
        }
        let credited = balances
            .get(to)
            .copied()
            .unwrap_or_default()
            .checked_add(amount)
            .ok_or(NativeError::Overflow)?;
        balances.insert(*from, available - amount);
        balances.insert(*to, credited);

        debug!(from = %from, to = %to, amount = %amount, "native transfer");
        Ok(())
    }
}
