//! # Hash-Lock and Identifier Derivation
//!
//! Pure functions shared by the ledger and by off-chain counterparties.
//!
//! ```text
//! hash_lock = SHA256(secret[32] ‖ timestamp[8, big-endian])
//! swap_id   = SHA256(hash_lock[32] ‖ a[20] ‖ b[20])
//! ```

use crate::domain::{Address, HashLock, Secret, SecureSecret, SwapId, SwapIdScheme};
use sha2::{Digest, Sha256};

/// Compute the hash-lock for a secret and the timestamp it is bound to.
pub fn calc_hash_lock(secret: &Secret, timestamp: u64) -> HashLock {
    let mut hasher = Sha256::new();
    hasher.update(secret);
    hasher.update(timestamp.to_be_bytes());
    HashLock::new(hasher.finalize().into())
}

/// Compute a swap identifier from a hash-lock and an ordered address pair.
///
/// Order matters: `(a, b)` and `(b, a)` give different identifiers.
pub fn calc_swap_id(hash_lock: &HashLock, a: &Address, b: &Address) -> SwapId {
    let mut hasher = Sha256::new();
    hasher.update(hash_lock.as_bytes());
    hasher.update(a.as_bytes());
    hasher.update(b.as_bytes());
    SwapId::new(hasher.finalize().into())
}

/// Apply a protocol generation's address pairing.
pub fn derive_swap_id(
    scheme: SwapIdScheme,
    hash_lock: &HashLock,
    sender: &Address,
    recipient: &Address,
    counterpart_sender: &Address,
) -> SwapId {
    match scheme {
        SwapIdScheme::HashLockOnly => SwapId::new(hash_lock.0),
        SwapIdScheme::SenderZeroAddress => calc_swap_id(hash_lock, sender, &Address::ZERO),
        SwapIdScheme::SenderRecipient => calc_swap_id(hash_lock, sender, recipient),
        SwapIdScheme::SenderCounterpartSender => {
            calc_swap_id(hash_lock, sender, counterpart_sender)
        }
    }
}

/// Verify that a secret opens a hash-lock at the given timestamp.
pub fn verify_secret(secret: &Secret, timestamp: u64, hash_lock: &HashLock) -> bool {
    calc_hash_lock(secret, timestamp) == *hash_lock
}

/// Generate a fresh secret for a new swap. Keep it private until claiming.
pub fn generate_secret() -> SecureSecret {
    SecureSecret::random()
}
