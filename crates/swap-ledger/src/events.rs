//! # Event Schema
//!
//! One event per state transition, for off-chain indexers and relayers.
//! Field names are part of the indexer contract and must not change.
//!
//! | Event | Emitted by | Extra fields |
//! |-------|------------|--------------|
//! | `SwapInitiated` | `initiate` | every record field |
//! | `SwapClaimed` | `claim` | revealed `secret` |
//! | `SwapRefunded` | `refund` | original `sender` |

use crate::domain::{Address, HashLock, Secret, SwapId, U256};
use serde::{Deserialize, Serialize};

/// A new swap was opened and funded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapInitiated {
    /// Initiating caller, also the swap sender.
    pub caller: Address,
    /// Receives the funds on claim.
    pub recipient: Address,
    /// Recipient on the counterpart ledger.
    pub counterpart_recipient: Address,
    /// Sender on the counterpart ledger.
    pub counterpart_sender: Address,
    /// Registry key.
    pub swap_id: SwapId,
    /// Commitment to the secret.
    pub hash_lock: HashLock,
    /// Timestamp bound into the hash-lock.
    pub timestamp: u64,
    /// Ledger time or height the claim window opened at.
    pub open_point: u64,
    /// Requested window length, in the same unit as `open_point`.
    pub timelock: u64,
    /// Timestamp or height at which refund opens.
    pub expiry: u64,
    /// Creation index in the registry.
    pub index: u64,
    /// Escrowed amount.
    pub amount_out: U256,
    /// Amount expected on the counterpart ledger.
    pub amount_in: U256,
}

/// A swap was claimed with its secret.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapClaimed {
    /// Whoever submitted the claim.
    pub caller: Address,
    /// Address that was paid.
    pub recipient: Address,
    /// Registry key.
    pub swap_id: SwapId,
    /// Commitment that was opened.
    pub hash_lock: HashLock,
    /// Revealed preimage.
    #[serde(with = "hex_secret")]
    pub secret: Secret,
}

/// A swap expired and was refunded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRefunded {
    /// Whoever submitted the refund.
    pub caller: Address,
    /// Original sender, who was paid back.
    pub sender: Address,
    /// Registry key.
    pub swap_id: SwapId,
    /// Commitment of the abandoned swap.
    pub hash_lock: HashLock,
}

/// Lifecycle event envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SwapEvent {
    /// See [`SwapInitiated`].
    SwapInitiated(SwapInitiated),
    /// See [`SwapClaimed`].
    SwapClaimed(SwapClaimed),
    /// See [`SwapRefunded`].
    SwapRefunded(SwapRefunded),
}

impl SwapEvent {
    /// Event name as indexers see it.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SwapInitiated(_) => "SwapInitiated",
            Self::SwapClaimed(_) => "SwapClaimed",
            Self::SwapRefunded(_) => "SwapRefunded",
        }
    }

    /// Identifier the event refers to.
    pub fn swap_id(&self) -> SwapId {
        match self {
            Self::SwapInitiated(e) => e.swap_id,
            Self::SwapClaimed(e) => e.swap_id,
            Self::SwapRefunded(e) => e.swap_id,
        }
    }

    /// JSON encoding used by log-based sinks.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

mod hex_secret {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(secret: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(secret)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 32], D::Error> {
        let s = String::deserialize(deserializer)?;
        let mut out = [0u8; 32];
        hex::decode_to_slice(s.strip_prefix("0x").unwrap_or(&s), &mut out)
            .map_err(de::Error::custom)?;
        Ok(out)
    }
}
