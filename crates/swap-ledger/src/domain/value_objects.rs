//! # Domain Value Objects
//!
//! Immutable value types for the swap ledger: addresses, hashes, amounts and
//! the small enums that select protocol behaviour.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// Re-export U256 from primitive-types for 256-bit token amounts
pub use primitive_types::U256;

/// Secret (preimage) type, 32 bytes.
pub type Secret = [u8; 32];

fn decode_hex_exact<const N: usize>(s: &str) -> Result<[u8; N], hex::FromHexError> {
    let stripped = s.strip_prefix("0x").unwrap_or(s);
    let mut out = [0u8; N];
    hex::decode_to_slice(stripped, &mut out)?;
    Ok(out)
}

macro_rules! hex_bytes_type {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// All-zero value.
            pub const ZERO: Self = Self([0u8; $len]);

            /// Wrap raw bytes.
            #[must_use]
            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Copy from a slice. Returns None if the length is wrong.
            #[must_use]
            pub fn from_slice(slice: &[u8]) -> Option<Self> {
                <[u8; $len]>::try_from(slice).ok().map(Self)
            }

            /// Underlying bytes.
            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// True if every byte is zero.
            #[must_use]
            pub fn is_zero(&self) -> bool {
                self.0 == [0u8; $len]
            }

            /// `0x`-prefixed lowercase hex.
            #[must_use]
            pub fn to_hex(&self) -> String {
                format!("0x{}", hex::encode(self.0))
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $len] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl FromStr for $name {
            type Err = hex::FromHexError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                decode_hex_exact::<$len>(s).map(Self)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(de::Error::custom)
            }
        }
    };
}

hex_bytes_type!(
    /// A 20-byte EVM-style address. Counterpart-ledger addresses use the same
    /// width.
    Address,
    20
);

hex_bytes_type!(
    /// Public commitment to a secret: `SHA256(secret ‖ timestamp)`.
    HashLock,
    32
);

hex_bytes_type!(
    /// Registry key of one swap.
    SwapId,
    32
);

/// Lifecycle status of a stored swap record.
///
/// Absence of a record is the implicit `NonExistent` state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapStatus {
    /// Funds escrowed, awaiting claim or expiry.
    Open,
    /// Secret revealed, funds released to the recipient.
    Completed,
    /// Refunded to the sender after expiry.
    Expired,
}

impl SwapStatus {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: SwapStatus) -> bool {
        matches!(
            (self, next),
            (Self::Open, Self::Completed) | (Self::Open, Self::Expired)
        )
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Expired)
    }
}

impl fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Open => "Open",
            Self::Completed => "Completed",
            Self::Expired => "Expired",
        };
        f.write_str(s)
    }
}

/// Which address pair goes into the swap identifier.
///
/// Several incompatible generations of the protocol exist. A deployment fixes
/// one; both counterparties must use the same one to find each other's swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapIdScheme {
    /// Identifier equals the hash-lock.
    HashLockOnly,
    /// `SHA256(hash_lock ‖ sender ‖ 0x00..00)`.
    SenderZeroAddress,
    /// `SHA256(hash_lock ‖ sender ‖ recipient)`.
    SenderRecipient,
    /// `SHA256(hash_lock ‖ sender ‖ counterpart_sender)`.
    SenderCounterpartSender,
}

impl FromStr for SwapIdScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "hashlockonly" => Ok(Self::HashLockOnly),
            "senderzeroaddress" => Ok(Self::SenderZeroAddress),
            "senderrecipient" => Ok(Self::SenderRecipient),
            "sendercounterpartsender" => Ok(Self::SenderCounterpartSender),
            other => Err(format!("unknown swap id scheme: {other}")),
        }
    }
}

/// What "now" means when deciding expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiryPolicy {
    /// Block timestamp in Unix seconds; timelock is a number of seconds.
    Timestamp,
    /// Block height; timelock is a number of blocks.
    BlockHeight,
}

impl FromStr for ExpiryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "timestamp" | "time" => Ok(Self::Timestamp),
            "blockheight" | "height" => Ok(Self::BlockHeight),
            other => Err(format!("unknown expiry policy: {other}")),
        }
    }
}

/// Asset held by an escrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    /// The host ledger's native coin, attached to the initiating call.
    Native,
    /// A fungible token living on an external token ledger.
    Token(Address),
}
