//! Ledger configuration.

use crate::domain::{
    Address, ConfigError, ExpiryPolicy, SwapIdScheme, DEFAULT_MAX_TIMELOCK, DEFAULT_MIN_TIMELOCK,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Deployment-wide settings. Fixed for the lifetime of a ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Address pairing used for swap identifiers.
    pub id_scheme: SwapIdScheme,

    /// Whether timelocks count seconds or blocks.
    pub expiry_policy: ExpiryPolicy,

    /// Smallest accepted timelock.
    pub min_timelock: u64,

    /// Largest accepted timelock.
    pub max_timelock: u64,

    /// Account the escrow holds funds under.
    pub escrow_address: Address,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            id_scheme: SwapIdScheme::SenderCounterpartSender,
            expiry_policy: ExpiryPolicy::BlockHeight,
            min_timelock: DEFAULT_MIN_TIMELOCK,
            max_timelock: DEFAULT_MAX_TIMELOCK,
            escrow_address: Address::ZERO,
        }
    }
}

impl LedgerConfig {
    /// Check the timelock window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_timelock == 0 || self.min_timelock > self.max_timelock {
            return Err(ConfigError::InvalidTimelockWindow {
                min: self.min_timelock,
                max: self.max_timelock,
            });
        }
        Ok(())
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SWAP_ID_SCHEME`: `hash-lock-only`, `sender-zero-address`,
    ///   `sender-recipient` or `sender-counterpart-sender` (default)
    /// - `SWAP_EXPIRY_POLICY`: `timestamp` or `block-height` (default)
    /// - `SWAP_MIN_TIMELOCK`: timelock floor (default: 100)
    /// - `SWAP_MAX_TIMELOCK`: timelock ceiling (default: 518400)
    /// - `SWAP_ESCROW_ADDRESS`: hex escrow account (default: zero address)
    ///
    /// Unset variables keep their defaults; malformed ones are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("SWAP_ID_SCHEME") {
            config.id_scheme = parse_var("SWAP_ID_SCHEME", &v)?;
        }
        if let Some(v) = lookup("SWAP_EXPIRY_POLICY") {
            config.expiry_policy = parse_var("SWAP_EXPIRY_POLICY", &v)?;
        }
        if let Some(v) = lookup("SWAP_MIN_TIMELOCK") {
            config.min_timelock = parse_var("SWAP_MIN_TIMELOCK", &v)?;
        }
        if let Some(v) = lookup("SWAP_MAX_TIMELOCK") {
            config.max_timelock = parse_var("SWAP_MAX_TIMELOCK", &v)?;
        }
        if let Some(v) = lookup("SWAP_ESCROW_ADDRESS") {
            config.escrow_address = parse_var("SWAP_ESCROW_ADDRESS", &v)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Decode and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        reason: e.to_string(),
    })
}
