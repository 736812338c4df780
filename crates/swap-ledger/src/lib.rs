//! # Swap Ledger
//!
//! Hash time-locked escrow for trustless cross-ledger atomic swaps.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! A sender locks funds under `SHA256(secret ‖ timestamp)`. Anyone who
//! reveals the secret before expiry pays the recipient; after expiry anyone
//! may return the funds to the sender. The same hash-lock on a counterpart
//! ledger makes the two legs atomic.
//!
//! ## Guarantees
//!
//! | Guarantee | Enforced by |
//! |-----------|-------------|
//! | One record per identifier | registry check before intake |
//! | Funds leave custody once | status guard before every release |
//! | Disjoint claim/refund windows | `now < expiry` vs `now >= expiry` |
//! | All-or-nothing calls | one write guard from validation to commit |
//!
//! ## Module Structure
//!
//! ```text
//! swap-ledger/
//! ├── domain/          # SwapRecord, value objects, errors, invariants
//! ├── algorithms/      # Hash-lock and identifier derivation, expiry
//! ├── ports/           # SwapLedgerApi, ChainClock, Escrow, TokenLedger, EventSink
//! ├── adapters/        # In-memory bank and token, escrows, event sinks
//! ├── events           # Indexer event schema
//! ├── config           # LedgerConfig
//! └── service          # SwapLedger
//! ```
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use swap_ledger::{
//!     calc_hash_lock, Address, CallContext, InMemoryEventLog, InMemoryNativeBank,
//!     InitiateParams, LedgerConfig, ManualClock, SwapLedger, SwapLedgerApi, SwapStatus, U256,
//! };
//!
//! let alice = Address::new([1u8; 20]);
//! let bob = Address::new([2u8; 20]);
//! let bank = Arc::new(InMemoryNativeBank::with_balances(&[(alice, U256::from(500u64))]));
//! let ledger = SwapLedger::with_native_bank(
//!     LedgerConfig::default(),
//!     bank,
//!     ManualClock::new(1_700_000_000, 10),
//!     InMemoryEventLog::new(),
//! )
//! .unwrap();
//!
//! let secret = [7u8; 32];
//! let params = InitiateParams {
//!     hash_lock: calc_hash_lock(&secret, 1_700_000_000),
//!     timestamp: 1_700_000_000,
//!     timelock: 200,
//!     recipient: bob,
//!     counterpart_sender: Address::ZERO,
//!     counterpart_recipient: Address::ZERO,
//!     amount_out: U256::from(500u64),
//!     amount_in: U256::from(1u64),
//! };
//! let swap_id = ledger
//!     .initiate(CallContext::with_value(alice, U256::from(500u64)), params)
//!     .unwrap();
//! ledger.claim(CallContext::new(bob), swap_id, secret).unwrap();
//! assert_eq!(ledger.status(&swap_id), Some(SwapStatus::Completed));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{
    InMemoryEventLog, InMemoryNativeBank, InMemoryTokenLedger, ManualClock, NativeEscrow,
    TokenEscrow, TracingEventSink,
};
pub use algorithms::{
    calc_hash_lock, calc_swap_id, compute_expiry, current_point, derive_swap_id,
    generate_secret, is_expired, verify_secret,
};
pub use config::LedgerConfig;
pub use domain::{
    invariant_expiry_after_open, invariant_secret_matches, invariant_timelock_window,
    invariant_windows_disjoint, Address, AssetKind, CallContext, ConfigError, EscrowError,
    ExpiryPolicy, HashLock, InitiateParams, NativeError, Secret, SecureSecret, SwapError,
    SwapId, SwapIdScheme, SwapRecord, SwapStatus, TokenError, DEFAULT_MAX_TIMELOCK,
    DEFAULT_MIN_TIMELOCK, U256,
};
pub use events::{SwapClaimed, SwapEvent, SwapInitiated, SwapRefunded};
pub use ports::{ChainClock, Escrow, EventSink, NativeBank, SwapLedgerApi, TokenLedger};
pub use service::SwapLedger;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
