//! Shared builders for test ledgers.

use std::sync::{Arc, Once};
use swap_ledger::{
    calc_hash_lock, Address, CallContext, InMemoryEventLog, InMemoryNativeBank,
    InMemoryTokenLedger, InitiateParams, LedgerConfig, ManualClock, NativeEscrow, Secret,
    SwapLedger, TokenEscrow, TokenLedger, U256,
};
use swap_telemetry::{init_telemetry, TelemetryConfig};

/// Ledger escrowing the native coin.
pub type NativeLedger = SwapLedger<NativeEscrow<InMemoryNativeBank>, ManualClock, InMemoryEventLog>;

/// Ledger escrowing [`TOKEN`].
pub type TokenSwapLedger =
    SwapLedger<TokenEscrow<InMemoryTokenLedger>, ManualClock, InMemoryEventLog>;

pub const ESCROW: Address = Address::new([0xE5; 20]);
pub const TOKEN: Address = Address::new([0x70; 20]);
pub const ALICE: Address = Address::new([0x11; 20]);
pub const BOB: Address = Address::new([0x22; 20]);
pub const CAROL: Address = Address::new([0x33; 20]);
pub const MALLORY: Address = Address::new([0x66; 20]);
pub const RELAYER: Address = Address::new([0x99; 20]);

pub const TIMESTAMP: u64 = 1_565_000_000;
pub const START_HEIGHT: u64 = 10_000;
pub const BLOCK_TIME: u64 = 3;
pub const AMOUNT: u64 = 100_000_000;
pub const TIMELOCK: u64 = 1000;

/// Starting balance of every funded account.
pub fn starting_balance() -> U256 {
    U256::from(10 * AMOUNT)
}

/// `0xaabbccdd` repeated to 32 bytes.
pub fn known_secret() -> Secret {
    let mut secret = [0u8; 32];
    for chunk in secret.chunks_mut(4) {
        chunk.copy_from_slice(&[0xaa, 0xbb, 0xcc, 0xdd]);
    }
    secret
}

pub fn test_config() -> LedgerConfig {
    LedgerConfig {
        escrow_address: ESCROW,
        ..LedgerConfig::default()
    }
}

/// Install a subscriber once per test binary. Honors `SWAP_LOG_LEVEL`.
pub fn init_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let config = TelemetryConfig {
            console_output: std::env::var("SWAP_LOG_LEVEL").is_ok(),
            ..TelemetryConfig::from_env()
        };
        if let Ok(guard) = init_telemetry(config) {
            std::mem::forget(guard);
        }
    });
}

pub fn native_ledger(config: LedgerConfig) -> NativeLedger {
    init_test_logging();
    let bank = InMemoryNativeBank::with_balances(&[
        (ALICE, starting_balance()),
        (CAROL, starting_balance()),
        (MALLORY, starting_balance()),
    ]);
    SwapLedger::with_native_bank(
        config,
        Arc::new(bank),
        ManualClock::new(TIMESTAMP, START_HEIGHT),
        InMemoryEventLog::new(),
    )
    .expect("valid test config")
}

pub fn token_ledger(config: LedgerConfig) -> TokenSwapLedger {
    init_test_logging();
    let token = InMemoryTokenLedger::new(TOKEN);
    for who in [ALICE, CAROL, MALLORY] {
        token.mint(&who, starting_balance()).expect("mint");
    }
    SwapLedger::with_token_ledger(
        config,
        Arc::new(token),
        TOKEN,
        ManualClock::new(TIMESTAMP, START_HEIGHT),
        InMemoryEventLog::new(),
    )
    .expect("valid test config")
}

/// Parameters for a 100000000-unit swap to `recipient`.
pub fn swap_params(secret: &Secret, recipient: Address, counterpart_sender: Address) -> InitiateParams {
    InitiateParams {
        hash_lock: calc_hash_lock(secret, TIMESTAMP),
        timestamp: TIMESTAMP,
        timelock: TIMELOCK,
        recipient,
        counterpart_sender,
        counterpart_recipient: Address::new([0xCC; 20]),
        amount_out: U256::from(AMOUNT),
        amount_in: U256::from(AMOUNT),
    }
}

pub fn native_call(caller: Address) -> CallContext {
    CallContext::with_value(caller, U256::from(AMOUNT))
}

/// Approve the escrow for one swap's worth of tokens.
pub fn approve_escrow(ledger: &TokenSwapLedger, owner: Address) {
    ledger
        .escrow()
        .token()
        .approve(&owner, &ESCROW, U256::from(AMOUNT))
        .expect("approve");
}
