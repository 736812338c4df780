//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound port traits: clock, native bank, token ledger,
//! escrow strategies and event sinks.

mod clock;
mod escrow;
mod event_sink;
mod native_bank;
mod token_ledger;

pub use clock::ManualClock;
pub use escrow::{NativeEscrow, TokenEscrow};
pub use event_sink::{InMemoryEventLog, TracingEventSink};
pub use native_bank::InMemoryNativeBank;
pub use token_ledger::InMemoryTokenLedger;
