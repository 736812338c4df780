//! # Exploit Simulations
//!
//! Adversarial call orderings against a single ledger instance. Each file
//! states the attack, then asserts that at most one fund movement happens
//! and that rejected calls leave no trace.
//!
//! | Attack | File | Defense |
//! |--------|------|---------|
//! | Claim twice | `double_claim` | status guard before release |
//! | Claim and refund at the boundary | `claim_refund_race` | disjoint windows, one write guard |
//! | Squat or spoof an identifier | `id_spoofing` | sender bound into the identifier |
//! | Replay a revealed secret | `secret_reuse` | timestamp bound into the hash-lock |
//! | Record without funds | `intake_rollback` | intake before persist |

pub mod claim_refund_race;
pub mod double_claim;
pub mod secret_reuse;
