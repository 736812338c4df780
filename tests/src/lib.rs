//! # Swap-Ledger Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Ledger builders, well-known accounts
//! ├── exploits/         # Adversarial call orderings
//! │   ├── double_claim.rs
//! │   ├── claim_refund_race.rs
//! │   ├── id_spoofing.rs
//! │   ├── secret_reuse.rs
//! │   └── intake_rollback.rs
//! │
//! └── integration/      # End-to-end flows per escrow variant
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p swap-tests
//!
//! # By category
//! cargo test -p swap-tests integration::
//! cargo test -p swap-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p swap-tests
//! ```

#![allow(dead_code)]

pub mod exploits;
pub mod fixtures;
