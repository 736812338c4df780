//! # Algorithms Module
//!
//! Hash-lock derivation and expiry policy.

pub mod derivation;
pub mod expiry;

pub use derivation::{
    calc_hash_lock, calc_swap_id, derive_swap_id, generate_secret, verify_secret,
};
pub use expiry::{compute_expiry, current_point, is_expired};
