//! # lexbook-cache
//!
//! Expiring key–value storage for LexBook's short-lived verification
//! state. The in-process backend uses [moka](https://crates.io/crates/moka);
//! the provider is selected at runtime based on configuration.

pub mod keys;
pub mod memory;
pub mod provider;

pub use provider::CacheManager;
