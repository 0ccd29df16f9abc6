//! One-time verification codes.

pub mod generator;
pub mod store;

pub use store::OtpStore;
