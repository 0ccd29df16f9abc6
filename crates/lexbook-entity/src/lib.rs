//! # lexbook-entity
//!
//! Domain entities for the LexBook platform.

pub mod subject;

pub use subject::{Role, Subject};
