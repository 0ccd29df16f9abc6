//! Pending and session JWT handling.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{Claims, TokenSubject};
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;
