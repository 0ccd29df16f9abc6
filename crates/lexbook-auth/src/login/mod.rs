//! Login flows: credential check, OTP step-up, and verification.

pub mod authenticator;
pub mod issuer;
pub mod verifier;

pub use authenticator::{Authenticator, LoginOutcome};
pub use issuer::{ChallengeIssued, SecondFactorIssuer};
pub use verifier::SecondFactorVerifier;
