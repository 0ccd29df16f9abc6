//! # lexbook-auth
//!
//! Authentication core for LexBook: password verification with lockout,
//! email OTP step-up, pending/session JWT issuance, and the role guard
//! that protected routes authorize against.

pub mod error;
pub mod guard;
pub mod login;
pub mod otp;
pub mod password;
pub mod token;

pub use error::{AuthError, AuthResult};
pub use guard::{Principal, RoleGuard};
pub use login::{Authenticator, LoginOutcome, SecondFactorIssuer, SecondFactorVerifier};
pub use otp::OtpStore;
pub use password::PasswordHasher;
pub use token::{Claims, JwtDecoder, JwtEncoder, TokenSubject};
