//! OTP code generation.

use rand::Rng;

/// Generate a six-digit verification code from the OS-seeded CSPRNG.
///
/// The range excludes leading zeros so the code survives any client
/// that round-trips it through a number type.
pub fn generate_code() -> String {
    let code: u32 = rand::rng().random_range(100_000..=999_999);
    code.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_six_digits() {
        for _ in 0..200 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            let parsed: u32 = code.parse().unwrap();
            assert!((100_000..=999_999).contains(&parsed));
        }
    }
}
