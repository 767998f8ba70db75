//! Secure random generation using OS RNG.

use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::Result;

/// Number of random bytes in a salt.
pub const SALT_LENGTH: usize = 32;

/// Fill `length` bytes from the operating system entropy source.
///
/// There is no fallback generator: if the OS source fails, so does the call.
pub fn random_bytes(length: usize) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; length];
    OsRng.try_fill_bytes(&mut bytes).inspect_err(|err| {
        tracing::error!(error = %err, "cannot read from entropy source")
    })?;

    Ok(bytes)
}

/// Random bytes, lowercase hex encoded.
pub fn random_hex(byte_length: usize) -> Result<String> {
    let bytes = random_bytes(byte_length)?;
    Ok(hex::encode(bytes))
}

/// Generate a fresh per-credential salt.
///
/// # Examples
///
/// ```rust
/// let salt = peppermill::generate_random_salt().unwrap();
/// assert_eq!(salt.len(), 64);
/// ```
pub fn generate_random_salt() -> Result<String> {
    random_hex(SALT_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex_lite::Regex;

    #[test]
    fn test_random_bytes() {
        let bytes1 = random_bytes(32).unwrap();
        let bytes2 = random_bytes(32).unwrap();

        assert_eq!(bytes1.len(), 32);
        assert_eq!(bytes2.len(), 32);
        assert_ne!(bytes1, bytes2);
    }

    #[test]
    fn test_random_bytes_empty() {
        assert!(random_bytes(0).unwrap().is_empty());
    }

    #[test]
    fn test_generate_random_salt() {
        let salt = generate_random_salt().unwrap();

        assert_eq!(salt.len(), SALT_LENGTH * 2);
        assert!(Regex::new(r"^[0-9a-f]{64}$").unwrap().is_match(&salt));
        assert_ne!(salt, generate_random_salt().unwrap());
    }
}
