//! SHA-512 digest of a password with its salt and pepper.
//!
//! Components are fed in a fixed order, `salt ‖ pepper ‖ password`, each one
//! as the raw bytes of its string form. Salts and peppers are therefore mixed
//! in hex-encoded, exactly as they are stored.
//!
//! This is a single fast hash pass, not an adaptive key stretching function:
//! security relies on salt uniqueness and pepper secrecy rather than on a
//! work factor.

use sha2::{Digest, Sha512};

use crate::pepper::Pepper;

/// Length of a raw digest, in bytes.
pub const DIGEST_LENGTH: usize = 64;
/// Length of a hex encoded digest.
pub const DIGEST_HEX_LENGTH: usize = DIGEST_LENGTH * 2;

/// Digest `password` with optional `salt` and `pepper` into lowercase hex.
///
/// # Examples
///
/// ```rust
/// use peppermill::digest::digest;
///
/// let hash = digest("HelloWorld1", None, None);
/// assert!(hash.starts_with("a4db351d"));
/// ```
pub fn digest(
    password: &str,
    salt: Option<&str>,
    pepper: Option<&Pepper>,
) -> String {
    hex::encode(raw_digest(password, salt, pepper))
}

pub(crate) fn raw_digest(
    password: &str,
    salt: Option<&str>,
    pepper: Option<&Pepper>,
) -> [u8; DIGEST_LENGTH] {
    let mut hasher = Sha512::new();
    if let Some(salt) = salt {
        hasher.update(salt.as_bytes());
    }
    if let Some(pepper) = pepper {
        hasher.update(pepper.as_bytes());
    }
    hasher.update(password.as_bytes());

    let mut out = [0u8; DIGEST_LENGTH];
    out.copy_from_slice(&hasher.finalize());
    out
}
