//! Password hasher with pepper rotation.

use subtle::ConstantTimeEq;

use crate::config::Configuration;
use crate::digest::{DIGEST_HEX_LENGTH, DIGEST_LENGTH, digest, raw_digest};
use crate::error::{HashError, Result};
use crate::pepper::{Pepper, PepperRing};
use crate::random::generate_random_salt;

/// Produces and checks salted, peppered password digests.
///
/// A [`Hasher`] holds no mutable state: build it once at startup and share it
/// behind an [`std::sync::Arc`].
#[derive(Debug, Clone, Default)]
pub struct Hasher {
    ring: PepperRing,
}

impl Hasher {
    /// Create a new [`Hasher`] from peppers, current one first.
    pub fn new<I>(peppers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Pepper>,
    {
        Self::from_ring(PepperRing::new(peppers))
    }

    /// Create a new [`Hasher`] from an existing ring.
    pub fn from_ring(ring: PepperRing) -> Self {
        Self { ring }
    }

    /// Create a new [`Hasher`] using the configured peppers.
    pub fn from_config(config: &Configuration) -> Self {
        Self::new(&config.peppers)
    }

    pub fn ring(&self) -> &PepperRing {
        &self.ring
    }

    /// Hash `password`, returning the hex digest and the salt used.
    ///
    /// The salt is an empty string when `use_salt` is false. Peppered hashes
    /// always use the current pepper. Both values must be stored by the
    /// caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use peppermill::Hasher;
    ///
    /// let hasher = Hasher::new(["b0aa0db641509c907459bf95445a7841"]);
    /// let (hash, salt) = hasher.generate_hash("HelloWorld1", true, true).unwrap();
    ///
    /// assert!(hasher.compare("HelloWorld1", &salt, true, &hash));
    /// ```
    pub fn generate_hash(
        &self,
        password: &str,
        use_salt: bool,
        use_pepper: bool,
    ) -> Result<(String, String)> {
        let pepper = if use_pepper {
            Some(self.ring.current().inspect_err(|_| {
                tracing::warn!("peppered hash requested without any pepper")
            })?)
        } else {
            None
        };

        let salt = if use_salt {
            generate_random_salt()?
        } else {
            String::default()
        };

        let hash = digest(password, non_empty(&salt), pepper);

        Ok((hash, salt))
    }

    /// Check `password` against a stored digest.
    ///
    /// With `use_pepper`, every pepper of the ring is tried, current first,
    /// so hashes issued before a rotation keep verifying. Malformed `salt` or
    /// `expected_hash` make the check fail like a wrong password would.
    pub fn compare(
        &self,
        password: &str,
        salt: &str,
        use_pepper: bool,
        expected_hash: &str,
    ) -> bool {
        self.matches(password, salt, use_pepper, expected_hash)
            .unwrap_or_else(|err| {
                tracing::debug!(error = %err, "rejected malformed password hash");
                false
            })
    }

    /// Same as [`Hasher::compare`], as a [`Result`].
    ///
    /// Every failure, malformed input included, is [`HashError::Mismatch`].
    pub fn verify(
        &self,
        password: &str,
        salt: &str,
        use_pepper: bool,
        expected_hash: &str,
    ) -> Result<()> {
        if self.compare(password, salt, use_pepper, expected_hash) {
            Ok(())
        } else {
            Err(HashError::Mismatch)
        }
    }

    fn matches(
        &self,
        password: &str,
        salt: &str,
        use_pepper: bool,
        expected_hash: &str,
    ) -> Result<bool> {
        let expected = decode_digest(expected_hash)?;
        if !salt.is_empty() {
            hex::decode(salt)?;
        }
        let salt = non_empty(salt);

        if !use_pepper {
            return Ok(ct_eq(&raw_digest(password, salt, None), &expected));
        }

        if self.ring.is_empty() {
            tracing::debug!("peppered comparison without any pepper");
        }

        // Linear scan. Latency grows with the position of the matching
        // pepper, which only reveals ring order.
        Ok(self
            .ring
            .all()
            .any(|pepper| ct_eq(&raw_digest(password, salt, Some(pepper)), &expected)))
    }
}

fn non_empty(salt: &str) -> Option<&str> {
    (!salt.is_empty()).then_some(salt)
}

fn ct_eq(a: &[u8; DIGEST_LENGTH], b: &[u8; DIGEST_LENGTH]) -> bool {
    a.as_slice().ct_eq(b.as_slice()).into()
}

fn decode_digest(hash: &str) -> Result<[u8; DIGEST_LENGTH]> {
    if hash.len() != DIGEST_HEX_LENGTH {
        return Err(HashError::DigestLength {
            value: hash.len(),
            expected: DIGEST_HEX_LENGTH,
        });
    }

    let mut out = [0u8; DIGEST_LENGTH];
    hex::decode_to_slice(hash, &mut out)?;
    Ok(out)
}
