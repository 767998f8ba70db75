//! Server-wide secrets mixed into every peppered digest.

use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::{HashError, Result};

/// A single server-wide secret, wiped from memory on drop.
#[derive(Clone)]
pub struct Pepper(Zeroizing<String>);

impl Pepper {
    /// Create a new [`Pepper`].
    pub fn new(secret: impl Into<String>) -> Self {
        Self(Zeroizing::new(secret.into()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for Pepper {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes().ct_eq(other.as_bytes()).into()
    }
}

impl Eq for Pepper {}

impl fmt::Debug for Pepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pepper(<redacted>)")
    }
}

impl From<String> for Pepper {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

impl From<&str> for Pepper {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

impl From<&String> for Pepper {
    fn from(secret: &String) -> Self {
        Self::new(secret.as_str())
    }
}

/// Ordered peppers, newest first.
///
/// Position 0 is the current pepper, used for every new hash. Older peppers
/// stay behind it so that hashes issued before a rotation keep verifying.
/// A ring never changes once built: [`PepperRing::rotate`] and
/// [`PepperRing::retire`] consume it and return the next generation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PepperRing {
    peppers: Vec<Pepper>,
}

impl PepperRing {
    /// Create a new [`PepperRing`]. An empty list is allowed.
    ///
    /// Empty peppers are skipped: mixing one in leaves the digest unchanged.
    pub fn new<I>(peppers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Pepper>,
    {
        let mut skipped = 0;
        let peppers = peppers
            .into_iter()
            .map(Into::into)
            .filter(|pepper: &Pepper| {
                skipped += usize::from(pepper.is_empty());
                !pepper.is_empty()
            })
            .collect();

        if skipped > 0 {
            tracing::warn!(skipped, "ignored empty peppers");
        }

        Self { peppers }
    }

    /// Pepper used for new hashes.
    pub fn current(&self) -> Result<&Pepper> {
        self.peppers.first().ok_or(HashError::NoPepperConfigured)
    }

    /// Every pepper, current one first.
    pub fn all(&self) -> impl Iterator<Item = &Pepper> {
        self.peppers.iter()
    }

    pub fn len(&self) -> usize {
        self.peppers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peppers.is_empty()
    }

    /// Put `pepper` in front of the ring, keeping every older one.
    ///
    /// An empty pepper leaves the ring unchanged.
    pub fn rotate(self, pepper: impl Into<Pepper>) -> Self {
        let pepper = pepper.into();
        if pepper.is_empty() {
            tracing::warn!("ignored empty pepper rotation");
            return self;
        }

        let mut peppers = Vec::with_capacity(self.peppers.len() + 1);
        peppers.push(pepper.clone());
        peppers.extend(self.peppers.into_iter().filter(|p| *p != pepper));

        Self { peppers }
    }

    /// Drop `pepper` from the ring.
    ///
    /// Hashes created under it will no longer verify.
    pub fn retire(self, pepper: impl Into<Pepper>) -> Self {
        let pepper = pepper.into();

        Self {
            peppers: self
                .peppers
                .into_iter()
                .filter(|p| *p != pepper)
                .collect(),
        }
    }
}

impl fmt::Debug for PepperRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PepperRing")
            .field("len", &self.peppers.len())
            .finish()
    }
}
