//! Peppermill hashes passwords with a per-credential salt and a server-wide
//! pepper, and supports pepper rotation.
//!
//! # Hash and verify.
//!
//! ```rust
//! use peppermill::Hasher;
//!
//! let hasher = Hasher::new([
//!     "47278c6cd6353a278a2a5929f77752ac429acd59cbded92cdf88a68fdfb9ac2f",
//! ]);
//! let (hash, salt) = hasher.generate_hash("HelloWorld1", true, true).unwrap();
//!
//! assert!(hasher.compare("HelloWorld1", &salt, true, &hash));
//! assert!(!hasher.compare("HelloWorld2", &salt, true, &hash));
//! ```
#![forbid(unsafe_code)]

pub mod config;
pub mod digest;
pub mod error;
mod hasher;
pub mod pepper;
pub mod random;

pub use error::{ConfigError, HashError, Result};
pub use hasher::Hasher;
pub use pepper::{Pepper, PepperRing};
pub use random::generate_random_salt;
