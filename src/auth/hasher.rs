//! One-way password transform.
//!
//! Hashes are Argon2id in PHC string format, so every stored secret carries
//! its own algorithm, version, cost parameters and salt. Verification reads
//! those from the blob, which keeps previously stored secrets valid when the
//! configured cost changes.

use anyhow::{anyhow, Result};
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

// Fixed Argon2id parameters; the time cost is the single tunable knob.
const MEMORY_KIB: u32 = 19456;
const PARALLELISM: u32 = 1;

pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    /// Build a hasher with the given time cost (iterations).
    ///
    /// # Errors
    /// Returns an error if the parameters are rejected by the algorithm.
    pub fn new(time_cost: u32) -> Result<Self> {
        let params = Params::new(MEMORY_KIB, time_cost, PARALLELISM, None)
            .map_err(|err| anyhow!("invalid hash parameters: {err}"))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// Two calls with the same input produce different blobs.
    ///
    /// # Errors
    /// Returns an error if hashing fails; the plaintext is never part of it.
    pub fn hash(&self, password: &SecretString) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(password.expose_secret().as_bytes(), &salt)
            .map_err(|err| anyhow!("failed to hash password: {err}"))?;

        Ok(hash.to_string())
    }

    /// Check a plaintext password against a stored blob.
    ///
    /// A malformed blob verifies as `false`; it never surfaces as an error.
    /// The digest comparison is constant-time inside the hash stack.
    #[must_use]
    pub fn verify(&self, password: &SecretString, secret: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(secret) else {
            debug!("stored secret is not a valid hash blob");
            return false;
        };

        self.argon2
            .verify_password(password.expose_secret().as_bytes(), &parsed)
            .is_ok()
    }
}
