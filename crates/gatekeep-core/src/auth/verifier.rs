use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{CredentialHash, Secret};

/// Fixed input for the decoy hash verified when an identifier is unknown.
const DECOY_SECRET: &str = "gatekeep-decoy-credential";

/// Compares a submitted secret against a stored credential hash.
///
/// Implementations must not short-circuit on partial matches. `verify` may be
/// CPU heavy; the service runs it on the blocking thread pool.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, secret: &Secret, stored: &CredentialHash) -> bool;

    /// A hash with the same cost as real credentials, verified in place of a
    /// record when the identifier is unknown so both rejections take equally long.
    fn decoy_hash(&self) -> Option<CredentialHash> {
        None
    }
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argon2Cost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for Argon2Cost {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Argon2id verifier and hasher.
///
/// Verification reads the parameters embedded in the stored PHC string, so
/// hashes produced with a different cost still verify.
#[derive(Clone)]
pub struct Argon2Verifier {
    argon2: Argon2<'static>,
}

impl Argon2Verifier {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    pub fn with_cost(cost: Argon2Cost) -> Result<Self, argon2::Error> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a secret with a fresh random salt
    pub fn hash(&self, secret: &Secret) -> Result<CredentialHash, password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(secret.expose().as_bytes(), &salt)?;
        Ok(CredentialHash::new(hash.to_string()))
    }
}

impl Default for Argon2Verifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialVerifier for Argon2Verifier {
    fn verify(&self, secret: &Secret, stored: &CredentialHash) -> bool {
        let parsed = match PasswordHash::new(stored.as_str()) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Stored credential hash is malformed");
                return false;
            }
        };
        self.argon2
            .verify_password(secret.expose().as_bytes(), &parsed)
            .is_ok()
    }

    fn decoy_hash(&self) -> Option<CredentialHash> {
        match self.hash(&Secret::new(DECOY_SECRET)) {
            Ok(hash) => Some(hash),
            Err(e) => {
                warn!(error = %e, "Failed to build decoy credential hash");
                None
            }
        }
    }
}
