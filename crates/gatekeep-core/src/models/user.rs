use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque user identifier assigned by the credential store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored credential in PHC string form (e.g. `$argon2id$v=19$...`).
///
/// `Debug` never prints the hash itself.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialHash(String);

impl CredentialHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CredentialHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialHash(<redacted>)")
    }
}

/// A user as held by a credential store, including its credential hash.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: UserId,
    pub identifier: String,
    pub display_name: String,
    pub credential_hash: CredentialHash,
}

impl UserRecord {
    pub fn new(
        id: UserId,
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        credential_hash: CredentialHash,
    ) -> Self {
        Self {
            id,
            identifier: identifier.into(),
            display_name: display_name.into(),
            credential_hash,
        }
    }

    /// Public fields only; the credential hash is left behind.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            identifier: self.identifier.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

/// Public view of a `UserRecord`, safe to hand to callers and keep in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub identifier: String,
    pub display_name: String,
}
