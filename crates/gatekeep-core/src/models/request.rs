use std::fmt;

/// Credential supplied at login time.
///
/// Neither `Debug` nor `Display` reveal the value; use `expose` at the single
/// point where the verifier needs the bytes.
#[derive(Clone)]
pub struct Secret(String);

impl Secret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

impl From<&str> for Secret {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

impl From<String> for Secret {
    fn from(secret: String) -> Self {
        Self(secret)
    }
}

/// A single login attempt. Constructed per call and never persisted.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub identifier: String,
    pub secret: Secret,
}

impl LoginRequest {
    pub fn new(identifier: impl Into<String>, secret: impl Into<Secret>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    /// Both fields must be non-empty before any lookup happens
    pub fn is_well_formed(&self) -> bool {
        !self.identifier.is_empty() && !self.secret.is_empty()
    }
}
