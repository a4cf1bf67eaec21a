use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown to end users for both unknown identifiers and wrong secrets
/// when presentation is `Generic`.
const GENERIC_REJECTION_MESSAGE: &str = "Invalid identifier or credential";

/// Message shown to end users when the credential store is unreachable.
const UNAVAILABLE_MESSAGE: &str = "Authentication is temporarily unavailable - please try again later";

/// Maximum length for collaborator failure reasons carried in errors
const MAX_REASON_LENGTH: usize = 200;

/// Failure classification returned by `AuthenticationService::authenticate`.
///
/// Messages carry the identifier involved and never the submitted secret.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found: {identifier}")]
    UserNotFound { identifier: String },

    #[error("Invalid credential for {identifier}")]
    InvalidCredential { identifier: String },

    #[error("Credential store unavailable while looking up {identifier}: {reason}")]
    StoreUnavailable { identifier: String, reason: String },
}

/// Copyable discriminant of `AuthError`, used for structured logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorKind {
    UserNotFound,
    InvalidCredential,
    StoreUnavailable,
}

impl AuthErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthErrorKind::UserNotFound => "user_not_found",
            AuthErrorKind::InvalidCredential => "invalid_credential",
            AuthErrorKind::StoreUnavailable => "store_unavailable",
        }
    }
}

/// How much detail `AuthError::public_message` reveals to end users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPresentation {
    /// Unknown identifier and wrong secret look the same (no user enumeration).
    #[default]
    Generic,
    /// Each failure kind renders its own message.
    Detailed,
}

impl AuthError {
    /// Truncate a collaborator reason to avoid carrying excessive data
    fn truncate_reason(reason: &str) -> String {
        if reason.len() <= MAX_REASON_LENGTH {
            return reason.to_string();
        }
        let mut end = MAX_REASON_LENGTH;
        while !reason.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &reason[..end], reason.len())
    }

    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        AuthError::UserNotFound {
            identifier: identifier.into(),
        }
    }

    pub fn invalid_credential(identifier: impl Into<String>) -> Self {
        AuthError::InvalidCredential {
            identifier: identifier.into(),
        }
    }

    pub fn store_unavailable(identifier: impl Into<String>, reason: &str) -> Self {
        AuthError::StoreUnavailable {
            identifier: identifier.into(),
            reason: Self::truncate_reason(reason),
        }
    }

    pub fn kind(&self) -> AuthErrorKind {
        match self {
            AuthError::UserNotFound { .. } => AuthErrorKind::UserNotFound,
            AuthError::InvalidCredential { .. } => AuthErrorKind::InvalidCredential,
            AuthError::StoreUnavailable { .. } => AuthErrorKind::StoreUnavailable,
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            AuthError::UserNotFound { identifier }
            | AuthError::InvalidCredential { identifier }
            | AuthError::StoreUnavailable { identifier, .. } => identifier,
        }
    }

    /// Only infrastructure failures are worth retrying with the same input
    pub fn is_retryable(&self) -> bool {
        matches!(self, AuthError::StoreUnavailable { .. })
    }

    /// Message suitable for an end user under the given presentation policy.
    pub fn public_message(&self, presentation: ErrorPresentation) -> String {
        match (self, presentation) {
            (AuthError::StoreUnavailable { .. }, _) => UNAVAILABLE_MESSAGE.to_string(),
            (_, ErrorPresentation::Generic) => GENERIC_REJECTION_MESSAGE.to_string(),
            (AuthError::UserNotFound { .. }, ErrorPresentation::Detailed) => {
                "No account exists for that identifier".to_string()
            }
            (AuthError::InvalidCredential { .. }, ErrorPresentation::Detailed) => {
                "Incorrect credential".to_string()
            }
        }
    }
}

/// Outcomes a `CredentialStore` can report besides a found record.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No record for identifier")]
    NotFound,

    #[error("Store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Identifier already registered: {0}")]
    Duplicate(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        StoreError::Unavailable {
            reason: reason.into(),
        }
    }
}
