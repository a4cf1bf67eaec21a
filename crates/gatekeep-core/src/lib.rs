//! gatekeep core - a minimal authentication core.
//!
//! Authenticates identifier/secret login requests against records resolved
//! from a pluggable credential store, keeps at most one active session per
//! service, and classifies every failure as `UserNotFound`,
//! `InvalidCredential` or `StoreUnavailable`.
//!
//! Logging goes through `tracing`; installing a subscriber is left to the
//! embedding application.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

pub use auth::{
    Argon2Cost, Argon2Verifier, AuthState, AuthenticationService, CredentialStore,
    CredentialVerifier, InMemoryCredentialStore, Session,
};
pub use config::AuthConfig;
pub use error::{AuthError, AuthErrorKind, ErrorPresentation, StoreError};
pub use models::{CredentialHash, LoginRequest, Secret, UserId, UserProfile, UserRecord};
