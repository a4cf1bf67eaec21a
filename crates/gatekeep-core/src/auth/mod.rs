//! Authentication module for verifying credentials and tracking the session.
//!
//! This module provides:
//! - `AuthenticationService`: Login, logout and the current-session accessor
//! - `CredentialStore`: Collaborator port resolving identifiers to records
//! - `CredentialVerifier`: Pluggable secret comparison (Argon2id by default)
//! - `Session`: The record of who is currently authenticated
//!
//! At most one session is live per service; failed logins never touch it.

pub mod credentials;
pub mod service;
pub mod session;
pub mod verifier;

pub use credentials::{CredentialStore, InMemoryCredentialStore};
pub use service::AuthenticationService;
pub use session::{AuthState, Session};
pub use verifier::{Argon2Cost, Argon2Verifier, CredentialVerifier};
