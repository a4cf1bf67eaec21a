//! Data models for authentication entities.
//!
//! This module contains the data structures passed between callers, the
//! credential store and the authentication service:
//!
//! - `UserRecord`, `UserProfile`: Stored user and its public view
//! - `UserId`, `CredentialHash`: Opaque identifiers and stored credentials
//! - `LoginRequest`, `Secret`: Per-call login input with a redacted secret

pub mod request;
pub mod user;

pub use request::{LoginRequest, Secret};
pub use user::{CredentialHash, UserId, UserProfile, UserRecord};
