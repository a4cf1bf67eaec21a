use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{UserId, UserProfile};

/// Record that a user is currently authenticated.
///
/// Only public profile fields are kept; the credential hash never reaches a
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserProfile,
    pub established_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user: UserProfile) -> Self {
        Self {
            user,
            established_at: Utc::now(),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user.id
    }

    pub fn identifier(&self) -> &str {
        &self.user.identifier
    }

    /// Time since the session was established
    pub fn age(&self) -> Duration {
        Utc::now() - self.established_at
    }

    /// Get minutes since login (for display)
    pub fn age_minutes(&self) -> i64 {
        self.age().num_minutes().max(0)
    }
}

/// The two states of the authentication state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

impl AuthState {
    pub fn of(session: Option<&Session>) -> Self {
        match session {
            Some(_) => AuthState::Authenticated,
            None => AuthState::Unauthenticated,
        }
    }
}
