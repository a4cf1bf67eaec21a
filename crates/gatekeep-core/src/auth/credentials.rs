use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::auth::verifier::Argon2Verifier;
use crate::error::StoreError;
use crate::models::{Secret, UserId, UserProfile, UserRecord};
use crate::utils::mask_identifier;

/// Resolves identifiers to user records.
///
/// Lookups are by exact identifier. Implementations report a missing record
/// as `StoreError::NotFound` and infrastructure trouble as
/// `StoreError::Unavailable` (or `Other` for anything they can't classify).
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_identifier(&self, identifier: &str) -> Result<UserRecord, StoreError>;
}

/// In-process credential store keyed by identifier.
pub struct InMemoryCredentialStore {
    records: RwLock<HashMap<String, UserRecord>>,
    next_id: AtomicU64,
    available: AtomicBool,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            available: AtomicBool::new(true),
        }
    }

    /// Insert a record, replacing any existing record with the same identifier.
    /// Numeric ids advance the sequence so `create_user` never reuses them.
    pub async fn insert(&self, record: UserRecord) {
        if let Ok(numeric) = record.id.as_str().parse::<u64>() {
            self.next_id
                .fetch_max(numeric.saturating_add(1), Ordering::Relaxed);
        }
        self.records
            .write()
            .await
            .insert(record.identifier.clone(), record);
    }

    /// Hash `secret` and register a new user with the next sequential id
    pub async fn create_user(
        &self,
        display_name: &str,
        identifier: &str,
        secret: &Secret,
        hasher: &Argon2Verifier,
    ) -> Result<UserProfile, StoreError> {
        let credential_hash = hasher
            .hash(secret)
            .map_err(|e| anyhow::anyhow!("Failed to hash credential: {}", e))?;

        let mut records = self.records.write().await;
        if records.contains_key(identifier) {
            return Err(StoreError::Duplicate(identifier.to_string()));
        }

        let id = UserId::new(self.next_id.fetch_add(1, Ordering::Relaxed).to_string());
        let record = UserRecord::new(id, identifier, display_name, credential_hash);
        let profile = record.profile();
        records.insert(identifier.to_string(), record);

        debug!(user = %mask_identifier(identifier), id = %profile.id, "User created");
        Ok(profile)
    }

    /// Remove a record, returning it if present
    pub async fn remove(&self, identifier: &str) -> Option<UserRecord> {
        self.records.write().await.remove(identifier)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Toggle a simulated outage; while unavailable every lookup fails
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_identifier(&self, identifier: &str) -> Result<UserRecord, StoreError> {
        if !self.is_available() {
            return Err(StoreError::unavailable("in-memory store marked unavailable"));
        }
        self.records
            .read()
            .await
            .get(identifier)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}
