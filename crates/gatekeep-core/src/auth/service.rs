use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use crate::auth::credentials::CredentialStore;
use crate::auth::session::{AuthState, Session};
use crate::auth::verifier::CredentialVerifier;
use crate::config::AuthConfig;
use crate::error::{AuthError, ErrorPresentation, StoreError};
use crate::models::{CredentialHash, LoginRequest, Secret, UserProfile};
use crate::utils::mask_identifier;

/// Authenticates login requests and tracks at most one active session.
///
/// Authenticate calls are serialized so that lookup, verification and commit
/// appear atomic to one another. The session is published through a watch
/// channel, so readers always see either the previous or the new session.
pub struct AuthenticationService {
    store: Arc<dyn CredentialStore>,
    verifier: Arc<dyn CredentialVerifier>,
    presentation: ErrorPresentation,
    session: watch::Sender<Option<Session>>,
    commit_lock: Mutex<()>,
    decoy: Option<CredentialHash>,
}

impl AuthenticationService {
    pub fn new(store: Arc<dyn CredentialStore>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        let (session, _) = watch::channel(None);
        let decoy = verifier.decoy_hash();
        Self {
            store,
            verifier,
            presentation: ErrorPresentation::default(),
            session,
            commit_lock: Mutex::new(()),
            decoy,
        }
    }

    /// Build a service with the configured verifier cost and presentation policy
    pub fn with_config(store: Arc<dyn CredentialStore>, config: &AuthConfig) -> anyhow::Result<Self> {
        let verifier = config.verifier()?;
        Ok(Self::new(store, Arc::new(verifier)).with_presentation(config.error_presentation))
    }

    pub fn with_presentation(mut self, presentation: ErrorPresentation) -> Self {
        self.presentation = presentation;
        self
    }

    pub fn presentation(&self) -> ErrorPresentation {
        self.presentation
    }

    /// Verify `request` against the store and, on success, replace the session.
    ///
    /// Any failure (or dropping the future before it completes) leaves the
    /// current session exactly as it was.
    pub async fn authenticate(&self, request: LoginRequest) -> Result<UserProfile, AuthError> {
        if !request.is_well_formed() {
            return Err(self.reject(AuthError::invalid_credential(request.identifier)));
        }

        let _guard = self.commit_lock.lock().await;

        let record = match self.store.find_by_identifier(&request.identifier).await {
            Ok(record) => record,
            Err(StoreError::NotFound) => {
                // Unknown identifiers pay for a verification too, so latency
                // doesn't reveal which accounts exist
                if let Some(decoy) = &self.decoy {
                    self.verify_off_runtime(&request.secret, decoy).await;
                }
                return Err(self.reject(AuthError::user_not_found(request.identifier)));
            }
            Err(e) => return Err(self.reject(Self::classify_store_error(&request.identifier, e))),
        };

        if !self
            .verify_off_runtime(&request.secret, &record.credential_hash)
            .await
        {
            return Err(self.reject(AuthError::invalid_credential(request.identifier)));
        }

        let profile = record.profile();

        self.session.send_replace(Some(Session::new(profile.clone())));
        info!(user = %mask_identifier(&profile.identifier), id = %profile.id, "Login successful");
        Ok(profile)
    }

    /// Snapshot of the current session, if any
    pub fn current_session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    /// Clear the session. Calling this without a session is a no-op.
    pub fn logout(&self) {
        let cleared = self.session.send_if_modified(|session| session.take().is_some());
        if cleared {
            info!("Logged out");
        } else {
            debug!("Logout without an active session");
        }
    }

    pub fn state(&self) -> AuthState {
        AuthState::of(self.session.borrow().as_ref())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state() == AuthState::Authenticated
    }

    /// Watch session transitions. Failed logins never notify.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.session.subscribe()
    }

    /// End-user message for `err` under this service's presentation policy
    pub fn public_message(&self, err: &AuthError) -> String {
        err.public_message(self.presentation)
    }

    /// Run the verifier on the blocking pool. If the caller drops the future
    /// the result is discarded and nothing is committed.
    async fn verify_off_runtime(&self, secret: &Secret, stored: &CredentialHash) -> bool {
        let verifier = Arc::clone(&self.verifier);
        let secret = secret.clone();
        let stored = stored.clone();
        match tokio::task::spawn_blocking(move || verifier.verify(&secret, &stored)).await {
            Ok(matched) => matched,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => {
                warn!(error = %e, "Credential verification was cancelled");
                false
            }
        }
    }

    /// Map a collaborator failure into the taxonomy. Only an explicit
    /// `NotFound` means the user doesn't exist.
    fn classify_store_error(identifier: &str, err: StoreError) -> AuthError {
        match err {
            StoreError::NotFound => AuthError::user_not_found(identifier),
            StoreError::Unavailable { reason } => AuthError::store_unavailable(identifier, &reason),
            // Registration conflicts have no meaning for a lookup; the store misbehaved
            StoreError::Duplicate(existing) => AuthError::store_unavailable(
                identifier,
                &format!("store reported a registration conflict during lookup: {}", existing),
            ),
            StoreError::Other(e) => AuthError::store_unavailable(identifier, &format!("{:#}", e)),
        }
    }

    fn reject(&self, err: AuthError) -> AuthError {
        let user = mask_identifier(err.identifier());
        match &err {
            AuthError::StoreUnavailable { reason, .. } => {
                warn!(user = %user, kind = err.kind().as_str(), reason = %reason, "Credential store unavailable");
            }
            _ => {
                warn!(user = %user, kind = err.kind().as_str(), "Login rejected");
            }
        }
        err
    }
}
