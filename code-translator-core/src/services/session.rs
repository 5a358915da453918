//! Session/identity context

use std::sync::Arc;

use tokio::sync::watch;

use crate::types::Identity;

/// Snapshot of the session published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub identity: Option<Identity>,
    /// Incremented every time the identity actually changes.
    pub epoch: u64,
}

/// Current authenticated identity, shared between the services that need it.
///
/// Cloning is cheap; every clone observes the same session. Sign-in and
/// sign-out are driven by the embedding application; services only read.
#[derive(Debug, Clone)]
pub struct SessionContext {
    tx: Arc<watch::Sender<SessionState>>,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionState::default());
        Self { tx: Arc::new(tx) }
    }

    /// Session that starts signed in as `identity`.
    #[must_use]
    pub fn signed_in(identity: Identity) -> Self {
        let session = Self::new();
        session.sign_in(identity);
        session
    }

    #[must_use]
    pub fn current(&self) -> Option<Identity> {
        self.tx.borrow().identity.clone()
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.tx.borrow().epoch
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    /// Switch to `identity`. Signing in again as the same user is a no-op.
    ///
    /// Returns whether the identity changed.
    pub fn sign_in(&self, identity: Identity) -> bool {
        let changed = self.tx.send_if_modified(|state| {
            let same_user = state
                .identity
                .as_ref()
                .is_some_and(|current| current.user_id == identity.user_id);
            if same_user {
                return false;
            }
            state.identity = Some(identity);
            state.epoch += 1;
            true
        });
        if changed {
            log::info!("Session identity changed (epoch {})", self.epoch());
        }
        changed
    }

    /// Drop the identity. Returns whether anyone was signed in.
    pub fn sign_out(&self) -> bool {
        let changed = self.tx.send_if_modified(|state| {
            if state.identity.is_none() {
                return false;
            }
            state.identity = None;
            state.epoch += 1;
            true
        });
        if changed {
            log::info!("Signed out (epoch {})", self.epoch());
        }
        changed
    }

    /// Receiver notified on every identity change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
