use log::debug;
use tokio::sync::watch;

use super::{AuthState, AuthStateProvider, User};

/// Auth provider backed by a `tokio::sync::watch` channel.
///
/// Starts in the loading state. Every update is broadcast to all
/// subscribers; dropping the provider closes their receivers.
pub struct WatchAuthProvider {
    tx: watch::Sender<AuthState>,
}

impl WatchAuthProvider {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(AuthState::loading());
        Self { tx }
    }

    pub fn set_loading(&self) {
        self.publish(AuthState::loading());
    }

    pub fn sign_in(&self, user: User) {
        self.publish(AuthState::signed_in(user));
    }

    pub fn sign_out(&self) {
        self.publish(AuthState::signed_out());
    }

    fn publish(&self, state: AuthState) {
        debug!("Auth state -> {:?}", state.status());
        self.tx.send_replace(state);
    }
}

impl Default for WatchAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStateProvider for WatchAuthProvider {
    fn current(&self) -> AuthState {
        self.tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.tx.subscribe()
    }
}
