use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use super::AuthState;

/// Source of authentication state.
///
/// Passed explicitly to whoever needs it instead of being looked up from an
/// ambient context.
pub trait AuthStateProvider: Send + Sync {
    /// The state right now.
    fn current(&self) -> AuthState;

    /// A receiver that observes every subsequent state change.
    fn subscribe(&self) -> watch::Receiver<AuthState>;
}

/// Client-side navigation primitive.
pub trait Navigator: Send + Sync {
    /// Replace the current location with `path`.
    fn redirect(&self, path: &str);
}

/// Mock navigator for testing - records redirect targets.
#[derive(Clone, Default)]
pub struct MockNavigator {
    redirects: Arc<Mutex<Vec<String>>>,
}

impl MockNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for MockNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.lock().unwrap().push(path.to_string());
    }
}
