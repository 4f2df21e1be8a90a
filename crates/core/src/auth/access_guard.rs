//! Access guard: renders protected content only for signed-in users.
//!
//! The guard holds no state of its own. Each evaluation is a pure function
//! of the [`AuthState`] it is given:
//!
//! | `loading` | `user` | Result |
//! |---|---|---|
//! | true | any | [`GuardView::Loading`] |
//! | false | none | redirect to the login path, [`GuardView::Redirect`] |
//! | false | some | [`GuardView::Content`] |

use std::sync::Arc;

use log::{debug, info};
use tokio::sync::watch;

use super::{AuthState, AuthStatus, Navigator};
use crate::config::Config;
use crate::constants::DEFAULT_LOGIN_PATH;

/// What the guard renders for a given auth state.
#[derive(Debug, PartialEq, Eq)]
pub enum GuardView<'a, C> {
    /// Placeholder while the session is being resolved.
    Loading,
    /// A redirect to this path was issued; nothing is rendered.
    Redirect(&'a str),
    /// The protected content, unchanged.
    Content(&'a C),
}

pub struct AccessGuard<C> {
    children: C,
    login_path: String,
    navigator: Arc<dyn Navigator>,
}

impl<C> AccessGuard<C> {
    pub fn new(children: C, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            children,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            navigator,
        }
    }

    /// Guard using the login path from configuration.
    pub fn from_config(children: C, navigator: Arc<dyn Navigator>, config: &Config) -> Self {
        Self::new(children, navigator).with_login_path(config.login_path.clone())
    }

    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Evaluates the guard once. The only side effect is the redirect issued
    /// for an unauthenticated state.
    pub fn evaluate(&self, state: &AuthState) -> GuardView<'_, C> {
        match state.status() {
            AuthStatus::Loading => GuardView::Loading,
            AuthStatus::Unauthenticated => {
                self.navigator.redirect(&self.login_path);
                GuardView::Redirect(&self.login_path)
            }
            AuthStatus::Authenticated => GuardView::Content(&self.children),
        }
    }

    /// Re-evaluates on every state change published to `rx`, passing each
    /// result to `render`. Returns once the provider side is dropped.
    pub async fn watch<F>(&self, mut rx: watch::Receiver<AuthState>, mut render: F)
    where
        F: FnMut(GuardView<'_, C>),
    {
        let mut previous: Option<AuthStatus> = None;

        loop {
            let state = rx.borrow_and_update().clone();
            let status = state.status();
            if previous != Some(status) {
                info!("Access guard: {:?} -> {:?}", previous, status);
                previous = Some(status);
            }

            render(self.evaluate(&state));

            if rx.changed().await.is_err() {
                debug!("Auth provider closed, access guard unmounted");
                break;
            }
        }
    }
}
