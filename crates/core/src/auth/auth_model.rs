//! Authentication state models.

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
            display_name: None,
        }
    }
}

/// Snapshot of the auth provider: who is signed in, and whether that is
/// still being resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

/// The three states the access guard distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    Unauthenticated,
    Authenticated,
}

impl AuthState {
    /// Session still being resolved.
    pub fn loading() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    /// `loading` wins over any user that may already be present.
    pub fn status(&self) -> AuthStatus {
        match (self.loading, &self.user) {
            (true, _) => AuthStatus::Loading,
            (false, None) => AuthStatus::Unauthenticated,
            (false, Some(_)) => AuthStatus::Authenticated,
        }
    }
}
