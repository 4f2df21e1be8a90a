//! Auth module - session state and the access guard for protected content.

mod access_guard;
mod auth_model;
mod auth_traits;
mod watch_provider;


pub use access_guard::{AccessGuard, GuardView};
pub use auth_model::{AuthState, AuthStatus, User};
pub use auth_traits::{AuthStateProvider, MockNavigator, Navigator};
pub use watch_provider::WatchAuthProvider;
