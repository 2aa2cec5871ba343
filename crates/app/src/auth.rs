use dioxus::prelude::*;
use shared_types::AuthUser;

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new(user: Option<AuthUser>) -> Self {
        Self {
            current_user: Signal::new(user),
        }
    }
}

/// Hook to access auth state, if an ancestor provides it.
pub fn use_auth() -> Option<AuthState> {
    try_use_context::<AuthState>()
}

/// Snapshot of the current user, `None` when signed out or when no auth
/// state is provided.
pub fn use_current_user() -> Option<AuthUser> {
    use_auth().and_then(|auth| auth.current_user.read().clone())
}
