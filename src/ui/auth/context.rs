//! Auth context exposing who is signed in
//!
//! This module provides a reactive authentication context that:
//! - Stores the current user
//! - Restores a previously stored user after hydration
//! - Keeps localStorage in sync on sign in / sign out
//!
//! How users actually authenticate is handled elsewhere; pages only read
//! the resulting [`Viewer`].

use leptos::prelude::*;

use crate::core::{User, Viewer};

/// Authentication state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Initial state, checking localStorage
    #[default]
    Loading,
    /// User is not authenticated
    Unauthenticated,
    /// User is authenticated
    Authenticated(User),
}

impl AuthState {
    /// Viewer for rendering; a pending check renders as signed out
    pub fn viewer(&self) -> Viewer {
        match self {
            AuthState::Authenticated(user) => Viewer::Authenticated { user: user.clone() },
            AuthState::Loading | AuthState::Unauthenticated => Viewer::Anonymous,
        }
    }
}

/// Auth context providing authentication state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authentication state
    pub state: RwSignal<AuthState>,
}

impl AuthContext {
    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state.get(), AuthState::Authenticated(_))
    }

    /// Current viewer (tracked)
    pub fn viewer(&self) -> Viewer {
        self.state.with(AuthState::viewer)
    }

    /// Record a signed-in user
    pub fn sign_in(&self, user: User) {
        save_to_storage(&user);
        self.state.set(AuthState::Authenticated(user));
    }

    /// Forget the current user
    pub fn sign_out(&self) {
        clear_storage();
        self.state.set(AuthState::Unauthenticated);
    }
}

#[allow(dead_code)]
const STORAGE_KEY_USER: &str = "tripwise_user";

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Start with Unauthenticated on both server and client to avoid hydration mismatch
    let state = RwSignal::new(AuthState::Unauthenticated);
    let ctx = AuthContext { state };

    // Restore the stored user after hydration (client-side only)
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            state.set(AuthState::Loading);

            match load_from_storage() {
                Some(user) => state.set(AuthState::Authenticated(user)),
                None => state.set(AuthState::Unauthenticated),
            }
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Parse a stored user, discarding anything malformed
#[allow(dead_code)]
fn parse_stored_user(json: &str) -> Option<User> {
    serde_json::from_str(json).ok()
}

#[cfg(not(feature = "ssr"))]
fn load_from_storage() -> Option<User> {
    let storage = leptos::web_sys::window()?.local_storage().ok()??;
    let json = storage.get_item(STORAGE_KEY_USER).ok()??;
    let user = parse_stored_user(&json);
    if user.is_none() {
        leptos::logging::warn!("discarding malformed stored user");
        let _ = storage.remove_item(STORAGE_KEY_USER);
    }
    user
}

/// Save user to localStorage
#[cfg(not(feature = "ssr"))]
fn save_to_storage(user: &User) {
    if let Some(window) = leptos::web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            match serde_json::to_string(user) {
                Ok(json) => {
                    let _ = storage.set_item(STORAGE_KEY_USER, &json);
                }
                Err(e) => leptos::logging::warn!("failed to serialize user: {e}"),
            }
        }
    }
}

/// Clear auth data from localStorage
#[cfg(not(feature = "ssr"))]
fn clear_storage() {
    if let Some(window) = leptos::web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(STORAGE_KEY_USER);
        }
    }
}

#[cfg(feature = "ssr")]
fn save_to_storage(_user: &User) {}

#[cfg(feature = "ssr")]
fn clear_storage() {}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "42".to_string(),
            email: "lin@example.com".to_string(),
            username: "lin".to_string(),
        }
    }

    #[test]
    fn test_loading_and_signed_out_render_anonymous() {
        assert_eq!(AuthState::Loading.viewer(), Viewer::Anonymous);
        assert_eq!(AuthState::Unauthenticated.viewer(), Viewer::Anonymous);
    }

    #[test]
    fn test_authenticated_viewer_carries_user() {
        let viewer = AuthState::Authenticated(user()).viewer();
        assert_eq!(viewer, Viewer::Authenticated { user: user() });
    }

    #[test]
    fn test_parse_stored_user() {
        let json = serde_json::to_string(&user()).unwrap();
        assert_eq!(parse_stored_user(&json), Some(user()));
    }

    #[test]
    fn test_parse_stored_user_rejects_garbage() {
        assert_eq!(parse_stored_user("{\"id\": 1"), None);
        assert_eq!(parse_stored_user("{}"), None);
    }
}
