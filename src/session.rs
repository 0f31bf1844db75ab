//! Session Context
//!
//! Holds the bearer token for the current app instance, provided via the
//! Leptos Context API. Only `login`/`logout` mutate the token; everything
//! else reads it. The session itself never calls the remote API.

use leptos::prelude::*;

const TOKEN_KEY: &str = "taskbox.token";

/// Pure credential holder behind the context signal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    token: Option<String>,
}

impl SessionState {
    /// Resume from a token that survived a page reload, if any
    pub fn hydrate(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn login(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn logout(&mut self) {
        self.token = None;
    }

    /// True iff a token is present
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// App-wide session state provided via context; mirrors the token into
/// localStorage so a reload keeps the user signed in.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl SessionContext {
    /// Create the session for this app instance, hydrating any token that
    /// survived a page reload.
    pub fn load() -> Self {
        let token = local_storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten());
        Self {
            state: RwSignal::new(SessionState::hydrate(token)),
        }
    }

    /// Store the credential; every subsequent task request attaches it
    pub fn login(&self, token: String) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, &token);
        }
        self.state.update(|state| state.login(token));
    }

    /// Drop the credential; the auth gate closes on the next reactive pass
    pub fn logout(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
        self.state.update(|state| state.logout());
    }

    /// Reactive: true iff a token is present
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|state| state.is_authenticated())
    }

    /// Snapshot of the current token for an outbound request
    pub fn token(&self) -> Option<String> {
        self.state
            .with_untracked(|state| state.token().map(String::from))
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Get the session from context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_then_logout() {
        let mut session = SessionState::default();
        assert!(!session.is_authenticated());

        session.login("tok".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok"));

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_hydrate() {
        assert!(!SessionState::hydrate(None).is_authenticated());

        let resumed = SessionState::hydrate(Some("persisted".to_string()));
        assert!(resumed.is_authenticated());
        assert_eq!(resumed.token(), Some("persisted"));
    }

    #[test]
    fn test_login_replaces_token() {
        let mut session = SessionState::hydrate(Some("old".to_string()));
        session.login("new".to_string());
        assert_eq!(session.token(), Some("new"));
    }
}
