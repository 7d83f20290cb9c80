//! Session store: the access/refresh credential pair and its durable backing.
//!
//! # Design
//! - The two tokens are written and removed together; a half-present pair is
//!   treated as no session and repaired on the next load.
//! - Storage is reached through [`KeyValueBackend`] so the browser's
//!   `localStorage` and the in-memory test backend share the same logic.
//! - Token values never reach logs or `Debug` output.

use cinerent_api_models::TokenPair;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Durable key holding the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Durable key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Access/refresh credential pair for the signed-in principal.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    access_token: String,
    refresh_token: String,
}

impl Session {
    /// Build a session; both tokens must be non-blank.
    #[must_use]
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Option<Self> {
        let access_token = access_token.into();
        let refresh_token = refresh_token.into();
        if access_token.trim().is_empty() || refresh_token.trim().is_empty() {
            return None;
        }
        Some(Self {
            access_token,
            refresh_token,
        })
    }

    /// Build a session from the auth endpoints' response.
    #[must_use]
    pub fn from_pair(pair: TokenPair) -> Option<Self> {
        Self::new(pair.access_token, pair.refresh_token)
    }

    /// Bearer token attached to authorized calls.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Token used by the explicit refresh call.
    #[must_use]
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Process-wide holder of the current [`Session`].
///
/// Consumers call [`SessionStore::load`] at the start of each operation that
/// needs a credential; there are no change notifications.
pub trait SessionStore {
    /// Current session, if both tokens are present.
    fn load(&self) -> Option<Session>;
    /// Replace the stored pair.
    fn save(&self, session: &Session);
    /// Remove both tokens.
    fn clear(&self);
}

impl<S: SessionStore + ?Sized> SessionStore for Rc<S> {
    fn load(&self) -> Option<Session> {
        (**self).load()
    }

    fn save(&self, session: &Session) {
        (**self).save(session);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// Minimal string key/value storage, e.g. `window.localStorage`.
pub trait KeyValueBackend {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value.
    ///
    /// # Errors
    /// Returns a description of the storage failure (quota, disabled storage).
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    /// Delete a value; missing keys are ignored.
    fn remove(&self, key: &str);
}

/// [`SessionStore`] persisting the pair under [`ACCESS_TOKEN_KEY`] and
/// [`REFRESH_TOKEN_KEY`].
#[derive(Clone, Debug, Default)]
pub struct PersistentSessionStore<B> {
    backend: B,
}

impl<B: KeyValueBackend> PersistentSessionStore<B> {
    /// Wrap a storage backend.
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Underlying backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    fn remove_pair(&self) {
        self.backend.remove(ACCESS_TOKEN_KEY);
        self.backend.remove(REFRESH_TOKEN_KEY);
    }
}

impl<B: KeyValueBackend> SessionStore for PersistentSessionStore<B> {
    fn load(&self) -> Option<Session> {
        let access = self.backend.get(ACCESS_TOKEN_KEY);
        let refresh = self.backend.get(REFRESH_TOKEN_KEY);
        match (access, refresh) {
            (Some(access), Some(refresh)) => {
                let session = Session::new(access, refresh);
                if session.is_none() {
                    tracing::warn!("discarding blank stored credentials");
                    self.remove_pair();
                }
                session
            }
            (None, None) => None,
            _ => {
                tracing::warn!("discarding incomplete stored credential pair");
                self.remove_pair();
                None
            }
        }
    }

    fn save(&self, session: &Session) {
        let written = self
            .backend
            .set(ACCESS_TOKEN_KEY, session.access_token())
            .and_then(|()| self.backend.set(REFRESH_TOKEN_KEY, session.refresh_token()));
        match written {
            Ok(()) => tracing::info!("session stored"),
            Err(detail) => {
                tracing::error!(%detail, "failed to persist session; clearing partial state");
                self.remove_pair();
            }
        }
    }

    fn clear(&self) {
        self.remove_pair();
        tracing::info!("session cleared");
    }
}

/// In-memory [`KeyValueBackend`] used by tests and non-browser hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryBackend {
    /// Empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored entry, ordered by key.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries
            .borrow()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Session store kept purely in memory.
pub type MemorySessionStore = PersistentSessionStore<MemoryBackend>;

impl MemorySessionStore {
    /// Empty in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_requires_both_tokens() {
        assert!(Session::new("t1", "r1").is_some());
        assert!(Session::new("", "r1").is_none());
        assert!(Session::new("t1", "  ").is_none());
    }

    #[test]
    fn debug_output_redacts_tokens() {
        let session = Session::new("secret-access", "secret-refresh").unwrap();
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn save_writes_exactly_the_pair() {
        let store = MemorySessionStore::in_memory();
        let session = Session::from_pair(TokenPair {
            access_token: "t1".to_string(),
            refresh_token: "r1".to_string(),
        })
        .unwrap();
        store.save(&session);
        assert_eq!(
            store.backend().entries(),
            vec![
                (ACCESS_TOKEN_KEY.to_string(), "t1".to_string()),
                (REFRESH_TOKEN_KEY.to_string(), "r1".to_string()),
            ]
        );
        assert_eq!(store.load(), Some(session));
    }

    #[test]
    fn clear_removes_both_tokens() {
        let store = MemorySessionStore::in_memory();
        store.save(&Session::new("t1", "r1").unwrap());
        store.clear();
        assert!(store.load().is_none());
        assert!(store.backend().entries().is_empty());
    }

    #[test]
    fn half_present_pair_is_discarded() {
        let backend = MemoryBackend::new();
        backend.set(ACCESS_TOKEN_KEY, "t1").unwrap();
        let store = PersistentSessionStore::new(backend);
        assert!(store.load().is_none());
        assert!(store.backend().entries().is_empty());
    }

    struct FailingBackend {
        inner: MemoryBackend,
    }

    impl KeyValueBackend for FailingBackend {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            if key == REFRESH_TOKEN_KEY {
                return Err("quota exceeded".to_string());
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.inner.remove(key);
        }
    }

    #[test]
    fn failed_save_leaves_no_partial_pair() {
        let store = PersistentSessionStore::new(FailingBackend {
            inner: MemoryBackend::new(),
        });
        store.save(&Session::new("t1", "r1").unwrap());
        assert!(store.backend().inner.entries().is_empty());
        assert!(store.load().is_none());
    }
}
