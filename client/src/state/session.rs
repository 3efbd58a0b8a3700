//! Session context carrying the admin credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`Session`] through Leptos context; the dashboard guard
//! reads the token from it instead of reaching into `localStorage` itself.
//! Tests and the server build use [`FixedSession`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Source of the current credential token.
pub trait SessionProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Reads the token from browser `localStorage`.
#[derive(Clone, Copy, Debug)]
pub struct BrowserSession {
    key: &'static str,
}

impl Default for BrowserSession {
    fn default() -> Self {
        Self { key: TOKEN_STORAGE_KEY }
    }
}

impl SessionProvider for BrowserSession {
    fn token(&self) -> Option<String> {
        crate::util::storage::read_string(self.key)
    }
}

/// A fixed token, or none.
#[derive(Clone, Debug, Default)]
pub struct FixedSession(pub Option<String>);

impl SessionProvider for FixedSession {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Cloneable handle provided via context.
#[derive(Clone)]
pub struct Session(Arc<dyn SessionProvider>);

impl Session {
    pub fn new(provider: impl SessionProvider + 'static) -> Self {
        Self(Arc::new(provider))
    }

    pub fn browser() -> Self {
        Self::new(BrowserSession::default())
    }

    pub fn fixed(token: Option<&str>) -> Self {
        Self::new(FixedSession(token.map(str::to_owned)))
    }

    /// Current token; blank tokens read as `None`.
    pub fn token(&self) -> Option<String> {
        self.0.token().filter(|t| !t.trim().is_empty())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("has_token", &self.token().is_some())
            .finish()
    }
}
