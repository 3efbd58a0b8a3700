//! Backend API configuration shared through Leptos context.
//!
//! The base URL is fixed at build time from `NEWSROOM_API_BASE` so the SSR
//! shell and the hydrated bundle agree on where requests go.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `NEWSROOM_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Location of the external posts/admin REST backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        Self {
            base_url: trimmed.to_owned(),
        }
    }

    /// Configuration baked in at compile time, falling back to [`DEFAULT_API_BASE`].
    pub fn from_build_env() -> Self {
        match option_env!("NEWSROOM_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::new(base),
            _ => Self::new(DEFAULT_API_BASE),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an absolute API path (e.g. `/api/posts`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
