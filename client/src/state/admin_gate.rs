//! Admin gate for the dashboard shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard layout resolves a [`GateState`] once per mount. The gate
//! fails closed: no token, any non-200 answer, or any request failure all
//! end in [`GateState::Unauthorized`].

#[cfg(test)]
#[path = "admin_gate_test.rs"]
mod admin_gate_test;

use std::future::Future;

use crate::config::ApiConfig;
use crate::net::api::{self, FetchError};

/// Message shown before redirecting a non-admin away from the dashboard.
pub const NOT_ADMIN_MESSAGE: &str = "You are not an admin";

/// Route non-admins are sent to.
pub const UNAUTHORIZED_REDIRECT: &str = "/";

/// Dashboard guard state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Checking,
    Authorized,
    Unauthorized,
}

impl GateState {
    pub fn from_check(result: Result<bool, FetchError>) -> Self {
        match result {
            Ok(true) => GateState::Authorized,
            Ok(false) | Err(_) => GateState::Unauthorized,
        }
    }

    /// Whether the sidebar and nested outlet may render.
    pub fn shows_content(self) -> bool {
        self == GateState::Authorized
    }

    /// Where to send the user once the gate settles, if anywhere.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            GateState::Unauthorized => Some(UNAUTHORIZED_REDIRECT),
            GateState::Checking | GateState::Authorized => None,
        }
    }

    /// Placeholder text while nested content is withheld.
    pub fn status_text(self) -> &'static str {
        match self {
            GateState::Checking => "Loading...",
            GateState::Authorized => "",
            GateState::Unauthorized => "Redirecting...",
        }
    }
}

/// Performs the authenticated admin check.
pub trait AdminChecker {
    fn check_admin(&self, token: &str) -> impl Future<Output = Result<bool, FetchError>>;
}

/// [`AdminChecker`] backed by `GET /api/check-admin`.
#[derive(Clone, Debug)]
pub struct HttpAdminChecker {
    api: ApiConfig,
}

impl HttpAdminChecker {
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }
}

impl AdminChecker for HttpAdminChecker {
    fn check_admin(&self, token: &str) -> impl Future<Output = Result<bool, FetchError>> {
        api::check_admin(&self.api, token)
    }
}

/// Resolve the gate. Without a token no request is made.
pub async fn resolve_gate<C: AdminChecker>(token: Option<String>, checker: &C) -> GateState {
    let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
        return GateState::Unauthorized;
    };
    let result = checker.check_admin(&token).await;
    if let Err(e) = &result {
        leptos::logging::warn!("admin check failed: {e}");
    }
    GateState::from_check(result)
}
