//! REST helpers for the external posts/admin backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`FetchError::Unavailable`] since these
//! requests are only issued from the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-success statuses, undecodable bodies, and empty
//! post lists are all distinct [`FetchError`] variants so callers can pick a
//! message, but none of them panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AdminStatus, Post, PostsEnvelope};
use crate::config::ApiConfig;

pub const POSTS_PATH: &str = "/api/posts";
pub const CHECK_ADMIN_PATH: &str = "/api/check-admin";

/// Failure classes for backend calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("no posts available")]
    Empty,
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Decode a `/api/posts` body. Individual posts that cannot be shown (no
/// id, not an object) are skipped; if none remain the result is
/// [`FetchError::Empty`].
///
/// # Errors
///
/// Returns [`FetchError::Malformed`] if the body is not the expected JSON
/// envelope, or [`FetchError::Empty`] if it holds no displayable posts.
pub fn parse_posts_body(body: &str) -> Result<Vec<Post>, FetchError> {
    let envelope: PostsEnvelope = serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    let posts = envelope.into_posts();
    if posts.is_empty() {
        return Err(FetchError::Empty);
    }
    Ok(posts)
}

/// Decode a `/api/check-admin` response. Only a 200 counts as an answer.
///
/// # Errors
///
/// Returns [`FetchError::Status`] for any status other than 200 and
/// [`FetchError::Malformed`] if the body cannot be decoded.
pub fn parse_admin_response(status: u16, body: &str) -> Result<bool, FetchError> {
    if status != 200 {
        return Err(FetchError::Status(status));
    }
    let admin: AdminStatus = serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    Ok(admin.is_admin)
}

/// Fetch every post from `GET /api/posts`.
///
/// # Errors
///
/// Returns a [`FetchError`] on transport failure, non-2xx status, malformed
/// body, empty list, or when called outside the browser.
pub async fn fetch_posts(api: &ApiConfig) -> Result<Vec<Post>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api.endpoint(POSTS_PATH);
        log::debug!("GET {url}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| FetchError::Malformed(e.to_string()))?;
        parse_posts_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api;
        Err(FetchError::Unavailable)
    }
}

/// Ask `GET /api/check-admin` whether `token` belongs to an admin.
///
/// # Errors
///
/// Returns a [`FetchError`] on transport failure, any non-200 status, a
/// malformed body, or when called outside the browser.
pub async fn check_admin(api: &ApiConfig, token: &str) -> Result<bool, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api.endpoint(CHECK_ADMIN_PATH);
        log::debug!("GET {url}");
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = resp.status();
        if status != 200 {
            return Err(FetchError::Status(status));
        }
        let body = resp.text().await.map_err(|e| FetchError::Malformed(e.to_string()))?;
        parse_admin_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, token);
        Err(FetchError::Unavailable)
    }
}
