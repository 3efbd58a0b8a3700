//! Fetched post list state for a single view.
//!
//! DESIGN
//! ======
//! Every fetching view starts in `loading` and settles exactly once into
//! either `items` or a static `error` message. Message wording is per view,
//! supplied through [`FailureMessages`].

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use leptos::prelude::*;

use crate::net::api::FetchError;
use crate::net::types::Post;

/// Static messages a view shows when its fetch fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FailureMessages {
    /// Shown when the backend answered but had no posts.
    pub empty: &'static str,
    /// Shown for transport, status, and decode failures.
    pub failed: &'static str,
}

/// Post list state owned by one mounted view.
#[derive(Clone, Debug, PartialEq)]
pub struct PostsState {
    pub items: Vec<Post>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for PostsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl PostsState {
    /// Settle from a finished fetch.
    pub fn settle(&mut self, result: Result<Vec<Post>, FetchError>, messages: FailureMessages) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                self.items.clear();
                self.error = Some(failure_message(&err, messages).to_owned());
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        !self.loading && self.error.is_none()
    }

    pub fn find(&self, id: &str) -> Option<&Post> {
        self.items.iter().find(|p| p.id == id)
    }
}

/// Pick the user-facing message for `err`.
pub fn failure_message(err: &FetchError, messages: FailureMessages) -> &'static str {
    match err {
        FetchError::Empty => messages.empty,
        FetchError::Network(_) | FetchError::Status(_) | FetchError::Malformed(_) | FetchError::Unavailable => {
            messages.failed
        }
    }
}

/// Fetch the post list once for the current view.
///
/// The returned signal starts loading and settles when the response arrives.
/// A response that lands after the view unmounted is dropped.
pub fn use_post_list(messages: FailureMessages) -> RwSignal<PostsState> {
    let state = RwSignal::new(PostsState::default());

    #[cfg(feature = "hydrate")]
    {
        let api = expect_context::<crate::config::ApiConfig>();
        let generation = crate::state::generation::RequestGeneration::default();
        let ticket = generation.begin();
        let guard = generation.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_posts(&api).await;
            if let Err(e) = &result {
                leptos::logging::warn!("posts fetch failed: {e}");
            }
            if guard.is_current(ticket) {
                state.update(|s| s.settle(result, messages));
            }
        });
        on_cleanup(move || generation.invalidate());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = messages;
    }

    state
}
