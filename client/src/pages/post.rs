//! Post detail page reached from any list item.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend only exposes the full list, so the page fetches it once and
//! looks the post up by the `:id` route segment.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::Post;
use crate::state::posts::{FailureMessages, use_post_list};
use crate::util::date::format_long_date;

const MESSAGES: FailureMessages = FailureMessages {
    empty: "No posts available.",
    failed: "Failed to load posts. Please try again later.",
};

#[component]
pub fn PostPage() -> impl IntoView {
    let params = use_params_map();
    let posts = use_post_list(MESSAGES);
    let post_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <main class="post-page">
            <a class="post-page__back" href="/">"← Back"</a>
            {move || {
                let state = posts.get();
                if state.loading {
                    return view! { <p class="post-page__status">"Loading post..."</p> }.into_any();
                }
                if let Some(error) = state.error.clone() {
                    return view! { <p class="post-page__error">{error}</p> }.into_any();
                }
                match state.find(&post_id()) {
                    Some(post) => view! { <PostDetail post=post.clone()/> }.into_any(),
                    None => view! { <p class="post-page__error">"Post not found."</p> }.into_any(),
                }
            }}
        </main>
    }
}

#[component]
fn PostDetail(post: Post) -> impl IntoView {
    let byline = format!(
        "By {} - {}",
        post.display_author(),
        format_long_date(post.created_at.as_deref().or(post.date.as_deref()))
    );

    view! {
        <article class="post-detail">
            <span class="post-detail__category">{post.category_label().to_owned()}</span>
            <h1 class="post-detail__title">{post.display_title().to_owned()}</h1>
            <p class="post-detail__byline">{byline}</p>
            <p class="post-detail__views">{format!("{} views", post.views)}</p>
            <img
                class="post-detail__image"
                src=post.display_image().to_owned()
                alt=post.display_title().to_owned()
            />
        </article>
    }
}
