//! Lifestyle news grid with category tabs.
//!
//! DESIGN
//! ======
//! Posts are fetched once on mount. Switching tabs only re-filters the list
//! already in memory; nothing is refetched.

use leptos::prelude::*;

use crate::net::types::Post;
use crate::state::posts::{FailureMessages, use_post_list};
use crate::util::category::{CategoryFilter, filter_posts, primary_grid, secondary_grid};
use crate::util::date::format_short_date;

const MESSAGES: FailureMessages = FailureMessages {
    empty: "No posts available.",
    failed: "Failed to load posts. Please try again later.",
};

/// Four-up primary grid plus a four-item secondary list, filtered by tab.
#[component]
pub fn LifestyleGrid() -> impl IntoView {
    let posts = use_post_list(MESSAGES);
    let active = RwSignal::new(CategoryFilter::default());
    let filtered = Memo::new(move |_| posts.with(|s| filter_posts(&s.items, active.get())));

    view! {
        <section class="lifestyle">
            <Show
                when=move || !posts.with(|s| s.loading)
                fallback=|| view! { <p class="lifestyle__status">"Loading posts..."</p> }
            >
                <Show
                    when=move || posts.with(|s| s.error.is_none())
                    fallback=move || {
                        view! {
                            <p class="lifestyle__error">
                                {move || posts.with(|s| s.error.clone().unwrap_or_default())}
                            </p>
                        }
                    }
                >
                    <div class="lifestyle__header">
                        <h1 class="lifestyle__title">"LIFESTYLE NEWS"</h1>
                        <nav class="lifestyle__tabs">
                            {CategoryFilter::ALL
                                .into_iter()
                                .map(|category| {
                                    view! {
                                        <button
                                            class="lifestyle__tab"
                                            class:lifestyle__tab--active=move || active.get() == category
                                            on:click=move |_| active.set(category)
                                        >
                                            {category.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </div>

                    <div class="lifestyle__primary">
                        {move || {
                            filtered
                                .with(|f| primary_grid(f).to_vec())
                                .into_iter()
                                .map(|post| view! { <PrimaryCard post=post/> })
                                .collect_view()
                        }}
                    </div>

                    <div class="lifestyle__secondary">
                        {move || {
                            filtered
                                .with(|f| secondary_grid(f).to_vec())
                                .into_iter()
                                .map(|post| view! { <SecondaryItem post=post/> })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn PrimaryCard(post: Post) -> impl IntoView {
    let byline = format!("{} - {}", post.display_author(), format_short_date(post.date.as_deref()));

    view! {
        <a class="lifestyle__card" href=post.detail_path()>
            <span class="lifestyle__media">
                <img
                    class="lifestyle__image"
                    src=post.display_image().to_owned()
                    alt=post.display_title().to_owned()
                />
                <span class="lifestyle__badge">{post.category_label().to_owned()}</span>
            </span>
            <h2 class="lifestyle__card-title">{post.display_title().to_owned()}</h2>
            <p class="lifestyle__byline">{byline}</p>
        </a>
    }
}

#[component]
fn SecondaryItem(post: Post) -> impl IntoView {
    view! {
        <a class="lifestyle__item" href=post.detail_path()>
            <img
                class="lifestyle__thumb"
                src=post.display_image().to_owned()
                alt=post.display_title().to_owned()
            />
            <span class="lifestyle__item-body">
                <h3 class="lifestyle__item-title">{post.display_title().to_owned()}</h3>
                <p class="lifestyle__item-date">{format_short_date(post.date.as_deref())}</p>
            </span>
        </a>
    }
}
