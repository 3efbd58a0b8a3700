//! "Must read" list: posts ranked by views, two per page.

use leptos::prelude::*;

use crate::net::types::Post;
use crate::state::posts::{FailureMessages, use_post_list};
use crate::util::date::format_long_date;
use crate::util::pagination::{MUST_READ_PAGE_SIZE, Pager, sort_by_views};

const MESSAGES: FailureMessages = FailureMessages {
    empty: "No posts found.",
    failed: "Failed to load data. Please try again later.",
};

#[component]
pub fn MustRead() -> impl IntoView {
    let posts = use_post_list(MESSAGES);
    let sorted = Memo::new(move |_| posts.with(|s| sort_by_views(&s.items)));
    let page = RwSignal::new(1_usize);
    let pager = Memo::new(move |_| Pager::new(sorted.with(Vec::len), MUST_READ_PAGE_SIZE).at_page(page.get()));

    let on_previous = move |_| {
        if let Some(previous) = pager.get_untracked().previous_page() {
            page.set(previous);
        }
    };
    let on_next = move |_| {
        if let Some(next) = pager.get_untracked().next_page() {
            page.set(next);
        }
    };

    view! {
        <section class="must-read">
            <h2 class="must-read__heading">
                <span class="must-read__label">"MUST READ"</span>
            </h2>
            <Show
                when=move || !posts.with(|s| s.loading)
                fallback=|| view! { <p class="must-read__status">"Loading..."</p> }
            >
                <Show
                    when=move || posts.with(|s| s.error.is_none())
                    fallback=move || {
                        view! {
                            <p class="must-read__error">
                                {move || posts.with(|s| s.error.clone().unwrap_or_default())}
                            </p>
                        }
                    }
                >
                    <div class="must-read__list">
                        {move || {
                            sorted
                                .with(|all| pager.get().slice(all).to_vec())
                                .into_iter()
                                .map(|article| view! { <MustReadItem article=article/> })
                                .collect_view()
                        }}
                    </div>
                    <div class="must-read__pager">
                        <button
                            class="btn must-read__previous"
                            disabled=move || !pager.get().has_previous()
                            on:click=on_previous
                        >
                            "Previous"
                        </button>
                        <button
                            class="btn must-read__next"
                            disabled=move || !pager.get().has_next()
                            on:click=on_next
                        >
                            "Next"
                        </button>
                    </div>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn MustReadItem(article: Post) -> impl IntoView {
    let byline = format!(
        "By {} - {}",
        article.display_author(),
        format_long_date(article.created_at.as_deref())
    );

    view! {
        <a class="must-read__item" href=article.detail_path()>
            <img
                class="must-read__image"
                src=article.display_image().to_owned()
                alt=article.display_title().to_owned()
            />
            <span class="must-read__body">
                <h2 class="must-read__title">{article.display_title().to_owned()}</h2>
                <span class="must-read__byline">{byline}</span>
            </span>
        </a>
    }
}
