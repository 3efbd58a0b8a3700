//! Admin dashboard shell and its overview page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `DashboardLayout` is the parent route for `/dashboard`. It resolves the
//! admin gate once per mount and only then renders the sidebar and the nested
//! route outlet. Non-admins get an alert and are sent back to `/`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_sidebar::DashboardSidebar;
use crate::state::admin_gate::GateState;
use crate::state::posts::{FailureMessages, use_post_list};
use crate::util::date::format_short_date;
use crate::util::pagination::sort_by_views;

const OVERVIEW_MESSAGES: FailureMessages = FailureMessages {
    empty: "No posts available.",
    failed: "Failed to load posts. Please try again later.",
};

/// Gated layout: sidebar plus nested content once the user is a confirmed admin.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let gate = RwSignal::new(GateState::default());
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        use crate::state::admin_gate::{HttpAdminChecker, resolve_gate};
        use crate::state::generation::RequestGeneration;
        use crate::state::session::Session;

        let checker = HttpAdminChecker::new(expect_context::<crate::config::ApiConfig>());
        let token = expect_context::<Session>().token();
        let generation = RequestGeneration::default();
        let ticket = generation.begin();
        let guard = generation.clone();
        leptos::task::spawn_local(async move {
            let next = resolve_gate(token, &checker).await;
            if guard.is_current(ticket) {
                gate.set(next);
            }
        });
        on_cleanup(move || generation.invalidate());
    }

    Effect::new(move || {
        if let Some(target) = gate.get().redirect_target() {
            notify_not_admin();
            navigate(target, NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || gate.get().shows_content()
            fallback=move || {
                view! {
                    <div class="dashboard-shell dashboard-shell--pending">
                        <p>{move || gate.get().status_text()}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-shell">
                <DashboardSidebar/>
                <div class="dashboard-shell__content">
                    <Outlet/>
                </div>
            </div>
        </Show>
    }
}

fn notify_not_admin() {
    let message = crate::state::admin_gate::NOT_ADMIN_MESSAGE;
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                leptos::logging::warn!("{message}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::warn!("{message}");
    }
}

/// Dashboard index: every post ranked by views.
#[component]
pub fn DashboardOverview() -> impl IntoView {
    let posts = use_post_list(OVERVIEW_MESSAGES);

    view! {
        <section class="dashboard-overview">
            <h1 class="dashboard-overview__title">"Posts"</h1>
            {move || {
                let state = posts.get();
                if state.loading {
                    return view! { <p>"Loading posts..."</p> }.into_any();
                }
                if let Some(error) = state.error.clone() {
                    return view! { <p class="dashboard-overview__error">{error}</p> }.into_any();
                }
                let rows = sort_by_views(&state.items)
                    .into_iter()
                    .map(|post| {
                        view! {
                            <tr>
                                <td>
                                    <a href=post.detail_path()>{post.display_title().to_owned()}</a>
                                </td>
                                <td>{post.category_label().to_owned()}</td>
                                <td>{post.views.to_string()}</td>
                                <td>{format_short_date(post.created_at.as_deref().or(post.date.as_deref()))}</td>
                            </tr>
                        }
                    })
                    .collect_view();
                view! {
                    <table class="dashboard-overview__table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Category"</th>
                                <th>"Views"</th>
                                <th>"Created"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                }
                    .into_any()
            }}
        </section>
    }
}
