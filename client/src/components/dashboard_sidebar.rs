//! Navigation sidebar for the admin dashboard.

use leptos::prelude::*;

#[component]
pub fn DashboardSidebar() -> impl IntoView {
    view! {
        <aside class="dashboard-sidebar">
            <h2 class="dashboard-sidebar__title">"Dashboard"</h2>
            <nav class="dashboard-sidebar__nav">
                <a class="dashboard-sidebar__link" href="/dashboard">"Overview"</a>
                <a class="dashboard-sidebar__link" href="/">"Back to site"</a>
            </nav>
        </aside>
    }
}
