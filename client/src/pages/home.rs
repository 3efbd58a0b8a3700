//! Landing page composing the public news sections.

use leptos::prelude::*;

use crate::components::lifestyle_grid::LifestyleGrid;
use crate::components::modern_section::ModernSection;
use crate::components::must_read::MustRead;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <LifestyleGrid/>
            <div class="home-page__columns">
                <MustRead/>
                <ModernSection/>
            </div>
        </main>
    }
}
