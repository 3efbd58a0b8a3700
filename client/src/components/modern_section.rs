//! Static "Make it Modern" promotional section.

use leptos::prelude::*;

const CARD_IMAGE: &str = "https://via.placeholder.com/300x200";
const CARD_TAG: &str = "Make it Modern";

/// `(image alt, headline)` for each card, in display order.
pub const MODERN_CARDS: [(&str, &str); 4] = [
    ("Urban Kitchen", "Urban Kitchen with Granite Tops, Exposed Bulb Lights and Island"),
    ("Modern Bathroom", "Modern Bathroom with Metro Rocks, Large Plant and Neutral Tiles"),
    ("Luxe Hallway", "Luxe Hallway with Chess Table Flooring and Large Rounded Windows"),
    ("Lighthouse Paint Job", "Man Agrees to Complete $50,000 Hereford Lighthouse Paint Job"),
];

#[component]
pub fn ModernSection() -> impl IntoView {
    view! {
        <section class="modern">
            <div class="modern__header">
                <h2 class="modern__title">"MAKE IT MODERN"</h2>
            </div>
            <div class="modern__grid">
                {MODERN_CARDS
                    .into_iter()
                    .map(|(alt, headline)| {
                        view! {
                            <div class="modern__card">
                                <img class="modern__image" src=CARD_IMAGE alt=alt/>
                                <span class="modern__tag">{CARD_TAG}</span>
                                <h3 class="modern__headline">{headline}</h3>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
