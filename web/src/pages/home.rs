//! Landing page.

use leptos::prelude::*;

use crate::components::footer::{BRAND, TAGLINE};
use crate::model::NAVIGATION;

#[component]
pub fn Home() -> impl IntoView {
    // Skip "Home" itself.
    let tools = NAVIGATION
        .iter()
        .skip(1)
        .map(|link| {
            view! {
                <li>
                    <a href=link.target class="tool-link">{link.label}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="home-page">
            <h1>{BRAND}</h1>
            <p class="lead">{TAGLINE}</p>
            <ul class="tool-list">{tools}</ul>
        </div>
    }
}
