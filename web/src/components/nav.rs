//! Top navigation bar component.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::footer::BRAND;
use crate::components::icon::IconGlyph;
use crate::components::ui::cn;
use crate::model::NAVIGATION;
use crate::routing::{aria_current, is_active};

/// Site-wide navigation bar, driven by the same table as the footer column.
#[component]
pub fn Nav() -> impl IntoView {
    let pathname = use_location().pathname;

    let links = NAVIGATION
        .iter()
        .map(|link| {
            let target = link.target;
            view! {
                <a
                    href=target
                    class=move || {
                        let active = pathname.with(|p| is_active(p, target));
                        cn([Some("nav-link"), active.then_some("active")])
                    }
                    aria-current=move || pathname.with(|p| aria_current(p, target))
                >
                    {link.icon.map(|icon| view! { <IconGlyph icon=icon class="h-4 w-4"/> })}
                    <span>{link.label}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="nav-bar">
            <div class="nav-brand">
                <a href="/" class="nav-logo">{BRAND}</a>
            </div>
            <div class="nav-links">{links}</div>
        </nav>
    }
}
