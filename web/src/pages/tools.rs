//! Placeholder pages for the editor tools linked from the navigation.

use leptos::prelude::*;

#[component]
fn ToolPage(title: &'static str, summary: &'static str) -> impl IntoView {
    view! {
        <div class="tool-page">
            <h1>{title}</h1>
            <p>{summary}</p>
        </div>
    }
}

#[component]
pub fn ElementsPage() -> impl IntoView {
    view! {
        <ToolPage
            title="Elements"
            summary="Badges, headers, dividers and other building blocks for your README."
        />
    }
}

#[component]
pub fn ShowcasePage() -> impl IntoView {
    view! {
        <ToolPage
            title="Project Showcase"
            summary="READMEs built by the community with the design kit."
        />
    }
}

#[component]
pub fn DragDropPage() -> impl IntoView {
    view! {
        <ToolPage
            title="Drag & Drop Editor"
            summary="Compose a README visually by arranging elements on a canvas."
        />
    }
}

#[component]
pub fn ComingSoonPage() -> impl IntoView {
    view! {
        <ToolPage
            title="Coming Soon"
            summary="Features on the roadmap for the next releases."
        />
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! { <ToolPage title="Not Found" summary="There is no page at this address."/> }
}
