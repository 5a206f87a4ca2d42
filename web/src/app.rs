//! Root Leptos application component with routing.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{footer::Footer, nav::Nav};
use crate::pages::{
    home::Home,
    legal::{PrivacyPage, TermsPage},
    tools::{ComingSoonPage, DragDropPage, ElementsPage, NotFound, ShowcasePage},
};

/// HTML document wrapping the app for server-side rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// The root `<App/>` component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/rdk-web.css"/>
        <Title text="README Design Kit"/>
        <Meta name="description" content="Design toolkit for README files"/>

        <Router>
            <Nav/>
            <main class="main-content">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("/elements") view=ElementsPage/>
                    <Route path=path!("/showcase") view=ShowcasePage/>
                    <Route path=path!("/drag-drop") view=DragDropPage/>
                    <Route path=path!("/coming-soon") view=ComingSoonPage/>
                    <Route path=path!("/privacy") view=PrivacyPage/>
                    <Route path=path!("/terms") view=TermsPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
