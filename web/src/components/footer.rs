//! Site footer: brand block, link columns, legal buttons and project blurb.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::components::icon::IconGlyph;
use crate::components::ui::{cn, ghost_button_class, Separator};
use crate::model::{Icon, LinkDescriptor, LinkRegistry, LEGAL, SOCIAL};
use crate::routing::{aria_current, is_active, navigate_to_legal, AnchorAttrs, WindowViewport};

pub const BRAND: &str = "README Design Kit";
pub const COPYRIGHT: &str = "© 2025 README Design Kit. All rights reserved.";
pub const TAGLINE: &str = "Create stunning README files with our comprehensive design toolkit. \
     Beautiful components, drag-and-drop editor, and endless possibilities for your documentation.";

const LINK_CLASS: &str =
    "text-muted-foreground hover:text-foreground transition-colors flex items-center gap-2 text-sm hover:underline";
const ACTIVE_CLASS: &str = "text-foreground font-medium";
const SOCIAL_CLASS: &str =
    "h-9 w-9 p-0 transition-all hover:scale-110 focus:ring-2 focus:ring-primary focus:ring-offset-2";

// ─── Layout model ────────────────────────────────────────────────────────────

/// How a column renders its links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Router paths with icons and active-route highlighting.
    Routes,
    /// Plain anchors, marked when they leave the site.
    Outbound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub kind: ColumnKind,
    pub links: &'static [LinkDescriptor],
}

/// The rendered link columns, in order. The company list is not shown.
pub fn footer_columns(registry: &LinkRegistry) -> [FooterColumn; 3] {
    [
        FooterColumn {
            heading: "Navigation",
            kind: ColumnKind::Routes,
            links: registry.navigation,
        },
        FooterColumn {
            heading: "Resources",
            kind: ColumnKind::Outbound,
            links: registry.resources,
        },
        FooterColumn {
            heading: "Community",
            kind: ColumnKind::Outbound,
            links: registry.community,
        },
    ]
}

// ─── Components ──────────────────────────────────────────────────────────────

/// Page footer shown below every route.
#[component]
pub fn Footer() -> impl IntoView {
    view! { <FooterContent registry=LinkRegistry::SITE/> }
}

#[component]
fn FooterContent(registry: LinkRegistry) -> impl IntoView {
    let pathname = use_location().pathname;

    let columns = footer_columns(&registry)
        .into_iter()
        .map(|column| view! { <LinkColumn column=column pathname=pathname/> })
        .collect_view();

    view! {
        <footer class="bg-background border-t border-border">
            <div class="container mx-auto px-6 py-12">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-8">
                    <BrandBlock/>
                    {columns}
                </div>

                <Separator class="my-8"/>

                <div class="flex flex-col md:flex-row justify-between items-center gap-4">
                    <div class="flex items-center gap-4 text-sm text-muted-foreground">
                        <p>{COPYRIGHT}</p>
                        <span class="text-border">"•"</span>
                        <LegalLinks pathname=pathname/>
                    </div>

                    <div class="flex items-center gap-1 text-sm text-muted-foreground">
                        <span>"Made with"</span>
                        <IconGlyph icon=Icon::Heart class="h-4 w-4 text-red-500 fill-current animate-pulse"/>
                        <span>"for developers"</span>
                    </div>
                </div>

                <div class="mt-8 pt-8 border-t border-border">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 text-sm text-muted-foreground">
                        <div>
                            <h4 class="font-medium text-foreground mb-2">"Contributing to SSOC 2025"</h4>
                            <p>
                                "This project is part of Social Summer of Code 2025. \
                                 We welcome contributions from the community to make README creation easier for everyone."
                            </p>
                        </div>
                        <div>
                            <h4 class="font-medium text-foreground mb-2">"Open Source"</h4>
                            <p>
                                "README Design Kit is open source and available on GitHub. \
                                 Feel free to star the repository, report issues, or contribute new features."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}

/// Logo, tagline and social icon buttons.
#[component]
fn BrandBlock() -> impl IntoView {
    let socials = SOCIAL
        .iter()
        .map(|social| {
            let attrs = AnchorAttrs::for_social(social);
            view! {
                <a
                    href=social.target
                    target=attrs.target
                    rel=attrs.rel
                    aria-label=social.name
                    class=ghost_button_class(Some(SOCIAL_CLASS))
                >
                    <IconGlyph icon=social.icon class="h-4 w-4"/>
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="lg:col-span-2">
            <a
                href="/"
                class="flex items-center gap-3 mb-4 transition-transform hover:scale-105"
                aria-label="README Design Kit Home"
            >
                <img
                    src="/rdkd.svg"
                    alt="README Design Kit Logo - Light Mode"
                    class="h-8 object-contain block dark:hidden"
                />
                <img
                    src="/rdk.svg"
                    alt="README Design Kit Logo - Dark Mode"
                    class="h-8 object-contain hidden dark:block"
                />
            </a>
            <p class="text-muted-foreground mb-6 max-w-md">{TAGLINE}</p>
            <div class="flex gap-3">{socials}</div>
        </div>
    }
}

#[component]
fn LinkColumn(column: FooterColumn, pathname: Memo<String>) -> impl IntoView {
    let items = column
        .links
        .iter()
        .map(|&link| match column.kind {
            ColumnKind::Routes => view! { <li><RouteLink link=link pathname=pathname/></li> }.into_any(),
            ColumnKind::Outbound => view! { <li><OutboundLink link=link/></li> }.into_any(),
        })
        .collect_view();

    view! {
        <div>
            <h3 class="font-semibold text-foreground mb-4">{column.heading}</h3>
            <ul class="space-y-3">{items}</ul>
        </div>
    }
}

/// Internal link; the router intercepts the click for client-side navigation.
#[component]
fn RouteLink(link: LinkDescriptor, pathname: Memo<String>) -> impl IntoView {
    let target = link.target;
    let active = move || pathname.with(|p| is_active(p, target));

    view! {
        <a
            href=target
            class=move || cn([Some(LINK_CLASS), active().then_some(ACTIVE_CLASS)])
            aria-current=move || pathname.with(|p| aria_current(p, target))
            aria-label=link.description
        >
            {link.icon.map(|icon| view! { <IconGlyph icon=icon class="h-4 w-4"/> })}
            {link.label}
        </a>
    }
}

#[component]
fn OutboundLink(link: LinkDescriptor) -> impl IntoView {
    let attrs = AnchorAttrs::for_link(&link);

    view! {
        <a
            href=link.target
            target=attrs.target
            rel=attrs.rel
            aria-label=link.description
            class=LINK_CLASS
        >
            {link.label}
            {link
                .is_external
                .then(|| view! { <IconGlyph icon=Icon::ExternalLink class="h-3 w-3"/> })}
        </a>
    }
}

/// Privacy/terms buttons: scroll to the top, then route.
#[component]
fn LegalLinks(pathname: Memo<String>) -> impl IntoView {
    let navigate = use_navigate();
    let last = LEGAL.len().saturating_sub(1);

    LEGAL
        .iter()
        .enumerate()
        .map(|(index, link)| {
            let target = link.target;
            let navigate = navigate.clone();
            let active = move || pathname.with(|p| is_active(p, target));

            view! {
                <div class="flex items-center">
                    <button
                        type="button"
                        on:click=move |_| {
                            let router = |path: &str| navigate(path, NavigateOptions::default());
                            navigate_to_legal(&WindowViewport, &router, target);
                        }
                        class=move || {
                            cn([
                                Some("text-muted-foreground hover:text-foreground transition-all"),
                                Some("hover:underline flex items-center gap-1.5 group"),
                                active().then_some(ACTIVE_CLASS),
                            ])
                        }
                        aria-label=link.description
                        aria-current=move || pathname.with(|p| aria_current(p, target))
                    >
                        <IconGlyph icon=link.icon class="h-4 w-4 transition-transform group-hover:scale-110"/>
                        {link.label}
                    </button>
                    {(index < last).then(|| view! { <span class="text-border ml-4">"•"</span> })}
                </div>
            }
        })
        .collect_view()
}


#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;
    use crate::model::NAVIGATION;
    use leptos_router::components::Router;
    use leptos_router::location::RequestUrl;

    fn render(path: &str, registry: LinkRegistry) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(RequestUrl::new(path));
            view! { <Router><FooterContent registry=registry/></Router> }.to_html()
        })
    }

    /// Markup of the Navigation column only.
    fn navigation_column(html: &str) -> &str {
        let start = html.find("Navigation").expect("navigation heading");
        let end = html.find("Resources").expect("resources heading");
        &html[start..end]
    }

    /// The opening tag that contains `needle`.
    fn tag_with<'a>(html: &'a str, needle: &str) -> &'a str {
        let at = html
            .find(needle)
            .unwrap_or_else(|| panic!("{needle} not rendered"));
        let start = html[..at].rfind('<').unwrap();
        let end = at + html[at..].find('>').unwrap();
        &html[start..=end]
    }

    #[test]
    fn each_navigation_href_rendered_once() {
        let html = render("/", LinkRegistry::SITE);
        let column = navigation_column(&html);
        for link in NAVIGATION {
            let href = format!("href=\"{}\"", link.target);
            assert_eq!(column.matches(&href).count(), 1, "{}", link.target);
        }
    }

    #[test]
    fn only_current_route_is_active() {
        for current in ["/", "/elements"] {
            let html = render(current, LinkRegistry::SITE);
            assert_eq!(html.matches("aria-current=\"page\"").count(), 1, "{current}");

            let column = navigation_column(&html);
            for link in NAVIGATION {
                let tag = tag_with(column, &format!("href=\"{}\"", link.target));
                let active = link.target == current;
                assert_eq!(tag.contains("aria-current=\"page\""), active, "{tag}");
                assert_eq!(tag.contains(ACTIVE_CLASS), active, "{tag}");
            }
        }
    }

    #[test]
    fn terms_route_marks_terms_button() {
        let html = render("/terms", LinkRegistry::SITE);
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);

        let terms = tag_with(&html, "aria-label=\"Read our terms of service and usage guidelines\"");
        assert!(terms.starts_with("<button"), "{terms}");
        assert!(terms.contains("aria-current=\"page\""), "{terms}");
        assert!(terms.contains(ACTIVE_CLASS), "{terms}");

        let privacy = tag_with(&html, "aria-label=\"Learn about our data collection and privacy practices\"");
        assert!(!privacy.contains("aria-current"), "{privacy}");
        assert!(!privacy.contains(ACTIVE_CLASS), "{privacy}");
    }

    #[test]
    fn external_anchors_open_isolated() {
        let html = render("/", LinkRegistry::SITE);
        // 4 resources + 4 community + the GitHub social button.
        assert_eq!(html.matches("target=\"_blank\"").count(), 9);
        assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 9);

        let discord = tag_with(&html, "href=\"https://discord.gg/wnF5jG7U\"");
        assert!(discord.contains("target=\"_blank\""), "{discord}");
        assert!(discord.contains("rel=\"noopener noreferrer\""), "{discord}");

        let mail = tag_with(&html, "href=\"mailto:contact@readmedesignkit.com\"");
        assert!(!mail.contains("target="), "{mail}");
        assert!(!mail.contains("rel="), "{mail}");

        let column = navigation_column(&html);
        for link in NAVIGATION {
            let tag = tag_with(column, &format!("href=\"{}\"", link.target));
            assert!(!tag.contains("target="), "{tag}");
            assert!(!tag.contains("rel="), "{tag}");
        }
    }

    #[test]
    fn empty_navigation_keeps_layout() {
        let registry = LinkRegistry {
            navigation: &[],
            ..LinkRegistry::SITE
        };
        let html = render("/elements", registry);

        assert!(navigation_column(&html).find("<li").is_none());
        assert!(!html.contains("href=\"/elements\""));
        assert!(!html.contains("aria-current"));

        for text in [
            "README Design Kit Home",
            "Navigation",
            "Documentation",
            "API Reference",
            "Community",
            "GitHub Discussions",
            "Bug Reports",
            "All rights reserved.",
            "Privacy Policy",
            "Terms of Service",
            "for developers",
            "Contributing to SSOC 2025",
            "Open Source",
        ] {
            assert!(html.contains(text), "missing {text}");
        }
    }

    #[test]
    fn company_links_not_rendered() {
        let html = render("/", LinkRegistry::SITE);
        assert!(!html.contains("Careers"));
        assert!(!html.contains(">Blog<"));
    }
}
