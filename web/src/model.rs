//! Static link tables shared by the footer and the navigation bar.
//!
//! Everything here is `const` data compiled into both the server and the
//! WASM bundle; nothing is fetched at runtime.

// ─── Icons ───────────────────────────────────────────────────────────────────

/// Glyphs that a link can reference by name.
///
/// Rendering lives in [`crate::components::icon`]; the set is closed so the
/// mapping to SVG stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    Layers,
    MousePointer,
    Clock,
    ExternalLink,
    Shield,
    FileText,
    Github,
    Twitter,
    Linkedin,
    Mail,
    Heart,
}

impl Icon {
    pub const ALL: [Icon; 12] = [
        Icon::Home,
        Icon::Layers,
        Icon::MousePointer,
        Icon::Clock,
        Icon::ExternalLink,
        Icon::Shield,
        Icon::FileText,
        Icon::Github,
        Icon::Twitter,
        Icon::Linkedin,
        Icon::Mail,
        Icon::Heart,
    ];
}

// ─── Links ───────────────────────────────────────────────────────────────────

/// One renderable link in a footer column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkDescriptor {
    pub label: &'static str,
    /// Internal path (`/elements`), absolute URL, or `#` placeholder.
    pub target: &'static str,
    pub is_external: bool,
    pub icon: Option<Icon>,
    /// Accessible description, used as `aria-label` when present.
    pub description: Option<&'static str>,
}

impl LinkDescriptor {
    pub const fn internal(label: &'static str, target: &'static str) -> Self {
        Self {
            label,
            target,
            is_external: false,
            icon: None,
            description: None,
        }
    }

    pub const fn external(label: &'static str, target: &'static str) -> Self {
        Self {
            is_external: true,
            ..Self::internal(label, target)
        }
    }

    pub const fn with_icon(self, icon: Icon) -> Self {
        Self {
            icon: Some(icon),
            ..self
        }
    }
}

/// Icon button in the brand block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: Icon,
    /// `https://…` URL, `mailto:` URI, or `#` placeholder.
    pub target: &'static str,
}

impl SocialLink {
    /// Only web URLs open in a new browsing context; `mailto:` and `#` stay.
    pub fn opens_new_context(&self) -> bool {
        self.target.starts_with("http")
    }
}

/// Button in the bottom bar that scrolls to the top before navigating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalLink {
    pub label: &'static str,
    pub target: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

/// `true` for absolute paths such as `/` or `/terms`.
pub fn is_internal_path(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//")
}

// ─── Registry ────────────────────────────────────────────────────────────────

/// The four footer link categories, in declaration (render) order.
#[derive(Debug, Clone, Copy)]
pub struct LinkRegistry {
    pub navigation: &'static [LinkDescriptor],
    pub resources: &'static [LinkDescriptor],
    pub community: &'static [LinkDescriptor],
    /// Kept in the registry but not part of the rendered layout.
    pub company: &'static [LinkDescriptor],
}

impl LinkRegistry {
    pub const SITE: LinkRegistry = LinkRegistry {
        navigation: NAVIGATION,
        resources: RESOURCES,
        community: COMMUNITY,
        company: COMPANY,
    };
}

impl Default for LinkRegistry {
    fn default() -> Self {
        Self::SITE
    }
}

pub const REPOSITORY_URL: &str = "https://github.com/Mayur-Pagote/README_Design_Kit";
const DISCUSSIONS_URL: &str = "https://github.com/Mayur-Pagote/README_Design_Kit/discussions";
const ISSUES_URL: &str = "https://github.com/Mayur-Pagote/README_Design_Kit/issues";
const DISCORD_URL: &str = "https://discord.gg/wnF5jG7U";
const CONTACT_MAILTO: &str = "mailto:contact@readmedesignkit.com";

pub const NAVIGATION: &[LinkDescriptor] = &[
    LinkDescriptor::internal("Home", "/").with_icon(Icon::Home),
    LinkDescriptor::internal("Elements", "/elements").with_icon(Icon::Layers),
    LinkDescriptor::internal("Project Showcase", "/showcase").with_icon(Icon::Layers),
    LinkDescriptor::internal("Drag & Drop Editor", "/drag-drop").with_icon(Icon::MousePointer),
    LinkDescriptor::internal("Coming Soon", "/coming-soon").with_icon(Icon::Clock),
];

pub const RESOURCES: &[LinkDescriptor] = &[
    LinkDescriptor::external("Documentation", "#"),
    LinkDescriptor::external("Tutorials", "#"),
    LinkDescriptor::external("Templates", "#"),
    LinkDescriptor::external("API Reference", "#"),
];

pub const COMMUNITY: &[LinkDescriptor] = &[
    LinkDescriptor::external("GitHub Discussions", DISCUSSIONS_URL),
    LinkDescriptor::external("Discord Server", DISCORD_URL),
    LinkDescriptor::external("Feature Requests", ISSUES_URL),
    LinkDescriptor::external("Bug Reports", ISSUES_URL),
];

pub const COMPANY: &[LinkDescriptor] = &[
    LinkDescriptor::internal("About", "#"),
    LinkDescriptor::external("Blog", "#"),
    LinkDescriptor::internal("Careers", "#"),
    LinkDescriptor::internal("Contact", "#"),
];

pub const SOCIAL: &[SocialLink] = &[
    SocialLink { name: "GitHub", icon: Icon::Github, target: REPOSITORY_URL },
    SocialLink { name: "Twitter", icon: Icon::Twitter, target: "#" },
    SocialLink { name: "LinkedIn", icon: Icon::Linkedin, target: "#" },
    SocialLink { name: "Email", icon: Icon::Mail, target: CONTACT_MAILTO },
];

pub const LEGAL: &[LegalLink] = &[
    LegalLink {
        label: "Privacy Policy",
        target: "/privacy",
        icon: Icon::Shield,
        description: "Learn about our data collection and privacy practices",
    },
    LegalLink {
        label: "Terms of Service",
        target: "/terms",
        icon: Icon::FileText,
        description: "Read our terms of service and usage guidelines",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn categories() -> [&'static [LinkDescriptor]; 4] {
        let r = LinkRegistry::SITE;
        [r.navigation, r.resources, r.community, r.company]
    }

    #[test]
    fn labels_unique_within_category() {
        for links in categories() {
            let labels: HashSet<_> = links.iter().map(|l| l.label).collect();
            assert_eq!(labels.len(), links.len());
        }
        let legal: HashSet<_> = LEGAL.iter().map(|l| l.label).collect();
        assert_eq!(legal.len(), LEGAL.len());
    }

    #[test]
    fn targets_non_empty() {
        for links in categories() {
            assert!(links.iter().all(|l| !l.target.is_empty()));
        }
        assert!(SOCIAL.iter().all(|s| !s.target.is_empty()));
        assert!(LEGAL.iter().all(|l| !l.target.is_empty()));
    }

    #[test]
    fn navigation_order_and_paths() {
        let targets: Vec<_> = NAVIGATION.iter().map(|l| l.target).collect();
        assert_eq!(
            targets,
            ["/", "/elements", "/showcase", "/drag-drop", "/coming-soon"]
        );
        assert!(NAVIGATION.iter().all(|l| is_internal_path(l.target) && !l.is_external));
        assert!(NAVIGATION.iter().all(|l| l.icon.is_some()));
    }

    #[test]
    fn community_links_are_external_urls() {
        assert!(COMMUNITY
            .iter()
            .all(|l| l.is_external && l.target.starts_with("https://")));
    }

    #[test]
    fn social_new_context_only_for_web_urls() {
        let github = SOCIAL.iter().find(|s| s.name == "GitHub").unwrap();
        let email = SOCIAL.iter().find(|s| s.name == "Email").unwrap();
        let twitter = SOCIAL.iter().find(|s| s.name == "Twitter").unwrap();
        assert!(github.opens_new_context());
        assert!(!email.opens_new_context());
        assert!(!twitter.opens_new_context());
    }

    #[test]
    fn internal_path_detection() {
        assert!(is_internal_path("/"));
        assert!(is_internal_path("/privacy"));
        assert!(!is_internal_path("#"));
        assert!(!is_internal_path("//cdn.example.com/x"));
        assert!(!is_internal_path("https://discord.gg/wnF5jG7U"));
        assert!(!is_internal_path("mailto:contact@readmedesignkit.com"));
    }
}
