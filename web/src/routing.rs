//! Route-aware helpers: active-link matching, anchor attributes and the
//! scroll-then-navigate sequence used by the legal buttons.

use crate::model::{is_internal_path, LinkDescriptor, SocialLink};

// ─── Active route ────────────────────────────────────────────────────────────

/// Exact match between the router's current path and a link target.
///
/// No prefix matching and no trailing-slash normalisation. Targets that are
/// not internal paths (`#`, external URLs) never match.
pub fn is_active(current: &str, target: &str) -> bool {
    is_internal_path(target) && current == target
}

/// `aria-current` value for a link, `None` when it is not the current page.
pub fn aria_current(current: &str, target: &str) -> Option<&'static str> {
    is_active(current, target).then_some("page")
}

// ─── Anchor attributes ───────────────────────────────────────────────────────

/// `target`/`rel` pair for an `<a>`; both are set or neither is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorAttrs {
    pub target: Option<&'static str>,
    pub rel: Option<&'static str>,
}

impl AnchorAttrs {
    pub const NEW_CONTEXT: AnchorAttrs = AnchorAttrs {
        target: Some("_blank"),
        rel: Some("noopener noreferrer"),
    };

    pub fn new_context(open: bool) -> Self {
        if open {
            Self::NEW_CONTEXT
        } else {
            Self::default()
        }
    }

    pub fn for_link(link: &LinkDescriptor) -> Self {
        Self::new_context(link.is_external)
    }

    pub fn for_social(link: &SocialLink) -> Self {
        Self::new_context(link.opens_new_context())
    }
}

// ─── Legal navigation ────────────────────────────────────────────────────────

/// Something that can scroll the page.
pub trait Viewport {
    /// Animated scroll to `(x, y)`; returns without waiting for it to finish.
    fn smooth_scroll_to(&self, x: f64, y: f64);
}

/// Client-side route change.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path)
    }
}

/// Smooth-scroll to the top, then navigate to `target`.
///
/// Both calls fire in order and neither is awaited: navigation may happen
/// while the scroll animation is still running.
pub fn navigate_to_legal<V, N>(viewport: &V, navigator: &N, target: &str)
where
    V: Viewport + ?Sized,
    N: Navigator + ?Sized,
{
    tracing::debug!(target_path = target, "legal link activated");
    viewport.smooth_scroll_to(0.0, 0.0);
    navigator.navigate(target);
}

/// The browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    #[cfg(feature = "hydrate")]
    fn smooth_scroll_to(&self, x: f64, y: f64) {
        let options = web_sys::ScrollToOptions::new();
        options.set_left(x);
        options.set_top(y);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        leptos::prelude::window().scroll_to_with_scroll_to_options(&options);
    }

    // No window outside the browser; event handlers never run server-side.
    #[cfg(not(feature = "hydrate"))]
    fn smooth_scroll_to(&self, x: f64, y: f64) {
        tracing::trace!(x, y, "smooth_scroll_to without a window");
    }
}
