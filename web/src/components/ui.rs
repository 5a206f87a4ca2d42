//! Small styling primitives: class-name merging, button classes, divider.

use leptos::prelude::*;

/// Join class fragments, skipping `None` and blank entries.
pub fn cn<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap \
     rounded-md text-sm font-medium transition-colors focus-visible:outline-none \
     disabled:pointer-events-none disabled:opacity-50";
const GHOST: &str = "hover:bg-accent hover:text-accent-foreground";
const SMALL: &str = "h-8 rounded-md px-3 text-xs";

/// Small ghost-button styling for an element that acts as a button (e.g. an `<a>`).
pub fn ghost_button_class(extra: Option<&str>) -> String {
    cn([Some(BUTTON_BASE), Some(GHOST), Some(SMALL), extra])
}

/// Thin horizontal rule.
#[component]
pub fn Separator(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <div
            role="none"
            class=cn([Some("shrink-0 bg-border h-[1px] w-full"), Some(class)])
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cn_skips_empty_parts() {
        assert_eq!(cn([Some("a"), None, Some("  "), Some(" b ")]), "a b");
        assert_eq!(cn([None, None]), "");
    }

    #[test]
    fn cn_with_conditional_fragment() {
        let active = true;
        let class = cn([Some("text-sm"), active.then_some("font-medium")]);
        assert_eq!(class, "text-sm font-medium");
    }

    #[test]
    fn ghost_small_button() {
        let class = ghost_button_class(Some("h-9 w-9 p-0"));
        assert!(class.starts_with("inline-flex"));
        assert!(class.contains("hover:bg-accent"));
        assert!(class.contains("px-3"));
        assert!(class.ends_with("h-9 w-9 p-0"));
    }
}
