//! Privacy policy and terms of service, reached from the footer's legal buttons.

use leptos::prelude::*;

use crate::model::LEGAL;

#[component]
fn LegalPage(target: &'static str, sections: &'static [(&'static str, &'static str)]) -> impl IntoView {
    let link = LEGAL.iter().find(|l| l.target == target);
    let title = link.map(|l| l.label).unwrap_or_default();
    let summary = link.map(|l| l.description).unwrap_or_default();

    let sections = sections
        .iter()
        .map(|&(heading, body)| {
            view! {
                <section class="legal-section">
                    <h2>{heading}</h2>
                    <p>{body}</p>
                </section>
            }
        })
        .collect_view();

    view! {
        <article class="legal-page">
            <h1>{title}</h1>
            <p class="lead">{summary}</p>
            {sections}
        </article>
    }
}

const PRIVACY: &[(&str, &str)] = &[
    (
        "Data we collect",
        "The design kit runs in your browser. READMEs you compose are not sent to our servers.",
    ),
    (
        "Third-party links",
        "Links to GitHub and Discord open those services, which apply their own privacy policies.",
    ),
    ("Contact", "Questions about privacy can be sent to contact@readmedesignkit.com."),
];

const TERMS: &[(&str, &str)] = &[
    (
        "Use of the kit",
        "You may use generated README content in any project, commercial or otherwise.",
    ),
    (
        "Contributions",
        "Contributions are accepted under the repository's open-source license.",
    ),
    ("No warranty", "The kit is provided as is, without warranty of any kind."),
];

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! { <LegalPage target="/privacy" sections=PRIVACY/> }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalPage target="/terms" sections=TERMS/> }
}
