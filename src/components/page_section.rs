//! Section wrapper
//!
//! Renders a `<section>` anchored at the section's DOM id and registers the
//! mounted element so navigation can scroll to it.

use apac_core::SectionId;
use dioxus::prelude::*;

use crate::context::use_page_nav;

#[derive(Props, Clone, PartialEq)]
pub struct PageSectionProps {
    /// Which registry section this element is
    pub id: SectionId,
    /// Background and padding classes
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn PageSection(props: PageSectionProps) -> Element {
    let page = use_page_nav();
    let id = props.id;
    let class = props.class.clone().unwrap_or_else(|| "page-section".to_string());

    rsx! {
        section {
            id: id.anchor(),
            class: "{class}",
            onmounted: move |evt| page.register(id, evt.data()),
            {props.children}
        }
    }
}

/// Centered title with the gradient divider and an optional lead paragraph
#[component]
pub fn SectionHeader(title: String, #[props(default)] lead: Option<String>) -> Element {
    rsx! {
        div { class: "section-header",
            h2 { class: "section-title", "{title}" }
            div { class: "section-divider gradient-fill" }
            if let Some(lead) = lead {
                p { class: "section-lead", "{lead}" }
            }
        }
    }
}
