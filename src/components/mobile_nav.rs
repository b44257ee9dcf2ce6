//! Mobile Navigation Component
//!
//! Collapsible panel under the navigation bar for screens < 768px.

use dioxus::prelude::*;

use crate::context::use_page_nav;

/// Stacked section links. Rendered only while the menu is open.
#[component]
pub fn MobileNav() -> Element {
    let page = use_page_nav();

    rsx! {
        div { class: "mobile-menu",
            for item in page.menu_items() {
                button {
                    key: "{item.id}",
                    r#type: "button",
                    class: item.mobile_class(),
                    onclick: move |_| page.go(item.id),
                    "{item.label}"
                }
            }
        }
    }
}
