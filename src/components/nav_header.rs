//! Navigation Header Component
//!
//! Desktop: Horizontal bar with the APAC mark and inline section links
//! Mobile: Links hidden, toggle button opens MobileNav below the bar

use apac_core::content::{Icon, ACRONYM};
use apac_ui::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

use crate::components::icons::LucideIcon;
use crate::components::mobile_nav::MobileNav;
use crate::context::use_page_nav;

/// Star mark plus association acronym
#[component]
pub fn BrandMark() -> Element {
    rsx! {
        div { class: "brand",
            div { class: "brand-mark gradient-fill",
                LucideIcon { icon: Icon::Star }
            }
            span { class: "brand-name gradient-text", "{ACRONYM}" }
        }
    }
}

/// Fixed navigation bar
///
/// The link matching the active section is highlighted; clicking a link
/// smooth-scrolls to its section.
#[component]
pub fn NavHeader() -> Element {
    let page = use_page_nav();
    let menu_open = page.menu_open();
    let (toggle_icon, toggle_label) = if menu_open {
        (Icon::Close, "Fechar menu")
    } else {
        (Icon::Menu, "Abrir menu")
    };

    rsx! {
        nav { class: "nav-bar",
            div { class: "container",
                div { class: "nav-inner",
                    BrandMark {}

                    // Desktop links
                    div { class: "nav-links",
                        for item in page.menu_items() {
                            button {
                                key: "{item.id}",
                                r#type: "button",
                                class: item.class(),
                                onclick: move |_| page.go(item.id),
                                "{item.label}"
                            }
                        }
                    }

                    // Mobile toggle
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Sm,
                        class: "menu-toggle".to_string(),
                        aria_label: toggle_label.to_string(),
                        onclick: move |_| page.toggle_menu(),
                        LucideIcon { icon: toggle_icon }
                    }
                }
            }

            if menu_open {
                MobileNav {}
            }
        }

        if menu_open {
            div {
                class: "menu-backdrop",
                onclick: move |_| page.close_menu(),
            }
        }
    }
}
