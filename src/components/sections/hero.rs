//! Hero section: headline, call-to-action buttons and team highlight.

use apac_core::content::{Icon, HERO_ACTIONS};
use apac_core::SectionId;
use apac_ui::{Badge, Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

use crate::components::{IconSize, LucideIcon, PageSection};
use crate::context::use_page_nav;

#[component]
pub fn Hero() -> Element {
    let page = use_page_nav();

    rsx! {
        PageSection { id: SectionId::Home, class: "hero".to_string(),
            div { class: "container",
                div { class: "hero-grid",
                    div { class: "hero-copy",
                        Badge { "Fortalecendo o Esporte" }
                        h1 { class: "hero-title",
                            "Associação dos "
                            span { class: "gradient-text", "Pais e Amigos" }
                        }
                        h2 { class: "hero-subtitle", "dos Patinadores Artísticos de Curitiba" }
                        p { class: "hero-lead",
                            "Unidos pela paixão do esporte, trabalhamos para fortalecer a patinação artística "
                            "através da cooperação, apoio mútuo e desenvolvimento de nossos atletas em todas "
                            "as etapas de sua jornada esportiva."
                        }
                        div { class: "hero-actions",
                            for action in HERO_ACTIONS {
                                Button {
                                    key: "{action.target}",
                                    variant: action_variant(action.primary),
                                    size: ButtonSize::Lg,
                                    onclick: move |_| page.go(action.target),
                                    "{action.label}"
                                }
                            }
                        }
                    }

                    div { class: "hero-media",
                        div {
                            class: "hero-photo gradient-fill",
                            role: "img",
                            "aria-label": "Equipe APAC com medalhas",
                        }
                        div { class: "hero-achievement",
                            LucideIcon { icon: Icon::Award, size: IconSize::Md }
                            div {
                                p { class: "contact-label", "Conquistas" }
                                p { class: "card-description", "Nacionais e Internacionais" }
                            }
                        }
                    }
                }
            }

            div { class: "scroll-hint",
                LucideIcon { icon: Icon::ChevronDown }
            }
        }
    }
}

/// Primary call to action is filled, the other outlined
fn action_variant(primary: bool) -> ButtonVariant {
    if primary {
        ButtonVariant::Gradient
    } else {
        ButtonVariant::Outline
    }
}
