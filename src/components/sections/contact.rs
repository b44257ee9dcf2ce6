//! "Entre em Contato" section: contact channels and social links.

use apac_core::content::{CONTACT_CHANNELS, SOCIAL_LINKS};
use apac_core::SectionId;
use apac_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use dioxus::prelude::*;

use crate::components::{IconSize, LucideIcon, PageSection, SectionHeader};

#[component]
pub fn Contact() -> Element {
    rsx! {
        PageSection { id: SectionId::Contact, class: "page-section section-slate".to_string(),
            div { class: "container",
                SectionHeader {
                    title: "Entre em Contato",
                    lead: "Estamos sempre prontos para atender você. Entre em contato conosco \
                           ou nos siga nas redes sociais.".to_string(),
                }

                div { class: "two-col",
                    Card {
                        CardHeader {
                            CardTitle { "Fale Conosco" }
                            CardDescription { "Utilize os canais abaixo para entrar em contato" }
                        }
                        CardContent {
                            for channel in CONTACT_CHANNELS {
                                div { key: "{channel.label}", class: "contact-channel",
                                    LucideIcon { icon: channel.icon }
                                    div {
                                        p { class: "contact-label", "{channel.label}" }
                                        p { class: "card-description", "{channel.value}" }
                                    }
                                }
                            }
                        }
                    }

                    Card {
                        CardHeader {
                            CardTitle { "Nossas Redes Sociais" }
                            CardDescription { "Acompanhe nossas atividades e novidades" }
                        }
                        CardContent {
                            div { class: "social-grid",
                                for social in SOCIAL_LINKS {
                                    a { key: "{social.label}", class: "social-link", href: social.href,
                                        LucideIcon { icon: social.icon, size: IconSize::Md }
                                        span { "{social.label}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
