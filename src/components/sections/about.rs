//! "Quem Somos" section: mission and community cards.

use apac_core::content::Icon;
use apac_core::SectionId;
use apac_ui::{Card, CardContent};
use dioxus::prelude::*;

use crate::components::{IconSize, LucideIcon, PageSection, SectionHeader};

#[component]
pub fn About() -> Element {
    rsx! {
        PageSection { id: SectionId::About, class: "page-section section-white".to_string(),
            div { class: "container",
                SectionHeader { title: "Quem Somos" }

                div { class: "two-col",
                    Card { class: "about-card".to_string(),
                        CardContent {
                            div { class: "card-heading mission",
                                LucideIcon { icon: Icon::Target, size: IconSize::Md }
                                h3 { "Nossa Missão" }
                            }
                            p {
                                "A Associação de Pais e Amigos de Patinadores nasceu com o propósito de "
                                "fortalecer o esporte por meio da união, da cooperação e do apoio mútuo. "
                                "Nosso principal objetivo é estar ao lado de nossos associados em todas "
                                "as etapas de sua jornada esportiva."
                            }
                            p {
                                "Oferecemos suporte nas competições municipais, estaduais, nacionais e "
                                "até internacionais, sempre acreditando que o patinador não caminha sozinho."
                            }
                        }
                    }

                    Card { class: "about-card".to_string(),
                        CardContent {
                            div { class: "card-heading community",
                                LucideIcon { icon: Icon::Users, size: IconSize::Md }
                                h3 { "Nossa Comunidade" }
                            }
                            p {
                                "Acreditamos que por trás de cada conquista existe uma rede de incentivo "
                                "formada por família, amigos e comunidade. Por isso, trabalhamos para "
                                "criar um ambiente colaborativo e acolhedor."
                            }
                            p {
                                "Aqui, todos podem compartilhar experiências, superar desafios e celebrar "
                                "vitórias juntos, fortalecendo os laços que nos unem pelo amor ao esporte."
                            }
                        }
                    }
                }
            }
        }
    }
}
