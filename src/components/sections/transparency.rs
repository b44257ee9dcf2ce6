//! "Transparência" section: reports call-out.

use apac_core::content::Icon;
use apac_core::SectionId;
use apac_ui::{Button, ButtonSize, Card, CardContent};
use dioxus::prelude::*;

use crate::components::{IconSize, LucideIcon, PageSection, SectionHeader};

#[component]
pub fn Transparency() -> Element {
    rsx! {
        PageSection { id: SectionId::Transparency, class: "page-section section-white".to_string(),
            div { class: "container",
                SectionHeader {
                    title: "Transparência",
                    lead: "Mantemos nossos associados e a comunidade informados sobre nossa gestão, \
                           relatórios financeiros e atividades desenvolvidas.".to_string(),
                }

                Card { class: "transparency-card".to_string(),
                    CardContent {
                        LucideIcon { icon: Icon::FileText, size: IconSize::Lg }
                        h3 { "Relatórios e Documentos" }
                        p {
                            "Acesse nossos relatórios financeiros, balanços e informações "
                            "detalhadas sobre a gestão da associação."
                        }
                        Button { size: ButtonSize::Lg, "Ver Relatórios" }
                    }
                }
            }
        }
    }
}
