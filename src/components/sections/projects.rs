//! "Nossos Projetos" section: one card per project.

use apac_core::content::{Project, PROJECTS};
use apac_core::SectionId;
use apac_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use dioxus::prelude::*;

use crate::components::{IconSize, LucideIcon, PageSection, SectionHeader};

#[component]
pub fn Projects() -> Element {
    rsx! {
        PageSection { id: SectionId::Projects, class: "page-section section-slate".to_string(),
            div { class: "container",
                SectionHeader {
                    title: "Nossos Projetos",
                    lead: "Desenvolvemos iniciativas que vão além do esporte, promovendo inclusão, \
                           cultura e educação para toda a comunidade.".to_string(),
                }

                div { class: "three-col",
                    for project in PROJECTS {
                        ProjectCard { key: "{project.title}", project }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let accent = project.accent.class();

    rsx! {
        Card { class: "project-card".to_string(),
            div { class: "project-stripe {accent}" }
            CardHeader {
                div { class: "project-icon {accent}",
                    LucideIcon { icon: project.icon, size: IconSize::Md }
                }
                CardTitle { "{project.title}" }
            }
            CardContent {
                CardDescription { "{project.description}" }
            }
        }
    }
}
