use apac_core::content::{COPYRIGHT, FULL_NAME};
use dioxus::prelude::*;

use crate::components::BrandMark;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container",
                BrandMark {}
                p { class: "footer-name", "{FULL_NAME}" }
                p { class: "footer-copy", "{COPYRIGHT}" }
            }
        }
    }
}
