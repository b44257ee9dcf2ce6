//! Landing page - the whole site.
//!
//! Navigation bar, five anchored sections in registry order, footer.

use dioxus::prelude::*;

use crate::components::sections::{About, Contact, Footer, Hero, Projects, Transparency};
use crate::components::NavHeader;

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "page",
            NavHeader {}

            main {
                Hero {}
                About {}
                Projects {}
                Transparency {}
                Contact {}
            }

            Footer {}
        }
    }
}
