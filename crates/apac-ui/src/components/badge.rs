//! Badge Component
//!
//! Small pill label, e.g. the hero tagline.

use dioxus::prelude::*;

use super::with_extra;

#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let class = with_extra("badge", props.class.as_deref());
    rsx! {
        span { class: "{class}", {props.children} }
    }
}
