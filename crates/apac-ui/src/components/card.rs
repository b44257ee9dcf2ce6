//! Card Components
//!
//! Card, CardHeader, CardTitle, CardDescription and CardContent compose the
//! boxed panels used by the about, projects, transparency and contact
//! sections.

use dioxus::prelude::*;

use super::with_extra;

#[derive(Clone, PartialEq, Props)]
pub struct CardPartProps {
    pub children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Outer card container
#[component]
pub fn Card(props: CardPartProps) -> Element {
    let class = with_extra("card", props.class.as_deref());
    rsx! {
        div { class: "{class}", {props.children} }
    }
}

#[component]
pub fn CardHeader(props: CardPartProps) -> Element {
    let class = with_extra("card-header", props.class.as_deref());
    rsx! {
        div { class: "{class}", {props.children} }
    }
}

#[component]
pub fn CardTitle(props: CardPartProps) -> Element {
    let class = with_extra("card-title", props.class.as_deref());
    rsx! {
        h3 { class: "{class}", {props.children} }
    }
}

#[component]
pub fn CardDescription(props: CardPartProps) -> Element {
    let class = with_extra("card-description", props.class.as_deref());
    rsx! {
        p { class: "{class}", {props.children} }
    }
}

#[component]
pub fn CardContent(props: CardPartProps) -> Element {
    let class = with_extra("card-content", props.class.as_deref());
    rsx! {
        div { class: "{class}", {props.children} }
    }
}
