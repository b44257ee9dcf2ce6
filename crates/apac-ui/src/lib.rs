//! APAC Site UI Components
//!
//! Small Dioxus primitives shared by the page sections: buttons, cards and
//! badges. Styling lives in the global stylesheet; these components only
//! assemble class names and structure.

pub mod components;

pub use components::*;
