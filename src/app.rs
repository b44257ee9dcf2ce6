use std::cell::RefCell;
use std::rc::Rc;

use apac_core::NavState;
use dioxus::prelude::*;

use crate::bridge::{MountedSections, ScrollListener};
use crate::context::PageNav;
use crate::pages::Landing;
use crate::theme::{root_variables, GLOBAL_STYLES};

/// Root application component.
///
/// Owns the navigation state and the scroll subscription, provides global
/// styles and renders the landing page.
#[component]
pub fn App() -> Element {
    let state: Signal<NavState> = use_signal(NavState::new);
    let sections: Signal<MountedSections> = use_signal(MountedSections::new);

    use_context_provider(|| PageNav { state, sections });

    // Scroll subscription lives exactly as long as this view
    let listener = use_hook(|| {
        let mut listener = ScrollListener::new(state);
        listener.start();
        Rc::new(RefCell::new(listener))
    });
    use_drop(move || listener.borrow_mut().stop());

    rsx! {
        style { {root_variables()} }
        style { {GLOBAL_STYLES} }
        Landing {}
    }
}
