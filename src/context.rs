//! Page context for the APAC site.
//!
//! Provides the navigation state and mounted section handles to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let page = use_page_nav();
//! rsx! {
//!     for item in page.menu_items() {
//!         button { class: item.class(), onclick: move |_| page.go(item.id), "{item.label}" }
//!     }
//! }
//! ```

use std::rc::Rc;

use apac_core::{MenuItem, NavState, SectionId};
use dioxus::prelude::*;

use crate::bridge::{MountedSections, MountedViewport, SectionElement};

/// Handle over the shared navigation signals.
///
/// Both fields are signals owned by the top-level view, so the handle is
/// `Copy` and can be moved into any event handler.
#[derive(Clone, Copy, PartialEq)]
pub struct PageNav {
    pub state: Signal<NavState>,
    pub sections: Signal<MountedSections>,
}

impl PageNav {
    pub fn menu_open(&self) -> bool {
        self.state.read().menu_open()
    }

    pub fn menu_items(&self) -> [MenuItem; 5] {
        self.state.read().menu_items()
    }

    /// Smooth-scroll to a section and mark it active.
    pub fn go(mut self, id: SectionId) {
        let mut viewport = MountedViewport::new(self.sections);
        self.state.with_mut(|state| state.navigate_to(id, &mut viewport));
    }

    pub fn toggle_menu(mut self) {
        self.state.with_mut(NavState::toggle_menu);
    }

    pub fn close_menu(mut self) {
        self.state.with_mut(NavState::close_menu);
    }

    /// Record the mounted element of a section.
    pub fn register(mut self, id: SectionId, element: Rc<dyn SectionElement>) {
        tracing::trace!(section = %id, "Section mounted");
        self.sections.write().insert(id, element);
    }
}

/// Hook to access the page navigation handle from context.
pub fn use_page_nav() -> PageNav {
    use_context::<PageNav>()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dioxus::dioxus_core::NoOpMutations;

    use super::*;
    use crate::bridge::ScrollCompletion;

    /// Section element that counts issued scrolls.
    #[derive(Default)]
    struct RecordingSection {
        issued: Cell<u32>,
    }

    impl SectionElement for RecordingSection {
        fn smooth_scroll(&self) -> ScrollCompletion {
            self.issued.set(self.issued.get() + 1);
            Box::pin(async { Ok(()) })
        }
    }

    /// Shared between the test body and the rendered tree.
    #[derive(Clone)]
    struct Harness {
        element: Rc<RecordingSection>,
        register: bool,
        target: SectionId,
        tap: Rc<Cell<Option<EventHandler<()>>>>,
        page: Rc<Cell<Option<PageNav>>>,
    }

    impl Harness {
        fn new(register: bool, target: SectionId) -> Self {
            Self {
                element: Rc::new(RecordingSection::default()),
                register,
                target,
                tap: Rc::new(Cell::new(None)),
                page: Rc::new(Cell::new(None)),
            }
        }
    }

    /// Starts with the mobile menu open; the menu is rendered only while open.
    fn HarnessRoot(harness: Harness) -> Element {
        let state = use_signal(|| {
            let mut state = NavState::new();
            state.toggle_menu();
            state
        });
        let sections = use_signal(MountedSections::new);
        let page = use_context_provider(|| PageNav { state, sections });
        let shared = use_context_provider(|| harness.clone());

        use_hook(move || {
            if shared.register {
                page.register(SectionId::Projects, shared.element.clone());
            }
            shared.page.set(Some(page));
        });

        rsx! {
            if page.menu_open() {
                MenuLink {}
            }
        }
    }

    /// Stands in for a mobile menu link: its click handler belongs to a
    /// component that unmounts once navigation closes the menu.
    #[component]
    fn MenuLink() -> Element {
        let page = use_page_nav();
        let harness = use_context::<Harness>();

        use_hook(move || {
            let target = harness.target;
            harness.tap.set(Some(EventHandler::new(move |_| page.go(target))));
        });

        rsx! { div {} }
    }

    fn mount(harness: &Harness) -> VirtualDom {
        let mut dom = VirtualDom::new_with_props(HarnessRoot, harness.clone());
        dom.rebuild_in_place();
        dom
    }

    fn nav_state(dom: &VirtualDom, harness: &Harness) -> NavState {
        let page = harness.page.get().expect("page context provided");
        dom.in_runtime(|| *page.state.peek())
    }

    #[test]
    fn go_from_closing_menu_issues_scroll() {
        let harness = Harness::new(true, SectionId::Projects);
        let mut dom = mount(&harness);

        let tap = harness.tap.get().expect("menu link rendered");
        dom.in_runtime(|| tap.call(()));
        dom.render_immediate(&mut NoOpMutations);

        assert_eq!(harness.element.issued.get(), 1);
        let state = nav_state(&dom, &harness);
        assert_eq!(state.active(), SectionId::Projects);
        assert!(!state.menu_open());
    }

    #[test]
    fn go_to_unregistered_section_is_noop() {
        let harness = Harness::new(false, SectionId::Projects);
        let mut dom = mount(&harness);
        let before = nav_state(&dom, &harness);

        let tap = harness.tap.get().expect("menu link rendered");
        dom.in_runtime(|| tap.call(()));
        dom.render_immediate(&mut NoOpMutations);

        assert_eq!(harness.element.issued.get(), 0);
        assert_eq!(nav_state(&dom, &harness), before);
        assert!(before.menu_open());
    }

    #[test]
    fn register_replaces_previous_element() {
        let harness = Harness::new(true, SectionId::Projects);
        let dom = mount(&harness);
        let page = harness.page.get().expect("page context provided");

        let replacement = Rc::new(RecordingSection::default());
        dom.in_runtime(|| {
            page.register(SectionId::Projects, replacement.clone());
            assert_eq!(page.sections.peek().len(), 1);
            let mut viewport = MountedViewport::new(page.sections);
            assert!(apac_core::Viewport::scroll_into_view(&mut viewport, SectionId::Projects));
            assert!(!apac_core::Viewport::scroll_into_view(&mut viewport, SectionId::Contact));
        });

        assert_eq!(replacement.issued.get(), 1);
        assert_eq!(harness.element.issued.get(), 0);
    }
}
