//! Navigation state and menu logic.
//!
//! `NavState` is the single cell holding the active section and the mobile
//! menu flag. The view layer keeps one instance in context; both the scroll
//! tracker and the menu handlers mutate it.

use crate::section::{registry, SectionId};

/// Something that can bring a section element into view.
///
/// Implemented by the view layer over mounted DOM elements, and by test
/// doubles in unit tests.
pub trait Viewport {
    /// Smoothly scroll the section into view.
    ///
    /// Returns `false` when the element is not present on the page.
    fn scroll_into_view(&mut self, id: SectionId) -> bool;
}

/// Active section plus mobile menu state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NavState {
    active: SectionId,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active section
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Whether the mobile menu overlay is displayed
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub(crate) fn set_active(&mut self, id: SectionId) -> bool {
        let changed = self.active != id;
        self.active = id;
        changed
    }

    /// Flip the mobile menu between open and closed.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        tracing::trace!(open = self.menu_open, "Toggled mobile menu");
    }

    /// Force the mobile menu closed (backdrop click).
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Scroll to a section and mark it active.
    ///
    /// The active section is updated immediately, without waiting for the
    /// scroll animation. The menu is closed whether or not it was open.
    /// When the viewport cannot find the element nothing changes.
    pub fn navigate_to<V: Viewport + ?Sized>(&mut self, id: SectionId, viewport: &mut V) -> bool {
        if !viewport.scroll_into_view(id) {
            tracing::debug!(section = %id, "Navigation target not on page");
            return false;
        }
        self.active = id;
        self.menu_open = false;
        tracing::debug!(section = %id, "Navigated");
        true
    }

    /// Like [`navigate_to`](Self::navigate_to), starting from a raw anchor.
    ///
    /// Unknown anchors are ignored.
    pub fn navigate_to_anchor<V: Viewport + ?Sized>(&mut self, anchor: &str, viewport: &mut V) -> bool {
        match SectionId::from_anchor(anchor) {
            Some(id) => self.navigate_to(id, viewport),
            None => {
                tracing::debug!(anchor, "Ignoring navigation to unknown anchor");
                false
            }
        }
    }

    /// Menu items for the current state.
    pub fn menu_items(&self) -> [MenuItem; 5] {
        menu_items(self.active)
    }
}

/// A rendered menu entry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MenuItem {
    pub id: SectionId,
    pub label: &'static str,
    pub highlighted: bool,
}

impl MenuItem {
    /// CSS class for a desktop menu button
    pub fn class(&self) -> &'static str {
        if self.highlighted {
            "nav-link active"
        } else {
            "nav-link"
        }
    }

    /// CSS class for a mobile menu button
    pub fn mobile_class(&self) -> &'static str {
        if self.highlighted {
            "mobile-nav-link active"
        } else {
            "mobile-nav-link"
        }
    }
}

/// Build the menu from the registry, highlighting `active`.
pub fn menu_items(active: SectionId) -> [MenuItem; 5] {
    registry().map(|entry| MenuItem {
        id: entry.id,
        label: entry.label,
        highlighted: entry.id == active,
    })
}
