//! Property-based tests for section tracking and navigation
//!
//! Uses proptest to verify the invariants of NavState and SectionTracker.

use apac_core::{
    menu_items, probe_position, NavState, RawBounds, ScrollSample, SectionBounds, SectionId,
    SectionTracker, Viewport, SECTIONS,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any registered section
fn section_strategy() -> impl Strategy<Value = SectionId> {
    prop::sample::select(SECTIONS.to_vec())
}

/// Section heights for a contiguous page layout (zero heights included)
fn layout_strategy() -> impl Strategy<Value = Vec<SectionBounds>> {
    prop::collection::vec(0.0f64..2000.0, 5).prop_map(|heights| {
        let mut top = 0.0;
        SECTIONS
            .iter()
            .zip(heights)
            .map(|(id, height)| {
                let bounds = SectionBounds::new(*id, top, height);
                top += height;
                bounds
            })
            .collect()
    })
}

/// User interactions with the page
#[derive(Debug, Clone)]
enum PageOp {
    Scroll(f64),
    Navigate(SectionId),
    ToggleMenu,
}

fn page_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<PageOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (-500.0f64..12000.0).prop_map(PageOp::Scroll),
            1 => section_strategy().prop_map(PageOp::Navigate),
            1 => Just(PageOp::ToggleMenu),
        ],
        0..max_ops,
    )
}

fn sample(offset: f64, bounds: &[SectionBounds]) -> ScrollSample {
    ScrollSample {
        offset,
        sections: bounds
            .iter()
            .map(|b| RawBounds {
                id: b.id.anchor().to_string(),
                top: b.top,
                height: b.height,
            })
            .collect(),
    }
}

/// Viewport where every section exists
struct FullPage;

impl Viewport for FullPage {
    fn scroll_into_view(&mut self, _id: SectionId) -> bool {
        true
    }
}

/// Viewport with no mounted sections
struct EmptyPage;

impl Viewport for EmptyPage {
    fn scroll_into_view(&mut self, _id: SectionId) -> bool {
        false
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// After a scroll, the active section is the one containing the probe,
    /// or unchanged when none does
    #[test]
    fn scroll_selects_containing_section(
        layout in layout_strategy(),
        start in section_strategy(),
        offset in -500.0f64..12000.0,
    ) {
        let mut state = NavState::new();
        state.navigate_to(start, &mut FullPage);
        let mut tracker = SectionTracker::new();
        tracker.start();

        tracker.observe(&mut state, &sample(offset, &layout));

        let probe = probe_position(offset);
        let containing: Vec<_> = layout.iter().filter(|b| b.contains(probe)).collect();
        prop_assert!(containing.len() <= 1);
        match containing.first() {
            Some(b) => prop_assert_eq!(state.active(), b.id),
            None => prop_assert_eq!(state.active(), start),
        }
    }

    /// Navigation always lands on the target with the menu closed
    #[test]
    fn navigate_sets_target_and_closes_menu(
        ops in page_ops_strategy(30),
        target in section_strategy(),
        layout in layout_strategy(),
    ) {
        let mut state = NavState::new();
        let mut tracker = SectionTracker::new();
        tracker.start();
        for op in ops {
            match op {
                PageOp::Scroll(offset) => { tracker.observe(&mut state, &sample(offset, &layout)); }
                PageOp::Navigate(id) => { state.navigate_to(id, &mut FullPage); }
                PageOp::ToggleMenu => state.toggle_menu(),
            }
        }

        prop_assert!(state.navigate_to(target, &mut FullPage));
        prop_assert_eq!(state.active(), target);
        prop_assert!(!state.menu_open());
    }

    /// Toggling twice restores the menu flag and never moves the active section
    #[test]
    fn toggle_pair_is_identity(ops in page_ops_strategy(30)) {
        let mut state = NavState::new();
        for op in ops {
            match op {
                PageOp::Navigate(id) => { state.navigate_to(id, &mut FullPage); }
                PageOp::ToggleMenu => state.toggle_menu(),
                PageOp::Scroll(_) => {}
            }
        }
        let before = state;
        state.toggle_menu();
        prop_assert_eq!(state.active(), before.active());
        state.toggle_menu();
        prop_assert_eq!(state, before);
    }

    /// A missing target never changes state
    #[test]
    fn missing_target_is_noop(
        target in section_strategy(),
        open in any::<bool>(),
        anchor in "[a-z-]{1,20}",
    ) {
        let mut state = NavState::new();
        if open {
            state.toggle_menu();
        }
        let before = state;

        prop_assert!(!state.navigate_to(target, &mut EmptyPage));
        prop_assert_eq!(state, before);

        if SectionId::from_anchor(&anchor).is_none() {
            prop_assert!(!state.navigate_to_anchor(&anchor, &mut FullPage));
            prop_assert_eq!(state, before);
        }
    }

    /// Exactly one menu item is highlighted, and it is the active section
    #[test]
    fn menu_highlight_is_pure(active in section_strategy()) {
        let items = menu_items(active);
        prop_assert_eq!(items, menu_items(active));
        prop_assert_eq!(items.iter().filter(|i| i.highlighted).count(), 1);
        prop_assert!(items.iter().any(|i| i.highlighted && i.id == active));
    }

    /// Active section stays inside the registry under any interaction sequence
    #[test]
    fn active_always_registered(ops in page_ops_strategy(50), layout in layout_strategy()) {
        let mut state = NavState::new();
        let mut tracker = SectionTracker::new();
        tracker.start();
        for op in ops {
            match op {
                PageOp::Scroll(offset) => { tracker.observe(&mut state, &sample(offset, &layout)); }
                PageOp::Navigate(id) => { state.navigate_to(id, &mut FullPage); }
                PageOp::ToggleMenu => state.toggle_menu(),
            }
            prop_assert!(SECTIONS.contains(&state.active()));
        }
    }
}
