//! APAC Site Core Library
//!
//! Framework-free state behind the association's landing page.
//!
//! ## Overview
//!
//! The page is a single scrolling view with five sections. Two pieces of
//! state drive its behavior:
//!
//! - **Active section**: which section is in view, derived from scroll
//!   position by the [`SectionTracker`] and set directly on menu clicks.
//! - **Menu flag**: whether the mobile navigation panel is open.
//!
//! Both live in one [`NavState`] cell owned by the top-level view.
//!
//! ## Quick Start
//!
//! ```
//! use apac_core::{NavState, SectionBounds, SectionId, SectionTracker, ScrollSample};
//!
//! let mut state = NavState::new();
//! let mut tracker = SectionTracker::new();
//! tracker.start();
//!
//! let sample = ScrollSample::from_json(
//!     r#"{"offset": 750, "sections": [
//!         {"id": "home", "top": 0, "height": 800},
//!         {"id": "quem-somos", "top": 800, "height": 800}
//!     ]}"#,
//! ).unwrap();
//! tracker.observe(&mut state, &sample);
//! assert_eq!(state.active(), SectionId::About);
//! ```

pub mod content;
pub mod error;
pub mod navigation;
pub mod section;
pub mod tracker;

// Re-exports
pub use error::{SiteError, SiteResult};
pub use navigation::{menu_items, MenuItem, NavState, Viewport};
pub use section::{registry, RegistryEntry, SectionId, SECTIONS};
pub use tracker::{
    probe_position, resolve_active, RawBounds, ScrollSample, SectionBounds, SectionTracker,
    LOOKAHEAD,
};
