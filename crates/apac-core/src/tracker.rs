//! Scroll-driven active section tracking.
//!
//! The page reports its scroll offset together with the top offset and
//! height of every section element. The tracker probes slightly below the
//! top of the viewport and marks the first section containing the probe as
//! active.

use serde::Deserialize;

use crate::error::SiteResult;
use crate::navigation::NavState;
use crate::section::SectionId;

/// Distance below the scroll offset at which sections are probed, in CSS px.
pub const LOOKAHEAD: f64 = 100.0;

/// Probe position for a given vertical scroll offset.
pub fn probe_position(scroll_offset: f64) -> f64 {
    scroll_offset + LOOKAHEAD
}

/// Vertical extent of one section element.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: SectionId, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    /// Half-open containment: `top <= probe < top + height`.
    ///
    /// Empty or negative spans contain nothing.
    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

/// First section, in registry order, whose span contains `probe`.
pub fn resolve_active(probe: f64, bounds: &[SectionBounds]) -> Option<SectionId> {
    let mut ordered: Vec<&SectionBounds> = bounds.iter().collect();
    ordered.sort_by_key(|b| b.id.index());
    ordered.into_iter().find(|b| b.contains(probe)).map(|b| b.id)
}

/// Section geometry as reported by the page.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RawBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// One scroll observation.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    #[serde(default)]
    pub sections: Vec<RawBounds>,
}

impl ScrollSample {
    /// Decode a sample from the JSON the page bridge posts.
    pub fn from_value(value: serde_json::Value) -> SiteResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Decode a sample from a JSON string.
    pub fn from_json(json: &str) -> SiteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Bounds for the sections this sample reports, dropping unknown anchors.
    pub fn bounds(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .filter_map(|raw| {
                SectionId::from_anchor(&raw.id)
                    .map(|id| SectionBounds::new(id, raw.top, raw.height))
            })
            .collect()
    }
}

/// Scroll subscription owned by the top-level view.
///
/// Samples are only applied between `start` and `stop`, so a listener that
/// fires after teardown cannot touch the navigation state.
#[derive(Debug, Default)]
pub struct SectionTracker {
    listening: bool,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        if !self.listening {
            tracing::debug!("Section tracker started");
        }
        self.listening = true;
    }

    pub fn stop(&mut self) {
        if self.listening {
            tracing::debug!("Section tracker stopped");
        }
        self.listening = false;
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Apply a scroll sample to `state`.
    ///
    /// Returns the new active section when it changed. When no section
    /// contains the probe the active section is left as it was.
    pub fn observe(&self, state: &mut NavState, sample: &ScrollSample) -> Option<SectionId> {
        if !self.listening {
            return None;
        }
        let probe = probe_position(sample.offset);
        let found = resolve_active(probe, &sample.bounds())?;
        if state.set_active(found) {
            tracing::trace!(section = %found, probe, "Active section changed");
            Some(found)
        } else {
            None
        }
    }
}
