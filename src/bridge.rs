//! Page bridge between the webview DOM and the navigation state.
//!
//! - [`ScrollListener`] installs a window scroll listener through
//!   `document::eval` and feeds every sample to the section tracker.
//! - [`MountedViewport`] scrolls mounted section elements into view.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use apac_core::{NavState, ScrollSample, SectionId, SectionTracker, SiteError, Viewport, SECTIONS};
use dioxus::prelude::*;

/// Pending completion of a smooth scroll.
pub type ScrollCompletion = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// A section element that can be scrolled to.
pub trait SectionElement {
    /// Issue a smooth scroll to this element.
    ///
    /// The scroll is sent to the page when this is called; the returned
    /// future only reports whether it succeeded.
    fn smooth_scroll(&self) -> ScrollCompletion;
}

impl SectionElement for MountedData {
    fn smooth_scroll(&self) -> ScrollCompletion {
        let scroll = self.scroll_to(ScrollBehavior::Smooth);
        Box::pin(async move { scroll.await.map_err(|e| format!("{:?}", e)) })
    }
}

/// Mounted section elements, keyed by section.
pub type MountedSections = HashMap<SectionId, Rc<dyn SectionElement>>;

/// Installs the scroll listener and posts one sample per scroll event.
///
/// The anchor list is interpolated so the page measures exactly the
/// registered sections.
fn listen_script() -> String {
    let anchors = SECTIONS
        .iter()
        .map(|s| format!("\"{}\"", s.anchor()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"
const anchors = [{anchors}];
const report = () => {{
  const sections = [];
  for (const id of anchors) {{
    const el = document.getElementById(id);
    if (el) {{
      sections.push({{ id, top: el.offsetTop, height: el.offsetHeight }});
    }}
  }}
  dioxus.send({{ offset: window.scrollY, sections }});
}};
if (window.__apacScroll) {{
  window.removeEventListener("scroll", window.__apacScroll);
}}
window.__apacScroll = report;
window.addEventListener("scroll", report, {{ passive: true }});
report();
"#
    )
}

const UNLISTEN_SCRIPT: &str = r#"
if (window.__apacScroll) {
  window.removeEventListener("scroll", window.__apacScroll);
  window.__apacScroll = undefined;
}
"#;

/// Scroll subscription owned by the top-level view.
///
/// `start` acquires the DOM listener and spawns the receive loop on the
/// current scope; `stop` removes the listener and cancels the loop.
pub struct ScrollListener {
    nav: Signal<NavState>,
    tracker: Rc<RefCell<SectionTracker>>,
    task: Option<Task>,
}

impl ScrollListener {
    pub fn new(nav: Signal<NavState>) -> Self {
        Self {
            nav,
            tracker: Rc::new(RefCell::new(SectionTracker::new())),
            task: None,
        }
    }

    pub fn is_listening(&self) -> bool {
        self.tracker.borrow().is_listening()
    }

    pub fn start(&mut self) {
        if self.is_listening() {
            return;
        }
        self.tracker.borrow_mut().start();

        let mut eval = document::eval(&listen_script());
        let tracker = self.tracker.clone();
        let mut nav = self.nav;

        self.task = Some(spawn(async move {
            loop {
                let sample = match eval.recv::<serde_json::Value>().await {
                    Ok(value) => ScrollSample::from_value(value),
                    Err(e) => Err(SiteError::Bridge(format!("{:?}", e))),
                };
                match sample {
                    Ok(sample) => {
                        // Only write when the section changes, so plain scrolling
                        // does not re-render the page.
                        let mut state = *nav.peek();
                        if tracker.borrow().observe(&mut state, &sample).is_some() {
                            nav.set(state);
                        }
                    }
                    Err(SiteError::MalformedSample(e)) => {
                        tracing::warn!(error = %e, "Dropping malformed scroll sample");
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Scroll listener closed");
                        break;
                    }
                }
            }
        }));
        tracing::debug!("Scroll listener installed");
    }

    pub fn stop(&mut self) {
        self.tracker.borrow_mut().stop();
        if let Some(task) = self.task.take() {
            task.cancel();
            // Fire and forget: the view is going away, nothing waits on the result.
            let _unlisten = document::eval(UNLISTEN_SCRIPT);
            tracing::debug!("Scroll listener removed");
        }
    }
}

/// [`Viewport`] over the mounted section elements.
pub struct MountedViewport {
    sections: Signal<MountedSections>,
}

impl MountedViewport {
    pub fn new(sections: Signal<MountedSections>) -> Self {
        Self { sections }
    }
}

impl Viewport for MountedViewport {
    fn scroll_into_view(&mut self, id: SectionId) -> bool {
        let Some(element) = self.sections.peek().get(&id).cloned() else {
            return false;
        };
        // Issue the scroll before returning. Navigation closes the mobile
        // menu, which unmounts the component handling the click, so the
        // completion is awaited on the root scope.
        let completion = element.smooth_scroll();
        spawn_forever(async move {
            if let Err(e) = completion.await {
                tracing::debug!(section = %id, error = %e, "Smooth scroll failed");
            }
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use dioxus::dioxus_core::NoOpMutations;

    use super::*;

    type ListenerSlot = Rc<RefCell<Option<ScrollListener>>>;

    /// Starts a listener on mount and hands it to the test.
    fn ListenerRoot(slot: ListenerSlot) -> Element {
        let state = use_signal(NavState::new);
        use_hook(move || {
            let mut listener = ScrollListener::new(state);
            listener.start();
            *slot.borrow_mut() = Some(listener);
        });
        rsx! { div {} }
    }

    #[test]
    fn listener_start_and_stop() {
        let slot: ListenerSlot = Rc::new(RefCell::new(None));
        let mut dom = VirtualDom::new_with_props(ListenerRoot, slot.clone());
        dom.rebuild_in_place();

        {
            let guard = slot.borrow();
            let listener = guard.as_ref().expect("listener started on mount");
            assert!(listener.is_listening());
            assert!(listener.task.is_some());
        }

        dom.in_runtime(|| {
            ScopeId::ROOT.in_runtime(|| {
                let mut guard = slot.borrow_mut();
                let listener = guard.as_mut().expect("listener started on mount");
                listener.stop();
                assert!(!listener.is_listening());
                assert!(listener.task.is_none());

                // Stopping twice is harmless
                listener.stop();
                assert!(listener.task.is_none());
            })
        });
        dom.render_immediate(&mut NoOpMutations);
    }

    #[test]
    fn listener_restarts_after_stop() {
        let slot: ListenerSlot = Rc::new(RefCell::new(None));
        let mut dom = VirtualDom::new_with_props(ListenerRoot, slot.clone());
        dom.rebuild_in_place();

        // The receive loop is spawned on the current scope
        dom.in_runtime(|| {
            ScopeId::ROOT.in_runtime(|| {
                let mut guard = slot.borrow_mut();
                let listener = guard.as_mut().expect("listener started on mount");
                listener.stop();
                listener.start();
                assert!(listener.is_listening());
                assert!(listener.task.is_some());
                listener.stop();
                assert!(!listener.is_listening());
            })
        });
    }

    #[test]
    fn listen_script_measures_every_section() {
        let script = listen_script();
        for id in SECTIONS {
            assert!(script.contains(&format!("\"{}\"", id.anchor())));
        }
        assert!(script.contains("window.scrollY"));
        assert!(script.contains("addEventListener(\"scroll\""));
    }

    #[test]
    fn unlisten_script_removes_listener() {
        assert!(UNLISTEN_SCRIPT.contains("removeEventListener(\"scroll\""));
    }
}
