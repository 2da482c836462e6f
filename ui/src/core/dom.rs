//! Browser glue for the snap tracker: measuring, smooth scrolling and the scoped
//! scroll listener. Off wasm every entry point is a no-op that reports absence.

use futures_channel::mpsc::UnboundedSender;

use super::tracker::{NavigationSection, ScrollSnapshot};

/// Selector of the home page's snap container.
pub const SNAP_CONTAINER_SELECTOR: &str = ".home-snap";

/// Messages fed to the tracker coroutine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerEvent {
    /// Container scrolled, or the deferred initial evaluation fired.
    Scrolled,
    /// A dot was clicked.
    Jump(usize),
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{measure, scroll_to_section, ScrollListener};

#[cfg(not(target_arch = "wasm32"))]
pub use native::{measure, scroll_to_section, ScrollListener};

#[cfg(target_arch = "wasm32")]
mod wasm {
    use futures_channel::mpsc::UnboundedSender;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions};

    use super::{TrackerEvent, SNAP_CONTAINER_SELECTOR};
    use crate::core::tracker::{scroll_target, NavigationSection, ScrollSnapshot};

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn container(document: &Document) -> Option<Element> {
        document.query_selector(SNAP_CONTAINER_SELECTOR).ok().flatten()
    }

    /// Capture container metrics and section tops; `None` if the container is gone.
    pub fn measure(sections: &[NavigationSection]) -> Option<ScrollSnapshot> {
        let document = document()?;
        let container = container(&document)?;

        let section_tops = sections
            .iter()
            .map(|section| {
                document
                    .get_element_by_id(section.id)
                    .map(|el| el.get_bounding_client_rect().top())
            })
            .collect();

        Some(ScrollSnapshot {
            scroll_top: f64::from(container.scroll_top()),
            scroll_height: f64::from(container.scroll_height()),
            client_height: f64::from(container.client_height()),
            container_top: container.get_bounding_client_rect().top(),
            section_tops,
        })
    }

    /// Request a smooth scroll that aligns `section` with the container top.
    /// Returns `false` when either element is not rendered.
    pub fn scroll_to_section(section: &NavigationSection) -> bool {
        let Some(document) = document() else {
            return false;
        };
        let (Some(container), Some(element)) =
            (container(&document), document.get_element_by_id(section.id))
        else {
            return false;
        };

        let top = scroll_target(
            f64::from(container.scroll_top()),
            element.get_bounding_client_rect().top(),
            container.get_bounding_client_rect().top(),
        );

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        container.scroll_to_with_scroll_to_options(&options);
        true
    }

    /// Scroll listener on the snap container. Detaches when dropped.
    pub struct ScrollListener {
        target: Element,
        callback: Closure<dyn FnMut()>,
    }

    impl ScrollListener {
        pub fn attach(tx: UnboundedSender<TrackerEvent>) -> Option<Self> {
            let target = document().as_ref().and_then(container)?;
            let callback = Closure::<dyn FnMut()>::new(move || {
                let _ = tx.unbounded_send(TrackerEvent::Scrolled);
            });
            target
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                .ok()?;
            Some(Self { target, callback })
        }
    }

    impl Drop for ScrollListener {
        fn drop(&mut self) {
            let _ = self
                .target
                .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use futures_channel::mpsc::UnboundedSender;

    use super::TrackerEvent;
    use crate::core::tracker::{NavigationSection, ScrollSnapshot};

    pub fn measure(_sections: &[NavigationSection]) -> Option<ScrollSnapshot> {
        None
    }

    pub fn scroll_to_section(_section: &NavigationSection) -> bool {
        false
    }

    /// No DOM to listen to off wasm; `attach` always reports absence.
    pub struct ScrollListener(());

    impl ScrollListener {
        pub fn attach(_tx: UnboundedSender<TrackerEvent>) -> Option<Self> {
            None
        }
    }
}

/// Attach a listener that forwards container scrolls into `tx`.
pub fn listen(tx: UnboundedSender<TrackerEvent>) -> Option<ScrollListener> {
    let listener = ScrollListener::attach(tx);
    if listener.is_none() {
        tracing::trace!("snap container not rendered; scroll listener not attached");
    }
    listener
}

/// Measure for the tracker, logging skipped frames.
pub fn snapshot(sections: &[NavigationSection]) -> Option<ScrollSnapshot> {
    let snapshot = measure(sections);
    if snapshot.is_none() {
        tracing::trace!("snap container missing; skipping evaluation");
    }
    snapshot
}
