use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;
use tracing::{debug, trace};

use crate::core::dom::{self, ScrollListener, TrackerEvent};
use crate::core::platform::Platform;
use crate::core::timing::sleep_ms;
use crate::core::tracker::{SectionTracker, HOME_SECTIONS, INITIAL_EVALUATION_DELAY_MS};
use crate::locale::Locale;
use crate::{t, use_store};

/// Fixed dot rail for the home snap container.
///
/// A coroutine owns the [`SectionTracker`]. The scroll listener and the dots only
/// send it events; it measures, evaluates and publishes the active index.
#[component]
pub fn SnapNavDots(locale: Locale) -> Element {
    let store = use_store();
    let chrome = store.chrome(locale);
    let mut active = use_signal(|| 0usize);

    let tracker = use_coroutine(move |mut rx: UnboundedReceiver<TrackerEvent>| async move {
        if !Platform::current().has_dom() {
            return;
        }
        let mut state = SectionTracker::new(HOME_SECTIONS.len());

        // Let layout settle before the first measurement.
        sleep_ms(INITIAL_EVALUATION_DELAY_MS).await;
        if let Some(snapshot) = dom::snapshot(&HOME_SECTIONS) {
            active.set(state.evaluate(&snapshot));
        }

        while let Some(event) = rx.next().await {
            match event {
                TrackerEvent::Scrolled => {
                    let Some(snapshot) = dom::snapshot(&HOME_SECTIONS) else {
                        continue;
                    };
                    let next = state.evaluate(&snapshot);
                    if next != *active.peek() {
                        trace!(section = HOME_SECTIONS[next].id, "active section changed");
                        active.set(next);
                    }
                }
                TrackerEvent::Jump(index) => {
                    let Some(section) = HOME_SECTIONS.get(index) else {
                        continue;
                    };
                    if !dom::scroll_to_section(section) {
                        debug!(section = section.id, "jump target not rendered");
                    }
                }
            }
        }
    });

    // Listener lives exactly as long as this component.
    let listener = use_hook(|| Rc::new(RefCell::new(None::<ScrollListener>)));
    use_effect({
        let listener = listener.clone();
        move || {
            *listener.borrow_mut() = dom::listen(tracker.tx());
        }
    });
    use_drop(move || {
        listener.borrow_mut().take();
    });

    rsx! {
        nav { class: "snap-nav-dots",
            for (index, section) in HOME_SECTIONS.iter().enumerate() {
                button {
                    key: "{section.id}",
                    r#type: "button",
                    class: if index == active() { "snap-nav-dot active" } else { "snap-nav-dot" },
                    aria_label: t!(chrome, "snap-dot-label", section = chrome.get(section.label_key)),
                    aria_current: if index == active() { "true" } else { "false" },
                    onclick: move |_| tracker.send(TrackerEvent::Jump(index)),
                    span { class: "snap-nav-dot-inner" }
                }
            }
        }
    }
}
