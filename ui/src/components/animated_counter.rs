use dioxus::prelude::*;

use crate::core::counter::counter_value;
use crate::core::format::format_count;
use crate::core::platform::Platform;
use crate::core::timing::{sleep_ms, FRAME_MS};
use crate::locale::Locale;

/// Metric card whose number eases from `from` to `to`.
///
/// Server renders show the final value so the static page is accurate.
#[component]
pub fn AnimatedCounter(
    to: u64,
    duration_ms: u64,
    label: String,
    locale: Locale,
    #[props(default)] from: u64,
    #[props(default)] suffix: String,
    helper: Option<String>,
) -> Element {
    let animate = Platform::current().has_dom();
    let mut value = use_signal(move || if animate { from } else { to });

    use_future(move || async move {
        if !animate {
            return;
        }
        let mut elapsed = 0;
        loop {
            value.set(counter_value(from, to, elapsed, duration_ms));
            if elapsed >= duration_ms {
                break;
            }
            sleep_ms(FRAME_MS).await;
            elapsed += FRAME_MS;
        }
    });

    rsx! {
        div { class: "metric-card flip-in",
            span { class: "metric-value",
                "{format_count(value(), locale)}"
                span { class: "metric-suffix", "{suffix}" }
            }
            span { class: "metric-label", "{label}" }
            if let Some(helper) = helper {
                span { class: "metric-helper", "{helper}" }
            }
        }
    }
}
