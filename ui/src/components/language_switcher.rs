use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::locale::Locale;
use crate::switcher::{plan_switch, PendingSwitch};
use crate::use_store;

/// One button per supported locale. Clicking another locale swaps the leading
/// path segment and navigates; the rest of the path is kept.
///
/// While a switch is in flight the group carries `pending` and the current
/// locale's button is disabled. The flag clears once the route's locale changes.
#[component]
pub fn LanguageSwitcher(current: Locale, pathname: String) -> Element {
    let store = use_store();
    let nav = &store.dictionary(current).nav;
    let navigator = use_navigator();
    let mut switch = use_signal(|| PendingSwitch::new(current));

    use_effect(use_reactive!(|current| {
        debug!(%current, "locale settled");
        switch.with_mut(|s| s.observe(current));
    }));

    let switch_to = use_callback(move |target: Locale| {
        let Some(path) = plan_switch(current, target.code(), &pathname) else {
            return;
        };
        switch.with_mut(PendingSwitch::begin);
        spawn(async move {
            debug!(%target, %path, "switching locale");
            if let Some(failure) = navigator.push(path) {
                warn!(?failure, "locale navigation failed");
                switch.with_mut(PendingSwitch::fail);
            }
        });
    });

    let state = switch();
    let group_class = if state.is_pending() {
        "language-switcher pending"
    } else {
        "language-switcher"
    };

    rsx! {
        div { class: "{group_class}", role: "group", aria_label: "{nav.language_label}",
            for locale in Locale::ALL {
                button {
                    key: "{locale}",
                    r#type: "button",
                    class: if locale == current { "active" } else { "" },
                    lang: locale.code(),
                    disabled: state.button_disabled(locale),
                    onclick: move |_| switch_to.call(locale),
                    "{nav.languages.name(locale)}"
                }
            }
        }
    }
}
