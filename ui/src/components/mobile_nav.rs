use dioxus::prelude::*;

use super::LanguageSwitcher;
use crate::locale::Locale;
use crate::routes::{build_href, is_mobile_link_active};
use crate::{t, use_store};

/// Open/closed state of the mobile drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Hamburger button, overlay and slide-in drawer for narrow viewports.
/// Choosing a link or tapping the overlay closes the drawer.
#[component]
pub fn MobileNav(locale: Locale, pathname: String) -> Element {
    let store = use_store();
    let nav = &store.dictionary(locale).nav;
    let chrome = store.chrome(locale);
    let mut menu = use_signal(MenuState::default);

    let state = if menu().open { "open" } else { "closed" };

    rsx! {
        button {
            class: "mobile-menu-button",
            r#type: "button",
            aria_label: t!(chrome, "nav-toggle-menu"),
            aria_expanded: "{menu().open}",
            onclick: move |_| menu.with_mut(MenuState::toggle),
            svg {
                width: "22",
                height: "22",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                path { d: "M4 7h16M4 12h16M4 17h16" }
            }
        }

        div {
            class: "mobile-overlay {state}",
            aria_hidden: "true",
            onclick: move |_| menu.with_mut(MenuState::close),
        }

        aside { class: "mobile-menu {state}",
            button {
                class: "mobile-menu-close",
                r#type: "button",
                aria_label: t!(chrome, "nav-close-menu"),
                onclick: move |_| menu.with_mut(MenuState::close),
                "×"
            }
            nav { class: "mobile-menu-links",
                for link in nav.links.iter() {
                    {
                        let href = build_href(locale, link.href_key);
                        let class = if is_mobile_link_active(&pathname, &href, link.href_key) {
                            "mobile-link active"
                        } else {
                            "mobile-link"
                        };
                        rsx! {
                            Link {
                                key: "{href}",
                                to: href.clone(),
                                class: "{class}",
                                onclick: move |_| menu.with_mut(MenuState::close),
                                "{link.label}"
                            }
                        }
                    }
                }
            }
            div { class: "mobile-menu-footer",
                LanguageSwitcher { current: locale, pathname: pathname.clone() }
            }
        }
    }
}
