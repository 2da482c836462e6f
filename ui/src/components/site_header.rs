use dioxus::prelude::*;

use super::{LanguageSwitcher, MobileNav, NavLinkHighlight};
use crate::locale::Locale;
use crate::routes::{build_href, NavKey};
use crate::{t, use_store, BRAND_LOGO};

/// Sticky header: brand, desktop links, desktop switcher and the mobile drawer.
#[component]
pub fn SiteHeader(locale: Locale, pathname: String) -> Element {
    let store = use_store();
    let nav = &store.dictionary(locale).nav;
    let chrome = store.chrome(locale);

    rsx! {
        header { class: "nav-bar",
            div { class: "nav-bar-inner",
                Link { to: build_href(locale, NavKey::Home), class: "brand",
                    img {
                        class: "logo",
                        src: BRAND_LOGO,
                        alt: t!(chrome, "brand-logo-alt"),
                        width: "160",
                        height: "48",
                    }
                }

                nav { class: "nav-links", aria_label: t!(chrome, "nav-primary-label"),
                    for link in nav.links.iter() {
                        NavLinkHighlight {
                            key: "{link.label}",
                            href: build_href(locale, link.href_key),
                            pathname: pathname.clone(),
                            "{link.label}"
                        }
                    }
                }

                div { class: "nav-actions",
                    Link { to: build_href(locale, NavKey::Contact), class: "button-primary nav-cta",
                        "{nav.contact_cta}"
                    }
                    div { class: "desktop-lang-switcher",
                        LanguageSwitcher { current: locale, pathname: pathname.clone() }
                    }
                    MobileNav { locale, pathname: pathname.clone() }
                }
            }
        }
    }
}
