use dioxus::prelude::*;

use crate::components::PageMeta;
use crate::locale::Locale;
use crate::routes::{build_href, NavKey};
use crate::{t, use_store};

/// Shown for any path the router does not know.
#[component]
pub fn NotFoundPage(locale: Locale, attempted: String) -> Element {
    let store = use_store();
    let chrome = store.chrome(locale);

    rsx! {
        PageMeta {
            title: t!(chrome, "page-title-not-found"),
            description: store.dictionary(locale).meta.site_description.clone(),
        }
        div { class: "hero-section not-found", "data-page": "not-found",
            div { class: "container",
                div { class: "hero-content",
                    span { class: "hero-badge", "404" }
                    h1 { class: "hero-title", {t!(chrome, "not-found-title")} }
                    p { class: "hero-subtitle", {t!(chrome, "not-found-body")} }
                    code { class: "not-found-path", "{attempted}" }
                    div { class: "cta-stack",
                        Link { to: build_href(locale, NavKey::Home), class: "button-primary",
                            {t!(chrome, "not-found-home")}
                        }
                    }
                }
            }
        }
    }
}
