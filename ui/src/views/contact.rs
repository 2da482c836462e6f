use dioxus::prelude::*;

use crate::components::{ContactForm, PageMeta};
use crate::locale::Locale;
use crate::{t, use_store};

#[component]
pub fn ContactPage(locale: Locale) -> Element {
    let store = use_store();
    let chrome = store.chrome(locale);
    let contact = &store.dictionary(locale).contact;
    let map_url = &store.site().map_embed_url;

    rsx! {
        PageMeta {
            title: t!(chrome, "page-title-contact"),
            description: contact.hero.subtitle.clone(),
        }

        div { class: "hero-section", "data-page": "contact",
            div { class: "container",
                div { class: "hero-content fade-in-up",
                    span { class: "hero-badge", "{contact.hero.subtitle}" }
                    h1 { class: "hero-title", "{contact.hero.title}" }
                }
            }
        }

        section { class: "page-section compact",
            div { class: "container",
                div { class: "section-header",
                    span { class: "section-badge", "{contact.form.title}" }
                    h2 { class: "section-title", {t!(chrome, "contact-form-heading")} }
                }
                ContactForm { form: contact.form.clone(), locale }
            }
        }

        section { class: "page-section compact",
            div { class: "container",
                div { class: "section-header",
                    h2 { class: "section-title", "{contact.visit.title}" }
                    p { class: "section-subtitle", "{contact.visit.caption}" }
                }
                div { class: "map-container",
                    iframe {
                        title: t!(chrome, "contact-map-title"),
                        src: "{map_url}",
                        "loading": "lazy",
                        "allowfullscreen": "true",
                        "referrerpolicy": "no-referrer-when-downgrade",
                    }
                }
            }
        }
    }
}
