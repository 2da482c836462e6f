use dioxus::prelude::*;

use crate::components::PageMeta;
use crate::locale::Locale;
use crate::{t, use_store};

#[component]
pub fn AboutPage(locale: Locale) -> Element {
    let store = use_store();
    let chrome = store.chrome(locale);
    let about = &store.dictionary(locale).about;

    rsx! {
        PageMeta {
            title: t!(chrome, "page-title-about"),
            description: about.hero.subtitle.clone(),
        }

        div { class: "hero-section", "data-page": "about",
            div { class: "container",
                div { class: "hero-content fade-in-up",
                    span { class: "hero-badge", "{about.hero.subtitle}" }
                    h1 { class: "hero-title", "{about.hero.title}" }
                    p { class: "hero-subtitle", "{about.hero.statement}" }
                }
            }
        }

        section { class: "page-section compact",
            div { class: "container",
                div { class: "section-header",
                    span { class: "section-badge", "{about.history.title}" }
                    h2 { class: "section-title", {t!(chrome, "about-journey-heading")} }
                }
                div { class: "history-timeline",
                    for event in about.history.items.iter() {
                        article { key: "{event.year}", class: "history-item",
                            span { class: "history-year", "{event.year}" }
                            h3 { class: "card-title", "{event.summary}" }
                            p { class: "card-text", "{event.details}" }
                        }
                    }
                }
            }
        }

        section { class: "page-section",
            div { class: "container",
                div { class: "section-header",
                    span { class: "section-badge", "{about.board.subtitle}" }
                    h2 { class: "section-title", "{about.board.title}" }
                }
                div { class: "grid-3",
                    for member in about.board.members.iter() {
                        article { key: "{member.name}", class: "board-card",
                            img { src: "{member.image}", alt: "{member.name}", width: "520", height: "440" }
                            div { class: "details",
                                h3 { class: "card-title", "{member.name}" }
                                span { class: "role", "{member.role}" }
                                p { class: "card-text", "{member.bio}" }
                            }
                        }
                    }
                }
            }
        }

        section { class: "page-section compact",
            div { class: "container",
                div { class: "section-header",
                    h2 { class: "section-title", "{about.principles.title}" }
                }
                div { class: "grid-3",
                    for item in about.principles.items.iter() {
                        article { key: "{item.title}", class: "card",
                            h3 { class: "card-title", "{item.title}" }
                            p { class: "card-text", "{item.description}" }
                        }
                    }
                }
            }
        }
    }
}
