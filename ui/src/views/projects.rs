use dioxus::prelude::*;

use super::{project_card, CounterSpec};
use crate::components::{AnimatedCounter, PageMeta};
use crate::locale::Locale;
use crate::{t, use_store};

/// Projects and clients counters.
pub const PROJECT_COUNTERS: [CounterSpec; 2] = [
    CounterSpec { to: 15, duration_ms: 1200, suffix: "+" },
    CounterSpec { to: 6000, duration_ms: 1800, suffix: "+" },
];

#[component]
pub fn ProjectsPage(locale: Locale) -> Element {
    let store = use_store();
    let chrome = store.chrome(locale);
    let projects = &store.dictionary(locale).projects;
    let labels = [&projects.counters.projects, &projects.counters.clients];

    rsx! {
        PageMeta {
            title: t!(chrome, "page-title-projects"),
            description: projects.hero.subtitle.clone(),
        }

        div { class: "hero-section", "data-page": "projects",
            div { class: "container",
                div { class: "hero-content fade-in-up",
                    span { class: "hero-badge", "{projects.hero.subtitle}" }
                    h1 { class: "hero-title", "{projects.hero.title}" }
                }
            }
        }

        section { class: "page-section compact",
            div { class: "container",
                div { class: "grid-2 grid-center",
                    for (label, spec) in labels.into_iter().zip(PROJECT_COUNTERS) {
                        AnimatedCounter {
                            key: "{label}",
                            to: spec.to,
                            duration_ms: spec.duration_ms,
                            suffix: spec.suffix.to_string(),
                            label: label.clone(),
                            locale,
                        }
                    }
                }
            }
        }

        section { class: "page-section",
            div { class: "container",
                div { class: "section-header",
                    span { class: "section-badge", "{projects.categories.title}" }
                    h2 { class: "section-title", {t!(chrome, "projects-portfolio-heading")} }
                }
                div { class: "grid-3",
                    for (index, item) in projects.categories.items.iter().enumerate() {
                        {project_card(item, index)}
                    }
                }
            }
        }

        section { class: "page-section compact",
            div { class: "container",
                div { class: "section-header",
                    h2 { class: "section-title", "{projects.methodology.title}" }
                }
                div { class: "history-timeline",
                    for step in projects.methodology.steps.iter() {
                        article { key: "{step.title}", class: "history-item",
                            h3 { class: "card-title", "{step.title}" }
                            p { class: "card-text", "{step.description}" }
                        }
                    }
                }
            }
        }
    }
}
