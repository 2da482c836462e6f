use dioxus::prelude::*;

use super::{project_card, CounterSpec};
use crate::components::{AnimatedCounter, ContactForm, FooterContent, PageMeta, SnapNavDots};
use crate::core::dom::SNAP_CONTAINER_SELECTOR;
use crate::locale::Locale;
use crate::{t, use_store};

/// Hero metric targets, in dictionary metric order.
pub const HOME_COUNTERS: [CounterSpec; 3] = [
    CounterSpec { to: 280, duration_ms: 1400, suffix: "+" },
    CounterSpec { to: 6000, duration_ms: 1600, suffix: "+" },
    CounterSpec { to: 45, duration_ms: 1200, suffix: "" },
];

/// Full-page snap experience: hero, projects, story, contact and footer, each a
/// `.snap-section` whose id matches the tracker's section list.
#[component]
pub fn HomeExperience(locale: Locale) -> Element {
    let store = use_store();
    let dictionary = store.dictionary(locale);
    let chrome = store.chrome(locale);
    let home = &dictionary.home;
    let container_class = SNAP_CONTAINER_SELECTOR.trim_start_matches('.');

    rsx! {
        PageMeta {
            title: t!(chrome, "page-title-home"),
            description: dictionary.meta.site_description.clone(),
        }
        SnapNavDots { locale }

        div { class: "{container_class}", "data-page": "home",
            section { id: "hero", class: "snap-section hero-section",
                div { class: "inner",
                    div { class: "hero-content fade-in-up",
                        span { class: "hero-badge", "{home.hero.kicker}" }
                        h1 { class: "hero-title", "{home.hero.title}" }
                        p { class: "hero-subtitle", "{home.hero.subtitle}" }
                        div { class: "cta-stack",
                            a { href: "#projects", class: "button-primary", "{home.hero.primary_cta}" }
                            a { href: "#story", class: "button-secondary", "{home.hero.secondary_cta}" }
                        }
                    }
                    div { class: "grid-3 hero-metrics",
                        for (metric, spec) in home.metrics.iter().zip(HOME_COUNTERS) {
                            AnimatedCounter {
                                key: "{metric.label}",
                                to: spec.to,
                                duration_ms: spec.duration_ms,
                                suffix: spec.suffix.to_string(),
                                label: metric.label.clone(),
                                helper: metric.helper.clone(),
                                locale,
                            }
                        }
                    }
                }
            }

            section { id: "projects", class: "snap-section",
                div { class: "inner",
                    div { class: "section-header fade-in-up",
                        span { class: "section-badge", "{home.project_showcase.caption}" }
                        h2 { class: "section-title", "{home.project_showcase.heading}" }
                    }
                    div { class: "grid-3",
                        for (index, item) in home.project_showcase.items.iter().enumerate() {
                            {project_card(item, index)}
                        }
                    }
                }
            }

            section { id: "story", class: "snap-section",
                div { class: "inner",
                    div { class: "section-header fade-in-up",
                        span { class: "section-badge", "{home.pillars.title}" }
                        h2 { class: "section-title", "{home.architectural_statement.title}" }
                        p { class: "section-subtitle", "{home.architectural_statement.body}" }
                        p { class: "section-highlight", "{home.architectural_statement.highlight}" }
                    }
                    div { class: "grid-3",
                        for (index, pillar) in home.pillars.items.iter().enumerate() {
                            div {
                                key: "{pillar.title}",
                                class: "card fade-in-up",
                                style: format!("animation-delay: {}ms", index * 100),
                                h3 { class: "card-title", "{pillar.title}" }
                                p { class: "card-text", "{pillar.description}" }
                            }
                        }
                    }
                }
            }

            section { id: "home-contact", class: "snap-section contact-section",
                div { class: "inner",
                    div { class: "section-header fade-in-up",
                        if let Some(subtitle) = &home.contact.subtitle {
                            span { class: "section-badge", "{subtitle}" }
                        }
                        h2 { class: "section-title", "{home.contact.title}" }
                    }
                    ContactForm { form: home.contact.clone(), locale }
                }
            }

            section { id: "footer", class: "snap-section footer-section",
                div { class: "inner",
                    FooterContent { locale }
                }
            }
        }
    }
}
