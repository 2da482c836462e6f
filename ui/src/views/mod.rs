//! Page bodies. Each view takes an already-resolved [`Locale`](crate::locale::Locale);
//! platform crates wrap them in their typed routes.

use dioxus::prelude::*;

use crate::content::ProjectHighlight;

mod about;
mod contact;
mod home;
mod not_found;
mod projects;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::{HomeExperience, HOME_COUNTERS};
pub use not_found::NotFoundPage;
pub use projects::{ProjectsPage, PROJECT_COUNTERS};

/// Fixed animation target for a metric card. Labels come from the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSpec {
    pub to: u64,
    pub duration_ms: u64,
    pub suffix: &'static str,
}

/// Image card shared by the home showcase and the projects portfolio.
/// `index` staggers the entrance animation.
fn project_card(item: &ProjectHighlight, index: usize) -> Element {
    let delay = index * 100;
    rsx! {
        article { key: "{item.name}", class: "project-card fade-in-up", style: "animation-delay: {delay}ms",
            img { src: "{item.image}", alt: "{item.name}", width: "600", height: "420" }
            div { class: "content",
                span { class: "project-badge", "{item.location}" }
                h3 { class: "card-title", "{item.name}" }
                p { class: "card-text", "{item.description}" }
            }
        }
    }
}
