//! Shared UI crate for the Al Nabila site. Locale routing, content, components
//! and page views live here; platform crates only add the `Route` enum and launch.

use dioxus::prelude::*;

pub mod content;
pub mod core;
pub mod i18n;
pub mod locale;
pub mod routes;
pub mod switcher;
pub mod views;

mod context;
pub use context::{use_store, SharedStore};

pub mod components {
    mod animated_counter;
    mod contact_form;
    mod footer;
    mod language_switcher;
    mod mobile_nav;
    mod nav_link;
    mod page_meta;
    mod site_header;
    mod snap_nav_dots;

    pub use animated_counter::AnimatedCounter;
    pub use contact_form::{field_id, ContactForm, FormStatus};
    pub use footer::{FooterContent, SiteFooter};
    pub use language_switcher::LanguageSwitcher;
    pub use mobile_nav::{MenuState, MobileNav};
    pub use nav_link::NavLinkHighlight;
    pub use page_meta::PageMeta;
    pub use site_header::SiteHeader;
    pub use snap_nav_dots::SnapNavDots;
}

/// Unified site theme.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Brand logo; also used as the favicon.
pub const BRAND_LOGO: Asset = asset!("/assets/brand/alnabila-logo.svg");
