use dioxus::prelude::*;

use crate::locale::Locale;
use crate::{t, use_store, BRAND_LOGO};

/// Brand, about blurb, contact details and social links.
///
/// Shared by the site footer and the last snap section of the home page.
#[component]
pub fn FooterContent(locale: Locale) -> Element {
    let store = use_store();
    let footer = &store.dictionary(locale).footer;
    let site = store.site();
    let chrome = store.chrome(locale);

    rsx! {
        div { class: "footer-grid",
            div { class: "footer-brand",
                img {
                    class: "logo",
                    src: BRAND_LOGO,
                    alt: t!(chrome, "brand-logo-alt"),
                    width: "200",
                    height: "60",
                }
                p { "{footer.about}" }
            }
            div { class: "footer-contact",
                h3 { "{footer.contact_title}" }
                p { "{footer.contact_info.phone}" }
                a { href: "mailto:{site.contact_email}", "{footer.contact_info.email}" }
                address {
                    for line in footer.contact_info.address.iter() {
                        span { key: "{line}", "{line}" }
                    }
                }
            }
            div { class: "footer-socials",
                h3 { "{footer.socials_label}" }
                div { class: "social-links",
                    for social in site.socials.iter() {
                        a {
                            key: "{social.label}",
                            href: "{social.url}",
                            target: "_blank",
                            rel: "noreferrer",
                            aria_label: "{social.label}",
                            "{social.short}"
                        }
                    }
                }
            }
        }
        div { class: "footer-bottom",
            span { "{footer.rights}" }
        }
    }
}

/// Page footer. The home experience renders the footer as its own snap
/// section, so the caller passes `home` for that route and nothing renders.
///
/// `home` follows the matched route rather than the path: `/fr` falls back to
/// the English home page even though `fr` is not a supported locale.
#[component]
pub fn SiteFooter(locale: Locale, home: bool) -> Element {
    if home {
        return rsx! {};
    }

    rsx! {
        footer { class: "site-footer",
            div { class: "inner",
                FooterContent { locale }
            }
        }
    }
}
