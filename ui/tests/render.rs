//! Server-side renders of individual components. Off wasm there is no DOM, so
//! these also pin the static output the first paint shows.

use std::sync::Arc;

use dioxus::prelude::*;
use ui::components::{AnimatedCounter, ContactForm, SiteFooter, SnapNavDots};
use ui::content::DictionaryStore;
use ui::locale::Locale;
use ui::use_store;

fn render(app: fn() -> Element) -> String {
    let store = Arc::new(DictionaryStore::load().expect("embedded content loads"));
    let mut dom = VirtualDom::new(app).with_root_context(store);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn contact_form_renders_fields_without_success_message() {
    fn app() -> Element {
        let form = use_store().dictionary(Locale::En).contact.form.clone();
        rsx! { ContactForm { form, locale: Locale::En } }
    }

    let html = render(app);
    for label in ["Full name", "Email address"] {
        assert!(html.contains(label), "missing label {label}: {html}");
    }
    assert!(html.contains(r#"id="contact-en-email""#));
    assert!(html.contains(r#"type="email""#));
    assert!(html.contains("<textarea"));
    assert!(html.contains("<select"));
    assert!(!html.contains("form-success"));
}

#[test]
fn arabic_form_uses_arabic_ids_and_copy() {
    fn app() -> Element {
        let form = use_store().dictionary(Locale::Ar).home.contact.clone();
        rsx! { ContactForm { form, locale: Locale::Ar } }
    }

    let html = render(app);
    assert!(html.contains("contact-ar-name"));
    assert!(html.contains("الاسم الكامل"));
}

#[test]
fn footer_is_hidden_on_home() {
    fn home() -> Element {
        rsx! { SiteFooter { locale: Locale::En, home: true } }
    }
    fn arabic_home() -> Element {
        rsx! { SiteFooter { locale: Locale::Ar, home: true } }
    }
    fn about() -> Element {
        rsx! { SiteFooter { locale: Locale::En, home: false } }
    }

    assert!(!render(home).contains("site-footer"));
    assert!(!render(arabic_home).contains("site-footer"));
    let html = render(about);
    assert!(html.contains("site-footer"));
    assert!(html.contains("mailto:info@alnabila.com"));
}

#[test]
fn counters_render_final_value_on_the_server() {
    fn english() -> Element {
        rsx! {
            AnimatedCounter { to: 6000, duration_ms: 1600, suffix: "+", label: "Clients", locale: Locale::En }
        }
    }
    fn arabic() -> Element {
        rsx! {
            AnimatedCounter { to: 6000, duration_ms: 1600, suffix: "+", label: "العملاء", locale: Locale::Ar }
        }
    }

    assert!(render(english).contains("6,000"));
    assert!(render(arabic).contains("٦٬٠٠٠"));
}

#[test]
fn hero_metrics_show_their_helper_line() {
    fn with_helper() -> Element {
        rsx! {
            AnimatedCounter {
                to: 120,
                duration_ms: 1600,
                label: "Delivered destinations",
                helper: "Residential, commercial, and hospitality landmarks",
                locale: Locale::En,
            }
        }
    }
    fn without_helper() -> Element {
        rsx! {
            AnimatedCounter { to: 120, duration_ms: 1600, label: "Delivered destinations", locale: Locale::En }
        }
    }

    let html = render(with_helper);
    assert!(html.contains("metric-helper"));
    assert!(html.contains("hospitality landmarks"));
    assert!(!render(without_helper).contains("metric-helper"));
}

#[test]
fn snap_dots_render_one_labelled_button_per_section() {
    fn app() -> Element {
        rsx! { SnapNavDots { locale: Locale::En } }
    }

    let html = render(app);
    assert_eq!(html.matches("snap-nav-dot-inner").count(), 5);
    assert!(html.contains("Go to Hero"));
    assert!(html.contains("Go to Footer"));
    assert_eq!(html.matches("snap-nav-dot active").count(), 1);
}
