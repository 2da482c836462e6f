use std::sync::Arc;

use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{SiteFooter, SiteHeader};
use ui::content::DictionaryStore;
use ui::locale::{resolve_locale, Locale};
use ui::routes::normalize_pathname;
use ui::views::{AboutPage, ContactPage, HomeExperience, NotFoundPage, ProjectsPage};

/// Every page lives under a locale segment. Unknown locale segments still
/// render, in the default locale; unknown sub-paths fall through to the
/// not-found page.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[redirect("/", || Route::Home { locale: Locale::DEFAULT.code().to_string() })]
    #[nest("/:locale")]
        #[layout(LocaleLayout)]
            #[route("/")]
            Home { locale: String },
            #[route("/about")]
            About { locale: String },
            #[route("/projects")]
            Projects { locale: String },
            #[route("/contact")]
            Contact { locale: String },
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }

    let store = match DictionaryStore::load() {
        Ok(store) => Arc::new(store),
        Err(err) => {
            tracing::error!(error = %err, "failed to load site content");
            std::process::exit(1);
        }
    };

    LaunchBuilder::new().with_context(store).launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: ui::BRAND_LOGO }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link {
            rel: "stylesheet",
            href: "https://fonts.googleapis.com/css2?family=Cairo:wght@300;400;600;700&family=Poppins:wght@300;400;500;600;700&display=swap",
        }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Resolves the locale once per navigation and applies direction, language and
/// the shared chrome around the page.
#[component]
fn LocaleLayout(locale: String) -> Element {
    let locale = resolve_locale(Some(&locale));
    let route = use_route::<Route>();
    let pathname = normalize_pathname(&route.to_string());
    let home = !shows_site_footer(&route);
    let body_class = if locale.is_rtl() { "app-body rtl" } else { "app-body" };

    rsx! {
        div {
            class: "{body_class}",
            dir: locale.direction().as_str(),
            lang: locale.code(),
            SiteHeader { locale, pathname: pathname.clone() }
            main { class: "page-main", Outlet::<Route> {} }
            SiteFooter { locale, home }
        }
    }
}

/// The home experience carries its own footer section. Any single segment
/// reaches `Home`, including unsupported codes that fall back to English.
fn shows_site_footer(route: &Route) -> bool {
    !matches!(route, Route::Home { .. })
}

#[component]
fn Home(locale: String) -> Element {
    rsx! { HomeExperience { locale: resolve_locale(Some(&locale)) } }
}

#[component]
fn About(locale: String) -> Element {
    rsx! { AboutPage { locale: resolve_locale(Some(&locale)) } }
}

#[component]
fn Projects(locale: String) -> Element {
    rsx! { ProjectsPage { locale: resolve_locale(Some(&locale)) } }
}

#[component]
fn Contact(locale: String) -> Element {
    rsx! { ContactPage { locale: resolve_locale(Some(&locale)) } }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let locale = segments
        .first()
        .map_or(Locale::DEFAULT, |first| resolve_locale(Some(first)));
    let attempted = format!("/{}", segments.join("/"));
    tracing::debug!(%attempted, "no route matched");

    rsx! {
        div {
            class: if locale.is_rtl() { "app-body rtl" } else { "app-body" },
            dir: locale.direction().as_str(),
            lang: locale.code(),
            SiteHeader { locale, pathname: attempted.clone() }
            main { class: "page-main", NotFoundPage { locale, attempted } }
        }
    }
}
