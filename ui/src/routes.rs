//! Locale-prefixed path construction and inspection.
//!
//! Everything here is a pure function over strings so the routing rules can be
//! tested without a running router. Platform crates own the typed `Route` enum;
//! components link through the hrefs built here.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Navigation targets shared by the header, the mobile drawer and the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavKey {
    Home,
    About,
    Projects,
    Contact,
}

impl NavKey {
    pub const ALL: [NavKey; 4] = [NavKey::Home, NavKey::About, NavKey::Projects, NavKey::Contact];

    /// Path suffix after the locale segment; empty for home.
    pub fn suffix(self) -> &'static str {
        match self {
            NavKey::Home => "",
            NavKey::About => "about",
            NavKey::Projects => "projects",
            NavKey::Contact => "contact",
        }
    }
}

/// `/{locale}` for home, `/{locale}/{suffix}` otherwise.
pub fn build_href(locale: Locale, key: NavKey) -> String {
    match key.suffix() {
        "" => format!("/{locale}"),
        suffix => format!("/{locale}/{suffix}"),
    }
}

/// Prefix an arbitrary path with a locale segment.
///
/// Leading slashes are stripped first and a single trailing slash is dropped, so
/// `add_locale_to_path(Ar, "/")` is `/ar`.
pub fn add_locale_to_path(locale: Locale, path: &str) -> String {
    let clean = path.trim_start_matches('/');
    let joined = format!("/{locale}/{clean}");
    match joined.strip_suffix('/') {
        Some(trimmed) => trimmed.to_string(),
        None => joined,
    }
}

/// Non-empty path segments, in order.
pub fn path_segments(pathname: &str) -> Vec<&str> {
    pathname.split('/').filter(|s| !s.is_empty()).collect()
}

/// Desktop header rule: equal after dropping one trailing slash on each side.
pub fn is_nav_link_active(pathname: &str, href: &str) -> bool {
    strip_trailing_slash(pathname) == strip_trailing_slash(href)
}

/// Mobile drawer rule: home only matches exactly, other links also match their subtree.
pub fn is_mobile_link_active(pathname: &str, href: &str, key: NavKey) -> bool {
    if pathname == href {
        return true;
    }
    key != NavKey::Home
        && pathname
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Router paths render nested index routes with a trailing slash (`/en/`); the
/// highlight rules compare against hrefs without one.
pub fn normalize_pathname(pathname: &str) -> String {
    match strip_trailing_slash(pathname) {
        "" => "/".to_string(),
        trimmed => trimmed.to_string(),
    }
}

fn strip_trailing_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Locale::Ar, NavKey::Contact, "/ar/contact")]
    #[case(Locale::En, NavKey::Home, "/en")]
    #[case(Locale::Ar, NavKey::Home, "/ar")]
    #[case(Locale::En, NavKey::About, "/en/about")]
    #[case(Locale::En, NavKey::Projects, "/en/projects")]
    fn hrefs(#[case] locale: Locale, #[case] key: NavKey, #[case] expected: &str) {
        assert_eq!(build_href(locale, key), expected);
    }

    #[rstest]
    #[case("about", "/ar/about")]
    #[case("/about", "/ar/about")]
    #[case("///about/", "/ar/about")]
    #[case("", "/ar")]
    #[case("/", "/ar")]
    fn locale_prefixing(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(add_locale_to_path(Locale::Ar, path), expected);
    }

    #[test]
    fn desktop_highlight_ignores_one_trailing_slash() {
        assert!(is_nav_link_active("/en/about/", "/en/about"));
        assert!(is_nav_link_active("/en", "/en/"));
        assert!(!is_nav_link_active("/en/about/team", "/en/about"));
    }

    #[test]
    fn mobile_highlight_matches_subtrees_except_home() {
        assert!(is_mobile_link_active("/en/projects/quest", "/en/projects", NavKey::Projects));
        assert!(!is_mobile_link_active("/en/projectsx", "/en/projects", NavKey::Projects));
        assert!(is_mobile_link_active("/en", "/en", NavKey::Home));
        assert!(!is_mobile_link_active("/en/about", "/en", NavKey::Home));
    }

    #[rstest]
    #[case("/en/", "/en")]
    #[case("/en/about", "/en/about")]
    #[case("/", "/")]
    fn pathname_normalization(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_pathname(raw), expected);
    }

    #[test]
    fn nav_keys_deserialize_from_dictionary_form() {
        let key: NavKey = serde_json::from_str("\"projects\"").unwrap();
        assert_eq!(key, NavKey::Projects);
    }
}
