#![cfg(test)]
/*!
Theme selector lint.

Components reference these classes by name; a rename in `assets/theme/main.css`
would otherwise only show up as unstyled markup. A substring check is enough as
an early warning.

When you intentionally rename or remove a selector, update the component markup
and `REQUIRED_SELECTORS` together.
*/

const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/theme/main.css"));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".app-body {",
    ".app-body.rtl",
    ".container,",
    // Header and navigation
    ".nav-bar {",
    ".nav-links {",
    ".nav-link.active",
    ".nav-underline",
    ".language-switcher {",
    ".language-switcher.pending",
    ".language-switcher button.active",
    ".mobile-menu-button",
    ".mobile-overlay.open",
    ".mobile-menu.open",
    ".mobile-link.active",
    // Home snap experience
    ".home-snap {",
    ".snap-section {",
    "scroll-snap-type: y mandatory",
    ".snap-nav-dots {",
    ".snap-nav-dot.active",
    // Content blocks
    ".hero-section",
    ".section-header",
    ".metric-card",
    ".project-card",
    ".board-card",
    ".history-timeline",
    ".contact-form {",
    ".form-success",
    ".map-container",
    // Footer
    ".site-footer",
    ".footer-grid",
    ".social-links",
    // Motion and responsive tokens
    "@keyframes fade-in-up",
    "@media (prefers-reduced-motion: reduce)",
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(**sel))
        .copied()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Theme appears unexpectedly small ({non_ws_len} non-whitespace chars); \
         did the file get truncated or the path change?"
    );
}

#[test]
fn rtl_overrides_mirror_the_drawer() {
    // The drawer slides in from the inline end in both directions.
    assert!(THEME_CSS.contains(".rtl .mobile-menu {"));
    assert!(THEME_CSS.contains(".rtl .mobile-menu.open"));
}
