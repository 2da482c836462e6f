//! Interface-string catalogs ("chrome") for `alnabila-ui`.
//!
//! Page copy lives in the content trees (`content/*.json`). The Fluent catalogs
//! here hold interface strings that are not content: aria labels, section dot
//! names, page titles and a few fixed headings.
//!
//! This module wires together:
//! - `i18n-embed` (catalog selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/alnabila-ui.ftl   (fallback/reference)
//!   ar/alnabila-ui.ftl
//! ```
//!
//! Each locale gets its own loader, owned by the `DictionaryStore`. There is no
//! process-wide "current language": the URL decides per render, so concurrent
//! server renders in different locales never share mutable state.
//!
//! Usage in a component:
//! ```ignore
//! let chrome = store.chrome(locale);
//! let label = t!(chrome, "nav-toggle-menu");
//! let dot = t!(chrome, "snap-dot-label", section = name);
//! ```

use i18n_embed::fluent::FluentLanguageLoader;
use rust_embed::Embed;

use crate::content::ContentError;
use crate::locale::Locale;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Keyed lookup against a specific locale's catalog.
/// Examples:
///     t!(chrome, "nav-close-menu")
///     t!(chrome, "snap-dot-label", section = "Hero")
#[macro_export]
macro_rules! t {
    ($loader:expr, $key:literal) => {
        $crate::i18n::fl!($loader, $key)
    };
    ($loader:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($loader, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en/{DOMAIN}.ftl`
pub const DOMAIN: &str = "alnabila-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Build the catalog for `locale`, falling back message-by-message to English.
pub fn load_catalog(locale: Locale) -> Result<FluentLanguageLoader, ContentError> {
    let loader = FluentLanguageLoader::new(DOMAIN, Locale::DEFAULT.language_id());
    let requested = locale.language_id();

    let selected = i18n_embed::select(&loader, &Localizations, &[requested.clone()])
        .map_err(|source| ContentError::Catalog { locale, source })?;

    if !selected.contains(&requested) {
        return Err(ContentError::CatalogMissing(locale));
    }
    // Strings end up in attributes (aria labels, titles); the page sets `dir`.
    loader.set_use_isolating(false);
    Ok(loader)
}
