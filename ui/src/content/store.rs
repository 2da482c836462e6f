use i18n_embed::fluent::FluentLanguageLoader;
use rust_embed::Embed;
use serde::de::DeserializeOwned;

use super::error::ContentError;
use super::model::{Dictionary, SiteConfig};
use crate::i18n;
use crate::locale::{resolve_locale, Locale};

/// Embedded content trees (`content/en.json`, `content/ar.json`, `content/site.json`).
#[derive(Embed)]
#[folder = "content"]
struct ContentFiles;

const SITE_FILE: &str = "site.json";

/// Everything rendered for one locale: the content tree plus its interface catalog.
pub struct LocaleContent {
    pub dictionary: Dictionary,
    pub chrome: FluentLanguageLoader,
}

/// Read-only content for every supported locale, built once at startup.
///
/// One field per locale makes an incomplete store unrepresentable, so every
/// lookup is total. Share it behind an `Arc`; nothing mutates it after `load`.
pub struct DictionaryStore {
    english: LocaleContent,
    arabic: LocaleContent,
    site: SiteConfig,
}

impl DictionaryStore {
    pub fn load() -> Result<Self, ContentError> {
        let store = Self {
            english: load_locale(Locale::En)?,
            arabic: load_locale(Locale::Ar)?,
            site: read_json(SITE_FILE)?,
        };
        tracing::info!(locales = Locale::ALL.len(), "content store ready");
        Ok(store)
    }

    pub fn content(&self, locale: Locale) -> &LocaleContent {
        match locale {
            Locale::En => &self.english,
            Locale::Ar => &self.arabic,
        }
    }

    pub fn dictionary(&self, locale: Locale) -> &Dictionary {
        &self.content(locale).dictionary
    }

    /// Whole-tree fallback: unknown or absent codes get the default locale's tree.
    pub fn dictionary_for(&self, raw: Option<&str>) -> &Dictionary {
        self.dictionary(resolve_locale(raw))
    }

    /// Fluent catalog for interface strings (labels, headings, titles).
    pub fn chrome(&self, locale: Locale) -> &FluentLanguageLoader {
        &self.content(locale).chrome
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }
}

fn load_locale(locale: Locale) -> Result<LocaleContent, ContentError> {
    let dictionary = read_json(&format!("{}.json", locale.code()))?;
    let chrome = i18n::load_catalog(locale)?;
    tracing::debug!(%locale, "loaded locale content");
    Ok(LocaleContent { dictionary, chrome })
}

fn read_json<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let embedded = ContentFiles::get(file).ok_or_else(|| ContentError::Missing(file.to_string()))?;
    serde_json::from_slice(&embedded.data).map_err(|source| ContentError::Parse {
        file: file.to_string(),
        source,
    })
}
