use thiserror::Error;

use crate::locale::Locale;

/// Failures while building the content store from embedded files.
///
/// Field-descriptor violations (options without a select, and so on) surface as
/// [`ContentError::Parse`] with the offending field named in the message.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content file `{0}` is not embedded")]
    Missing(String),

    #[error("content file `{file}` is invalid: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("interface catalog for `{locale}` failed to load: {source}")]
    Catalog {
        locale: Locale,
        #[source]
        source: i18n_embed::I18nEmbedError,
    },

    #[error("no interface catalog embedded for `{0}`")]
    CatalogMissing(Locale),
}
