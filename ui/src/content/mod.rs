//! Dictionary store: the static, per-locale content the pages render.

mod error;
pub mod model;
mod store;

pub use error::ContentError;
pub use model::*;
pub use store::{DictionaryStore, LocaleContent};
