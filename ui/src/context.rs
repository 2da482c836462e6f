use std::sync::Arc;

use dioxus::prelude::*;

use crate::content::DictionaryStore;

/// The content store as provided at the root of the app.
pub type SharedStore = Arc<DictionaryStore>;

/// Fetch the store injected by the platform crate (`LaunchBuilder::with_context`).
pub fn use_store() -> SharedStore {
    use_context::<SharedStore>()
}
