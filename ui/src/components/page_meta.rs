use dioxus::prelude::*;

/// Per-page `<title>` and description.
#[component]
pub fn PageMeta(title: String, description: String) -> Element {
    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "description", content: "{description}" }
    }
}
