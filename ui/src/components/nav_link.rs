use dioxus::prelude::*;

use crate::routes::is_nav_link_active;

/// Desktop header link with an underline that grows in when active.
#[component]
pub fn NavLinkHighlight(href: String, pathname: String, children: Element) -> Element {
    let class = if is_nav_link_active(&pathname, &href) {
        "nav-link active"
    } else {
        "nav-link"
    };

    rsx! {
        Link { to: href, class: "{class}",
            span { class: "nav-link-label", {children} }
            span { class: "nav-underline", aria_hidden: "true" }
        }
    }
}
