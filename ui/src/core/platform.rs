//! Platform detection helpers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// wasm32 build running in a browser.
    Web,
    /// Native build; in practice the SSR server.
    Server,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Server
        }
    }

    /// Whether a live DOM is available (scroll listeners, animations).
    pub fn has_dom(self) -> bool {
        self == Self::Web
    }
}
