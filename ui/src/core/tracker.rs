//! Active-section tracking for the full-page snap container on the home page.
//!
//! The DOM side (`core::dom`) only measures; all decisions happen here on a plain
//! [`ScrollSnapshot`] so the rules are testable off-browser.
//!
//! Rules, in order:
//! 1. Within [`AT_BOTTOM_EPSILON`] px of the maximum scroll offset, the last section
//!    is active. A short final section would otherwise never be "nearest".
//! 2. Otherwise the section whose top edge is closest to the container's top edge
//!    wins. Comparison is strict, so the lowest index wins ties.
//!
//! Sections missing from the snapshot are skipped. With no sections measured at all
//! the previous index is kept.

/// Distance (px) from the bottom under which the last section is forced active.
pub const AT_BOTTOM_EPSILON: f64 = 10.0;

/// Delay before the first evaluation after mount, once layout has settled.
pub const INITIAL_EVALUATION_DELAY_MS: u64 = 100;

/// One scrollable region of the home experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationSection {
    /// DOM id of the `<section>`.
    pub id: &'static str,
    /// Chrome catalog key for the dot's accessible label.
    pub label_key: &'static str,
}

/// Home sections in DOM order, which is also dot order.
pub const HOME_SECTIONS: [NavigationSection; 5] = [
    NavigationSection { id: "hero", label_key: "section-hero" },
    NavigationSection { id: "projects", label_key: "section-projects" },
    NavigationSection { id: "story", label_key: "section-story" },
    NavigationSection { id: "home-contact", label_key: "section-contact" },
    NavigationSection { id: "footer", label_key: "section-footer" },
];

/// Geometry captured from one scroll event. Tops are viewport coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollSnapshot {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
    pub container_top: f64,
    /// Top edge per section, `None` when that element is not rendered.
    pub section_tops: Vec<Option<f64>>,
}

impl ScrollSnapshot {
    pub fn is_at_bottom(&self) -> bool {
        (self.scroll_height - self.scroll_top - self.client_height).abs() < AT_BOTTOM_EPSILON
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTracker {
    active: usize,
    len: usize,
}

impl SectionTracker {
    /// Starts on the first section. `len` must be non-zero.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "tracker needs at least one section");
        Self { active: 0, len }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Apply the transition rule and return the new active index.
    pub fn evaluate(&mut self, snapshot: &ScrollSnapshot) -> usize {
        if self.len == 0 {
            return self.active;
        }

        if snapshot.is_at_bottom() {
            self.active = self.len - 1;
            return self.active;
        }

        let mut closest = None;
        let mut min_distance = f64::INFINITY;
        for (index, top) in snapshot.section_tops.iter().take(self.len).enumerate() {
            let Some(top) = top else { continue };
            let distance = (top - snapshot.container_top).abs();
            if distance < min_distance {
                min_distance = distance;
                closest = Some(index);
            }
        }

        if let Some(index) = closest {
            self.active = index;
        }
        self.active
    }
}

/// Scroll offset that aligns a section's top with the container's top.
pub fn scroll_target(scroll_top: f64, section_top: f64, container_top: f64) -> f64 {
    scroll_top + (section_top - container_top)
}
