//! Path rewriting behind the language switcher.

use crate::locale::Locale;
use crate::routes::path_segments;

/// Compute where a switch to `target` should navigate from `pathname`.
///
/// Returns `None` when the switch is a no-op: the target is the current locale or
/// is not a supported code. A leading locale segment is replaced in place; a path
/// that lost its prefix gets the new locale prepended.
pub fn plan_switch(current: Locale, target: &str, pathname: &str) -> Option<String> {
    let target = Locale::from_code(target)?;
    if target == current {
        return None;
    }

    let mut segments = path_segments(pathname);
    if segments.is_empty() {
        return Some(format!("/{target}"));
    }

    if Locale::from_code(segments[0]).is_some() {
        segments[0] = target.code();
    } else {
        segments.insert(0, target.code());
    }

    Some(format!("/{}", segments.join("/")))
}

/// In-flight state of a locale switch, as seen from one switcher.
///
/// `begin` marks a navigation as issued; `observe` is fed the route's locale on
/// every change and clears the flag once it differs from where the switch started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSwitch {
    locale: Locale,
    pending: bool,
}

impl PendingSwitch {
    pub fn new(locale: Locale) -> Self {
        Self { locale, pending: false }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn begin(&mut self) {
        self.pending = true;
    }

    /// Record the route's current locale.
    pub fn observe(&mut self, current: Locale) {
        if current != self.locale {
            self.locale = current;
            self.pending = false;
        }
    }

    /// Navigation was rejected; the locale stays as it was.
    pub fn fail(&mut self) {
        self.pending = false;
    }

    /// Only the active locale's button is locked while a switch is in flight.
    pub fn button_disabled(&self, button: Locale) -> bool {
        self.pending && button == self.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/en/projects", "/ar/projects")]
    #[case("/en", "/ar")]
    #[case("/en/about/", "/ar/about")]
    #[case("/random", "/ar/random")]
    #[case("/fr/contact", "/ar/fr/contact")]
    #[case("", "/ar")]
    #[case("/", "/ar")]
    fn english_to_arabic(#[case] pathname: &str, #[case] expected: &str) {
        assert_eq!(plan_switch(Locale::En, "ar", pathname).as_deref(), Some(expected));
    }

    #[test]
    fn arabic_prefix_is_replaced() {
        assert_eq!(
            plan_switch(Locale::Ar, "en", "/ar/contact").as_deref(),
            Some("/en/contact")
        );
    }

    #[test]
    fn same_locale_is_a_noop() {
        assert_eq!(plan_switch(Locale::En, "en", "/en/projects"), None);
    }

    #[test]
    fn unsupported_target_is_a_noop() {
        assert_eq!(plan_switch(Locale::En, "fr", "/en/projects"), None);
        assert_eq!(plan_switch(Locale::En, "", "/en/projects"), None);
    }

    #[rstest]
    #[case(false, Locale::En, false)]
    #[case(false, Locale::Ar, false)]
    #[case(true, Locale::En, true)]
    #[case(true, Locale::Ar, false)]
    fn only_the_current_button_locks(
        #[case] pending: bool,
        #[case] button: Locale,
        #[case] disabled: bool,
    ) {
        let mut switch = PendingSwitch::new(Locale::En);
        if pending {
            switch.begin();
        }
        assert_eq!(switch.button_disabled(button), disabled);
    }

    #[test]
    fn pending_clears_when_the_locale_changes() {
        let mut switch = PendingSwitch::new(Locale::En);
        switch.begin();
        switch.observe(Locale::En);
        assert!(switch.is_pending());

        switch.observe(Locale::Ar);
        assert!(!switch.is_pending());
        assert!(!switch.button_disabled(Locale::Ar));
    }

    #[test]
    fn failed_navigation_clears_pending_without_moving() {
        let mut switch = PendingSwitch::new(Locale::Ar);
        switch.begin();
        switch.fail();
        assert!(!switch.is_pending());
        switch.begin();
        assert!(switch.button_disabled(Locale::Ar));
    }
}
