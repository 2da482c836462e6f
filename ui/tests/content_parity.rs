//! Both locale trees must describe the same site: same list lengths, same
//! navigation targets, same form fields. Only the copy differs.

use ui::content::{Dictionary, DictionaryStore, FieldKind};
use ui::locale::Locale;
use ui::routes::NavKey;
use ui::views::{HOME_COUNTERS, PROJECT_COUNTERS};

fn trees() -> (Dictionary, Dictionary) {
    let store = DictionaryStore::load().expect("embedded content loads");
    (
        store.dictionary(Locale::En).clone(),
        store.dictionary(Locale::Ar).clone(),
    )
}

fn field_shape(fields: &[ui::content::ContactField]) -> Vec<(String, FieldKind)> {
    fields
        .iter()
        .map(|f| (f.name.clone(), f.kind.clone()))
        .map(|(name, kind)| match kind {
            // Option text is translated; only the count must match.
            FieldKind::Select { options } => (name, FieldKind::Select { options: vec![String::new(); options.len()] }),
            other => (name, other),
        })
        .collect()
}

#[test]
fn navigation_targets_match() {
    let (en, ar) = trees();
    let keys = |d: &Dictionary| d.nav.links.iter().map(|l| l.href_key).collect::<Vec<_>>();
    assert_eq!(keys(&en), NavKey::ALL.to_vec());
    assert_eq!(keys(&en), keys(&ar));
}

#[test]
fn list_lengths_match() {
    let (en, ar) = trees();
    assert_eq!(en.home.metrics.len(), ar.home.metrics.len());
    assert_eq!(en.home.project_showcase.items.len(), ar.home.project_showcase.items.len());
    assert_eq!(en.home.pillars.items.len(), ar.home.pillars.items.len());
    assert_eq!(en.about.history.items.len(), ar.about.history.items.len());
    assert_eq!(en.about.board.members.len(), ar.about.board.members.len());
    assert_eq!(en.about.principles.items.len(), ar.about.principles.items.len());
    assert_eq!(en.projects.categories.items.len(), ar.projects.categories.items.len());
    assert_eq!(en.projects.methodology.steps.len(), ar.projects.methodology.steps.len());
    assert_eq!(en.footer.contact_info.address.len(), ar.footer.contact_info.address.len());
}

#[test]
fn counters_have_labels() {
    let (en, _) = trees();
    assert_eq!(en.home.metrics.len(), HOME_COUNTERS.len());
    assert_eq!(PROJECT_COUNTERS.len(), 2);
}

#[test]
fn forms_share_fields_and_kinds() {
    let (en, ar) = trees();
    assert_eq!(field_shape(&en.contact.form.fields), field_shape(&ar.contact.form.fields));
    assert_eq!(field_shape(&en.home.contact.fields), field_shape(&ar.home.contact.fields));

    let names: Vec<_> = en.contact.form.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["name", "email", "phone", "interest", "message"]);
}

#[test]
fn only_the_home_form_has_a_subtitle() {
    let (en, ar) = trees();
    for tree in [&en, &ar] {
        assert!(tree.home.contact.subtitle.is_some());
        assert!(tree.contact.form.subtitle.is_none());
    }
}

#[test]
fn images_are_shared_across_locales() {
    let (en, ar) = trees();
    let images = |d: &Dictionary| {
        d.home
            .project_showcase
            .items
            .iter()
            .map(|p| p.image.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(images(&en), images(&ar));
}

#[test]
fn copy_is_actually_translated() {
    let (en, ar) = trees();
    assert_ne!(en.contact.form.submit_label, ar.contact.form.submit_label);
    assert_ne!(en.footer.about, ar.footer.about);
    assert_eq!(en.nav.languages, ar.nav.languages);
}
