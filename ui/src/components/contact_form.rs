use dioxus::prelude::*;

use crate::content::{ContactField, ContactFormContent, FieldKind};
use crate::locale::Locale;

/// Submission state. The form never transmits anything; submitting only flips
/// to [`FormStatus::Submitted`] and reveals the success message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitted,
}

impl FormStatus {
    /// Terminal: submitting again keeps the form submitted.
    pub fn submit(self) -> Self {
        FormStatus::Submitted
    }

    pub fn is_submitted(self) -> bool {
        self == FormStatus::Submitted
    }
}

/// DOM id for a field, unique per locale so both forms could share a page.
pub fn field_id(locale: Locale, name: &str) -> String {
    format!("contact-{locale}-{name}")
}

#[component]
pub fn ContactForm(form: ContactFormContent, locale: Locale, class: Option<String>) -> Element {
    let mut status = use_signal(FormStatus::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        status.with_mut(|s| *s = s.submit());
        tracing::debug!(%locale, "contact form submitted (not transmitted)");
    };

    let extra = class.unwrap_or_default();

    rsx! {
        form { class: "contact-form fade-in-up {extra}", onsubmit,
            for field in form.fields.iter() {
                {render_field(field, locale)}
            }
            button { class: "button-primary", r#type: "submit", "{form.submit_label}" }
            if status().is_submitted() {
                p { class: "form-success", role: "status", "{form.success_message}" }
            }
        }
    }
}

fn render_field(field: &ContactField, locale: Locale) -> Element {
    let id = field_id(locale, &field.name);

    let control = match &field.kind {
        FieldKind::Textarea => rsx! {
            textarea {
                id: "{id}",
                name: "{field.name}",
                placeholder: "{field.placeholder}",
                rows: "4",
                required: true,
            }
        },
        FieldKind::Select { options } => rsx! {
            select { id: "{id}", name: "{field.name}", required: true,
                option { value: "", disabled: true, selected: true, "{field.placeholder}" }
                for opt in options.iter() {
                    option { key: "{opt}", value: "{opt}", "{opt}" }
                }
            }
        },
        kind => rsx! {
            input {
                id: "{id}",
                r#type: kind.input_type(),
                name: "{field.name}",
                placeholder: "{field.placeholder}",
                required: true,
            }
        },
    };

    rsx! {
        label { key: "{field.name}", class: "form-field", r#for: "{id}",
            span { class: "form-label", "{field.label}" }
            {control}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_is_terminal() {
        let status = FormStatus::default();
        assert!(!status.is_submitted());
        let status = status.submit();
        assert!(status.is_submitted());
        assert_eq!(status.submit(), FormStatus::Submitted);
    }

    #[test]
    fn field_ids_are_scoped_by_locale() {
        assert_eq!(field_id(Locale::En, "email"), "contact-en-email");
        assert_ne!(field_id(Locale::En, "email"), field_id(Locale::Ar, "email"));
    }
}
