//! Typed content tree deserialized from `content/<locale>.json`.
//!
//! Field names mirror the JSON (camelCase). Lists keep their JSON order, which is
//! also render order.

use serde::Deserialize;

use crate::locale::Locale;
use crate::routes::NavKey;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dictionary {
    pub meta: Meta,
    pub nav: Nav,
    pub footer: Footer,
    pub home: HomeContent,
    pub about: AboutContent,
    pub projects: ProjectsContent,
    pub contact: ContactContent,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub site_description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nav {
    pub links: Vec<NavLink>,
    pub contact_cta: String,
    pub language_label: String,
    pub languages: LanguageNames,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub label: String,
    pub href_key: NavKey,
}

/// Native name of every supported locale, shown on the switcher buttons.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LanguageNames {
    pub en: String,
    pub ar: String,
}

impl LanguageNames {
    pub fn name(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Ar => &self.ar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub about: String,
    pub contact_title: String,
    pub contact_info: ContactInfo,
    pub socials_label: String,
    pub rights: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub hero: HomeHero,
    pub metrics: Vec<Metric>,
    pub architectural_statement: Statement,
    pub project_showcase: Showcase,
    pub pillars: CardGroup,
    pub contact: ContactFormContent,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeHero {
    pub kicker: String,
    pub title: String,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Metric {
    pub label: String,
    /// One line under the counter.
    pub helper: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Statement {
    pub title: String,
    pub body: String,
    pub highlight: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Showcase {
    pub heading: String,
    pub caption: String,
    pub items: Vec<ProjectHighlight>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectHighlight {
    pub name: String,
    pub location: String,
    pub description: String,
    /// Absolute URL on external image hosting.
    pub image: String,
}

/// Titled card; used for pillars, principles and methodology steps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Card {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardGroup {
    pub title: String,
    pub items: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AboutContent {
    pub hero: AboutHero,
    pub history: History,
    pub board: Board,
    pub principles: CardGroup,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AboutHero {
    pub title: String,
    pub subtitle: String,
    pub statement: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct History {
    pub title: String,
    pub items: Vec<HistoryEvent>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryEvent {
    pub year: String,
    pub summary: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Board {
    pub title: String,
    pub subtitle: String,
    pub members: Vec<BoardMember>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectsContent {
    pub hero: TitledHero,
    pub counters: ProjectCounters,
    pub categories: Portfolio,
    pub methodology: Methodology,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TitledHero {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectCounters {
    pub projects: String,
    pub clients: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portfolio {
    pub title: String,
    pub items: Vec<ProjectHighlight>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Methodology {
    pub title: String,
    pub steps: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactContent {
    pub hero: TitledHero,
    pub form: ContactFormContent,
    pub visit: Visit,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Visit {
    pub title: String,
    pub caption: String,
}

/// Form copy shared by the home contact section and the contact page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormContent {
    pub title: String,
    /// Only the home variant carries a subtitle.
    #[serde(default)]
    pub subtitle: Option<String>,
    pub submit_label: String,
    pub success_message: String,
    pub fields: Vec<ContactField>,
}

/// One input of the contact form. `options` exist exactly when the kind is select.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawContactField")]
pub struct ContactField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Textarea,
    Select { options: Vec<String> },
}

impl FieldKind {
    /// Value of the `type` attribute for `<input>`-rendered kinds.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Textarea => "textarea",
            FieldKind::Select { .. } => "select",
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match self {
            FieldKind::Select { options } => Some(options),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawKind {
    Text,
    Email,
    Tel,
    Select,
    Textarea,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawContactField {
    name: String,
    label: String,
    placeholder: String,
    #[serde(rename = "type", default)]
    kind: Option<RawKind>,
    #[serde(default)]
    options: Option<Vec<String>>,
}

impl TryFrom<RawContactField> for ContactField {
    type Error = String;

    fn try_from(raw: RawContactField) -> Result<Self, Self::Error> {
        let kind = match (raw.kind.unwrap_or(RawKind::Text), raw.options) {
            (RawKind::Select, Some(options)) if !options.is_empty() => FieldKind::Select { options },
            (RawKind::Select, _) => {
                return Err(format!("select field `{}` needs at least one option", raw.name))
            }
            (_, Some(_)) => {
                return Err(format!("field `{}` has options but is not a select", raw.name))
            }
            (RawKind::Text, None) => FieldKind::Text,
            (RawKind::Email, None) => FieldKind::Email,
            (RawKind::Tel, None) => FieldKind::Tel,
            (RawKind::Textarea, None) => FieldKind::Textarea,
        };

        Ok(ContactField {
            name: raw.name,
            label: raw.label,
            placeholder: raw.placeholder,
            kind,
        })
    }
}

/// Settings shared by every locale, from `content/site.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub brand_name: String,
    /// `mailto:` target for the footer email link.
    pub contact_email: String,
    pub socials: Vec<SocialLink>,
    pub map_embed_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub label: String,
    /// Two-letter badge rendered inside the round link.
    pub short: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(json: &str) -> Result<ContactField, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn missing_type_defaults_to_text() {
        let f = field(r#"{"name":"name","label":"Full name","placeholder":"..."}"#).unwrap();
        assert_eq!(f.kind, FieldKind::Text);
        assert_eq!(f.kind.input_type(), "text");
    }

    #[test]
    fn select_carries_options() {
        let f = field(
            r#"{"name":"interest","label":"L","placeholder":"P","type":"select","options":["a","b"]}"#,
        )
        .unwrap();
        assert_eq!(f.kind.options(), Some(&["a".to_string(), "b".to_string()][..]));
    }

    #[test]
    fn select_without_options_is_rejected() {
        let err = field(r#"{"name":"interest","label":"L","placeholder":"P","type":"select"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("interest"));
    }

    #[test]
    fn options_on_non_select_are_rejected() {
        assert!(field(r#"{"name":"email","label":"L","placeholder":"P","type":"email","options":["x"]}"#).is_err());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(field(r#"{"name":"when","label":"L","placeholder":"P","type":"date"}"#).is_err());
    }
}
