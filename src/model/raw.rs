//! Untrusted resume input.
//!
//! Resume records arrive from an AI service or a user upload with no
//! guaranteed shape: a skills field may be a list, a comma-separated string,
//! or missing entirely; an education entry may be a string or an object with
//! any subset of its subfields. Every field here is a small closed set of
//! variants, and conversion from JSON never fails: anything unrecognized
//! becomes [`TextField::Absent`], [`ListField::Absent`] or [`ListItem::Other`].

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A raw resume record of unknown completeness.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResume {
    /// Candidate name
    pub name: TextField,

    /// Free-form contact details (email, phone, links)
    pub contact_info: TextField,

    /// Professional summary
    pub summary: TextField,

    /// Skills
    pub skills: ListField,

    /// Certifications
    pub certifications: ListField,

    /// Spoken languages
    pub languages: ListField,

    /// Tools and software
    pub tools: ListField,

    /// Education entries
    pub education: ListField,

    /// Projects
    pub projects: ListField,

    /// Work experience under the `experience` key
    pub experience: ListField,

    /// Work experience under the `experienceBullets` key used by the
    /// generation service
    pub experience_bullets: ListField,
}

impl RawResume {
    /// Create an empty raw record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a raw record from an arbitrary JSON value.
    ///
    /// Non-object values yield an empty record.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(map),
            _ => Self::default(),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let text = |key: &str| map.get(key).map(TextField::from_value).unwrap_or_default();
        let list = |key: &str| map.get(key).map(ListField::from_value).unwrap_or_default();

        Self {
            name: text("name"),
            contact_info: text("contactInfo"),
            summary: text("summary"),
            skills: list("skills"),
            certifications: list("certifications"),
            languages: list("languages"),
            tools: list("tools"),
            education: list("education"),
            projects: list("projects"),
            experience: list("experience"),
            experience_bullets: list("experienceBullets"),
        }
    }

    /// Experience fields in the order they are read: `experience`, then
    /// `experienceBullets`.
    pub fn experience_sources(&self) -> [&ListField; 2] {
        [&self.experience, &self.experience_bullets]
    }
}

impl<'de> Deserialize<'de> for RawResume {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// A single-string field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TextField {
    /// A string value (possibly empty)
    Text(String),
    /// Missing, null, or not a string
    #[default]
    Absent,
}

impl TextField {
    /// Classify a JSON value. Only strings are accepted.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => TextField::Text(s.clone()),
            _ => TextField::Absent,
        }
    }

    /// Get the text when present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TextField::Text(s) => Some(s),
            TextField::Absent => None,
        }
    }
}

impl From<&str> for TextField {
    fn from(s: &str) -> Self {
        TextField::Text(s.to_string())
    }
}

/// A field that may hold a list, a delimited string, or nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListField {
    /// An ordered list; `None` marks null elements
    Items(Vec<Option<ListItem>>),
    /// A delimited string (commas or newlines, depending on the field)
    Delimited(String),
    /// Missing, null, or an unusable scalar
    #[default]
    Absent,
}

impl ListField {
    /// Classify a JSON value.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => {
                ListField::Items(items.iter().map(ListItem::from_element).collect())
            }
            Value::String(s) => ListField::Delimited(s.clone()),
            _ => ListField::Absent,
        }
    }

    /// Build a list of plain strings.
    pub fn strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ListField::Items(
            items
                .into_iter()
                .map(|s| Some(ListItem::Text(s.into())))
                .collect(),
        )
    }

    /// Build a list of records.
    pub fn records<I: IntoIterator<Item = EntryRecord>>(records: I) -> Self {
        ListField::Items(records.into_iter().map(|r| Some(ListItem::Record(r))).collect())
    }

    /// Check whether the field is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, ListField::Absent)
    }
}

impl From<&str> for ListField {
    fn from(s: &str) -> Self {
        ListField::Delimited(s.to_string())
    }
}

/// One element of a list field.
#[derive(Debug, Clone, PartialEq)]
pub enum ListItem {
    /// A plain string element
    Text(String),
    /// An object element
    Record(EntryRecord),
    /// A number, boolean, or nested list
    Other,
}

impl ListItem {
    fn from_element(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(ListItem::Text(s.clone())),
            Value::Object(map) => Some(ListItem::Record(EntryRecord::from_map(map))),
            _ => Some(ListItem::Other),
        }
    }
}

/// An object-shaped list element.
///
/// One record type covers education, project, experience and named-item
/// objects; each consumer reads the subfields it cares about. Blank values
/// are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryRecord {
    pub title: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub school: Option<String>,
    pub year: Option<String>,
    pub role: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub bullets: ListField,
}

impl EntryRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let field = |key: &str| map.get(key).and_then(scalar_text);

        Self {
            title: field("title"),
            name: field("name"),
            description: field("description"),
            degree: field("degree"),
            institution: field("institution"),
            school: field("school"),
            year: field("year"),
            role: field("role"),
            position: field("position"),
            company: field("company"),
            bullets: map.get("bullets").map(ListField::from_value).unwrap_or_default(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set degree, institution and year.
    pub fn with_degree(
        mut self,
        degree: impl Into<String>,
        institution: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        self.degree = Some(degree.into());
        self.institution = Some(institution.into());
        self.year = Some(year.into());
        self
    }

    /// Set role and company.
    pub fn with_role(mut self, role: impl Into<String>, company: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self.company = Some(company.into());
        self
    }

    /// Set the bullets.
    pub fn with_bullets(mut self, bullets: ListField) -> Self {
        self.bullets = bullets;
        self
    }
}

/// Subfields such as `year` are often sent as numbers.
fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_non_object() {
        assert_eq!(RawResume::from_value(&json!([1, 2, 3])), RawResume::default());
        assert_eq!(RawResume::from_value(&json!("text")), RawResume::default());
    }

    #[test]
    fn test_field_variants() {
        let raw = RawResume::from_value(&json!({
            "name": "Jane Doe",
            "summary": 42,
            "skills": "Rust, Go",
            "tools": ["git", null, 7],
            "languages": {"unexpected": true}
        }));

        assert_eq!(raw.name, TextField::Text("Jane Doe".to_string()));
        assert_eq!(raw.summary, TextField::Absent);
        assert_eq!(raw.skills, ListField::Delimited("Rust, Go".to_string()));
        assert_eq!(
            raw.tools,
            ListField::Items(vec![
                Some(ListItem::Text("git".to_string())),
                None,
                Some(ListItem::Other)
            ])
        );
        assert!(raw.languages.is_absent());
    }

    #[test]
    fn test_record_numeric_year() {
        let raw = RawResume::from_value(&json!({
            "education": [{"degree": "BSc", "school": "MIT", "year": 2020, "title": "  "}]
        }));

        let ListField::Items(items) = raw.education else {
            panic!("Expected Items variant");
        };
        let Some(ListItem::Record(record)) = &items[0] else {
            panic!("Expected a record");
        };
        assert_eq!(record.year.as_deref(), Some("2020"));
        assert_eq!(record.school.as_deref(), Some("MIT"));
        assert_eq!(record.title, None);
    }

    #[test]
    fn test_experience_sources_order() {
        let raw = RawResume::from_value(&json!({
            "experience": [],
            "experienceBullets": [{"role": "Engineer"}]
        }));
        let [first, second] = raw.experience_sources();
        assert_eq!(first, &ListField::Items(Vec::new()));
        assert_eq!(second, &raw.experience_bullets);
    }

    #[test]
    fn test_deserialize_from_str() {
        let raw: RawResume = serde_json::from_str(r#"{"name": "Jane", "skills": ["Rust"]}"#).unwrap();
        assert_eq!(raw.name.as_str(), Some("Jane"));
        assert_eq!(raw.skills, ListField::strings(["Rust"]));
    }
}
