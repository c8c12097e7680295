//! Field coercions.
//!
//! Each function maps one [`ListField`] variant set onto a canonical list.
//! They are total: every input shape produces a list, and elements that
//! cannot be used are dropped.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{EntryRecord, ExperienceEntry, ListField, ListItem};

/// Separator between parts of a summary line.
pub const PART_SEPARATOR: &str = " — ";

/// Separator between role and company in an experience title.
pub const ROLE_SEPARATOR: &str = " @ ";

fn list_delimiter() -> &'static Regex {
    static DELIMITER: OnceLock<Regex> = OnceLock::new();
    DELIMITER.get_or_init(|| Regex::new(r",\s*|\n+").expect("list delimiter pattern is valid"))
}

/// Coerce a field into a flat list of strings.
///
/// Lists keep their non-empty string elements in order; named objects
/// contribute their `name` (or `title`). Strings are split on a comma
/// followed by optional whitespace, or on runs of newlines.
///
/// # Example
///
/// ```
/// use resumekit::model::ListField;
/// use resumekit::normalize::to_ordered_string_list;
///
/// let skills = ListField::from("React, Node.js\nPython");
/// assert_eq!(to_ordered_string_list(&skills), vec!["React", "Node.js", "Python"]);
/// ```
pub fn to_ordered_string_list(field: &ListField) -> Vec<String> {
    match field {
        ListField::Items(items) => items
            .iter()
            .flatten()
            .filter_map(|item| match item {
                ListItem::Text(s) => non_empty(s),
                ListItem::Record(record) => record
                    .name
                    .as_deref()
                    .or(record.title.as_deref())
                    .and_then(non_empty),
                ListItem::Other => {
                    log::debug!("Dropping non-text list element");
                    None
                }
            })
            .collect(),
        ListField::Delimited(s) => list_delimiter()
            .split(s)
            .filter_map(non_empty)
            .collect(),
        ListField::Absent => Vec::new(),
    }
}

/// Coerce a field into one display line per entry.
///
/// Used for education and projects. Objects reduce to `title — description`
/// and fall back to `degree — institution — year` when neither is present.
/// Strings are split on newlines only, so commas inside a line survive.
pub fn to_summary_lines(field: &ListField) -> Vec<String> {
    match field {
        ListField::Items(items) => items
            .iter()
            .flatten()
            .filter_map(|item| match item {
                ListItem::Text(s) => non_empty(s),
                ListItem::Record(record) => non_empty(&summary_line(record)),
                ListItem::Other => {
                    log::debug!("Dropping non-text summary element");
                    None
                }
            })
            .collect(),
        ListField::Delimited(s) => s.split('\n').filter_map(non_empty).collect(),
        ListField::Absent => Vec::new(),
    }
}

/// Reduce a record to a single line.
pub fn summary_line(record: &EntryRecord) -> String {
    let headline = join_present(
        [
            record.title.as_deref().or(record.name.as_deref()),
            record.description.as_deref(),
        ],
        PART_SEPARATOR,
    );
    if !headline.is_empty() {
        return headline;
    }

    join_present(
        [
            record.degree.as_deref(),
            record.institution.as_deref().or(record.school.as_deref()),
            record.year.as_deref(),
        ],
        PART_SEPARATOR,
    )
}

/// Coerce a field into experience entries.
///
/// A string element becomes a title with no bullets. Entries with neither a
/// title nor bullets are dropped. A bare string field carries no structure
/// and yields nothing.
pub fn to_experience(field: &ListField) -> Vec<ExperienceEntry> {
    let ListField::Items(items) = field else {
        return Vec::new();
    };

    items
        .iter()
        .flatten()
        .filter_map(|item| match item {
            ListItem::Text(s) => non_empty(s).map(|title| ExperienceEntry::new(title, Vec::new())),
            ListItem::Record(record) => {
                let entry = experience_entry(record);
                if entry.title.is_empty() && entry.bullets.is_empty() {
                    None
                } else {
                    Some(entry)
                }
            }
            ListItem::Other => {
                log::debug!("Dropping non-object experience element");
                None
            }
        })
        .collect()
}

fn experience_entry(record: &EntryRecord) -> ExperienceEntry {
    let role = record
        .role
        .as_deref()
        .or(record.title.as_deref())
        .or(record.position.as_deref());

    ExperienceEntry::new(
        join_present([role, record.company.as_deref()], ROLE_SEPARATOR),
        to_ordered_string_list(&record.bullets),
    )
}

fn join_present<'a, const N: usize>(parts: [Option<&'a str>; N], separator: &str) -> String {
    parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_list_from_delimited() {
        let field = ListField::from("React, Node.js\nPython");
        assert_eq!(
            to_ordered_string_list(&field),
            vec!["React", "Node.js", "Python"]
        );
    }

    #[test]
    fn test_string_list_collapses_blank_tokens() {
        let field = ListField::from(",Rust,,  Go\n\n\nSQL,");
        assert_eq!(to_ordered_string_list(&field), vec!["Rust", "Go", "SQL"]);
    }

    #[test]
    fn test_string_list_keeps_duplicates_and_order() {
        let field = ListField::strings(["Go", "Rust", "Go"]);
        assert_eq!(to_ordered_string_list(&field), vec!["Go", "Rust", "Go"]);
    }

    #[test]
    fn test_string_list_drops_malformed_elements() {
        let field = ListField::Items(vec![
            None,
            Some(ListItem::Other),
            Some(ListItem::Text("  ".to_string())),
            Some(ListItem::Text("English".to_string())),
            Some(ListItem::Record(EntryRecord {
                name: Some("German".to_string()),
                ..Default::default()
            })),
            Some(ListItem::Record(EntryRecord::new())),
        ]);
        assert_eq!(to_ordered_string_list(&field), vec!["English", "German"]);
    }

    #[test]
    fn test_summary_line_title_and_description() {
        let record = EntryRecord::new()
            .with_title("Resume Builder")
            .with_description("AI-assisted resume tool");
        assert_eq!(summary_line(&record), "Resume Builder — AI-assisted resume tool");
    }

    #[test]
    fn test_summary_line_degree_fallback() {
        let record = EntryRecord::new().with_degree("Bachelor of Science", "XYZ University", "2020");
        assert_eq!(
            summary_line(&record),
            "Bachelor of Science — XYZ University — 2020"
        );
    }

    #[test]
    fn test_summary_line_school_alias() {
        let record = EntryRecord {
            degree: Some("MBA".to_string()),
            school: Some("INSEAD".to_string()),
            ..Default::default()
        };
        assert_eq!(summary_line(&record), "MBA — INSEAD");
    }

    #[test]
    fn test_summary_lines_from_string_keep_commas() {
        let field = ListField::from("BSc, Physics\n\n  MSc, Maths  ");
        assert_eq!(to_summary_lines(&field), vec!["BSc, Physics", "MSc, Maths"]);
    }

    #[test]
    fn test_summary_lines_drop_empty_records() {
        let field = ListField::Items(vec![
            Some(ListItem::Record(EntryRecord::new())),
            Some(ListItem::Text("Portfolio site".to_string())),
        ]);
        assert_eq!(to_summary_lines(&field), vec!["Portfolio site"]);
    }

    #[test]
    fn test_experience_title_and_bullets() {
        let field = ListField::records([EntryRecord::new()
            .with_role("Engineer", "Acme")
            .with_bullets(ListField::from("Built APIs, Led migration"))]);

        let entries = to_experience(&field);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Engineer @ Acme");
        assert_eq!(entries[0].bullets, vec!["Built APIs", "Led migration"]);
    }

    #[test]
    fn test_experience_role_fallbacks() {
        let field = ListField::records([
            EntryRecord::new().with_title("Designer"),
            EntryRecord {
                position: Some("Analyst".to_string()),
                ..Default::default()
            },
            EntryRecord {
                company: Some("Globex".to_string()),
                ..Default::default()
            },
        ]);

        let titles: Vec<_> = to_experience(&field).into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Designer", "Analyst", "Globex"]);
    }

    #[test]
    fn test_experience_drops_empty_and_null() {
        let field = ListField::Items(vec![
            None,
            Some(ListItem::Other),
            Some(ListItem::Record(EntryRecord::new())),
            Some(ListItem::Text("Freelance".to_string())),
        ]);

        let entries = to_experience(&field);
        assert_eq!(entries, vec![ExperienceEntry::new("Freelance", Vec::new())]);
    }

    #[test]
    fn test_experience_from_string_is_empty() {
        assert!(to_experience(&ListField::from("Engineer at Acme")).is_empty());
    }
}
