//! `Content-Disposition` filename extraction.

use std::sync::OnceLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

fn quoted_filename() -> &'static Regex {
    static QUOTED: OnceLock<Regex> = OnceLock::new();
    QUOTED.get_or_init(|| Regex::new(r#"filename="([^"]+)""#).expect("filename pattern is valid"))
}

fn extended_filename() -> &'static Regex {
    static EXTENDED: OnceLock<Regex> = OnceLock::new();
    EXTENDED.get_or_init(|| {
        Regex::new(r"(?i)filename\*=UTF-8''([^;\s]+)").expect("filename* pattern is valid")
    })
}

/// Get the download filename from a `Content-Disposition` header value.
///
/// Handles `filename="..."` and the RFC 5987 form `filename*=UTF-8''...`,
/// preferring the quoted form when both are present. Values are
/// percent-decoded; an undecodable value is returned as sent.
///
/// ```
/// use resumekit::export::filename_from_content_disposition;
///
/// assert_eq!(
///     filename_from_content_disposition("attachment; filename*=UTF-8''Jos%C3%A9_Resume.pdf"),
///     Some("José_Resume.pdf".to_string())
/// );
/// ```
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let raw = quoted_filename()
        .captures(header)
        .or_else(|| extended_filename().captures(header))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())?;

    let decoded = match percent_decode_str(raw).decode_utf8() {
        Ok(name) => name.into_owned(),
        Err(e) => {
            log::debug!("Filename '{}' is not valid percent-encoded UTF-8: {}", raw, e);
            raw.to_string()
        }
    };
    Some(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_filename() {
        assert_eq!(
            filename_from_content_disposition(r#"attachment; filename="Jane_Doe_Resume.pdf""#),
            Some("Jane_Doe_Resume.pdf".to_string())
        );
    }

    #[test]
    fn test_quoted_wins_over_extended() {
        let header = r#"attachment; filename="plain.pdf"; filename*=UTF-8''fancy.pdf"#;
        assert_eq!(
            filename_from_content_disposition(header),
            Some("plain.pdf".to_string())
        );
    }

    #[test]
    fn test_extended_filename_is_decoded() {
        assert_eq!(
            filename_from_content_disposition("attachment; filename*=utf-8''Jane%20Doe.pdf"),
            Some("Jane Doe.pdf".to_string())
        );
    }

    #[test]
    fn test_no_filename() {
        assert_eq!(filename_from_content_disposition("inline"), None);
        assert_eq!(filename_from_content_disposition(r#"attachment; filename="""#), None);
    }

    #[test]
    fn test_invalid_utf8_is_kept() {
        assert_eq!(
            filename_from_content_disposition(r#"attachment; filename="bad%FF.pdf""#),
            Some("bad%FF.pdf".to_string())
        );
    }
}
