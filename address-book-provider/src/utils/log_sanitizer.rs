//! Log sanitization utilities
//!
//! User records carry names, emails, addresses and phone numbers, so response
//! bodies are never logged in full.

/// Maximum number of characters kept in a logged body preview.
const PREVIEW_CHAR_LIMIT: usize = 256;

/// Shorten a response body for logging.
///
/// Whitespace runs are collapsed to single spaces, then the text is cut after
/// `PREVIEW_CHAR_LIMIT` characters with a suffix giving the original byte size.
pub fn body_preview(body: &str) -> String {
    let compact = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if compact.chars().count() <= PREVIEW_CHAR_LIMIT {
        return compact;
    }

    let head: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
    format!("{head}... [truncated, total {} bytes]", body.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        assert_eq!(body_preview(r#"{"results":[]}"#), r#"{"results":[]}"#);
    }

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(body_preview("{\n  \"a\":   1\n}"), "{ \"a\": 1 }");
    }

    #[test]
    fn long_body_truncated_with_size() {
        let body = "a".repeat(PREVIEW_CHAR_LIMIT + 100);
        let preview = body_preview(&body);
        assert!(preview.ends_with(&format!("total {} bytes]", PREVIEW_CHAR_LIMIT + 100)));
        assert!(preview.len() < body.len());
    }

    #[test]
    fn multibyte_chars_are_not_split() {
        let body = "é".repeat(PREVIEW_CHAR_LIMIT * 2);
        let preview = body_preview(&body);
        assert!(preview.starts_with(&"é".repeat(PREVIEW_CHAR_LIMIT)));
        assert!(preview.contains("... [truncated"));
    }
}
