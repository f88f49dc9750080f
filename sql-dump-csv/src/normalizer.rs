//! A Normalizer that converts a raw SQL literal into its output text.
//!
//! See [`normalize_value`](crate::normalize_value()) as the entry point for normalizing a value.

/// Convenience function to normalize a single raw field.
///
/// ## Example
///
/// ```rust
/// assert_eq!(sql_dump_csv::normalize_value("NULL"), "");
/// assert_eq!(sql_dump_csv::normalize_value(r#""O\"Brien""#), "O\"Brien");
/// assert_eq!(sql_dump_csv::normalize_value(r"'it\'s'"), "it's");
/// assert_eq!(sql_dump_csv::normalize_value("42"), "42");
/// ```
pub fn normalize_value(raw: &str) -> String {
    Normalizer::normalize(raw)
}

/// Normalizer for raw field text.
#[derive(Debug, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Normalize one field.
    ///
    /// `NULL` in any case becomes the empty string. Otherwise one pair of
    /// surrounding quotes is removed and MySQL backslash escapes for `\`, `'`
    /// and `"` are resolved, backslash first.
    pub fn normalize(raw: &str) -> String {
        if raw.eq_ignore_ascii_case("NULL") {
            return String::new();
        }
        Self::strip_quotes(raw)
            .replace("\\\\", "\\")
            .replace("\\'", "'")
            .replace("\\\"", "\"")
    }

    fn strip_quotes(raw: &str) -> &str {
        for quote in ['"', '\''] {
            if raw.starts_with(quote) && raw.ends_with(quote) {
                // A lone quote character yields an empty value.
                return raw.get(1..raw.len() - 1).unwrap_or_default();
            }
        }
        raw
    }
}
