/// Byte offsets of every ASCII case-insensitive occurrence of `needle`.
///
/// `needle` must be ASCII so that every offset is a char boundary.
pub(crate) fn match_indices_ignore_ascii_case<'a>(
    haystack: &'a str,
    needle: &'a str,
) -> impl Iterator<Item = usize> + 'a {
    let bytes = haystack.as_bytes();
    let last = bytes.len().checked_sub(needle.len());
    (0..=last.unwrap_or(0)).filter(move |&i| {
        last.is_some() && bytes[i..i + needle.len()].eq_ignore_ascii_case(needle.as_bytes())
    })
}

/// Whether the uppercased form of `s` starts with the ASCII `prefix`.
pub(crate) fn starts_with_uppercase(s: &str, prefix: &str) -> bool {
    s.chars()
        .take(prefix.len())
        .flat_map(char::to_uppercase)
        .take(prefix.len())
        .eq(prefix.chars())
}

/// The leading run of letters, digits and underscores, if non-empty.
pub(crate) fn leading_word(s: &str) -> Option<&str> {
    let end = s
        .char_indices()
        .find(|(_, c)| !is_word_char(*c))
        .map_or(s.len(), |(i, _)| i);
    (end > 0).then(|| &s[..end])
}

/// Strips one leading backtick or double quote.
pub(crate) fn strip_identifier_quote(s: &str) -> &str {
    s.strip_prefix(&['`', '"'][..]).unwrap_or(s)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_indices_ignore_ascii_case() {
        let found: Vec<usize> =
            match_indices_ignore_ascii_case("create TABLE a; Create Table b", "CREATE TABLE")
                .collect();
        assert_eq!(found, vec![0, 16]);
        assert_eq!(match_indices_ignore_ascii_case("CREATE", "CREATE TABLE").count(), 0);
        assert_eq!(match_indices_ignore_ascii_case("", "CREATE TABLE").count(), 0);
    }

    #[test]
    fn test_starts_with_uppercase() {
        assert!(starts_with_uppercase("create table t (id int)", "CREATE TABLE"));
        assert!(starts_with_uppercase("Insert Into t", "INSERT INTO"));
        assert!(!starts_with_uppercase("CREATE  TABLE t", "CREATE TABLE"));
        assert!(!starts_with_uppercase("CREATE", "CREATE TABLE"));
    }

    #[test]
    fn test_leading_word() {
        assert_eq!(leading_word("users_2 (id"), Some("users_2"));
        assert_eq!(leading_word("café INT"), Some("café"));
        assert_eq!(leading_word("`users`"), None);
        assert_eq!(leading_word(""), None);
    }

    #[test]
    fn test_strip_identifier_quote() {
        assert_eq!(strip_identifier_quote("`id`"), "id`");
        assert_eq!(strip_identifier_quote("\"id\""), "id\"");
        assert_eq!(strip_identifier_quote("'id'"), "'id'");
    }
}
