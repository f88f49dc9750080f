//! A Tokenizer that splits the tuples of `INSERT`/`REPLACE` statements into rows.
//!
//! See [`extract_rows`](crate::extract_rows()) as the entry point for tokenizing values.

use crate::normalizer::Normalizer;

/// One tuple of normalized values, in the order they appear.
pub type ValueRow = Vec<String>;

/// Convenience function to extract the value rows of an `INSERT` or `REPLACE` statement.
///
/// ## Example
///
/// ```rust
/// let sql = "INSERT INTO t VALUES (1,'Alice'),(2,NULL)";
/// let rows = sql_dump_csv::extract_rows(sql);
/// assert_eq!(rows, [vec!["1", "Alice"], vec!["2", ""]]);
/// ```
pub fn extract_rows(statement: &str) -> Vec<ValueRow> {
    ValueTokenizer::extract(statement)
}

/// Tokenizer for the `VALUES` clause.
#[derive(Debug, Default)]
pub struct ValueTokenizer;

impl ValueTokenizer {
    pub fn extract(statement: &str) -> Vec<ValueRow> {
        let Some(region) = Self::values_region(statement) else {
            return vec![];
        };
        Self::row_candidates(region)
            .into_iter()
            .map(|candidate| {
                Self::split_fields(candidate)
                    .iter()
                    .map(|field| Normalizer::normalize(field))
                    .collect::<ValueRow>()
            })
            .filter(|row| !row.is_empty())
            .collect()
    }

    /// Text after the first `VALUES`, or after the first `value` for lowercase dumps.
    fn values_region(statement: &str) -> Option<&str> {
        if !statement.contains("VALUES") && !statement.contains("values") {
            return None;
        }
        let (_, region) = statement
            .split_once("VALUES")
            .or_else(|| statement.split_once("value"))?;
        Some(region.trim())
    }

    /// Contents of every parenthesized group, left to right, without the outer parens.
    ///
    /// A group may contain balanced inner groups one level deep. A `(` that
    /// does not open such a group is skipped and scanning resumes at the next
    /// character.
    pub fn row_candidates(region: &str) -> Vec<&str> {
        let bytes = region.as_bytes();
        let mut candidates = Vec::new();
        let mut start = 0;
        while start < bytes.len() {
            if bytes[start] == b'(' {
                if let Some(close) = Self::group_end(bytes, start) {
                    candidates.push(&region[start + 1..close]);
                    start = close + 1;
                    continue;
                }
            }
            start += 1;
        }
        candidates
    }

    fn group_end(bytes: &[u8], open: usize) -> Option<usize> {
        let mut i = open + 1;
        while i < bytes.len() {
            match bytes[i] {
                b')' => return Some(i),
                b'(' => {
                    let inner = i + 1 + bytes[i + 1..]
                        .iter()
                        .position(|&b| b == b'(' || b == b')')?;
                    if bytes[inner] == b'(' {
                        return None;
                    }
                    i = inner + 1;
                }
                _ => i += 1,
            }
        }
        None
    }

    /// Split one tuple body on top-level commas, dropping empty fields.
    pub fn split_fields(candidate: &str) -> Vec<String> {
        let mut scanner = FieldScanner::default();
        candidate
            .chars()
            .chain(std::iter::once(','))
            .filter_map(|c| scanner.feed(c))
            .filter(|field| !field.is_empty())
            .collect()
    }
}

/// Quote and paren state of the field being scanned.
#[derive(Debug, Default)]
struct FieldScanner {
    /// The quote that opened the current quoted span.
    quote: Option<char>,
    paren_level: i32,
    current: String,
}

impl FieldScanner {
    /// Consume one character, returning the trimmed field when `c` ends it.
    fn feed(&mut self, c: char) -> Option<String> {
        match (c, self.quote) {
            ('\'' | '"', None) => self.quote = Some(c),
            ('\'' | '"', Some(open)) if open == c => self.quote = None,
            ('(', None) => self.paren_level += 1,
            (')', None) => self.paren_level -= 1,
            (',', None) if self.paren_level == 0 => {
                let field = self.current.trim().to_string();
                self.current.clear();
                return Some(field);
            }
            _ => {}
        }
        self.current.push(c);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rows(sql: &str, expected: Vec<Vec<&str>>) {
        assert_eq!(ValueTokenizer::extract(sql), expected, "{sql}");
    }

    mod values_region {
        use super::*;

        #[test]
        fn test_no_values_keyword() {
            assert_rows("INSERT INTO t SELECT * FROM u", vec![]);
            assert_rows("INSERT INTO t Values (1)", vec![]);
        }

        #[test]
        fn test_lowercase_values_keyword() {
            assert_rows("insert into t values (1,2)", vec![vec!["1", "2"]]);
        }

        #[test]
        fn test_column_list_before_values_is_ignored() {
            assert_rows(
                "INSERT INTO `t` (`a`, `b`) VALUES (1,2)",
                vec![vec!["1", "2"]],
            );
        }

        #[test]
        fn test_upper_case_keyword_wins_over_value_in_data() {
            assert_rows(
                "INSERT INTO t VALUES (1,'some value')",
                vec![vec!["1", "some value"]],
            );
        }
    }

    mod row_candidates {
        use super::*;

        #[test]
        fn test_multiple_tuples() {
            assert_eq!(
                ValueTokenizer::row_candidates("(1,'a'), (2,'b'),(3,'c')"),
                vec!["1,'a'", "2,'b'", "3,'c'"]
            );
        }

        #[test]
        fn test_one_level_of_nesting() {
            assert_eq!(
                ValueTokenizer::row_candidates("(1, NOW(), POINT(1, 2))"),
                vec!["1, NOW(), POINT(1, 2)"]
            );
        }

        #[test]
        fn test_deeper_nesting_falls_back_to_inner_group() {
            assert_eq!(
                ValueTokenizer::row_candidates("(1, f(g(2)))"),
                vec!["g(2)"]
            );
        }

        #[test]
        fn test_unclosed_group() {
            assert_eq!(ValueTokenizer::row_candidates("(1, 2"), Vec::<&str>::new());
        }
    }

    mod split_fields {
        use super::*;

        #[test]
        fn test_commas_inside_quotes() {
            assert_eq!(
                ValueTokenizer::split_fields("1,'a,b',\"c,d\""),
                vec!["1", "'a,b'", "\"c,d\""]
            );
        }

        #[test]
        fn test_commas_inside_parens() {
            assert_eq!(
                ValueTokenizer::split_fields("1, POINT(1, 2), 3"),
                vec!["1", "POINT(1, 2)", "3"]
            );
        }

        #[test]
        fn test_other_quote_is_literal_inside_quotes() {
            assert_eq!(
                ValueTokenizer::split_fields("'say \"hi, there\"', 2"),
                vec!["'say \"hi, there\"'", "2"]
            );
            assert_eq!(
                ValueTokenizer::split_fields("\"it's, ok\", 2"),
                vec!["\"it's, ok\"", "2"]
            );
        }

        #[test]
        fn test_empty_fields_are_dropped() {
            assert_eq!(ValueTokenizer::split_fields("1,,3, ,"), vec!["1", "3"]);
            assert_eq!(ValueTokenizer::split_fields(""), Vec::<String>::new());
        }

        #[test]
        fn test_unterminated_quote_swallows_last_field() {
            assert_eq!(ValueTokenizer::split_fields(r"1,'it\'s'"), vec!["1"]);
        }
    }

    #[test]
    fn test_rows_are_normalized() {
        assert_rows(
            r#"INSERT INTO t VALUES (1,'Alice',NULL,'O\"Brien'),(2,'Bob',null,"x")"#,
            vec![vec!["1", "Alice", "", "O\"Brien"], vec!["2", "Bob", "", "x"]],
        );
    }

    #[test]
    fn test_quoted_empty_string_is_kept() {
        assert_rows("INSERT INTO t VALUES (1,'',3)", vec![vec!["1", "", "3"]]);
    }

    #[test]
    fn test_empty_tuple_is_dropped() {
        assert_rows("INSERT INTO t VALUES (),(1)", vec![vec!["1"]]);
    }

    #[test]
    fn test_replace_into() {
        assert_rows(
            "REPLACE INTO t VALUES (7,'seven')",
            vec![vec!["7", "seven"]],
        );
    }

    #[test]
    fn test_paren_inside_quotes_breaks_tuple_detection() {
        assert_rows("INSERT INTO t VALUES (1,'(x')", vec![]);
    }

    #[test]
    fn test_function_call_is_kept_verbatim() {
        assert_rows(
            "INSERT INTO t VALUES (1, CONCAT('a', 'b'))",
            vec![vec!["1", "CONCAT('a', 'b')"]],
        );
    }
}
