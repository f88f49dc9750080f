//! A Extractor that recovers the table name and column names from `CREATE TABLE`.
//!
//! See [`extract_schema`](crate::extract_schema()) as the entry point.

use core::fmt;

use crate::helper::{leading_word, match_indices_ignore_ascii_case, strip_identifier_quote};

const CREATE_TABLE: &str = "CREATE TABLE";

/// Fragments containing any of these (case-insensitive) are constraint or index
/// declarations rather than columns.
const CONSTRAINT_KEYWORDS: [&str; 6] = [
    "CONSTRAINT",
    "PRIMARY KEY",
    "FOREIGN KEY",
    "KEY",
    "INDEX",
    "UNIQUE",
];

/// Convenience function to extract a [`TableSchema`] from a `CREATE TABLE` statement.
///
/// Returns `None` unless both a table name and at least one column were found.
///
/// ## Example
///
/// ```rust
/// let sql = "CREATE TABLE `users` (`id` INT, `name` VARCHAR(10), PRIMARY KEY (`id`))";
/// let schema = sql_dump_csv::extract_schema(sql).unwrap();
/// assert_eq!(schema.name, "users");
/// assert_eq!(schema.columns, ["id", "name"]);
/// ```
pub fn extract_schema(statement: &str) -> Option<TableSchema> {
    SchemaExtractor::extract(statement)
}

/// Convenience function to extract only the table name.
pub fn extract_table_name(statement: &str) -> Option<String> {
    SchemaExtractor::extract_table_name(statement)
}

/// Convenience function to extract only the column names.
pub fn extract_column_names(statement: &str) -> Vec<String> {
    SchemaExtractor::extract_column_names(statement)
}

/// [`TableSchema`] is the table name and its column names in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<String>,
}

impl fmt::Display for TableSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.columns.join(", "))
    }
}

/// Extractor for `CREATE TABLE` statements.
#[derive(Debug, Default)]
pub struct SchemaExtractor;

impl SchemaExtractor {
    pub fn extract(statement: &str) -> Option<TableSchema> {
        let name = Self::extract_table_name(statement)?;
        let columns = Self::extract_column_names(statement);
        if columns.is_empty() {
            return None;
        }
        Some(TableSchema { name, columns })
    }

    /// The word following the first `CREATE TABLE` (any case) that is followed
    /// by whitespace and an optionally quoted word.
    pub fn extract_table_name(statement: &str) -> Option<String> {
        match_indices_ignore_ascii_case(statement, CREATE_TABLE)
            .find_map(|start| Self::table_name_after(&statement[start + CREATE_TABLE.len()..]))
    }

    fn table_name_after(rest: &str) -> Option<String> {
        let name_start = rest.trim_start();
        if name_start.len() == rest.len() {
            return None;
        }
        leading_word(strip_identifier_quote(name_start)).map(str::to_string)
    }

    /// Column names declared between the first `(` and the last `)`.
    ///
    /// The body is split on every comma regardless of nesting, so a type such
    /// as `DECIMAL(10,2)` leaves a `2)` fragment that matches nothing.
    pub fn extract_column_names(statement: &str) -> Vec<String> {
        let (Some(open), Some(close)) = (statement.find('('), statement.rfind(')')) else {
            return vec![];
        };
        if close < open {
            return vec![];
        }
        statement[open + 1..close]
            .split(',')
            .map(str::trim)
            .filter(|fragment| !Self::is_constraint(fragment))
            .filter_map(Self::column_name)
            .map(str::to_string)
            .collect()
    }

    fn is_constraint(fragment: &str) -> bool {
        let upper = fragment.to_uppercase();
        CONSTRAINT_KEYWORDS
            .iter()
            .any(|keyword| upper.contains(keyword))
    }

    /// An optionally quoted word followed by whitespace and a type word.
    fn column_name(fragment: &str) -> Option<&str> {
        let rest = strip_identifier_quote(fragment);
        let name = leading_word(rest)?;
        let rest = strip_identifier_quote(&rest[name.len()..]);
        let type_start = rest.trim_start();
        if type_start.len() == rest.len() {
            return None;
        }
        leading_word(type_start)?;
        Some(name)
    }
}
