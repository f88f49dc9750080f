//! An Assembler that joins raw dump lines into logical statements.
//!
//! A statement ends at the first line whose accumulated text ends with `;`.
//! Comment lines (`--`, `/*`), blank lines and session `SET ` directives are
//! skipped before they reach the buffer. See [`split_statements`](crate::split_statements())
//! for in-memory input and [`Statements`] for streaming input.

use std::io::{self, BufRead};

use crate::error::Error;

/// Convenience function to split an in-memory dump into logical statements.
///
/// ## Example
///
/// ```rust
/// let dump = "-- header\nINSERT INTO t\n  VALUES (1);\nSET NAMES utf8;\n";
/// let statements = sql_dump_csv::split_statements(dump);
/// assert_eq!(statements, ["INSERT INTO t VALUES (1)"]);
/// ```
pub fn split_statements(text: &str) -> Vec<String> {
    let mut assembler = StatementAssembler::new();
    text.lines()
        .filter_map(|line| assembler.push_line(line))
        .collect()
}

/// Line buffer shared by [`split_statements`] and [`Statements`].
#[derive(Debug, Default)]
pub struct StatementAssembler {
    buffer: String,
}

impl StatementAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one physical line, returning a statement when this line completes one.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        if is_skipped_line(line) {
            return None;
        }
        self.buffer.push(' ');
        self.buffer.push_str(line);
        if !self.buffer.trim().ends_with(';') {
            return None;
        }
        let statement = self.buffer.trim().trim_end_matches(';').to_string();
        self.buffer.clear();
        Some(statement)
    }

    /// Text buffered since the last completed statement, if any.
    pub fn pending(&self) -> Option<&str> {
        let pending = self.buffer.trim();
        (!pending.is_empty()).then_some(pending)
    }
}

fn is_skipped_line(line: &str) -> bool {
    line.is_empty() || line.starts_with("--") || line.starts_with("/*") || line.starts_with("SET ")
}

/// Lazy iterator of logical statements over a stream of lines.
///
/// Built from any `BufRead` with [`Statements::from_reader`]. A read error is
/// yielded once as [`Error::IOError`]; iteration ends after it.
pub struct Statements<I> {
    lines: I,
    assembler: StatementAssembler,
    failed: bool,
}

impl<R: BufRead> Statements<io::Lines<R>> {
    pub fn from_reader(reader: R) -> Self {
        Self::new(reader.lines())
    }
}

impl<I> Statements<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            assembler: StatementAssembler::new(),
            failed: false,
        }
    }
}

impl<I> Iterator for Statements<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for line in self.lines.by_ref() {
            match line {
                Ok(line) => {
                    if let Some(statement) = self.assembler.push_line(&line) {
                        return Some(Ok(statement));
                    }
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e.into()));
                }
            }
        }
        if let Some(pending) = self.assembler.pending() {
            log::debug!("Dropping unterminated statement at end of input: {pending}");
            self.assembler.buffer.clear();
        }
        None
    }
}
