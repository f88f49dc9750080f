//! A Converter that routes dump statements to one output file per table.
//!
//! See [`convert_file`](crate::convert_file()) or [`convert`](crate::convert()) as the entry point for converting a dump.

use core::fmt;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::assembler::Statements;
use crate::error::Error;
use crate::extractor::{extract_rows, extract_schema};
use crate::helper::starts_with_uppercase;
use crate::sink::{TableSink, TableSummary};

/// Convenience function to convert a dump read from `reader`.
///
/// The output directory is created, with any missing parents, before the
/// first statement is read.
///
/// ## Example
///
/// ```rust
/// use sql_dump_csv::ConverterOptions;
///
/// let dir = tempfile::tempdir().unwrap();
/// let dump = "CREATE TABLE t (id INT, name VARCHAR(10));\nINSERT INTO t VALUES (1,'Alice'),(2,'Bob');\n";
/// let summary = sql_dump_csv::convert(dump.as_bytes(), dir.path(), ConverterOptions::new()).unwrap();
/// assert_eq!(summary.tables[0].rows, 2);
/// let csv = std::fs::read_to_string(dir.path().join("t.csv")).unwrap();
/// assert_eq!(csv, "id,name\r\n1,Alice\r\n2,Bob\r\n");
/// ```
pub fn convert<R: BufRead>(
    reader: R,
    output_dir: impl AsRef<Path>,
    options: ConverterOptions,
) -> Result<ConversionSummary, Error> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir).map_err(|source| Error::OutputError {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let mut converter = Converter::new(output_dir, options);
    for statement in Statements::from_reader(reader) {
        converter.process(&statement?)?;
    }
    converter.finish()
}

/// Convenience function to convert the dump stored at `path`.
pub fn convert_file(
    path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    options: ConverterOptions,
) -> Result<ConversionSummary, Error> {
    let path = path.as_ref();
    let input_error = |source| Error::InputError {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(input_error)?;
    log::info!("Converting {}", path.display());
    convert(BufReader::new(file), output_dir, options).map_err(|e| match e {
        Error::IOError(source) => input_error(source),
        e => e,
    })
}

/// Options for writing output files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConverterOptions {
    /// Field delimiter. Defaults to `,`.
    pub delimiter: u8,
    /// Output file extension without the dot. Defaults to `csv`.
    pub extension: String,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            extension: "csv".into(),
        }
    }
}

impl ConverterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

/// [`StatementKind`] is how the converter dispatches a logical statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatementKind {
    CreateTable,
    Insert,
    Other,
}

impl StatementKind {
    pub fn classify(statement: &str) -> Self {
        if starts_with_uppercase(statement, "CREATE TABLE") {
            StatementKind::CreateTable
        } else if starts_with_uppercase(statement, "INSERT INTO")
            || starts_with_uppercase(statement, "REPLACE INTO")
        {
            StatementKind::Insert
        } else {
            StatementKind::Other
        }
    }
}

/// [`ConversionSummary`] lists the files written, in the order they were opened.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub tables: Vec<TableSummary>,
    /// Logical statements read, of any kind.
    pub statements: usize,
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tables = self
            .tables
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", tables)
    }
}

/// Routes statements to the sink of the current table.
///
/// At most one sink is open. A `CREATE TABLE` always closes the current sink
/// before anything else happens, and [`Converter::finish`] closes the last one.
#[derive(Debug)]
pub struct Converter {
    output_dir: PathBuf,
    options: ConverterOptions,
    sink: Option<TableSink>,
    summary: ConversionSummary,
}

impl Converter {
    pub fn new(output_dir: impl Into<PathBuf>, options: ConverterOptions) -> Self {
        Self {
            output_dir: output_dir.into(),
            options,
            sink: None,
            summary: ConversionSummary::default(),
        }
    }

    /// Name of the table rows are currently written to.
    pub fn current_table(&self) -> Option<&str> {
        self.sink.as_ref().map(|sink| sink.schema().name.as_str())
    }

    /// Dispatch one logical statement.
    pub fn process(&mut self, statement: &str) -> Result<(), Error> {
        self.summary.statements += 1;
        match StatementKind::classify(statement) {
            StatementKind::CreateTable => {
                self.close_sink()?;
                match extract_schema(statement) {
                    Some(schema) => {
                        self.sink = Some(TableSink::create(
                            &self.output_dir,
                            schema,
                            &self.options,
                        )?);
                    }
                    None => log::debug!(
                        "Skipping CREATE TABLE without a table name or columns: {}",
                        preview(statement)
                    ),
                }
            }
            StatementKind::Insert => match self.sink.as_mut() {
                Some(sink) => sink.write_rows(&extract_rows(statement))?,
                None => log::debug!(
                    "Skipping insert without a current table: {}",
                    preview(statement)
                ),
            },
            StatementKind::Other => {
                log::debug!("Ignoring statement: {}", preview(statement))
            }
        }
        Ok(())
    }

    /// Close the open sink, if any, and return the summary of the run.
    pub fn finish(mut self) -> Result<ConversionSummary, Error> {
        self.close_sink()?;
        Ok(self.summary)
    }

    fn close_sink(&mut self) -> Result<(), Error> {
        if let Some(sink) = self.sink.take() {
            self.summary.tables.push(sink.finish()?);
        }
        Ok(())
    }
}

fn preview(statement: &str) -> String {
    const MAX_CHARS: usize = 80;
    match statement.char_indices().nth(MAX_CHARS) {
        Some((end, _)) => format!("{}...", &statement[..end]),
        None => statement.to_string(),
    }
}
