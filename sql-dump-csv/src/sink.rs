//! The output file of one table.

use core::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::converter::ConverterOptions;
use crate::error::Error;
use crate::extractor::{TableSchema, ValueRow};

/// [`TableSummary`] describes one finished output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSummary {
    pub name: String,
    pub path: PathBuf,
    pub rows: usize,
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} rows -> {}",
            self.name,
            self.rows,
            self.path.display()
        )
    }
}

/// An open delimited-value file bound to one table.
///
/// The header is written on creation. [`TableSink::finish`] flushes and
/// releases the file; a sink dropped without finishing is flushed on a
/// best-effort basis.
pub struct TableSink {
    schema: TableSchema,
    path: PathBuf,
    writer: csv::Writer<File>,
    rows: usize,
}

impl fmt::Debug for TableSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableSink")
            .field("schema", &self.schema)
            .field("path", &self.path)
            .field("rows", &self.rows)
            .finish()
    }
}

impl TableSink {
    /// Create (or truncate) `{dir}/{table}.{extension}` and write the header row.
    pub fn create(
        dir: &Path,
        schema: TableSchema,
        options: &ConverterOptions,
    ) -> Result<Self, Error> {
        let path = dir.join(format!("{}.{}", schema.name, options.extension));
        let file = File::create(&path).map_err(|source| Error::OutputError {
            path: path.clone(),
            source,
        })?;
        let mut writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .terminator(csv::Terminator::CRLF)
            .flexible(true)
            .from_writer(file);
        writer.write_record(&schema.columns)?;
        log::info!("Opened {} for table {}", path.display(), schema);
        Ok(Self {
            schema,
            path,
            writer,
            rows: 0,
        })
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Append rows in order. Row lengths are not checked against the header.
    pub fn write_rows(&mut self, rows: &[ValueRow]) -> Result<(), Error> {
        for row in rows {
            self.writer.write_record(row)?;
        }
        self.rows += rows.len();
        Ok(())
    }

    pub fn finish(mut self) -> Result<TableSummary, Error> {
        self.writer.flush().map_err(|source| Error::OutputError {
            path: self.path.clone(),
            source,
        })?;
        log::info!(
            "Closed {} after {} rows",
            self.path.display(),
            self.rows
        );
        Ok(TableSummary {
            name: self.schema.name,
            path: self.path,
            rows: self.rows,
        })
    }
}
