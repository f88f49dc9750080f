//! # sql-dump-csv
//!
//! `sql-dump-csv` splits a textual SQL dump into one delimited-value file per table.
//!
//! It does not parse SQL. Statements are reassembled from lines, table and
//! column names are read from `CREATE TABLE`, and the tuples of
//! `INSERT INTO` / `REPLACE INTO` are split with a small quote- and
//! paren-aware scanner. This is lenient by design and meant for dumps such as
//! the ones produced by `mysqldump`.
//!
//! ## Main Functionalities
//!
//! - **Statement Assembly**: Join dump lines into logical statements. See the [`assembler`] module for more information.
//! - **Schema Extraction**: Read table and column names. See the [`schema_extractor`] module for more information.
//! - **Value Tokenizing**: Read value rows from inserts. See the [`value_tokenizer`] module for more information.
//! - **Value Normalization**: Turn raw literals into output text. See the [`normalizer`] module for more information.
//! - **Conversion**: Route rows to one file per table. See the [`converter`] module for more information.
//!
//! ## Quick Start
//!
//! ```rust
//! use sql_dump_csv::ConverterOptions;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let dump = "CREATE TABLE t (id INT, name VARCHAR(10));\nINSERT INTO t VALUES (1,'Alice'),(2,'Bob');\n";
//! sql_dump_csv::convert(dump.as_bytes(), dir.path(), ConverterOptions::new()).unwrap();
//! let csv = std::fs::read_to_string(dir.path().join("t.csv")).unwrap();
//! assert_eq!(csv, "id,name\r\n1,Alice\r\n2,Bob\r\n");
//! ```

pub mod assembler;
pub mod converter;
pub mod error;
pub mod extractor;
mod helper;
pub mod normalizer;
pub mod sink;

pub use assembler::*;
pub use converter::*;
pub use extractor::*;
pub use normalizer::*;
pub use sink::*;

#[doc(hidden)]
// Internal module for testing. Made public for use in integration tests.
pub mod test_utils;
