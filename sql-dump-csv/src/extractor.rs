//! Extractors that recover structure from single logical statements.
//!
//! - [`schema_extractor`] reads table and column names from `CREATE TABLE`.
//! - [`value_tokenizer`] reads value rows from `INSERT INTO` / `REPLACE INTO`.

pub mod schema_extractor;
pub mod value_tokenizer;

pub use schema_extractor::*;
pub use value_tokenizer::*;
