use std::path::PathBuf;

#[allow(clippy::enum_variant_names)]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    ArgumentError(String),
    #[error("Failed to read input {}: {source}", .path.display())]
    InputError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to create output {}: {source}", .path.display())]
    OutputError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    CsvError(#[from] csv::Error),
}
