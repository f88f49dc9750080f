use sql_dump_csv::error::Error;
use sql_dump_csv::ConverterOptions;
use std::path::PathBuf;

pub trait CliExecutable {
    fn execute(&self) -> Result<Vec<String>, Error>;
}

/// Parse a delimiter given on the command line. `\t` and `tab` mean a tab.
pub fn parse_delimiter(delimiter: &str) -> Result<u8, Error> {
    match delimiter {
        "\\t" | "tab" => Ok(b'\t'),
        "\"" | "\r" | "\n" => Err(Error::ArgumentError(format!(
            "Delimiter cannot be a quote or line break: {:?}",
            delimiter
        ))),
        d if d.len() == 1 && d.is_ascii() => Ok(d.as_bytes()[0]),
        d => Err(Error::ArgumentError(format!(
            "Delimiter must be a single ASCII character: {}",
            d
        ))),
    }
}

/// Check an output file extension given on the command line.
///
/// The extension becomes part of a file name, so it must be non-empty and
/// free of path separators and `.`/`..` segments.
pub fn parse_extension(extension: &str) -> Result<String, Error> {
    let invalid = extension.is_empty()
        || extension.contains(&['/', '\\'][..])
        || extension.chars().all(|c| c == '.');
    if invalid {
        return Err(Error::ArgumentError(format!(
            "Extension must be a non-empty file name suffix: {:?}",
            extension
        )));
    }
    Ok(extension.to_string())
}

pub struct ConvertExecutor {
    sql_file: PathBuf,
    output_dir: PathBuf,
    options: ConverterOptions,
}

impl ConvertExecutor {
    pub fn new(sql_file: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            sql_file,
            output_dir,
            options: ConverterOptions::new(),
        }
    }

    pub fn with_options(mut self, options: ConverterOptions) -> Self {
        self.options = options;
        self
    }
}

impl CliExecutable for ConvertExecutor {
    fn execute(&self) -> Result<Vec<String>, Error> {
        let summary =
            sql_dump_csv::convert_file(&self.sql_file, &self.output_dir, self.options.clone())?;
        log::info!(
            "Read {} statements, wrote {} files",
            summary.statements,
            summary.tables.len()
        );
        Ok(summary.tables.iter().map(|t| t.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter(";").unwrap(), b';');
        assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert_eq!(parse_delimiter("\t").unwrap(), b'\t');
        assert!(matches!(parse_delimiter(",,"), Err(Error::ArgumentError(_))));
        assert!(matches!(parse_delimiter("é"), Err(Error::ArgumentError(_))));
        assert!(matches!(parse_delimiter(""), Err(Error::ArgumentError(_))));
    }

    #[test]
    fn test_parse_delimiter_rejects_quote_and_line_breaks() {
        for delimiter in ["\"", "\r", "\n"] {
            assert!(
                matches!(parse_delimiter(delimiter), Err(Error::ArgumentError(_))),
                "{delimiter:?}"
            );
        }
    }

    #[test]
    fn test_parse_extension() {
        assert_eq!(parse_extension("csv").unwrap(), "csv");
        assert_eq!(parse_extension("tar.csv").unwrap(), "tar.csv");
        for extension in ["", "x/y", "x\\y", "/", ".", ".."] {
            assert!(
                matches!(parse_extension(extension), Err(Error::ArgumentError(_))),
                "{extension:?}"
            );
        }
    }
}
