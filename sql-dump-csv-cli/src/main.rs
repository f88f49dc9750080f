mod executor;

use crate::executor::{parse_delimiter, parse_extension, CliExecutable, ConvertExecutor};
use clap::Parser;
use sql_dump_csv::error::Error;
use sql_dump_csv::ConverterOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sql-dump-csv")]
#[command(author, version, about = "Convert a SQL dump into one CSV file per table", long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
    /// The SQL dump file to convert
    sql_file: PathBuf,
    /// Directory to write the output files to. Created if it does not exist.
    #[clap(short, long, default_value = ".")]
    output_dir: PathBuf,
    /// Field delimiter. A single ASCII character, or `\t` for tab.
    #[clap(long, default_value = ",")]
    delimiter: String,
    /// Extension of the output files, without the dot.
    #[clap(long, default_value = "csv")]
    extension: String,
}

impl Cli {
    fn executor(&self) -> Result<Box<dyn CliExecutable>, Error> {
        let options = ConverterOptions::new()
            .with_delimiter(parse_delimiter(&self.delimiter)?)
            .with_extension(parse_extension(&self.extension)?);
        Ok(Box::new(
            ConvertExecutor::new(self.sql_file.clone(), self.output_dir.clone())
                .with_options(options),
        ))
    }
}

fn init_logging(debug: u8) {
    let level = match debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(args.debug);
    let result = args.executor().and_then(|executor| executor.execute());
    match result {
        Ok(result) => {
            for r in result {
                println!("{}", r);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
