use std::path::PathBuf;
use std::process::ExitCode;

use atena_config::output::Delimiter;
use atena_lang_japanese::Converter;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

pub mod io;
pub mod profile;

#[cfg(test)]
#[path = "tests/io_tests.rs"]
mod io_tests;

#[cfg(test)]
#[path = "tests/profile_tests.rs"]
mod profile_tests;

/// Convert a Google Contacts export into 宛名職人 import rows.
#[derive(Parser, Debug)]
#[command(name = "atena", version, about, long_about = None)]
struct Cli {
    /// Google Contacts export (CSV or TSV, UTF-8)
    input: PathBuf,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON profile replacing the environment configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output delimiter: tab or comma
    #[arg(long, value_parser = parse_delimiter)]
    delimiter: Option<Delimiter>,

    /// Prefix the output with a UTF-8 BOM
    #[arg(long, conflicts_with = "no_bom")]
    bom: bool,

    /// Write the output without a BOM
    #[arg(long)]
    no_bom: bool,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn parse_delimiter(s: &str) -> Result<Delimiter, String> {
    Delimiter::parse(s).ok_or_else(|| format!("unknown delimiter {s:?}, expected tab or comma"))
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let dotenv = dotenvy::dotenv();
    init_logging(cli.log_format);
    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = profile::resolve_config(cli.config.as_deref())?;
    if let Some(delimiter) = cli.delimiter {
        config.output.delimiter = delimiter;
    }
    if cli.bom {
        config.output.bom = true;
    }
    if cli.no_bom {
        config.output.bom = false;
    }

    let contacts = io::read_contacts(&cli.input)?;
    let converter = Converter::from_config(&config);
    let records = converter.convert_all(&contacts);

    io::write_output(
        cli.output.as_deref(),
        &records,
        config.output.delimiter,
        config.output.bom,
    )
}
