use anyhow::Result;
use clap::Parser;
use kestrel_cli::{OutputFormat, commands};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kestrel")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "A CLI tool for aggregating HTTP access logs into per-handler reports",
    long_about = "Kestrel reads access logs stored as newline-delimited JSON and builds \
                  per-handler statistics such as request counts and average response times, \
                  optionally restricted to a single calendar date."
)]
struct Cli {
    /// Input log files, read and concatenated in argument order
    #[arg(long = "file", value_name = "FILE", num_args = 1.., required = true)]
    files: Vec<PathBuf>,

    /// Report to build
    #[arg(long, value_name = "NAME", default_value = "average")]
    report: String,

    /// Only aggregate records from this calendar date
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    commands::report::execute(&cli.files, &cli.report, cli.date.as_deref(), cli.format)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("kestrel=debug,kestrel_cli=debug,kestrel_core=debug")
    } else {
        EnvFilter::new("kestrel=info")
    };

    // Diagnostics go to stderr; stdout carries only the report itself
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
