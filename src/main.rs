//! trackmatch - enrich fulfillment order exports with ERP shipment data

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand, ValueEnum};

use trackmatch::config::{
    Config, OutputFormat, DEFAULT_CARRIER_CODE_OUTPUT, DEFAULT_CARRIER_COLUMN,
    DEFAULT_REFERENCE_KEY, DEFAULT_SOURCE_KEY, DEFAULT_TRACKING_COLUMN, DEFAULT_TRACKING_OUTPUT,
};
use trackmatch::filter::{filter, DEFAULT_FILTER_COLUMN, DEFAULT_FILTER_PREFIX};
use trackmatch::parser::ParserFactory;
use trackmatch::reconcile::reconcile;
use trackmatch::report;
use trackmatch::writer::WriterFactory;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Match and enrich order exports with shipment tracking data (CSV, Excel)
#[derive(Parser, Debug)]
#[command(name = "trackmatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Match a fulfillment order export against an ERP export and fill in
    /// tracking numbers and carrier codes
    Reconcile(ReconcileArgs),
    /// Keep only rows whose cell in a column starts with a prefix
    Filter(FilterArgs),
}

#[derive(Args, Debug)]
struct ReconcileArgs {
    /// Fulfillment (BOS) order export
    source_file: PathBuf,

    /// ERP order export supplying tracking numbers and carrier names
    reference_file: PathBuf,

    /// Output file (.xlsx or .csv); defaults to a timestamped xlsx
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Join key column in the source file
    #[arg(long, default_value = DEFAULT_SOURCE_KEY)]
    source_key: String,

    /// Join key column in the reference file
    #[arg(long, default_value = DEFAULT_REFERENCE_KEY)]
    reference_key: String,

    /// Reference column supplying the tracking number
    #[arg(long, default_value = DEFAULT_TRACKING_COLUMN)]
    tracking_column: String,

    /// Reference column supplying the carrier name
    #[arg(long, default_value = DEFAULT_CARRIER_COLUMN)]
    carrier_column: String,

    /// Output column the tracking number is written to
    #[arg(long, default_value = DEFAULT_TRACKING_OUTPUT)]
    tracking_output: String,

    /// Output column the carrier code is written to
    #[arg(long, default_value = DEFAULT_CARRIER_CODE_OUTPUT)]
    carrier_code_output: String,

    /// For Excel files: which sheet to read from the source file
    #[arg(long)]
    source_sheet: Option<String>,

    /// For Excel files: which sheet to read from the reference file
    #[arg(long)]
    reference_sheet: Option<String>,

    /// Run summary format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Only report statistics, do not write the output file
    #[arg(long)]
    stats_only: bool,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Spreadsheet to filter
    input_file: PathBuf,

    /// Output file (.xlsx or .csv); defaults to a timestamped xlsx
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Column whose value is checked
    #[arg(long, default_value = DEFAULT_FILTER_COLUMN)]
    column: String,

    /// Prefix a row must start with to survive
    #[arg(long, default_value = DEFAULT_FILTER_PREFIX)]
    prefix: String,

    /// For Excel files: which sheet to read
    #[arg(long)]
    sheet: Option<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(all_matched) => {
            if all_matched {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1) // Some source rows had no reference match
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    match cli.command {
        Command::Reconcile(args) => run_reconcile(args),
        Command::Filter(args) => run_filter(args).map(|_| true),
    }
}

fn run_reconcile(args: ReconcileArgs) -> Result<bool> {
    let output_file = args
        .output
        .unwrap_or_else(|| default_output_name("송장번호_매칭"));

    let config = Config {
        source_file: args.source_file,
        reference_file: args.reference_file,
        output_file,
        source_key: args.source_key,
        reference_key: args.reference_key,
        tracking_column: args.tracking_column,
        carrier_column: args.carrier_column,
        tracking_output: args.tracking_output,
        carrier_code_output: args.carrier_code_output,
        source_sheet: args.source_sheet,
        reference_sheet: args.reference_sheet,
        output_format: args.format.into(),
        stats_only: args.stats_only,
    };

    let factory = ParserFactory::new();

    let source = factory
        .parse(&config.source_file, config.source_sheet.as_deref())
        .with_context(|| format!("Failed to parse source file: {}", config.source_file.display()))?;

    let reference = factory
        .parse(&config.reference_file, config.reference_sheet.as_deref())
        .with_context(|| {
            format!(
                "Failed to parse reference file: {}",
                config.reference_file.display()
            )
        })?;

    let result = reconcile(&source, &reference, &config)?;

    if !config.stats_only {
        WriterFactory::new()
            .write(&result.table, &config.output_file)
            .with_context(|| {
                format!("Failed to write output file: {}", config.output_file.display())
            })?;
    }

    report::print_summary(&result, &config)?;

    Ok(result.stats.dropped == 0)
}

fn run_filter(args: FilterArgs) -> Result<()> {
    let output_file = args
        .output
        .unwrap_or_else(|| default_output_name("회원명단_필터"));

    let factory = ParserFactory::new();
    let table = factory
        .parse(&args.input_file, args.sheet.as_deref())
        .with_context(|| format!("Failed to parse input file: {}", args.input_file.display()))?;

    let result = filter(&table, &args.column, &args.prefix)?;

    WriterFactory::new()
        .write(&result.table, &output_file)
        .with_context(|| format!("Failed to write output file: {}", output_file.display()))?;

    report::print_filter_summary(&result, &output_file)?;
    Ok(())
}

fn default_output_name(stem: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}_{}.xlsx",
        stem,
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}
