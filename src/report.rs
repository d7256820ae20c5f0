//! Run summary rendering

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::config::{Config, OutputFormat};
use crate::filter::FilterResult;
use crate::reconcile::{ReconcileResult, ReconcileStats, UnknownCarrier};

/// Print the reconciliation summary to stdout in the configured format.
pub fn print_summary(result: &ReconcileResult, config: &Config) -> Result<()> {
    match config.output_format {
        OutputFormat::Terminal => print_terminal(result, config),
        OutputFormat::Json => print_json(result, config),
    }
}

fn print_terminal(result: &ReconcileResult, config: &Config) -> Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    writeln!(
        stdout,
        "trackmatch: {} + {}",
        config.source_file.display(),
        config.reference_file.display()
    )?;

    for warning in &result.unknown_carriers {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(stdout, "warning")?;
        stdout.reset()?;
        writeln!(
            stdout,
            ": unknown carrier '{}' (reference row {}), wrote code 0",
            warning.name, warning.line
        )?;
    }

    let stats = &result.stats;
    let color = if stats.dropped > 0 {
        Color::Yellow
    } else {
        Color::Green
    };
    stdout.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(stdout, "{} matched, {} dropped", stats.matched, stats.dropped)?;
    stdout.reset()?;
    writeln!(
        stdout,
        " (out of {} source rows, {} reference rows)",
        stats.source_rows, stats.reference_rows
    )?;

    if !config.stats_only {
        writeln!(stdout, "Wrote {}", config.output_file.display())?;
    }
    Ok(())
}

/// Serializable run summary for JSON output
#[derive(Serialize)]
struct JsonSummary<'a> {
    source_file: String,
    reference_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_file: Option<String>,
    stats: &'a ReconcileStats,
    unknown_carriers: &'a [UnknownCarrier],
}

fn print_json(result: &ReconcileResult, config: &Config) -> Result<()> {
    let summary = JsonSummary {
        source_file: config.source_file.display().to_string(),
        reference_file: config.reference_file.display().to_string(),
        output_file: (!config.stats_only).then(|| config.output_file.display().to_string()),
        stats: &result.stats,
        unknown_carriers: &result.unknown_carriers,
    };

    let mut stdout = std::io::stdout();
    serde_json::to_writer_pretty(&mut stdout, &summary)?;
    writeln!(stdout)?;
    Ok(())
}

/// Print the filter summary to stdout.
pub fn print_filter_summary(result: &FilterResult, output: &Path) -> Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(stdout, "{} kept, {} dropped", result.kept, result.dropped)?;
    stdout.reset()?;
    writeln!(stdout)?;
    writeln!(stdout, "Wrote {}", output.display())?;
    Ok(())
}
