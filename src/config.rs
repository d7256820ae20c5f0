//! Configuration handling for trackmatch

use std::path::PathBuf;

/// Default column names, matching the headers of the fulfillment (BOS) and
/// ERP order exports this tool was built around.
pub const DEFAULT_SOURCE_KEY: &str = "품목별주문번호";
pub const DEFAULT_REFERENCE_KEY: &str = "주문상세번호";
pub const DEFAULT_TRACKING_COLUMN: &str = "송장번호";
pub const DEFAULT_CARRIER_COLUMN: &str = "택배사";
pub const DEFAULT_TRACKING_OUTPUT: &str = "운송장번호";
pub const DEFAULT_CARRIER_CODE_OUTPUT: &str = "배송사코드";

/// Output format for the run summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration for a reconciliation run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the fulfillment-system (source) export
    pub source_file: PathBuf,
    /// Path to the ERP (reference) export
    pub reference_file: PathBuf,
    /// Path the enriched table is written to
    pub output_file: PathBuf,
    /// Join key column in the source table
    pub source_key: String,
    /// Join key column in the reference table
    pub reference_key: String,
    /// Reference column supplying the tracking number
    pub tracking_column: String,
    /// Reference column supplying the carrier name
    pub carrier_column: String,
    /// Output column the tracking number is written to
    pub tracking_output: String,
    /// Output column the carrier code is written to
    pub carrier_code_output: String,
    /// For Excel files: which sheet to read from the source file
    pub source_sheet: Option<String>,
    /// For Excel files: which sheet to read from the reference file
    pub reference_sheet: Option<String>,
    /// Run summary format
    pub output_format: OutputFormat,
    /// Only report statistics, do not write the output file
    pub stats_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_file: PathBuf::new(),
            reference_file: PathBuf::new(),
            output_file: PathBuf::new(),
            source_key: DEFAULT_SOURCE_KEY.to_string(),
            reference_key: DEFAULT_REFERENCE_KEY.to_string(),
            tracking_column: DEFAULT_TRACKING_COLUMN.to_string(),
            carrier_column: DEFAULT_CARRIER_COLUMN.to_string(),
            tracking_output: DEFAULT_TRACKING_OUTPUT.to_string(),
            carrier_code_output: DEFAULT_CARRIER_CODE_OUTPUT.to_string(),
            source_sheet: None,
            reference_sheet: None,
            output_format: OutputFormat::default(),
            stats_only: false,
        }
    }
}

impl Config {
    /// Create a new Config with file paths
    pub fn new(source_file: PathBuf, reference_file: PathBuf) -> Self {
        Self {
            source_file,
            reference_file,
            ..Default::default()
        }
    }

    /// Set the join key columns
    pub fn with_key_columns(
        mut self,
        source_key: impl Into<String>,
        reference_key: impl Into<String>,
    ) -> Self {
        self.source_key = source_key.into();
        self.reference_key = reference_key.into();
        self
    }

    /// Set the reference columns the enrichment values come from
    pub fn with_enrichment_columns(
        mut self,
        tracking: impl Into<String>,
        carrier: impl Into<String>,
    ) -> Self {
        self.tracking_column = tracking.into();
        self.carrier_column = carrier.into();
        self
    }

    /// Set the output columns the enrichment values are written to
    pub fn with_output_columns(
        mut self,
        tracking: impl Into<String>,
        carrier_code: impl Into<String>,
    ) -> Self {
        self.tracking_output = tracking.into();
        self.carrier_code_output = carrier_code.into();
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Enable stats-only mode
    pub fn with_stats_only(mut self, stats_only: bool) -> Self {
        self.stats_only = stats_only;
        self
    }
}
