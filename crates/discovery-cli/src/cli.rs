//! CLI argument definitions for the discovery front end.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use discovery_cli::DiscoverRequest;
use discovery_model::{FlowKind, SaveKind};

#[derive(Parser)]
#[command(
    name = "discovery",
    version,
    about = "Company discovery - filter a company source and walk a guided flow",
    long_about = "Filter a mock company source by industry and location, derive the data \
                  columns to show and walk one of the guided discovery flows.\n\n\
                  Fetch and save operations are simulated with configurable delays."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Settings file (default: settings.toml in the platform config dir).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the lookup tables: industries, cities, ranges, contacts, presets.
    Options,

    /// Apply selections, walk a flow as far as its gates allow and print the results.
    Discover(DiscoverArgs),
}

#[derive(Parser)]
pub struct DiscoverArgs {
    /// Flow variant (default: `default_flow` from the settings).
    #[arg(long = "flow", value_enum)]
    pub flow: Option<FlowArg>,

    /// Start from a quick-start preset.
    #[arg(long = "preset", value_name = "NAME")]
    pub preset: Option<String>,

    /// Industry to target (repeatable).
    #[arg(long = "industry", value_name = "NAME")]
    pub industries: Vec<String>,

    /// City to target (repeatable).
    #[arg(long = "city", value_name = "NAME")]
    pub cities: Vec<String>,

    /// Location range label, e.g. "+ 25 Miles".
    #[arg(long = "range", value_name = "LABEL")]
    pub range: Option<String>,

    /// Industry-specific field (repeatable).
    #[arg(long = "field", value_name = "NAME")]
    pub fields: Vec<String>,

    /// Contact function (repeatable).
    #[arg(long = "contact", value_name = "NAME")]
    pub contacts: Vec<String>,

    /// Save the list or the filter once results are in.
    #[arg(long = "save", value_enum)]
    pub save: Option<SaveArg>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

impl DiscoverArgs {
    pub fn request(&self) -> DiscoverRequest {
        DiscoverRequest {
            preset: self.preset.clone(),
            industries: self.industries.clone(),
            cities: self.cities.clone(),
            range: self.range.clone(),
            fields: self.fields.clone(),
            contacts: self.contacts.clone(),
            save: self.save.map(SaveKind::from),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FlowArg {
    Linear,
    Dashboard,
    Single,
    ThreeStage,
}

impl From<FlowArg> for FlowKind {
    fn from(arg: FlowArg) -> Self {
        match arg {
            FlowArg::Linear => Self::Linear,
            FlowArg::Dashboard => Self::Dashboard,
            FlowArg::Single => Self::Single,
            FlowArg::ThreeStage => Self::ThreeStage,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SaveArg {
    List,
    Filter,
}

impl From<SaveArg> for SaveKind {
    fn from(arg: SaveArg) -> Self {
        match arg {
            SaveArg::List => Self::List,
            SaveArg::Filter => Self::Filter,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
