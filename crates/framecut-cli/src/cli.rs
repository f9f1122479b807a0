//! CLI argument definitions for framecut.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use framecut_cli::render::OutputFormat;
use framecut_model::{FieldName, UnitSystem};

#[derive(Parser)]
#[command(
    name = "framecut",
    version,
    about = "Picture-frame cut-list calculator",
    long_about = "Work out mitred moulding cut lengths, opening and frame sizes,\n\
                  a board layout and a material estimate for a picture frame.\n\n\
                  Lengths are entered and reported in inches or millimetres."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Configuration file (default: $FRAMECUT_CONFIG, else built-in defaults).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Calculate a cut list from field values given as flags.
    Calc(CalcArgs),

    /// Edit fields interactively, one command per line on stdin.
    Session(SessionArgs),

    /// List field identifiers and aliases.
    Fields,
}

#[derive(Args)]
pub struct CalcArgs {
    /// Artwork width.
    #[arg(long = "width", value_name = "LENGTH", allow_hyphen_values = true)]
    pub width: Option<String>,

    /// Artwork height.
    #[arg(long = "height", value_name = "LENGTH", allow_hyphen_values = true)]
    pub height: Option<String>,

    /// Moulding face width.
    #[arg(long = "face", value_name = "LENGTH", allow_hyphen_values = true)]
    pub face: Option<String>,

    /// Rabbet depth.
    #[arg(long = "rabbet", value_name = "LENGTH", allow_hyphen_values = true)]
    pub rabbet: Option<String>,

    /// Clearance added around the artwork (default from config).
    #[arg(long = "clearance", value_name = "LENGTH", allow_hyphen_values = true)]
    pub clearance: Option<String>,

    /// Material thickness, for the material estimate.
    #[arg(long = "thickness", value_name = "LENGTH", allow_hyphen_values = true)]
    pub thickness: Option<String>,

    /// Cost per board foot, for the material estimate.
    #[arg(long = "cost", value_name = "AMOUNT", allow_hyphen_values = true)]
    pub cost: Option<String>,

    /// Unit system of the values above (default from config).
    #[arg(long = "units", value_enum)]
    pub units: Option<UnitsArg>,

    /// Output format; `text` prints the plain cut list.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: FormatArg,

    /// Also draw the board layout into a region of COLSxROWS cells.
    #[arg(long = "diagram", value_name = "COLSxROWS")]
    pub diagram: Option<String>,

    /// Copy the cut list to the clipboard.
    #[arg(long = "copy")]
    pub copy: bool,
}

impl CalcArgs {
    /// Field values given on the command line, in field order.
    pub fn inputs(&self) -> Vec<(FieldName, &str)> {
        [
            (FieldName::ArtworkWidth, &self.width),
            (FieldName::ArtworkHeight, &self.height),
            (FieldName::MouldingFaceWidth, &self.face),
            (FieldName::RabbetDepth, &self.rabbet),
            (FieldName::Clearance, &self.clearance),
            (FieldName::MaterialThickness, &self.thickness),
            (FieldName::CostPerBoardFoot, &self.cost),
        ]
        .into_iter()
        .filter_map(|(name, raw)| raw.as_deref().map(|raw| (name, raw)))
        .collect()
    }
}

#[derive(Args)]
pub struct SessionArgs {
    /// Unit system to start in (default from config).
    #[arg(long = "units", value_enum)]
    pub units: Option<UnitsArg>,

    /// How each state is printed.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: FormatArg,

    /// Board drawing region in COLSxROWS cells.
    #[arg(long = "size", value_name = "COLSxROWS")]
    pub size: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum UnitsArg {
    #[value(alias = "in")]
    Imperial,
    #[value(alias = "mm")]
    Metric,
}

impl From<UnitsArg> for UnitSystem {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Imperial => UnitSystem::Imperial,
            UnitsArg::Metric => UnitSystem::Metric,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Table,
    Json,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
