//! CLI argument definitions for the dose objectives converter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use dose_cli::config::OptionOverrides;
use dose_model::AliasMode;

#[derive(Parser)]
#[command(
    name = "dose-objectives",
    version,
    about = "Convert constraint workbooks to DoseObjectives XML",
    long_about = "Convert clinical dose-constraint workbooks to DoseObjectives XML.\n\n\
                  Each row of the Constraints sheet becomes one MeasureItem per\n\
                  structure alias. Unrecognized rows are skipped and counted."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert one workbook to a DoseObjectives document.
    Convert(ConvertArgs),

    /// Convert every workbook in a directory.
    Batch(BatchArgs),

    /// Show how each row translates without writing output.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Constraint workbook (.xlsx) or CSV export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination XML file.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Template ID (default: input file stem).
    #[arg(value_name = "PREVIEW_ID")]
    pub preview_id: Option<String>,

    #[command(flatten)]
    pub converter: ConverterArgs,

    /// Translate and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// Directory containing constraint workbooks.
    #[arg(value_name = "DIR", default_value = "templates")]
    pub dir: PathBuf,

    /// Output directory for generated files (default: beside each input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub converter: ConverterArgs,

    /// Translate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Constraint workbook (.xlsx) or CSV export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Template ID used for the preview alias (default: input file stem).
    #[arg(long = "preview-id", value_name = "ID")]
    pub preview_id: Option<String>,

    #[command(flatten)]
    pub converter: ConverterArgs,
}

/// Conversion settings shared by every subcommand.
#[derive(Args)]
pub struct ConverterArgs {
    /// TOML file with conversion settings; flags below override it.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Worksheet holding the constraint table (default: Constraints).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Structure columns used for MeasureItem IDs
    /// (structure_ids, idalias_first, idalias_all, all).
    #[arg(long = "alias-mode", value_name = "MODE")]
    pub alias_mode: Option<AliasMode>,

    /// Also emit every goal under the template ID.
    #[arg(long = "add-preview-id-alias")]
    pub add_preview_id_alias: bool,

    /// Users assigned to the template, e.g. `domain\user1,domain\user2`.
    #[arg(long = "assigned-users", value_name = "TEXT")]
    pub assigned_users: Option<String>,
}

impl ConverterArgs {
    pub fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            sheet_name: self.sheet.clone(),
            alias_mode: self.alias_mode,
            add_preview_id_alias: self.add_preview_id_alias,
            assigned_users: self.assigned_users.clone(),
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
