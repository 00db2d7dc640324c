//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    completions::CompletionsArgs, config::ConfigCommands, mfr::MfrCommands, part::PartCommands,
    parttype::PartTypeCommands, subpart::SubpartCommands, unit::UnitCommands,
};

#[derive(Parser)]
#[command(name = "aligni")]
#[command(author, version, about = "Aligni PLM command-line client")]
#[command(long_about = "Create parts, revisions, manufacturers, units and BOM subparts in an Aligni PLM catalog, and look up existing records by name.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug logging of every API call)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Aligni API token (overrides config and $ALIGNI_API_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Aligni API base URL (overrides config and $ALIGNI_URL_BASE)
    #[arg(long, global = true)]
    pub url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Part management (parts and their first revision)
    #[command(subcommand)]
    Part(PartCommands),

    /// BOM subpart management
    #[command(subcommand)]
    Subpart(SubpartCommands),

    /// Manufacturer management
    #[command(subcommand)]
    Mfr(MfrCommands),

    /// Unit management
    #[command(subcommand)]
    Unit(UnitCommands),

    /// Part type lookup
    #[command(subcommand)]
    Parttype(PartTypeCommands),

    /// View and modify configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (tsv for lists)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}
