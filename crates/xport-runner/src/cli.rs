use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "xport-runner")]
#[command(about = "Export configuration resources as parameterized YAML templates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Export one resource document as a template.
    Export(ExportCommand),
    /// Print the effective rule table.
    Rules(RulesCommand),
}

#[derive(Debug, Clone, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ExportCommand {
    #[arg(long)]
    pub resource_type: String,
    #[arg(long)]
    pub input: PathBuf,
    /// Placeholder prefix; defaults to the resource's own name.
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, conflicts_with = "no_rules")]
    pub rules: Option<PathBuf>,
    #[arg(long, default_value_t = false)]
    pub no_rules: bool,
    #[arg(long, default_value_t = false)]
    pub strict: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RulesCommand {
    #[arg(long)]
    pub rules: Option<PathBuf>,
    #[arg(long)]
    pub resource_type: Option<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
