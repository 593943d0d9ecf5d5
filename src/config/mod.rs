pub mod toml_config;

use crate::calc::{Calculation, Operation, OverflowPolicy};
use crate::config::toml_config::TomlConfig;
use crate::utils::validation::{validate_path, Validate};
use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "calc")]
#[command(about = "Add and subtract integers from the command line")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Overflow handling, overrides the config file
    #[arg(long, value_enum)]
    pub policy: Option<OverflowPolicy>,

    /// Output format, overrides the config file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print A + B
    #[command(allow_negative_numbers = true)]
    Add { a: i64, b: i64 },

    /// Print A - B
    #[command(alias = "sub", allow_negative_numbers = true)]
    Subtract { a: i64, b: i64 },

    /// Evaluate a JSON array of {"op", "a", "b"} objects
    Batch { file: String },
}

impl Command {
    /// The single calculation requested, or `None` for `batch`.
    pub fn calculation(&self) -> Option<Calculation> {
        match *self {
            Command::Add { a, b } => Some(Calculation::new(Operation::Add, a, b)),
            Command::Subtract { a, b } => Some(Calculation::new(Operation::Subtract, a, b)),
            Command::Batch { .. } => None,
        }
    }
}

impl CliConfig {
    /// Overflow policy and output format, with flags taking precedence over the file.
    pub fn resolve(&self, file: &TomlConfig) -> (OverflowPolicy, OutputFormat) {
        (
            self.policy.unwrap_or(file.calc.overflow_policy),
            self.format.unwrap_or(file.output.format),
        )
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Command::Batch { file } = &self.command {
            validate_path("batch.file", file)?;
        }
        Ok(())
    }
}
