pub mod calc;
pub mod config;
pub mod utils;

pub use calc::{add, subtract, CalcOutcome, Calculation, Calculator, Operation, OverflowPolicy};
pub use config::{toml_config::TomlConfig, CliConfig, Command, OutputFormat};
pub use utils::error::{CalcError, Result};
