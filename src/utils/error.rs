use crate::calc::Operation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Arithmetic overflow: {a} {} {b} does not fit in i64", .op.symbol())]
    Overflow { op: Operation, a: i64, b: i64 },

    #[error("Unknown operation: {value}")]
    InvalidOperation { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arithmetic,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::Overflow { .. } => ErrorCategory::Arithmetic,
            CalcError::InvalidOperation { .. } => ErrorCategory::Input,
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Arithmetic => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::Overflow { .. } => {
                "Use smaller operands or switch to --policy wrapping / saturating"
            }
            CalcError::InvalidOperation { .. } => "Valid operations are: add, subtract",
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line flags"
            }
            CalcError::IoError(_) => "Make sure the file exists and is readable",
            CalcError::SerializationError(_) => {
                "Batch files must be a JSON array of {\"op\", \"a\", \"b\"} objects"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::Overflow { op, a, b } => {
                format!("The result of {} {} {} is too large", a, op.symbol(), b)
            }
            CalcError::InvalidOperation { value } => {
                format!("'{}' is not a supported operation", value)
            }
            CalcError::IoError(e) => format!("Could not read input: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
