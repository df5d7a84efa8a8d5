use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

impl DemoError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::IoError(_) => "Check that the output stream and config file are accessible",
            DemoError::TomlError(_) | DemoError::ConfigError { .. } => {
                "Check the configuration file syntax"
            }
            DemoError::InvalidConfigValueError { .. } => {
                "Fix the reported setting in the config file or on the command line"
            }
            DemoError::CsvError(_)
            | DemoError::SerializationError(_)
            | DemoError::ProcessingError { .. } => "Re-run with --verbose and inspect the log",
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
