use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    IoFailure(#[from] std::io::Error),

    #[error("Malformed input in {source_name}: {message}")]
    MalformedInput { source_name: String, message: String },

    #[error("Pattern compilation failed: {0}")]
    PatternError(#[from] regex::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Processing,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn malformed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoFailure(_) => ErrorCategory::Io,
            EtlError::MalformedInput { .. } | EtlError::CsvError(_) => ErrorCategory::Input,
            EtlError::PatternError(_) | EtlError::SerializationError(_) => {
                ErrorCategory::Processing
            }
            EtlError::ConfigError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 檔案可能只是暫時不可用
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::IoFailure(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Check that the input paths exist relative to the working directory".to_string()
            }
            EtlError::IoFailure(_) => {
                "Check file permissions and free disk space, then retry".to_string()
            }
            EtlError::MalformedInput { source_name, .. } => {
                format!("Make sure {} is UTF-8 encoded text", source_name)
            }
            EtlError::CsvError(_) => {
                "Re-export the spreadsheet as CSV and check the --delimiter setting".to_string()
            }
            EtlError::PatternError(_) | EtlError::SerializationError(_) => {
                "This is an internal error, please report it".to_string()
            }
            EtlError::ConfigError { .. } => "Check the TOML configuration syntax".to_string(),
            EtlError::MissingConfigError { field } => {
                format!("Provide {} on the command line or in the config file", field)
            }
            EtlError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of {}", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not access a file: {}", self),
            ErrorCategory::Input => format!("The input could not be read: {}", self),
            ErrorCategory::Processing => format!("Processing failed: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
