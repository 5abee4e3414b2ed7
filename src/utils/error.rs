use thiserror::Error;

#[derive(Error, Debug)]
pub enum AreaError {
    #[error("Input line {line} is not an integer: {value:?} ({reason})")]
    InputParseError {
        line: usize,
        value: String,
        reason: String,
    },

    #[error("Input ended before line {line}")]
    MissingInput { line: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AreaError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AreaError::InputParseError { .. } | AreaError::MissingInput { .. } => 1,
            AreaError::InvalidConfigValueError { .. } => 2,
            AreaError::IoError(_) | AreaError::SerializationError(_) => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AreaError::InputParseError { line, value, .. } => {
                format!("line {}: expected an integer, got {:?}", line, value)
            }
            AreaError::MissingInput { line } => {
                format!("expected 3 input lines, input ended at line {}", line)
            }
            AreaError::IoError(e) => format!("could not read or write: {}", e),
            AreaError::SerializationError(e) => format!("could not format result: {}", e),
            AreaError::InvalidConfigValueError { field, reason, .. } => {
                format!("invalid --{}: {}", field.replace('_', "-"), reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AreaError::InputParseError { .. } | AreaError::MissingInput { .. } => {
                "provide three integers, one per line: first dimension, second dimension, height"
            }
            AreaError::IoError(_) => "check that the input file exists and is readable",
            AreaError::SerializationError(_) => "retry with --format text",
            AreaError::InvalidConfigValueError { .. } => "run with --help to see valid options",
        }
    }
}

pub type Result<T> = std::result::Result<T, AreaError>;
