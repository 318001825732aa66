use std::path::PathBuf;

/// Failures reported by the external collaborators at the API boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{name}: {message}")]
    Preprocess {
        /// The file the preprocessor was reading when it failed.
        file: Option<PathBuf>,
        name: String,
        message: String,
    },
    #[error("{kind}: {message}")]
    Compile { kind: String, message: String },
    #[error("Instrumentation failed: {0}")]
    Instrument(String),
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl ApiError {
    pub fn compile(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Compile {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Classification label shown in host logs, e.g. `ParseError`.
    pub fn kind(&self) -> &str {
        match self {
            ApiError::Preprocess { name, .. } => name,
            ApiError::Compile { kind, .. } => kind,
            ApiError::Instrument(_) => "InstrumentError",
            ApiError::InvalidOptions(_) => "OptionsError",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Preprocess { message, .. } => message,
            ApiError::Compile { message, .. } => message,
            ApiError::Instrument(message) | ApiError::InvalidOptions(message) => message,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidOptions(err.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
