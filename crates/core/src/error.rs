use std::path::PathBuf;
use thiserror::Error;
use weave_api::ApiError;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Preprocess error: {source}")]
    Preprocess {
        file: Option<PathBuf>,
        #[source]
        source: ApiError,
    },
    /// Compiler failure, rendered as `<kind>: <message>`.
    #[error("{0}")]
    Compile(String),
    #[error("No pending virtual artifact at {0}")]
    Lookup(String),
    #[error("Virtual artifact {0} is already registered")]
    Conflict(String),
    #[error("Invalid loader options: {0}")]
    Options(#[source] ApiError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoaderError {
    pub fn preprocess(source: ApiError) -> Self {
        let file = match &source {
            ApiError::Preprocess { file, .. } => file.clone(),
            _ => None,
        };
        LoaderError::Preprocess { file, source }
    }

    pub fn compile(err: &ApiError) -> Self {
        LoaderError::Compile(format!("{}: {}", err.kind(), err.message()))
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;
