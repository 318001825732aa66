//! Contracts of the external source compiler and live-reload instrumentor.

use crate::error::ApiResult;
use crate::options::{CompileOptions, HotOptions, PreprocessOptions};
use crate::source_map::SourceMap;
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;

/// How serious a [`Diagnostic`] is. Compiler output at this layer is
/// advisory only, so warnings are the one level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Warning,
}

/// A non-fatal advisory message produced during compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub severity: Severity,
    /// Compiler-specific warning code, e.g. `a11y-missing-attribute`.
    pub code: Option<String>,
    pub filename: Option<String>,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
            code: None,
            filename: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => f.write_str(&self.message),
        }
    }
}

/// Result of the preprocessing step.
#[derive(Debug, Clone, Default)]
pub struct Processed {
    pub code: String,
    /// Extra files the preprocessor read; the host must watch them.
    pub dependencies: Vec<PathBuf>,
    pub map: Option<SourceMap>,
}

/// One compiled output channel (script or style).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub code: String,
    pub map: SourceMap,
}

#[derive(Debug, Clone, Default)]
pub struct Compiled {
    pub js: Output,
    /// Extracted styles, present only when the compiler did not inline them.
    pub css: Option<Output>,
    pub warnings: Vec<Diagnostic>,
}

#[async_trait]
pub trait Preprocessor: Send + Sync {
    async fn preprocess(&self, source: &str, options: &PreprocessOptions) -> ApiResult<Processed>;
}

pub trait Compiler: Send + Sync {
    fn compile(&self, source: &str, options: &CompileOptions) -> ApiResult<Compiled>;
}

/// Everything the instrumentor may look at when wrapping a compiled module.
pub struct HotRequest<'a> {
    /// Stable module identifier, a JSON string literal.
    pub id: &'a str,
    pub code: &'a str,
    pub options: &'a HotOptions,
    pub compiled: &'a Compiled,
    pub source: &'a str,
    pub compile_options: &'a CompileOptions,
}

pub trait HotInstrumentor: Send + Sync {
    /// Return the replacement code for `request.code`.
    fn make_hot(&self, request: HotRequest<'_>) -> ApiResult<String>;
}
