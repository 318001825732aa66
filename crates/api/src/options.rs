//! Option bags recognized by the loader.
//!
//! Hosts pass options as JSON; [`LoaderOptions::from_value`] decodes the keys
//! the loader understands and keeps everything else under `compilerOptions`
//! and `preprocess` verbatim so it reaches the compiler untouched.

use crate::compiler::Diagnostic;
use crate::error::ApiResult;
use crate::source_map::SourceMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

pub type HotOptions = Map<String, Value>;

/// User-supplied compiler options, merged into [`CompileOptions`].
///
/// Values are forwarded as given; the loader only looks at `generate` to
/// detect server-side rendering and at `format` to pick the module format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CompilerOptions {
    pub fn is_ssr(&self) -> bool {
        self.generate.as_ref().and_then(Value::as_str) == Some("ssr")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The configuration handed to [`crate::Compiler::compile`].
#[derive(Debug, Clone, Serialize)]
pub struct CompileOptions {
    pub filename: String,
    /// Style handling; `true` lets the compiler inject styles itself.
    pub css: Value,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sourcemap: Option<SourceMap>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Receives every compiler warning instead of the host.
///
/// `emit` forwards a warning to the host's default warning facility; a
/// handler may call it, call it with a rewritten warning, or drop the
/// warning entirely.
pub trait WarningHandler: Send + Sync {
    fn handle(&self, warning: &Diagnostic, emit: &dyn Fn(&Diagnostic));
}

impl<F> WarningHandler for F
where
    F: Fn(&Diagnostic, &dyn Fn(&Diagnostic)) + Send + Sync,
{
    fn handle(&self, warning: &Diagnostic, emit: &dyn Fn(&Diagnostic)) {
        self(warning, emit)
    }
}

#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoaderOptions {
    /// Set on requests that fetch a previously extracted style module.
    pub css_path: Option<String>,
    pub compiler_options: CompilerOptions,
    pub emit_css: bool,
    pub preprocess: PreprocessOptions,
    pub hot_reload: bool,
    pub hot_options: HotOptions,
    #[serde(skip)]
    pub onwarn: Option<Arc<dyn WarningHandler>>,
}

impl LoaderOptions {
    pub fn from_value(value: &Value) -> ApiResult<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(Self::deserialize(value)?)
    }

    pub fn with_onwarn(mut self, handler: Arc<dyn WarningHandler>) -> Self {
        self.onwarn = Some(handler);
        self
    }
}

impl fmt::Debug for LoaderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderOptions")
            .field("css_path", &self.css_path)
            .field("compiler_options", &self.compiler_options)
            .field("emit_css", &self.emit_css)
            .field("preprocess", &self.preprocess)
            .field("hot_reload", &self.hot_reload)
            .field("hot_options", &self.hot_options)
            .field("onwarn", &self.onwarn.is_some())
            .finish()
    }
}
